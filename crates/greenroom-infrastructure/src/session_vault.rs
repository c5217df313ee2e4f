//! File-backed session vault.
//!
//! Persists the session document as TOML under the user config dir for the
//! lifetime of a console session. Writes are atomic (tmp file + fsync +
//! rename) under an exclusive file lock; `clear` removes the document
//! wholesale.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use greenroom_core::error::{ConsoleError, Result};
use greenroom_core::session::{Session, SessionVault};

use crate::paths::{ConsolePaths, LocalFile};

pub struct FsSessionVault {
    path: PathBuf,
}

impl FsSessionVault {
    /// Vault at the default location (`<config_dir>/greenroom/session.toml`).
    pub fn new() -> Result<Self> {
        let path = ConsolePaths::default().get(LocalFile::Session)?;
        Ok(Self { path })
    }

    /// Vault at a custom path (tests, sandboxed shells).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "session.toml".to_string());
        self.path
            .with_file_name(format!(".{name}.tmp"))
    }
}

impl SessionVault for FsSessionVault {
    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = VaultLock::acquire(&self.path)?;

        let document = toml::to_string_pretty(session)?;

        // tmp file + fsync + rename keeps a crashed write from corrupting
        // the previous document
        let tmp_path = self.temp_path();
        let mut tmp = File::create(&tmp_path)?;
        tmp.write_all(document.as_bytes())?;
        tmp.sync_all()?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let session: Session = toml::from_str(&content)?;
        Ok(Some(session))
    }

    fn clear(&self) -> Result<()> {
        let _lock = VaultLock::acquire(&self.path)?;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Exclusive lock guard; released (and the lock file removed) on drop.
struct VaultLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl VaultLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|err| ConsoleError::storage(format!("session vault lock: {err}")))?;
        }

        Ok(Self { file, lock_path })
    }
}

impl Drop for VaultLock {
    fn drop(&mut self) {
        // unlock is automatic when the handle drops; removing the lock
        // file is best effort
        let _ = fs::remove_file(&self.lock_path);
    }
}
