//! Shared test support: hand-rolled fakes for the remote boundaries.
#![allow(dead_code)]

use std::sync::Mutex as StdMutex;
use std::time::Duration;

use async_trait::async_trait;

use greenroom_core::error::{ConsoleError, Result};
use greenroom_core::gateway::{AuthApi, MediaUploader, RecordGateway};
use greenroom_core::record::{AssetRef, Faq, FaqDraft, MediaKind, Service, ServiceDraft};
use greenroom_core::session::{Credentials, Identity, Role, Session};

pub fn admin_session(token: &str) -> Session {
    Session {
        user_id: "u1".to_string(),
        identity: Identity {
            first_name: "Ada".to_string(),
            last_name: "Nwosu".to_string(),
        },
        role: Role::Admin,
        token: token.to_string(),
    }
}

pub fn session_with_role(role: &str) -> Session {
    let mut session = admin_session("tok-stale");
    session.role = Role::from(role.to_string());
    session
}

pub fn hosted_asset() -> AssetRef {
    AssetRef::new("abc", "https://host/abc.mp4", MediaKind::Video)
}

/// A complete service draft, without an asset yet.
pub fn service_draft() -> ServiceDraft {
    ServiceDraft {
        name: "Intro Video".to_string(),
        description: "x".to_string(),
        price: 100,
        category: "3D Animation".to_string(),
        image: AssetRef::empty(),
    }
}

// ============================================================================
// Media uploader fake
// ============================================================================

pub struct MockUploader {
    asset: AssetRef,
    fail: bool,
    delay: Option<Duration>,
    calls: StdMutex<usize>,
}

impl MockUploader {
    pub fn succeeding(asset: AssetRef) -> Self {
        Self {
            asset,
            fail: false,
            delay: None,
            calls: StdMutex::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            asset: AssetRef::empty(),
            fail: true,
            delay: None,
            calls: StdMutex::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl MediaUploader for MockUploader {
    async fn upload(&self, _bytes: Vec<u8>, _filename: &str, _kind: MediaKind) -> Result<AssetRef> {
        *self.calls.lock().unwrap() += 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            Err(ConsoleError::upload("simulated transport error"))
        } else {
            Ok(self.asset.clone())
        }
    }
}

// ============================================================================
// Service gateway fake (stateful, plays the server)
// ============================================================================

pub struct FakeServiceServer {
    records: StdMutex<Vec<Service>>,
    next_id: StdMutex<u32>,
    fail_writes: bool,
    delay: Option<Duration>,
    write_calls: StdMutex<usize>,
    update_payloads: StdMutex<Vec<ServiceDraft>>,
}

impl FakeServiceServer {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(records: Vec<Service>) -> Self {
        let next = records.len() as u32 + 1;
        Self {
            records: StdMutex::new(records),
            next_id: StdMutex::new(next),
            fail_writes: false,
            delay: None,
            write_calls: StdMutex::new(0),
            update_payloads: StdMutex::new(Vec::new()),
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many create/update calls reached the server.
    pub fn write_calls(&self) -> usize {
        *self.write_calls.lock().unwrap()
    }

    /// Drafts received by update, in order.
    pub fn update_payloads(&self) -> Vec<ServiceDraft> {
        self.update_payloads.lock().unwrap().clone()
    }

    /// The server's own view, for drift checks.
    pub fn server_records(&self) -> Vec<Service> {
        self.records.lock().unwrap().clone()
    }

    fn materialize(&self, id: String, draft: &ServiceDraft) -> Service {
        Service {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            category: draft.category.clone(),
            image: draft.image.clone(),
            created_at: None,
        }
    }
}

#[async_trait]
impl RecordGateway<Service> for FakeServiceServer {
    async fn list(&self) -> Result<Vec<Service>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn fetch(&self, id: &str) -> Result<Service> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ConsoleError::not_found("service", id))
    }

    async fn create(&self, draft: &ServiceDraft) -> Result<Service> {
        *self.write_calls.lock().unwrap() += 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_writes {
            return Err(ConsoleError::network("simulated persist outage"));
        }
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = format!("r{next}");
            *next += 1;
            id
        };
        let record = self.materialize(id, draft);
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, draft: &ServiceDraft) -> Result<Service> {
        *self.write_calls.lock().unwrap() += 1;
        self.update_payloads.lock().unwrap().push(draft.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_writes {
            return Err(ConsoleError::network("simulated persist outage"));
        }
        let record = self.materialize(id.to_string(), draft);
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(ConsoleError::not_found("service", id)),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(ConsoleError::not_found("service", id));
        }
        Ok(())
    }
}

// ============================================================================
// Faq gateway fake (plain record kind)
// ============================================================================

pub struct FakeFaqServer {
    records: StdMutex<Vec<Faq>>,
    next_id: StdMutex<u32>,
}

impl FakeFaqServer {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(records: Vec<Faq>) -> Self {
        let next = records.len() as u32 + 1;
        Self {
            records: StdMutex::new(records),
            next_id: StdMutex::new(next),
        }
    }

    pub fn server_records(&self) -> Vec<Faq> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordGateway<Faq> for FakeFaqServer {
    async fn list(&self) -> Result<Vec<Faq>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn fetch(&self, id: &str) -> Result<Faq> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ConsoleError::not_found("faq", id))
    }

    async fn create(&self, draft: &FaqDraft) -> Result<Faq> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = format!("f{next}");
            *next += 1;
            id
        };
        let record = Faq {
            id,
            question: draft.question.clone(),
            answer: draft.answer.clone(),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, draft: &FaqDraft) -> Result<Faq> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                slot.question = draft.question.clone();
                slot.answer = draft.answer.clone();
                Ok(slot.clone())
            }
            None => Err(ConsoleError::not_found("faq", id)),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(ConsoleError::not_found("faq", id));
        }
        Ok(())
    }
}

// ============================================================================
// Auth API fake
// ============================================================================

enum LoginBehavior {
    Accept(Session),
    Reject,
}

pub struct MockAuthApi {
    login: LoginBehavior,
    logout_fails: bool,
    logout_calls: StdMutex<usize>,
}

impl MockAuthApi {
    pub fn accepting(session: Session) -> Self {
        Self {
            login: LoginBehavior::Accept(session),
            logout_fails: false,
            logout_calls: StdMutex::new(0),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            login: LoginBehavior::Reject,
            logout_fails: false,
            logout_calls: StdMutex::new(0),
        }
    }

    pub fn with_failing_logout(mut self) -> Self {
        self.logout_fails = true;
        self
    }

    pub fn logout_calls(&self) -> usize {
        *self.logout_calls.lock().unwrap()
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, _credentials: &Credentials) -> Result<Session> {
        match &self.login {
            LoginBehavior::Accept(session) => Ok(session.clone()),
            LoginBehavior::Reject => Err(ConsoleError::Unauthorized),
        }
    }

    async fn logout(&self) -> Result<()> {
        *self.logout_calls.lock().unwrap() += 1;
        if self.logout_fails {
            Err(ConsoleError::network("logout endpoint unreachable"))
        } else {
            Ok(())
        }
    }
}
