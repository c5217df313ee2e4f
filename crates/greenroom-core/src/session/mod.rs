//! Session domain: model, vault port, shared token cell.

mod model;
mod token;
mod vault;

pub use model::{Credentials, Identity, Role, Session, SessionState};
pub use token::TokenCell;
pub use vault::{MemorySessionVault, SessionVault};
