//! Application layer of the Greenroom admin-console core.
//!
//! Coordinates the domain and infrastructure layers into the operations
//! view controllers consume: the session guard, the two-phase media commit
//! coordinator, and the per-kind resource panels.

pub mod commit;
pub mod console;
pub mod panel;
pub mod session_guard;
pub mod view;

pub use commit::{CommitPhase, CommitTarget, TwoPhaseCommit};
pub use console::Console;
pub use panel::ResourcePanel;
pub use session_guard::SessionGuard;
pub use view::ViewBinding;
