#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod time;
pub mod wizard;

pub use error::WizardError;
pub use session::{History, HistoryEntry, SessionState};
pub use time::Clock;
pub use wizard::{Identity, Transition, Wizard, WizardState};
