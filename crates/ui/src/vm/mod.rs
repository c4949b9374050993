mod history_vm;
mod time_fmt;
mod wizard_vm;

pub use history_vm::{AnswerLineVm, HistoryCardVm, map_history_cards};
pub use time_fmt::format_datetime;
pub use wizard_vm::{ResultVm, WizardScreen, map_wizard_screen};
