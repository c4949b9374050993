mod about;
mod analysis;
mod history;
mod state;

#[cfg(test)]
mod analysis_smoke;
#[cfg(test)]
mod view_smoke;

pub use about::AboutView;
pub use analysis::AnalysisView;
pub use history::HistoryView;
pub use state::ViewError;
