mod grade;
mod ids;
mod question;
mod record;

pub use grade::Grade;
pub use ids::EntryId;
pub use question::{QUESTIONS, QuestionNumber};
pub use record::{Assessment, QuestionnaireRecord};
