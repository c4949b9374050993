#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    ClassificationFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::ClassificationFailed => {
                "L'analyse n'a pas pu aboutir. Vos réponses sont conservées, vous pouvez réessayer."
            }
            ViewError::Unknown => "Une erreur est survenue. Veuillez réessayer.",
        }
    }
}
