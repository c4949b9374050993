/// The three prompts, asked in this order.
pub const QUESTIONS: [&str; 3] = [
    "Comment vous sentez-vous aujourd'hui ?",
    "Quel événement vous a marqué récemment ?",
    "Quelle est votre principale source de motivation ?",
];

/// 1-based index of a question in [`QUESTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuestionNumber(u8);

impl QuestionNumber {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(3);

    /// Returns `None` outside `1..=3`.
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (1..=3).contains(&number).then_some(Self(number))
    }

    /// The question that follows `answered` answers, if any remain.
    #[must_use]
    pub fn after_answers(answered: usize) -> Option<Self> {
        u8::try_from(answered + 1).ok().and_then(Self::new)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        QUESTIONS[usize::from(self.0 - 1)]
    }
}
