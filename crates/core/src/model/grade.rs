use serde::{Deserialize, Serialize};

//
// ─── GRADE ────────────────────────────────────────────────────────────────────
//

/// Coarse grade derived from a star-rating classifier label.
///
/// Each grade carries a fixed letter, a French sentiment label (shown in the
/// UI), an English label, and a badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 4 or 5 stars.
    Excellent,
    /// 3 stars.
    Good,
    /// 1 or 2 stars.
    Bad,
    /// Anything the rule table does not recognise.
    Undetermined,
}

impl Grade {
    pub const RED: &'static str = "#FF0000";
    pub const ORANGE: &'static str = "#FFA500";
    pub const GREEN: &'static str = "#00FF00";
    pub const GRAY: &'static str = "#808080";

    /// Maps a classifier label such as `"4 stars"` to a grade.
    ///
    /// Substring tests run in a fixed order, so a label is matched by the
    /// first rule it contains.
    #[must_use]
    pub fn from_star_label(label: &str) -> Self {
        if label.contains("1 star") || label.contains("2 stars") {
            Self::Bad
        } else if label.contains("3 stars") {
            Self::Good
        } else if label.contains("4 stars") || label.contains("5 stars") {
            Self::Excellent
        } else {
            Self::Undetermined
        }
    }

    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Grade::Excellent => "A",
            Grade::Good => "B",
            Grade::Bad => "C",
            Grade::Undetermined => "?",
        }
    }

    #[must_use]
    pub fn sentiment_label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Bien",
            Grade::Bad => "Mauvais",
            Grade::Undetermined => "Indéterminé",
        }
    }

    #[must_use]
    pub fn english_label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Bad => "Bad",
            Grade::Undetermined => "Undetermined",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Grade::Excellent => Self::GREEN,
            Grade::Good => Self::ORANGE,
            Grade::Bad => Self::RED,
            Grade::Undetermined => Self::GRAY,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
