use serde::{Deserialize, Serialize};

/// Closed set of mood tags an entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Great,
    Good,
    Angry,
    Neutral,
    Stressed,
    Bad,
}

impl Mood {
    /// All moods in the order the mood picker presents them.
    pub const ALL: [Mood; 6] = [
        Mood::Great,
        Mood::Good,
        Mood::Angry,
        Mood::Neutral,
        Mood::Stressed,
        Mood::Bad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Angry => "Angry",
            Mood::Neutral => "Neutral",
            Mood::Stressed => "Stressed",
            Mood::Bad => "Bad",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
