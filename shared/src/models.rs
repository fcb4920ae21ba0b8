use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Emoji {
    pub shortcode: String,
    pub unicode: String,
}

/// A ranked tally joined with the emoji it counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub shortcode: String,
    pub unicode: String,
    pub votes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteResponse {
    pub shortcode: String,
    pub votes: u64,
}

#[cfg_attr(feature = "backend", derive(rocket::FromForm))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

impl LeaderboardEntry {
    pub fn new(emoji: &Emoji, votes: u64) -> Self {
        Self {
            shortcode: emoji.shortcode.clone(),
            unicode: emoji.unicode.clone(),
            votes,
        }
    }
}
