//! Post tone: maps a requested tone label to the call-to-action appended to each post.

use crate::content::templates::{
    CASUAL_CALL_TO_ACTION, EDUCATIONAL_CALL_TO_ACTION, INSPIRATIONAL_CALL_TO_ACTION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostTone {
    Casual,
    Inspirational,
    Educational,
}

impl PostTone {
    /// Parses the exact label sent by clients. Anything else (including
    /// `"Formal"` or a different casing) is not a recognised tone.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Casual" => Some(PostTone::Casual),
            "Inspirational" => Some(PostTone::Inspirational),
            "Educational" => Some(PostTone::Educational),
            _ => None,
        }
    }

    pub fn call_to_action(&self) -> &'static str {
        match self {
            PostTone::Casual => CASUAL_CALL_TO_ACTION,
            PostTone::Inspirational => INSPIRATIONAL_CALL_TO_ACTION,
            PostTone::Educational => EDUCATIONAL_CALL_TO_ACTION,
        }
    }
}
