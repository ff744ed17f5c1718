//! Body type definitions

use serde::{Deserialize, Serialize};

/// Car body specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Body style label (sedan, coupe, ...). Matched case-insensitively when priced.
    pub style: String,
    /// Number of doors
    #[serde(alias = "doors")]
    pub door_count: u32,
}

impl Body {
    pub fn new(style: impl Into<String>, door_count: u32) -> Self {
        Self {
            style: style.into(),
            door_count,
        }
    }

    pub fn describe(&self) -> String {
        format!("Body: {}, doors: {}", self.style, self.door_count)
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
