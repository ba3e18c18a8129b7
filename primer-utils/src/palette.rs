// Primer palette
//
// Color tags attached to catalog categories. The terminal front end maps them
// to its own styles; plain text output uses the ANSI codes below.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Badge color of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Coral,
    Teal,
    Purple,
    Amber,
}

impl CategoryColor {
    /// Get ANSI color code for this color
    pub fn color_code(&self) -> &'static str {
        match self {
            CategoryColor::Coral => "\x1b[91m",  // Bright red
            CategoryColor::Teal => "\x1b[36m",   // Cyan
            CategoryColor::Purple => "\x1b[35m", // Magenta
            CategoryColor::Amber => "\x1b[33m",  // Yellow
        }
    }

    /// 256-color palette index, for terminals that render indexed colors
    pub fn ansi256(&self) -> u8 {
        match self {
            CategoryColor::Coral => 209,
            CategoryColor::Teal => 37,
            CategoryColor::Purple => 134,
            CategoryColor::Amber => 214,
        }
    }

    /// Parse from a config or CLI string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "coral" => Some(CategoryColor::Coral),
            "teal" => Some(CategoryColor::Teal),
            "purple" => Some(CategoryColor::Purple),
            "amber" => Some(CategoryColor::Amber),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryColor::Coral => write!(f, "coral"),
            CategoryColor::Teal => write!(f, "teal"),
            CategoryColor::Purple => write!(f, "purple"),
            CategoryColor::Amber => write!(f, "amber"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_color_from_str() {
        assert_eq!(CategoryColor::from_str("coral"), Some(CategoryColor::Coral));
        assert_eq!(CategoryColor::from_str("TEAL"), Some(CategoryColor::Teal));
        assert_eq!(CategoryColor::from_str("purple"), Some(CategoryColor::Purple));
        assert_eq!(CategoryColor::from_str("amber"), Some(CategoryColor::Amber));
        assert_eq!(CategoryColor::from_str("mauve"), None);
    }

    #[test]
    fn test_category_color_display_round_trips() {
        for color in [
            CategoryColor::Coral,
            CategoryColor::Teal,
            CategoryColor::Purple,
            CategoryColor::Amber,
        ] {
            assert_eq!(CategoryColor::from_str(&color.to_string()), Some(color));
        }
    }

    #[test]
    fn test_color_codes_are_escape_sequences() {
        assert!(CategoryColor::Amber.color_code().starts_with("\x1b["));
        assert_eq!(CategoryColor::Teal.color_code(), "\x1b[36m");
    }
}
