//! The block color palette.
//!
//! Colors are plain values compared by equality. The palette is fixed and
//! ordered: board generation always takes a prefix of [`Color::PALETTE`],
//! so which colors appear in a game depends only on the column count.

use serde::{Deserialize, Serialize};

/// A block color drawn from the fixed 8-color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Cyan,
}

impl Color {
    /// The full palette, in the order generation selects from it.
    pub const PALETTE: [Color; 8] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Pink,
        Color::Cyan,
    ];

    /// Name of this color, lowercase.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Cyan => "cyan",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_eight_distinct_colors() {
        let mut seen = std::collections::HashSet::new();
        for color in Color::PALETTE {
            assert!(seen.insert(color), "{} appears twice", color);
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Color::Red), "red");
        assert_eq!(format!("{}", Color::Cyan), "cyan");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Color::Purple).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Purple);
    }
}
