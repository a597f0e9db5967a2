use core::fmt;
use core::str::FromStr;

use unicode_bidi::BidiClass;

use crate::bidi::BidiError;

/// Explicit embedding levels must stay strictly below this value.
pub const MAX_EXPLICIT_LEVEL: u8 = 125;

/// A resolved writing direction.
///
/// Used for the paragraph base direction, directional overrides, the
/// `sor`/`eor` context of level runs, and the embedding direction implied
/// by a level's parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right (even levels, strong type `L`).
    Ltr,
    /// Right-to-left (odd levels, strong type `R`).
    Rtl,
}

impl Direction {
    /// Embedding direction of a level: even is LTR, odd is RTL.
    pub fn from_level(level: u8) -> Self {
        if level % 2 == 0 {
            Direction::Ltr
        } else {
            Direction::Rtl
        }
    }

    /// Direction asserted by a strong class, `None` for weak and neutral classes.
    pub fn from_strong(class: BidiClass) -> Option<Self> {
        match class {
            BidiClass::L => Some(Direction::Ltr),
            BidiClass::R | BidiClass::AL => Some(Direction::Rtl),
            _ => None,
        }
    }

    /// Paragraph level for this base direction.
    pub fn level(self) -> u8 {
        match self {
            Direction::Ltr => 0,
            Direction::Rtl => 1,
        }
    }

    /// The strong class with this direction.
    pub fn class(self) -> BidiClass {
        match self {
            Direction::Ltr => BidiClass::L,
            Direction::Rtl => BidiClass::R,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ltr => f.write_str("L"),
            Direction::Rtl => f.write_str("R"),
        }
    }
}

impl FromStr for Direction {
    type Err = BidiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "ltr" => Ok(Direction::Ltr),
            "r" | "rtl" => Ok(Direction::Rtl),
            _ => Err(BidiError::InvalidDirection(s.to_string())),
        }
    }
}

/// Least odd level strictly greater than `level` (RLE, RLO).
pub fn least_greater_odd(level: u8) -> u8 {
    (level + 1) | 1
}

/// Least even level strictly greater than `level` (LRE, LRO).
pub fn least_greater_even(level: u8) -> u8 {
    (level + 2) & !1
}
