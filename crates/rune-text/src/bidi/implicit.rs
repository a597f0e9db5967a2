//! Resolving implicit levels (I1-I2).
//!
//! <http://www.unicode.org/reports/tr9/#Resolving_Implicit_Levels>

use unicode_bidi::BidiClass::*;

use crate::bidi::levels::{Direction, MAX_EXPLICIT_LEVEL};
use crate::bidi::paragraph::{CharRecord, Paragraph};

impl Paragraph {
    /// Raise levels from resolved classes.
    ///
    /// # Panics
    ///
    /// Panics if a class other than L, R, EN or AN survived the weak and
    /// neutral stages.
    pub fn resolve_implicit(&mut self) {
        for run in &self.runs {
            for record in &mut self.chars[run.range()] {
                resolve_implicit_char(record);
            }
        }
    }
}

fn resolve_implicit_char(record: &mut CharRecord) {
    assert!(
        matches!(record.class, L | R | EN | AN),
        "bidi class {:?} at {} not allowed in implicit resolution",
        record.class,
        record.logical
    );

    let raise = match Direction::from_level(record.level) {
        // I1
        Direction::Ltr => match record.class {
            R => 1,
            AN | EN => 2,
            _ => 0,
        },
        // I2
        Direction::Rtl => u8::from(record.class != R),
    };
    // Levels past the limit stay at the last valid level.
    record.level = (record.level + raise).min(MAX_EXPLICIT_LEVEL);
}
