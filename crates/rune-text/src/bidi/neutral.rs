//! Resolving neutral types (N1-N2).
//!
//! <http://www.unicode.org/reports/tr9/#Resolving_Neutral_Types>

use unicode_bidi::BidiClass::{self, *};

use crate::bidi::levels::Direction;
use crate::bidi::paragraph::{CharRecord, Paragraph};

impl Paragraph {
    /// Resolve neutral types within each level run.
    pub fn resolve_neutral(&mut self) {
        for run in &self.runs {
            resolve_neutral_run(&mut self.chars[run.range()], run.sor, run.eor);
        }
    }
}

fn is_neutral(class: BidiClass) -> bool {
    matches!(class, B | S | WS | ON)
}

/// Numbers count as R when deciding the direction of adjacent neutrals.
fn context(class: BidiClass) -> BidiClass {
    match class {
        AN | EN => R,
        other => other,
    }
}

/// Apply N1 and N2 to one level run bracketed by `sor` and `eor`.
pub fn resolve_neutral_run(chars: &mut [CharRecord], sor: Direction, eor: Direction) {
    let len = chars.len();
    let mut i = 0;
    while i < len {
        if !is_neutral(chars[i].class) {
            i += 1;
            continue;
        }

        let start = i;
        while i < len && is_neutral(chars[i].class) {
            i += 1;
        }
        let prev = context(if start == 0 { sor.class() } else { chars[start - 1].class });
        let next = context(if i == len { eor.class() } else { chars[i].class });

        for record in &mut chars[start..i] {
            record.class = if prev == next {
                // N1
                prev
            } else {
                // N2
                Direction::from_level(record.level).class()
            };
        }
    }
}
