//! Explicit levels and directions (X1-X10).
//!
//! <http://www.unicode.org/reports/tr9/#Explicit_Levels_and_Directions>

use log::trace;
use unicode_bidi::BidiClass::{self, *};

use crate::bidi::levels::{Direction, MAX_EXPLICIT_LEVEL, least_greater_even, least_greater_odd};
use crate::bidi::paragraph::{CharRecord, LevelRun, Paragraph};

/// Classes dropped from the paragraph by X9.
pub fn removed_by_x9(class: BidiClass) -> bool {
    matches!(class, RLE | LRE | RLO | LRO | PDF | BN)
}

#[derive(Debug, Clone, Copy)]
struct Status {
    level: u8,
    direction_override: Option<Direction>,
}

impl Paragraph {
    /// Apply X1-X9, then recompute level runs (X10).
    pub fn resolve_explicit(&mut self) {
        let base_level = self.base_level;

        // X1
        let mut current = Status {
            level: base_level,
            direction_override: None,
        };
        let mut stack: Vec<Status> = Vec::new();
        let mut overflow = 0usize;
        let mut almost_overflow = 0usize;

        for record in &mut self.chars {
            match record.class {
                // X2-X5
                RLE | LRE | RLO | LRO => {
                    if overflow != 0 {
                        overflow += 1;
                        continue;
                    }
                    let (level, direction_override) = match record.class {
                        RLE => (least_greater_odd(current.level), None),
                        LRE => (least_greater_even(current.level), None),
                        RLO => (least_greater_odd(current.level), Some(Direction::Rtl)),
                        _ => (least_greater_even(current.level), Some(Direction::Ltr)),
                    };
                    if level < MAX_EXPLICIT_LEVEL {
                        stack.push(current);
                        current = Status {
                            level,
                            direction_override,
                        };
                    } else if current.level == MAX_EXPLICIT_LEVEL - 2 {
                        // The other parity can still produce a valid level.
                        almost_overflow += 1;
                        trace!("bidi: almost overflow at {}", record.logical);
                    } else {
                        overflow += 1;
                        trace!("bidi: embedding overflow at {}", record.logical);
                    }
                }
                // X7
                PDF => {
                    if overflow != 0 {
                        overflow -= 1;
                    } else if almost_overflow != 0 && current.level != MAX_EXPLICIT_LEVEL - 1 {
                        almost_overflow -= 1;
                    } else if let Some(previous) = stack.pop() {
                        current = previous;
                    }
                }
                // X8
                B => {
                    stack.clear();
                    overflow = 0;
                    almost_overflow = 0;
                    current = Status {
                        level: base_level,
                        direction_override: None,
                    };
                    record.level = base_level;
                }
                BN => {}
                // X6
                _ => {
                    record.level = current.level;
                    if let Some(direction) = current.direction_override {
                        record.class = direction.class();
                    }
                }
            }
        }

        // X9
        self.chars.retain(|record| !removed_by_x9(record.class));

        self.compute_runs();
    }

    /// Split the paragraph into level runs and compute `sor`/`eor` (X10).
    pub fn compute_runs(&mut self) {
        self.runs = level_runs(&self.chars, self.base_level);
    }
}

/// Boundary direction from the higher of the two adjacent levels.
fn boundary(a: u8, b: u8) -> Direction {
    Direction::from_level(a.max(b))
}

fn level_runs(chars: &[CharRecord], base_level: u8) -> Vec<LevelRun> {
    let mut runs = Vec::new();
    let Some(first) = chars.first() else {
        return runs;
    };

    let mut sor = boundary(base_level, first.level);
    let mut start = 0;
    for i in 1..chars.len() {
        let (prev, curr) = (&chars[i - 1], &chars[i]);
        if prev.level != curr.level {
            let eor = boundary(prev.level, curr.level);
            runs.push(LevelRun {
                start,
                len: i - start,
                sor,
                eor,
                class: prev.class,
            });
            sor = eor;
            start = i;
        }
    }

    let last = &chars[chars.len() - 1];
    runs.push(LevelRun {
        start,
        len: chars.len() - start,
        sor,
        eor: boundary(last.level, base_level),
        class: last.class,
    });
    runs
}
