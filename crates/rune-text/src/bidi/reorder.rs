use unicode_bidi::BidiClass;

use crate::bidi::paragraph::{CharRecord, Paragraph};

impl Paragraph {
    /// Reset trailing and separator levels (L1), then reverse each line
    /// into visual order (L2).
    ///
    /// A line ends at every original paragraph separator and at the end of
    /// the text. Separators stay in place between their lines.
    pub fn reorder(&mut self) {
        reset_whitespace_levels(&mut self.chars, self.base_level);

        let mut line_start = 0;
        for idx in 0..self.chars.len() {
            let is_separator = self.chars[idx].original == BidiClass::B;
            if is_separator || idx + 1 == self.chars.len() {
                let line_end = if is_separator { idx } else { idx + 1 };
                reverse_line(&mut self.chars[line_start..line_end]);
                line_start = idx + 1;
            }
        }
    }
}

/// L1, judged on the classifier's classes rather than resolved ones.
///
/// Segment and paragraph separators return to the paragraph level, as does
/// any whitespace directly before them or at the end of the text.
fn reset_whitespace_levels(chars: &mut [CharRecord], base_level: u8) {
    let mut should_reset = true;
    for record in chars.iter_mut().rev() {
        match record.original {
            BidiClass::B | BidiClass::S => {
                record.level = base_level;
                should_reset = true;
            }
            BidiClass::BN | BidiClass::WS if should_reset => {
                record.level = base_level;
            }
            _ => should_reset = false,
        }
    }
}

/// L2: from the highest level down to the lowest odd level, reverse every
/// maximal run at that level or above.
fn reverse_line(line: &mut [CharRecord]) {
    let Some(highest) = line.iter().map(|r| r.level).max() else {
        return;
    };
    let Some(lowest_odd) = line.iter().map(|r| r.level).filter(|l| l % 2 == 1).min() else {
        return;
    };

    for level in (lowest_odd..=highest).rev() {
        let mut i = 0;
        while i < line.len() {
            if line[i].level < level {
                i += 1;
                continue;
            }
            let start = i;
            while i < line.len() && line[i].level >= level {
                i += 1;
            }
            line[start..i].reverse();
        }
    }
}
