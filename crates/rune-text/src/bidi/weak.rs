//! Resolving weak types (W1-W7).
//!
//! <http://www.unicode.org/reports/tr9/#Resolving_Weak_Types>

use unicode_bidi::BidiClass::*;

use crate::bidi::levels::Direction;
use crate::bidi::paragraph::{CharRecord, Paragraph};

impl Paragraph {
    /// Resolve weak types within each level run.
    pub fn resolve_weak(&mut self) {
        for run in &self.runs {
            resolve_weak_run(&mut self.chars[run.range()], run.sor);
        }
    }
}

/// Apply W1-W7 to the records of one level run.
///
/// The rules run as separate passes in order; later passes read the
/// classes written by earlier ones.
pub fn resolve_weak_run(chars: &mut [CharRecord], sor: Direction) {
    // W1, W2
    let mut prev_strong = sor.class();
    let mut prev_class = sor.class();
    for record in chars.iter_mut() {
        let mut class = record.class;
        if class == NSM {
            class = prev_class;
            record.class = class;
        }
        if class == EN && prev_strong == AL {
            record.class = AN;
        }
        if matches!(class, R | L | AL) {
            prev_strong = class;
        }
        prev_class = record.class;
    }

    // W3
    for record in chars.iter_mut() {
        if record.class == AL {
            record.class = R;
        }
    }

    // W4
    for i in 1..chars.len().saturating_sub(1) {
        let prev = chars[i - 1].class;
        let next = chars[i + 1].class;
        match chars[i].class {
            ES if prev == EN && next == EN => chars[i].class = EN,
            CS if prev == next && matches!(prev, AN | EN) => chars[i].class = prev,
            _ => {}
        }
    }

    // W5
    for i in 0..chars.len() {
        if chars[i].class != EN {
            continue;
        }
        for record in chars[..i].iter_mut().rev() {
            if record.class != ET {
                break;
            }
            record.class = EN;
        }
        for record in chars[i + 1..].iter_mut() {
            if record.class != ET {
                break;
            }
            record.class = EN;
        }
    }

    // W6
    for record in chars.iter_mut() {
        if matches!(record.class, ET | ES | CS) {
            record.class = ON;
        }
    }

    // W7
    let mut prev_strong = sor.class();
    for record in chars.iter_mut() {
        if record.class == EN && prev_strong == L {
            record.class = L;
        }
        if matches!(record.class, L | R) {
            prev_strong = record.class;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_bidi::BidiClass;

    use crate::bidi::paragraph::classify_char;

    fn records(classes: &[BidiClass]) -> Vec<CharRecord> {
        classes
            .iter()
            .enumerate()
            .map(|(logical, &class)| CharRecord {
                ch: 'x',
                class,
                original: class,
                level: 0,
                logical,
            })
            .collect()
    }

    fn resolve(classes: &[BidiClass], sor: Direction) -> Vec<BidiClass> {
        let mut chars = records(classes);
        resolve_weak_run(&mut chars, sor);
        chars.iter().map(|r| r.class).collect()
    }

    #[test]
    fn w1_nsm_takes_previous_class_or_sor() {
        assert_eq!(resolve(&[NSM, L], Direction::Rtl), vec![R, L]);
        assert_eq!(resolve(&[R, NSM], Direction::Ltr), vec![R, R]);
        assert_eq!(resolve(&[ON, NSM], Direction::Ltr), vec![ON, ON]);
    }

    #[test]
    fn w2_arabic_context_makes_arabic_numbers() {
        assert_eq!(resolve(&[AL, EN], Direction::Ltr), vec![R, AN]);
        assert_eq!(resolve(&[AL, ON, EN, NSM], Direction::Ltr), vec![R, ON, AN, AN]);
        assert_eq!(resolve(&[AL, L, EN], Direction::Ltr), vec![R, L, L]);
    }

    #[test]
    fn w4_single_separators_between_numbers() {
        assert_eq!(resolve(&[EN, ES, EN], Direction::Rtl), vec![EN, EN, EN]);
        assert_eq!(resolve(&[EN, CS, EN], Direction::Rtl), vec![EN, EN, EN]);
        assert_eq!(resolve(&[AN, CS, AN], Direction::Rtl), vec![AN, AN, AN]);
        assert_eq!(resolve(&[AN, ES, AN], Direction::Rtl), vec![AN, ON, AN]);
        assert_eq!(resolve(&[EN, CS, CS, EN], Direction::Rtl), vec![EN, ON, ON, EN]);
        assert_eq!(resolve(&[EN, CS, AN], Direction::Rtl), vec![EN, ON, AN]);
    }

    #[test]
    fn w5_terminators_next_to_numbers() {
        assert_eq!(resolve(&[ET, ET, EN], Direction::Rtl), vec![EN, EN, EN]);
        assert_eq!(resolve(&[EN, ET, ET], Direction::Rtl), vec![EN, EN, EN]);
        assert_eq!(resolve(&[AN, ET, EN], Direction::Rtl), vec![AN, EN, EN]);
        assert_eq!(resolve(&[ET, ON, EN], Direction::Rtl), vec![ON, ON, EN]);
    }

    #[test]
    fn w7_numbers_in_left_context_become_l() {
        assert_eq!(resolve(&[L, ON, EN], Direction::Rtl), vec![L, ON, L]);
        assert_eq!(resolve(&[EN], Direction::Ltr), vec![L]);
        assert_eq!(resolve(&[EN], Direction::Rtl), vec![EN]);
        assert_eq!(resolve(&[L, R, EN], Direction::Ltr), vec![L, R, EN]);
    }

    #[test]
    fn currency_and_percent_attach_to_numbers() {
        let classes: Vec<BidiClass> = "$12%".chars().map(|c| classify_char(c, false)).collect();
        assert_eq!(resolve(&classes, Direction::Rtl), vec![EN, EN, EN, EN]);
    }

    #[test]
    fn runs_are_resolved_independently() {
        let mut para = Paragraph::classify("\u{0627}1\u{202A}2\u{202C}".chars(), None, false);
        para.resolve_explicit();
        para.resolve_weak();
        // The second digit sits in its own run with an L start-of-run.
        assert_eq!(para.classes(), vec![R, AN, L]);
    }
}
