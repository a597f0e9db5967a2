use core::fmt::Write as _;
use core::ops::Range;

use log::debug;
use unicode_bidi::{BidiClass, bidi_class};
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::bidi::levels::Direction;

/// One input character and its evolving bidi state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRecord {
    /// The character, replaced by its mirror glyph during L4.
    pub ch: char,
    /// Current bidi class, rewritten by each resolution stage.
    pub class: BidiClass,
    /// Class assigned by the classifier. Never changed afterwards.
    pub original: BidiClass,
    /// Embedding level.
    pub level: u8,
    /// Index of this character in the input sequence.
    pub logical: usize,
}

/// A maximal run of records sharing one embedding level (X10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRun {
    pub start: usize,
    pub len: usize,
    /// Start-of-run direction.
    pub sor: Direction,
    /// End-of-run direction.
    pub eor: Direction,
    /// Class of the run's last record when the run was computed.
    pub class: BidiClass,
}

impl LevelRun {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Bidi state for a single paragraph.
///
/// Each pipeline stage is a method that mutates the records in place, so
/// stages can be driven one at a time in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub chars: Vec<CharRecord>,
    /// Paragraph embedding level, 0 or 1.
    pub base_level: u8,
    pub runs: Vec<LevelRun>,
}

/// Bidi class of a single character.
///
/// With `upper_is_rtl`, uppercase letters are treated as strong `R`. Isolate
/// controls are treated as `ON` since this engine does not implement them,
/// and so are unassigned code points.
pub fn classify_char(ch: char, upper_is_rtl: bool) -> BidiClass {
    if upper_is_rtl && ch.is_uppercase() {
        return BidiClass::R;
    }
    if get_general_category(ch) == GeneralCategory::Unassigned {
        return BidiClass::ON;
    }
    match bidi_class(ch) {
        BidiClass::LRI | BidiClass::RLI | BidiClass::FSI | BidiClass::PDI => BidiClass::ON,
        class => class,
    }
}

/// Paragraph base level from the first strong character (P2, P3).
pub fn base_level<I>(text: I, upper_is_rtl: bool) -> u8
where
    I: IntoIterator<Item = char>,
{
    first_strong(text.into_iter().map(|ch| classify_char(ch, upper_is_rtl)))
        .unwrap_or(Direction::Ltr)
        .level()
}

fn first_strong<I>(classes: I) -> Option<Direction>
where
    I: IntoIterator<Item = BidiClass>,
{
    classes.into_iter().find_map(Direction::from_strong)
}

impl Paragraph {
    /// An empty paragraph with the given base direction.
    pub fn empty(base: Direction) -> Self {
        Self {
            chars: Vec::new(),
            base_level: base.level(),
            runs: Vec::new(),
        }
    }

    /// Classify `text` into a fresh paragraph.
    ///
    /// When `base` is `None` the base level is detected from the first
    /// strong character; otherwise the given direction is used as-is.
    /// Every record starts at the base level.
    pub fn classify<I>(text: I, base: Option<Direction>, upper_is_rtl: bool) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut chars: Vec<CharRecord> = text
            .into_iter()
            .enumerate()
            .map(|(logical, ch)| {
                let class = classify_char(ch, upper_is_rtl);
                CharRecord {
                    ch,
                    class,
                    original: class,
                    level: 0,
                    logical,
                }
            })
            .collect();

        let base = base
            .or_else(|| first_strong(chars.iter().map(|r| r.class)))
            .unwrap_or(Direction::Ltr);
        let base_level = base.level();
        for record in &mut chars {
            record.level = base_level;
        }

        Self {
            chars,
            base_level,
            runs: Vec::new(),
        }
    }

    pub fn base_direction(&self) -> Direction {
        Direction::from_level(self.base_level)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Run stages X1 through L4 in order.
    pub fn run_pipeline(&mut self, debug: bool) {
        self.trace_stage("classify", debug);
        self.resolve_explicit();
        self.trace_stage("explicit", debug);
        self.resolve_weak();
        self.trace_stage("weak", debug);
        self.resolve_neutral();
        self.trace_stage("neutral", debug);
        self.resolve_implicit();
        self.trace_stage("implicit", debug);
        self.reorder();
        self.trace_stage("reorder", debug);
        self.apply_mirroring();
        self.trace_stage("mirror", debug);
    }

    /// Characters in current storage order.
    pub fn text(&self) -> String {
        self.chars.iter().map(|r| r.ch).collect()
    }

    /// Embedding levels in current storage order.
    pub fn levels(&self) -> Vec<u8> {
        self.chars.iter().map(|r| r.level).collect()
    }

    /// Current classes in storage order.
    pub fn classes(&self) -> Vec<BidiClass> {
        self.chars.iter().map(|r| r.class).collect()
    }

    /// Logical input index of the character at each position.
    ///
    /// After [`Paragraph::reorder`] this is the visual-to-logical map.
    /// Characters removed by X9 do not appear.
    pub fn visual_order(&self) -> Vec<usize> {
        self.chars.iter().map(|r| r.logical).collect()
    }

    /// Human-readable per-character state.
    ///
    /// The format is for diagnostics only and may change.
    pub fn debug_dump(&self, stage: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "in {stage}");
        let _ = writeln!(
            out,
            "  base level  : {} ({})",
            self.base_level,
            self.base_direction()
        );
        let runs: Vec<String> = self
            .runs
            .iter()
            .map(|run| {
                format!(
                    "{}+{} {}..{} {:?}",
                    run.start, run.len, run.sor, run.eor, run.class
                )
            })
            .collect();
        let _ = writeln!(out, "  runs        : [{}]", runs.join(", "));

        let mut chars = String::from("  chars       :");
        let mut levels = String::from("  levels      :");
        let mut types = String::from("  types       :");
        for record in &self.chars {
            let shown = if record.ch.is_control() { '.' } else { record.ch };
            let _ = write!(chars, " {shown:>3}");
            let _ = write!(levels, " {:>3}", record.level);
            let _ = write!(types, " {:>3}", format!("{:?}", record.class));
        }
        out.push_str(&chars);
        out.push('\n');
        out.push_str(&levels);
        out.push('\n');
        out.push_str(&types);
        out
    }

    fn trace_stage(&self, stage: &str, debug: bool) {
        if debug {
            debug!("{}", self.debug_dump(stage));
        }
    }
}
