//! Bidirectional (BiDi) text reordering.
//!
//! A paragraph goes through the UAX #9 stages in order:
//! - classification and base level (P2-P3)
//! - explicit embeddings and overrides (X1-X9), level runs (X10)
//! - weak types (W1-W7), neutral types (N1-N2), implicit levels (I1-I2)
//! - line reordering (L1-L2) and mirroring (L4)
//!
//! Character data comes from `unicode-bidi`; the resolution itself is
//! implemented here so every stage can be driven on its own.

pub mod display;
pub mod error;
pub mod explicit;
pub mod implicit;
pub mod levels;
pub mod mirror;
pub mod neutral;
pub mod paragraph;
pub mod reorder;
pub mod weak;

pub use display::{
    DisplayOptions, get_display, get_display_bytes, get_display_utf16, get_visual_map,
    resolve_paragraph,
};
pub use error::{BidiError, Result};
pub use levels::{Direction, MAX_EXPLICIT_LEVEL};
pub use mirror::{mirrored_bracket, mirrored_glyph};
pub use paragraph::{CharRecord, LevelRun, Paragraph, base_level, classify_char};
pub use unicode_bidi::BidiClass;
