//! rune-text: bidirectional text reordering for display.
//!
//! - classification and paragraph base level
//! - explicit, weak, neutral and implicit level resolution
//! - line reordering, mirroring, and a logical-to-visual map

pub mod bidi;

pub use bidi::{
    BidiError, DisplayOptions, Direction, Paragraph, get_display, get_display_bytes,
    get_display_utf16, get_visual_map,
};
