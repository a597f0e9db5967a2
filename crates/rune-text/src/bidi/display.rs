use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use log::debug;

use crate::bidi::error::{BidiError, Result};
use crate::bidi::levels::Direction;
use crate::bidi::paragraph::Paragraph;

/// Options for [`get_display`] and friends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Treat uppercase letters as strong right-to-left, for testing with
    /// plain ASCII.
    pub upper_is_rtl: bool,
    /// Force the paragraph direction instead of detecting it.
    pub base_dir: Option<Direction>,
    /// Log the per-character state after every stage at debug level.
    pub debug: bool,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upper_is_rtl(mut self, upper_is_rtl: bool) -> Self {
        self.upper_is_rtl = upper_is_rtl;
        self
    }

    pub fn base_dir(mut self, base_dir: impl Into<Option<Direction>>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Classify `text` and run the full pipeline over it.
pub fn resolve_paragraph<I>(text: I, options: &DisplayOptions) -> Paragraph
where
    I: IntoIterator<Item = char>,
{
    let mut para = Paragraph::classify(text, options.base_dir, options.upper_is_rtl);
    para.run_pipeline(options.debug);
    para
}

/// Reorder one paragraph from logical to visual order.
///
/// Explicit formatting characters are removed, and mirrorable characters
/// in right-to-left context are replaced by their mirror glyphs.
pub fn get_display(text: &str, options: &DisplayOptions) -> String {
    resolve_paragraph(text.chars(), options).text()
}

/// For each visual position, the index of the input character shown there.
pub fn get_visual_map(text: &str, options: &DisplayOptions) -> Vec<usize> {
    resolve_paragraph(text.chars(), options).visual_order()
}

/// [`get_display`] over bytes in a named encoding.
///
/// The result is encoded in the same encoding as the input. A leading byte
/// order mark for that encoding is kept in front of the output.
pub fn get_display_bytes(bytes: &[u8], encoding: &str, options: &DisplayOptions) -> Result<Vec<u8>> {
    let encoding = Encoding::for_label(encoding.as_bytes())
        .ok_or_else(|| BidiError::UnknownEncoding(encoding.to_string()))?;
    debug!("bidi: decoding {} bytes as {}", bytes.len(), encoding.name());

    let (bom, body) = match Encoding::for_bom(bytes) {
        Some((found, len)) if found == encoding => bytes.split_at(len),
        _ => bytes.split_at(0),
    };

    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(BidiError::Decode {
            encoding: encoding.name().to_string(),
        });
    }

    let display = get_display(&text, options);
    let mut out = bom.to_vec();
    out.extend(encode(&display, encoding)?);
    Ok(out)
}

fn encode(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>> {
    // encoding_rs only encodes to ASCII-compatible encodings.
    if encoding == UTF_16LE {
        return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
    }
    if encoding == UTF_16BE {
        return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
    }

    let (bytes, _, unmappable) = encoding.encode(text);
    if unmappable {
        return Err(BidiError::Encode {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(bytes.into_owned())
}

/// [`get_display`] over UTF-16 code units.
///
/// Surrogate pairs are combined into one character before classification.
pub fn get_display_utf16(units: &[u16], options: &DisplayOptions) -> Result<Vec<u16>> {
    let mut chars = Vec::with_capacity(units.len());
    let mut index = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => {
                index += ch.len_utf16();
                chars.push(ch);
            }
            Err(_) => return Err(BidiError::UnpairedSurrogate { index }),
        }
    }

    let para = resolve_paragraph(chars, options);
    Ok(para.text().encode_utf16().collect())
}
