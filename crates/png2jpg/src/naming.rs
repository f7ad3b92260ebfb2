//! Output filename derivation.
//!
//! A converted image is written next to its input: everything from the first
//! case-insensitive `.png` in the input name onward is replaced with `.jpg`.

use crate::{ConvertError, Result};

/// Derive the JPEG output name for `input`.
///
/// The first occurrence of `".png"` (ASCII case-insensitive) marks the cut
/// point; the name up to that point gets a `.jpg` suffix. `photo.png`
/// becomes `photo.jpg`, `PHOTO.PNG` becomes `PHOTO.jpg`.
///
/// The scan compares byte windows against `".png"` instead of searching an
/// uppercased copy, so the match position always indexes the original
/// string even when the name contains non-ASCII characters.
///
/// # Errors
/// [`ConvertError::MissingPngMarker`] if the name contains no `.png`.
pub fn jpeg_output_name(input: &str) -> Result<String> {
    let pos = input
        .as_bytes()
        .windows(4)
        .position(|w| w.eq_ignore_ascii_case(b".png"))
        .ok_or_else(|| ConvertError::MissingPngMarker {
            path: input.to_string(),
        })?;

    // pos sits on the '.' of an ASCII match, so slicing is char-safe.
    let mut out = String::with_capacity(pos + 4);
    out.push_str(&input[..pos]);
    out.push_str(".jpg");
    Ok(out)
}
