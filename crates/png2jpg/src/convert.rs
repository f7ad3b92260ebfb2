//! Decoding, JPEG re-encoding and the batch loop.
//!
//! Raster I/O is delegated to the `image` crate; this module wires the
//! decode, encode and write steps together and owns the failure policy:
//! the first error aborts the batch, outputs already written stay on disk.

use std::fs;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::naming::jpeg_output_name;
use crate::{ConvertError, Result, DEFAULT_JPEG_QUALITY};

/// Options for JPEG re-encoding.
///
/// Built once per run and shared read-only across every conversion.
#[derive(Clone, Debug)]
pub struct JpegOptions {
    /// JPEG quality (0-100). Higher keeps more detail at a larger file size.
    pub quality: u8,
}

impl Default for JpegOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Open and decode an image file.
///
/// A missing file, an unreadable file and a file that is not a decodable
/// image all surface as [`ConvertError::Decode`] naming the input path.
pub fn load_image(path: &str) -> Result<DynamicImage> {
    image::open(path).map_err(|source| ConvertError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Encode a decoded image as JPEG.
///
/// The image is flattened to RGB8 first; JPEG has no alpha channel.
pub fn encode_jpeg(image: &DynamicImage, opts: &JpegOptions) -> Result<Vec<u8>> {
    let rgb = image.to_rgb8();
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, opts.quality)
        .encode_image(&rgb)
        .map_err(|source| ConvertError::Encode { source })?;
    Ok(jpeg)
}

/// Convert one file, returning the path written.
///
/// The input is decoded before the output name is derived, so a file that
/// decodes fine but has no `.png` in its name still fails cleanly without
/// touching the disk. Any existing file at the output path is overwritten.
pub fn convert_file(input: &str, opts: &JpegOptions) -> Result<String> {
    let image = load_image(input)?;
    let output = jpeg_output_name(input)?;
    let jpeg = encode_jpeg(&image, opts)?;
    fs::write(&output, jpeg).map_err(|source| ConvertError::Write {
        path: output.clone(),
        source,
    })?;
    Ok(output)
}

/// Convert every input in order, left to right, stopping at the first
/// failure.
///
/// Returns the paths written. On error the batch is abandoned: inputs after
/// the failing one are never attempted, and outputs already written are
/// left in place. An empty input list is a no-op.
pub fn convert_batch<S: AsRef<str>>(inputs: &[S], opts: &JpegOptions) -> Result<Vec<String>> {
    let mut written = Vec::with_capacity(inputs.len());
    for input in inputs {
        written.push(convert_file(input.as_ref(), opts)?);
    }
    Ok(written)
}
