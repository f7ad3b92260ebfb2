//! # png2jpg
//!
//! Batch conversion of PNG images to JPEG.
//!
//! Each input file is decoded, re-encoded as JPEG at a fixed quality of 95
//! and written next to the original with the extension rewritten to `.jpg`.
//! Processing is strictly sequential and fail-fast: the first file that
//! cannot be converted aborts the whole batch.
//!
//! ## Quick Start
//!
//! ### Converting a single file
//!
//! ```ignore
//! use png2jpg::{convert_file, JpegOptions};
//!
//! let written = convert_file("photo.png", &JpegOptions::default())?;
//! println!("wrote {written}"); // "wrote photo.jpg"
//! ```
//!
//! ### Converting a batch
//!
//! ```ignore
//! use png2jpg::{convert_batch, JpegOptions};
//!
//! let opts = JpegOptions::default();
//! let written = convert_batch(&["a.png", "b.PNG"], &opts)?;
//! assert_eq!(written, vec!["a.jpg", "b.jpg"]);
//! ```

use thiserror::Error;

pub mod convert;
pub mod naming;

pub use convert::{convert_batch, convert_file, encode_jpeg, load_image, JpegOptions};
pub use naming::jpeg_output_name;

/// JPEG quality used for every conversion in a run.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Errors that can occur while converting a file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input could not be opened or decoded as an image.
    #[error("cannot read image '{path}': {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },

    /// The input filename contains no ".png" to build an output name from.
    #[error("no '.png' in filename '{path}'")]
    MissingPngMarker { path: String },

    /// JPEG encoding failed.
    #[error("JPEG encoding failed: {source}")]
    Encode { source: image::ImageError },

    /// The converted image could not be written to disk.
    #[error("cannot write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Result type for conversion operations.
pub type Result<T> = core::result::Result<T, ConvertError>;
