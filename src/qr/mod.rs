//! Styled QR code generation
//!
//! Two layers, consumed leaf-first: `matrix` turns a payload string into a
//! boolean module matrix at error-correction level H, and `render` turns
//! that matrix into a styled PNG (round dots, solid finder squares, optional
//! centered logo).

pub mod matrix;
pub mod render;

pub use matrix::module_matrix;
pub use render::{render_qr, RenderOptions};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a render.
///
/// A logo problem is deliberately not represented here: a broken or missing
/// logo must never prevent production of a scannable code, so it is logged
/// and recovered inside the renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("payload is empty")]
    EmptyPayload,

    #[error("payload cannot be encoded at error correction level H: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    #[error("failed to write QR image to {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
