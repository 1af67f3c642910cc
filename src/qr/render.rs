//! Styled QR renderer
//!
//! Converts a module matrix into a raster image: finder-pattern modules are
//! drawn as solid squares filling their cell, every other dark module as a
//! centered disc, and an optional logo is alpha-composited over the center.
//! The canvas is white RGBA; dark modules are opaque black.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::{module_matrix, RenderError};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const FOREGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Styling parameters for a render call.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Module edge length in pixels.
    pub scale: u32,
    /// Quiet-zone width in modules.
    pub border: u32,
    /// Diameter of non-marker dots relative to `scale`, in (0, 1].
    pub dot_scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            scale: 20,
            border: 4,
            dot_scale: 0.6,
        }
    }
}

/// Whether module `(x, y)` belongs to one of the three 7x7 finder patterns.
///
/// The 7-module finder size is fixed by the QR standard, so the test holds
/// for every symbol version.
fn is_position_marker(x: usize, y: usize, size: usize) -> bool {
    (x <= 6 && y <= 6) || (x >= size - 7 && y <= 6) || (x <= 6 && y >= size - 7)
}

/// Draw the styled symbol onto a fresh canvas.
///
/// Pure: no I/O, deterministic for a given matrix and options. The canvas is
/// `(size + 2 * border) * scale` pixels per side.
pub fn render_matrix(matrix: &[Vec<bool>], options: &RenderOptions) -> RgbaImage {
    let qr_size = matrix.len();
    let canvas_size = (qr_size as u32 + 2 * options.border) * options.scale;
    let mut canvas = RgbaImage::from_pixel(canvas_size, canvas_size, BACKGROUND);

    for (y, row) in matrix.iter().enumerate() {
        for (x, &dark) in row.iter().enumerate() {
            if !dark {
                continue;
            }
            let px = (x as u32 + options.border) * options.scale;
            let py = (y as u32 + options.border) * options.scale;
            if is_position_marker(x, y, qr_size) {
                fill_square(&mut canvas, px, py, options.scale);
            } else {
                fill_dot(&mut canvas, px, py, options.scale, options.dot_scale);
            }
        }
    }

    canvas
}

/// Fill the whole `scale x scale` cell at `(px, py)`.
fn fill_square(canvas: &mut RgbaImage, px: u32, py: u32, scale: u32) {
    for dy in 0..scale {
        for dx in 0..scale {
            canvas.put_pixel(px + dx, py + dy, FOREGROUND);
        }
    }
}

/// Fill a disc of diameter `scale * dot_scale`, centered within the cell.
fn fill_dot(canvas: &mut RgbaImage, px: u32, py: u32, scale: u32, dot_scale: f32) {
    let dot_size = ((scale as f32 * dot_scale) as u32).min(scale);
    if dot_size == 0 {
        return;
    }
    let offset = (scale - dot_size) / 2;
    let radius = dot_size as f32 / 2.0;

    for dy in 0..dot_size {
        for dx in 0..dot_size {
            // Distance from the pixel center to the disc center.
            let fx = dx as f32 + 0.5 - radius;
            let fy = dy as f32 + 0.5 - radius;
            if fx * fx + fy * fy <= radius * radius {
                canvas.put_pixel(px + offset + dx, py + offset + dy, FOREGROUND);
            }
        }
    }
}

/// Resize the logo to a quarter of the canvas edge and alpha-composite it
/// centered. Fallible sub-operation: the caller decides whether its failure
/// matters.
fn composite_logo(canvas: &mut RgbaImage, logo_path: &Path) -> Result<(), image::ImageError> {
    let canvas_size = canvas.width();
    let logo = image::open(logo_path)?.to_rgba8();
    let logo_size = canvas_size / 4;
    let resized = imageops::resize(&logo, logo_size, logo_size, FilterType::Lanczos3);
    let pos = i64::from((canvas_size - logo_size) / 2);
    imageops::overlay(canvas, &resized, pos, pos);
    Ok(())
}

/// Render `payload` as a styled QR code PNG at `output_path`.
///
/// The logo is optional and best-effort: a missing or unreadable logo file is
/// logged and the code is still produced without it. An unencodable payload
/// or a failed save is surfaced to the caller.
pub fn render_qr(
    payload: &str,
    output_path: &Path,
    logo_path: Option<&Path>,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let matrix = module_matrix(payload)?;
    let mut canvas = render_matrix(&matrix, options);

    if let Some(path) = logo_path {
        if path.exists() {
            tracing::debug!("Compositing logo {}", path.display());
            if let Err(e) = composite_logo(&mut canvas, path) {
                tracing::warn!("Skipping unusable logo {}: {}", path.display(), e);
            }
        }
    }

    canvas
        .save(output_path)
        .map_err(|source| RenderError::Persistence {
            path: output_path.to_path_buf(),
            source,
        })?;

    tracing::debug!("QR code written to {}", output_path.display());
    Ok(())
}
