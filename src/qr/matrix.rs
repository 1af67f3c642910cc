//! QR module matrix provider
//!
//! Thin wrapper over the `qrcode` crate fixing the error-correction level at
//! H (tolerates ~30% symbol damage, leaves room for a centered logo). The
//! encoding mode (numeric/alphanumeric/byte) is picked automatically from
//! the payload content.

use qrcode::{Color, EcLevel, QrCode};

use super::RenderError;

/// Encode `payload` into a square matrix of dark-module flags.
///
/// Deterministic: the same payload always yields the same matrix and mask.
/// The side length is at least 21 (QR version 1).
pub fn module_matrix(payload: &str) -> Result<Vec<Vec<bool>>, RenderError> {
    if payload.is_empty() {
        return Err(RenderError::EmptyPayload);
    }

    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)?;
    let width = code.width();
    let colors = code.to_colors();

    let matrix = colors
        .chunks(width)
        .map(|row| row.iter().map(|c| *c == Color::Dark).collect())
        .collect();

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_is_square_and_at_least_version_1() {
        let matrix = module_matrix("http://host/documento/abc123").unwrap();
        assert!(matrix.len() >= 21);
        for row in &matrix {
            assert_eq!(row.len(), matrix.len());
        }
    }

    #[test]
    fn matrix_is_deterministic() {
        let a = module_matrix("same payload").unwrap();
        let b = module_matrix("same payload").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn finder_pattern_corners_are_present() {
        let matrix = module_matrix("finder check").unwrap();
        let size = matrix.len();
        // Outer ring dark, first inner ring light, core dark.
        assert!(matrix[0][0]);
        assert!(!matrix[1][1]);
        assert!(matrix[3][3]);
        // Same structure in the top-right and bottom-left corners.
        assert!(matrix[0][size - 1]);
        assert!(!matrix[1][size - 2]);
        assert!(matrix[size - 1][0]);
        assert!(!matrix[size - 2][1]);
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert!(matches!(module_matrix(""), Err(RenderError::EmptyPayload)));
    }

    #[test]
    fn oversized_payload_is_an_encoding_error() {
        // Level H byte capacity tops out well below 8 KiB.
        let payload = "a".repeat(8192);
        assert!(matches!(
            module_matrix(&payload),
            Err(RenderError::Encoding(_))
        ));
    }
}
