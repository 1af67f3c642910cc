//! Batch QR generation
//!
//! Runs once at startup: one independent render per scanned document. A
//! failed render is logged and skipped so the remaining documents still get
//! their codes.

use std::fs;
use std::io;
use std::path::Path;

use crate::qr::{render_qr, RenderOptions};

use super::scanner::DocumentEntry;

/// Outcome counts for one batch run.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerationSummary {
    pub generated: usize,
    pub failed: usize,
}

/// Generate one QR code PNG per entry into `qr_dir`.
///
/// The payload for each entry is `{base_url}/documento/{name}` and the output
/// file is `{qr_dir}/{name}.png`. Render failures are per-entry: they are
/// logged and counted, never propagated.
pub fn generate_qr_codes(
    entries: &[DocumentEntry],
    qr_dir: &Path,
    base_url: &str,
    options: &RenderOptions,
) -> io::Result<GenerationSummary> {
    fs::create_dir_all(qr_dir)?;

    let start = std::time::Instant::now();
    let base_url = base_url.trim_end_matches('/');
    let mut summary = GenerationSummary::default();

    for entry in entries {
        let payload = format!("{}/documento/{}", base_url, entry.name);
        let output_path = qr_dir.join(format!("{}.png", entry.name));
        let logo_path = entry.logo_path.as_deref();

        match render_qr(&payload, &output_path, logo_path, options) {
            Ok(()) => {
                tracing::info!("Generated QR for {} at {}", entry.name, output_path.display());
                summary.generated += 1;
            }
            Err(e) => {
                tracing::error!("Error generating QR for {}: {}", entry.name, e);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        "QR generation complete: {} generated, {} failed in {:?}",
        summary.generated,
        summary.failed,
        start.elapsed()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(name: &str) -> DocumentEntry {
        DocumentEntry {
            name: name.to_string(),
            document_path: format!("docs/{}/documento.pdf", name).into(),
            logo_path: None,
        }
    }

    #[test]
    fn generates_one_png_per_entry() {
        let tmp = TempDir::new().unwrap();
        let qr_dir = tmp.path().join("qr_code");
        let entries = vec![entry("abc123"), entry("xyz")];

        let summary = generate_qr_codes(
            &entries,
            &qr_dir,
            "http://localhost:3000/",
            &RenderOptions::default(),
        )
        .unwrap();

        assert_eq!(summary.generated, 2);
        assert_eq!(summary.failed, 0);
        assert!(qr_dir.join("abc123.png").exists());
        assert!(qr_dir.join("xyz.png").exists());
        // Output is a decodable PNG.
        image::open(qr_dir.join("abc123.png")).unwrap();
    }

    #[test]
    fn one_failure_does_not_abort_the_batch() {
        let tmp = TempDir::new().unwrap();
        let qr_dir = tmp.path().join("qr_code");
        // A folder name with a path separator forces an unwritable output path.
        let entries = vec![entry("broken/slash"), entry("fine")];

        let summary = generate_qr_codes(
            &entries,
            &qr_dir,
            "http://localhost:3000",
            &RenderOptions::default(),
        )
        .unwrap();

        assert_eq!(summary.generated, 1);
        assert_eq!(summary.failed, 1);
        assert!(qr_dir.join("fine.png").exists());
    }
}
