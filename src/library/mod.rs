//! Document library: startup scanning and batch QR generation
//!
//! Orchestration glue around the QR renderer. The scanner enumerates
//! document folders on disk; the generator invokes one independent render
//! per document.

pub mod generator;
pub mod scanner;

pub use generator::{generate_qr_codes, GenerationSummary};
pub use scanner::{DocumentEntry, DocumentScanner};
