//! Route modules for the document QR server

pub mod documents;
pub mod frontend;
pub mod health;
pub mod qr;

/// Reject identifiers that could escape the served directory.
pub(crate) fn validate_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && name != "."
        && name != ".."
}
