//! Document serving routes
//!
//! Serves `docs/{name}/documento.pdf` inline so scanned QR codes open the
//! document directly in the browser.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};

use crate::error::{AppError, Result};
use crate::library::scanner::DOCUMENT_FILE;
use crate::state::AppState;

use super::validate_name;

/// Create the documents router
pub fn router() -> Router<AppState> {
    Router::new().route("/:name", get(serve_document))
}

/// Serve a document PDF by folder name
async fn serve_document(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response> {
    if !validate_name(&name) {
        return Err(AppError::BadRequest(format!(
            "Invalid document name: {}",
            name
        )));
    }

    let doc_path = state.docs_dir().join(&name).join(DOCUMENT_FILE);
    if !doc_path.exists() {
        return Err(AppError::NotFound(format!("Document not found: {}", name)));
    }

    let bytes = tokio::fs::read(&doc_path).await?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, bytes.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", DOCUMENT_FILE),
        )
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(e.to_string()))?)
}
