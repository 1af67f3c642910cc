//! QR code serving routes
//!
//! Lists and serves the PNGs produced by the startup batch generation. No
//! per-request regeneration happens here.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::state::AppState;

use super::validate_name;

/// Create the QR router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list_qr_codes))
        .route("/:name", get(serve_qr))
        .route("/:name/download", get(download_qr))
}

#[derive(Serialize)]
pub struct QrListResponse {
    // Wire format kept stable for the frontend.
    #[serde(rename = "documentos")]
    pub documents: Vec<String>,
}

/// List the document names that have a generated QR code
async fn list_qr_codes(State(state): State<AppState>) -> Result<Json<QrListResponse>> {
    let qr_dir = state.qr_dir();
    if !qr_dir.exists() {
        return Ok(Json(QrListResponse {
            documents: Vec::new(),
        }));
    }

    let mut documents = Vec::new();
    let mut entries = tokio::fs::read_dir(&qr_dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "png") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                documents.push(stem.to_string());
            }
        }
    }
    documents.sort();

    Ok(Json(QrListResponse { documents }))
}

/// Serve a QR code PNG inline
async fn serve_qr(State(state): State<AppState>, Path(name): Path<String>) -> Result<Response> {
    let bytes = read_qr(&state, &name).await?;
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .header(header::CONTENT_LENGTH, bytes.len())
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(e.to_string()))?)
}

/// Serve a QR code PNG as an attachment
async fn download_qr(State(state): State<AppState>, Path(name): Path<String>) -> Result<Response> {
    let bytes = read_qr(&state, &name).await?;
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .header(header::CONTENT_LENGTH, bytes.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}_QR.png\"", name),
        )
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(e.to_string()))?)
}

async fn read_qr(state: &AppState, name: &str) -> Result<Vec<u8>> {
    if !validate_name(name) {
        return Err(AppError::BadRequest(format!("Invalid QR name: {}", name)));
    }

    let qr_path = state.qr_dir().join(format!("{}.png", name));
    if !qr_path.exists() {
        return Err(AppError::NotFound(format!("QR code not found: {}", name)));
    }

    Ok(tokio::fs::read(&qr_path).await?)
}
