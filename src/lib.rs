//! Document QR server library
//!
//! A self-hosted PDF document server. At startup it scans a docs directory
//! and generates one styled QR code per document (round dots, solid finder
//! squares, optional centered logo) pointing at the document's public URL;
//! afterwards documents and codes are served statically.
//!
//! # Modules
//!
//! - `qr`: payload -> module matrix -> styled PNG pipeline
//! - `library`: startup scanning and batch generation glue
//! - `routes`: HTTP handlers

pub mod app;
pub mod config;
pub mod error;
pub mod library;
pub mod qr;
pub mod routes;
pub mod state;
