//! Configuration management for the document QR server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub paths: PathsConfig,
    pub qr: QrConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Public base URL encoded into each QR payload, e.g.
    /// `https://docs.example.com`. Document URLs are derived as
    /// `{public_url}/documento/{folder}`.
    pub public_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Directory scanned for document folders (each holding `documento.pdf`).
    pub docs_dir: PathBuf,
    /// Static asset root. Generated QR codes land in `{static_dir}/qr_code`,
    /// logos are looked up in `{static_dir}/logos`.
    pub static_dir: PathBuf,
    /// Frontend root holding `index.html` and `404.html`.
    pub frontend_dir: PathBuf,
}

/// Styling parameters for the QR renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct QrConfig {
    /// Module edge length in pixels.
    pub scale: u32,
    /// Quiet-zone width in modules.
    pub border: u32,
    /// Diameter of non-marker dots relative to `scale`, in (0, 1].
    pub dot_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                public_url: "http://localhost:3000".to_string(),
            },
            paths: PathsConfig {
                docs_dir: PathBuf::from("./docs"),
                static_dir: PathBuf::from("./static"),
                frontend_dir: PathBuf::from("./frontend"),
            },
            qr: QrConfig {
                scale: 20,
                border: 4,
                dot_scale: 0.6,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
                public_url: env::var("PUBLIC_URL").unwrap_or(defaults.server.public_url),
            },
            paths: PathsConfig {
                docs_dir: env::var("DOCS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.paths.docs_dir),
                static_dir: env::var("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.paths.static_dir),
                frontend_dir: env::var("FRONTEND_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.paths.frontend_dir),
            },
            qr: QrConfig {
                scale: env::var("QR_SCALE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.qr.scale),
                border: env::var("QR_BORDER")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.qr.border),
                dot_scale: env::var("QR_DOT_SCALE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.qr.dot_scale),
            },
        }
    }
}
