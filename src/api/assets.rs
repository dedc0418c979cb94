//! Embedded static assets
//!
//! In development, falls back to serving from the filesystem.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use std::path::PathBuf;

#[derive(Embed)]
#[folder = "ui"]
struct Assets;

const UI_DIR: &str = "ui";

fn file_response(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime.as_ref().to_string())],
        data,
    )
        .into_response()
}

/// Serve embedded static files under `/assets/`
pub async fn serve_static(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches("/assets/");

    if let Some(content) = Assets::get(path) {
        return file_response(path, content.data.into_owned());
    }

    // Fallback to filesystem in development
    let fs_path = PathBuf::from(UI_DIR).join(path);
    if !path.contains("..") && fs_path.is_file() {
        if let Ok(content) = std::fs::read(&fs_path) {
            return file_response(path, content);
        }
    }

    (StatusCode::NOT_FOUND, "Not found").into_response()
}

/// Get the index.html content (embedded or from filesystem)
pub fn get_index_html() -> Option<String> {
    if let Some(content) = Assets::get("index.html") {
        return String::from_utf8(content.data.into_owned()).ok();
    }

    std::fs::read_to_string(PathBuf::from(UI_DIR).join("index.html")).ok()
}
