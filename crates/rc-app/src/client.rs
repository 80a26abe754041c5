pub mod config;
pub mod schemas;

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};

use rc_core::{DesignStyle, RoomType};

use crate::client::config::ClientConfig;
use crate::client::schemas::{Credentials, ErrorBody, GenerationRecord, GenerationResult, ImageUpload};
use crate::error::AppError;

const GENERATE_FALLBACK: &str = "Failed to generate design";
const HISTORY_FALLBACK: &str = "Failed to fetch history";
const AUTH_FALLBACK: &str = "An error occurred";

/// Blocking HTTP client for the design backend. Lives on the worker
/// thread; one request at a time, no timeout and no cancellation.
pub struct DesignClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl DesignClient {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        // reqwest's blocking client times out after 30s by default; the
        // generation call must be allowed to run as long as it takes.
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Submit one generation request. Non-2xx responses surface the
    /// backend's `error` field, or a generic message when the body does
    /// not parse.
    pub fn generate(
        &self,
        upload: &ImageUpload,
        style: DesignStyle,
        room_type: RoomType,
    ) -> Result<GenerationResult, AppError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(mime_for(&upload.file_name))?;
        let form = Form::new()
            .part("image", part)
            .text("style", style.id())
            .text("roomType", room_type.id());

        let response = self.http.post(self.url("generate-designs")).multipart(form).send()?;

        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::Backend(backend_error(&body, GENERATE_FALLBACK)));
        }

        Ok(response.json()?)
    }

    pub fn history(&self) -> Result<Vec<GenerationRecord>, AppError> {
        let response = self.http.get(self.url("generations")).send()?;

        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::Backend(backend_error(&body, HISTORY_FALLBACK)));
        }

        Ok(response.json()?)
    }

    /// Fetch raw image bytes from an absolute URL (history thumbnails and
    /// the generated result both live wherever the backend says).
    pub fn fetch_image(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let response = self.http.get(url).send()?;

        if !response.status().is_success() {
            return Err(AppError::Backend(format!(
                "image not available (HTTP {})",
                response.status().as_u16()
            )));
        }

        Ok(response.bytes()?.to_vec())
    }

    pub fn sign_in(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.auth("login", credentials)
    }

    pub fn register(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.auth("register", credentials)
    }

    fn auth(&self, endpoint: &str, credentials: &Credentials) -> Result<(), AppError> {
        let response = self.http.post(self.url(endpoint)).json(credentials).send()?;

        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::Backend(backend_error(&body, AUTH_FALLBACK)));
        }

        Ok(())
    }
}

/// Extract the backend's `error` field, or fall back to a generic message
/// when the body is not the expected JSON shape.
fn backend_error(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.error)
        .unwrap_or_else(|_| fallback.to_owned())
}

fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_extracted_verbatim() {
        assert_eq!(backend_error(r#"{"error": "bad image"}"#, GENERATE_FALLBACK), "bad image");
    }

    #[test]
    fn test_backend_error_fallback_on_garbage() {
        assert_eq!(
            backend_error("<html>502 Bad Gateway</html>", GENERATE_FALLBACK),
            "Failed to generate design"
        );
        assert_eq!(backend_error("", AUTH_FALLBACK), "An error occurred");
    }

    #[test]
    fn test_backend_error_fallback_on_wrong_shape() {
        assert_eq!(
            backend_error(r#"{"message": "nope"}"#, HISTORY_FALLBACK),
            "Failed to fetch history"
        );
    }

    #[test]
    fn test_mime_guessed_from_extension() {
        assert_eq!(mime_for("room.png"), "image/png");
        assert_eq!(mime_for("room.JPG"), "image/jpeg");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("anim.gif"), "image/gif");
        assert_eq!(mime_for("upload"), "application/octet-stream");
    }

    #[test]
    fn test_url_joining() {
        let client = DesignClient::new(ClientConfig::with_base_url("http://localhost:5000/api/"))
            .unwrap();
        assert_eq!(client.url("generations"), "http://localhost:5000/api/generations");
    }
}
