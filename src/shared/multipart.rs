use std::collections::HashMap;

use axum::extract::Multipart;
use tracing::debug;

use crate::core::error::{AppError, Result};

/// One uploaded file part, read fully into memory. A part sent with an empty
/// filename is kept as-is; the storage layer treats it as "no file provided".
#[derive(Debug, Clone)]
pub struct FilePart {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Collected multipart form: text fields by name plus file parts by name.
/// Unknown fields are ignored, matching the upload forms' tolerance for
/// extra inputs.
#[derive(Debug, Default)]
pub struct FormData {
    texts: HashMap<String, String>,
    files: HashMap<String, FilePart>,
}

impl FormData {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = FormData::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            debug!("Failed to read multipart field: {}", e);
            AppError::BadRequest(format!("Failed to read multipart data: {}", e))
        })? {
            let field_name = field.name().unwrap_or("").to_string();

            if let Some(filename) = field.file_name().map(|s| s.to_string()) {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                form.files.insert(
                    field_name,
                    FilePart {
                        filename,
                        content_type,
                        data: data.to_vec(),
                    },
                );
            } else {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read form field: {}", e))
                })?;
                form.texts.insert(field_name, text);
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(|s| s.as_str())
    }

    /// Text field that must be present and non-empty
    pub fn required_text(&self, name: &str) -> Result<String> {
        self.text(name)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation(format!("{} is required", name)))
    }

    /// Price-style field: absent or empty means zero, anything else must parse
    pub fn price(&self, name: &str) -> Result<f64> {
        match self.text(name).map(str::trim) {
            None | Some("") => Ok(0.0),
            Some(raw) => raw
                .parse::<f64>()
                .map_err(|_| AppError::Validation(format!("{} must be a number", name))),
        }
    }

    /// Checkbox-style field: "on", "true" and "1" are truthy
    pub fn flag(&self, name: &str) -> bool {
        matches!(
            self.text(name).map(str::trim),
            Some("on") | Some("true") | Some("1")
        )
    }

    pub fn file(&self, name: &str) -> Option<&FilePart> {
        self.files.get(name)
    }
}
