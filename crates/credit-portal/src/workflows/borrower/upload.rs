use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::DocumentRequirement;

/// File the borrower picked or dropped. Only metadata crosses the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCandidate {
    pub file_name: String,
    pub size_bytes: u64,
}

impl FileCandidate {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
        }
    }
}

/// A file held in a document slot after the simulated upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocument {
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadedDocument {
    pub fn accept(candidate: FileCandidate, uploaded_at: DateTime<Utc>) -> Self {
        let content_type = mime_guess::from_path(&candidate.file_name)
            .first()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);

        Self {
            file_name: candidate.file_name,
            size_bytes: candidate.size_bytes,
            content_type: content_type.essence_str().to_string(),
            uploaded_at,
        }
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("{file_name} has no file extension")]
    MissingExtension { file_name: String },
    #[error(".{extension} files are not accepted (allowed: {})", .accepted.join(", "))]
    UnsupportedFormat {
        extension: String,
        accepted: Vec<String>,
    },
    #[error("file is {size_bytes} bytes but the limit is {max_bytes} bytes")]
    TooLarge { size_bytes: u64, max_bytes: u64 },
}

/// Lower-cased text after the final dot, if any.
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .filter(|extension| !extension.is_empty())
}

/// Client-side screening: the extension must be accepted and the size within the ceiling.
pub fn screen(
    requirement: &DocumentRequirement,
    candidate: &FileCandidate,
) -> Result<(), UploadRejection> {
    let extension =
        file_extension(&candidate.file_name).ok_or_else(|| UploadRejection::MissingExtension {
            file_name: candidate.file_name.clone(),
        })?;

    if !requirement.accepts_extension(&extension) {
        return Err(UploadRejection::UnsupportedFormat {
            extension,
            accepted: requirement
                .accepted_formats
                .iter()
                .map(|format| format.to_string())
                .collect(),
        });
    }

    let max_bytes = requirement.max_size_bytes();
    if candidate.size_bytes > max_bytes {
        return Err(UploadRejection::TooLarge {
            size_bytes: candidate.size_bytes,
            max_bytes,
        });
    }

    Ok(())
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human readable size with up to two decimals (`1.5 KB`, `2.34 MB`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // Ties round up, as the upload card shows them.
    let rounded = format!("{:.2}", (value * 100.0).round() / 100.0);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}
