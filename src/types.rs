//! Wire types for the Mattermost REST endpoints this crate talks to

use serde::{Deserialize, Serialize};

/// Post creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub channel_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_ids: Option<Vec<String>>,
}

impl CreatePostRequest {
    /// Create a simple post request with just a message
    pub fn new(channel_id: String, message: String) -> Self {
        Self {
            channel_id,
            message,
            file_ids: None,
        }
    }

    /// Add file attachments
    pub fn with_files(mut self, file_ids: Vec<String>) -> Self {
        self.file_ids = Some(file_ids);
        self
    }
}

/// Mattermost file information, as returned by the upload endpoint.
///
/// Only `id` is required; the server sends plenty of other metadata but the
/// upload flow never reads it, so everything else tolerates being absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub mime_type: String,
}

/// Response from the file upload endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct FileUploadResponse {
    pub file_infos: Vec<FileInfo>,
    #[serde(default)]
    pub client_ids: Option<Vec<String>>,
}
