//! File upload support
//!
//! Mattermost attaches files to posts in two steps: upload the bytes to
//! `/files` first, then reference the returned file IDs when creating the
//! post. This module covers the upload half.

use crate::client::MattermostClient;
use crate::error::{Error, Result};
use crate::types::FileUploadResponse;

impl MattermostClient {
    /// Upload a file to the configured channel
    ///
    /// The content is posted verbatim as the request body; the filename and
    /// channel travel as query parameters and are percent-encoded on the way
    /// out.
    ///
    /// # Arguments
    /// * `filename` - The name the file will carry on the server
    /// * `content` - The file contents as bytes
    ///
    /// # Returns
    /// A Result containing the ID of the uploaded file
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = messenger::MattermostClient::new("https://example.com", "token", "chan-1")?;
    /// let file_id = client.upload_file("report.pdf", std::fs::read("report.pdf")?).await?;
    /// client.send_message("Weekly report", Some(vec![file_id])).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_file(&self, filename: &str, content: Vec<u8>) -> Result<String> {
        let query = [("channel_id", self.channel_id()), ("filename", filename)];
        let response = self.post_bytes("/files", &query, content).await?;

        let upload_response: FileUploadResponse = self.handle_response(response).await?;

        upload_response
            .file_infos
            .into_iter()
            .next()
            .map(|info| info.id)
            .ok_or_else(|| Error::request("No file info returned from upload"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_endpoint() {
        let client =
            MattermostClient::new("https://mattermost.example.com", "token", "chan-1").unwrap();

        assert_eq!(
            client.api_url("/files"),
            "https://mattermost.example.com/api/v4/files"
        );
    }

    #[test]
    fn test_first_file_id_wins() {
        let json = r#"{"file_infos": [{"id": "first"}, {"id": "second"}]}"#;
        let response: FileUploadResponse = serde_json::from_str(json).unwrap();

        let id = response.file_infos.into_iter().next().map(|info| info.id);
        assert_eq!(id.as_deref(), Some("first"));
    }
}
