use crate::client::MattermostClient;
use crate::error::Result;
use crate::types::CreatePostRequest;

impl MattermostClient {
    /// Send a message (post) to the configured channel
    ///
    /// # Arguments
    /// * `message` - The message text to send
    /// * `file_ids` - IDs of previously uploaded files to attach, if any
    ///
    /// # Returns
    /// A Result indicating success or failure
    pub async fn send_message(&self, message: &str, file_ids: Option<Vec<String>>) -> Result<()> {
        let mut request =
            CreatePostRequest::new(self.channel_id().to_string(), message.to_string());
        if let Some(ids) = file_ids {
            request = request.with_files(ids);
        }

        let response = self.post_json("/posts", &request).await?;
        // The created post comes back in the body; it still has to decode,
        // but nothing in it is reported to the caller.
        let _post: serde_json::Value = self.handle_response(response).await?;
        Ok(())
    }

    /// Upload a batch of files and post a message with them attached
    ///
    /// Files are uploaded one at a time, in the order given, and the post
    /// references them in that same order. The first failed upload aborts
    /// the whole operation; no post is created and files uploaded before
    /// the failure are left on the server.
    ///
    /// # Arguments
    /// * `message` - The message text to send
    /// * `files` - Pairs of (filename, content) to upload and attach
    ///
    /// # Returns
    /// A Result indicating success or failure
    pub async fn send_message_with_files(
        &self,
        message: &str,
        files: Vec<(String, Vec<u8>)>,
    ) -> Result<()> {
        let mut file_ids = Vec::with_capacity(files.len());
        for (filename, content) in files {
            file_ids.push(self.upload_file(&filename, content).await?);
        }

        self.send_message(message, Some(file_ids)).await
    }
}
