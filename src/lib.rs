//! Asynchronous Mattermost client for bots that post into a single channel.
//!
//! The client is constructed once with a server URL, a bot token, and the
//! target channel. It can send plain text messages, upload files, and send
//! messages with uploaded files attached.
//!
//! ```no_run
//! use messenger::MattermostClient;
//!
//! # async fn run() -> messenger::Result<()> {
//! let client = MattermostClient::new(
//!     "https://mattermost.example.com",
//!     "bot-token",
//!     "channel-id",
//! )?;
//!
//! client.send_message("deploy finished", None).await?;
//!
//! client
//!     .send_message_with_files(
//!         "logs attached",
//!         vec![("build.log".to_string(), b"all green".to_vec())],
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod client;
pub mod error;
pub mod logging;
pub mod types;

mod files;
mod posts;

// Re-exports for convenience
pub use client::MattermostClient;
pub use error::{Error, ErrorKind, Result};
pub use logging::{RequestLogger, TracingLogger};
pub use types::{CreatePostRequest, FileInfo, FileUploadResponse};
