//! CLI command implementations for prosemap operations.
//!
//! Available commands:
//! - **analyze**: run the readability and suggestion pipeline over documents
//! - **extract**: project a document to the plain text the matcher sees
//! - **init**: initialize a new prosemap configuration file

pub mod analyze;
pub mod extract;
pub mod init;
