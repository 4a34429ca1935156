/*
[INPUT]:  HTTP client configuration and webhook messages
[OUTPUT]: HTTP responses and typed execution results
[POS]:    HTTP layer - execute-webhook communication
[UPDATE]: When changing client behavior or request encoding
*/

pub mod client;
pub mod error;
pub mod execute;

pub use error::{Result, WebhookError};

pub use client::{ClientConfig, WebhookClient};
