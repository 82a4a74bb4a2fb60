//! Network-related utilities.
//!
//! ## Key Components
//!
//! - **`retry`**: Exponential backoff retry with jitter for transient
//!   transport failures and retryable HTTP statuses.

pub mod retry;

pub use retry::{retry_async, RetryConfig, RetryableError};
