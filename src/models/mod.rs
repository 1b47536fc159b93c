//! Data transfer objects (DTOs) for the API surface and upstream payloads.
//!
//! - `github`: FileEntry, EntryType deserialized from the contents API
//! - `review`: FileReview, EvaluationReport serialized in the /evaluate response

pub mod github;
pub mod review;

pub use github::*;
pub use review::*;
