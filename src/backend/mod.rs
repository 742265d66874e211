//! Client for the remote draft-generation backend.
//!
//! The backend's generation logic is out of scope; this module only knows the
//! wire contract: `POST /api/generate` with a JSON body of
//! `{topic, audience, lengthMinutes}`, answered by `{"draft": ...}` on
//! success or an optional `{"error": ...}` body on failure.

mod client;
mod error;
mod types;

pub use client::GenerationClient;
pub use error::{GenerateError, GENERIC_FAILURE_MESSAGE};
pub use types::{ErrorBody, GenerateRequest, GenerationResult};
