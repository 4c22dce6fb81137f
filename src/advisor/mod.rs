//! AI advisory text for sleep sessions
//!
//! Prompts embed the (stubbed) analysis fields and session duration and go
//! to the Gemini generateContent endpoint. Every remote failure degrades
//! to deterministic templated Turkish text; callers always get a string.

mod client;
pub mod fallback;
pub mod prompt;

pub use client::AdvisoryClient;
pub use fallback::CannedTopic;
