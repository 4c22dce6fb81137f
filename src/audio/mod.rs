pub mod backend;
pub mod microphone;
pub mod writer;

pub use backend::{AudioBackend, AudioBackendFactory, AudioFrame};
pub use microphone::MicrophoneBackend;
pub use writer::{CaptureInfo, SessionWriter};
