//! Sleep-session recording lifecycle
//!
//! The recorder owns the start/stop flow: it drains frames from an audio
//! backend into a spool WAV file, relocates the finished file into the
//! recordings directory and appends one record to the store.

mod recorder;

pub use recorder::Recorder;
