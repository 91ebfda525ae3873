// SPDX-License-Identifier: MPL-2.0
//! Voice input and read-aloud port.

use super::BoxFuture;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    Unavailable,
    Failed(String),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechError::Unavailable => write!(f, "speech is not available"),
            SpeechError::Failed(msg) => write!(f, "speech failed: {msg}"),
        }
    }
}

impl std::error::Error for SpeechError {}

/// Speech recognition and synthesis.
///
/// Views check [`SpeechCapability::is_available`] and render the microphone
/// and speaker controls disabled when it is `false`.
pub trait SpeechCapability: Send + Sync {
    fn is_available(&self) -> bool;

    /// Listens for one utterance and returns its transcript.
    fn listen(&self) -> BoxFuture<'static, Result<String, SpeechError>>;

    /// Reads `text` aloud.
    fn speak(&self, text: String) -> BoxFuture<'static, Result<(), SpeechError>>;
}
