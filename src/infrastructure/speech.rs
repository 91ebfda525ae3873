// SPDX-License-Identifier: MPL-2.0
//! Speech capability for builds without a recognition or synthesis engine.

use crate::application::port::{BoxFuture, SpeechCapability, SpeechError};
use futures_util::FutureExt;

/// Reports speech as unavailable; every call fails immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSpeech;

impl SpeechCapability for DisabledSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn listen(&self) -> BoxFuture<'static, Result<String, SpeechError>> {
        futures_util::future::ready(Err(SpeechError::Unavailable)).boxed()
    }

    fn speak(&self, _text: String) -> BoxFuture<'static, Result<(), SpeechError>> {
        futures_util::future::ready(Err(SpeechError::Unavailable)).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_speech_refuses_everything() {
        let speech = DisabledSpeech;
        assert!(!speech.is_available());
        assert_eq!(speech.listen().await, Err(SpeechError::Unavailable));
        assert_eq!(speech.speak("namaste".to_string()).await, Err(SpeechError::Unavailable));
    }
}
