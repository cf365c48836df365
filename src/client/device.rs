//! Host capabilities the client calls into, and the notices it hands back
//! for the host to display.

use crate::domain::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub trait Clipboard {
    fn set_text(&self, text: &str) -> Result<()>;
}

/// Text-to-speech provided by the host environment, when it has one.
pub trait SpeechSynthesizer {
    fn speak(&self, text: &str, lang_tag: &str) -> Result<()>;
}

pub const SPEECH_UNSUPPORTED_MESSAGE: &str = "Text-to-speech is not supported on this device";

/// Reads `text` aloud in `lang_code`. A missing or failing synthesizer
/// yields an error notice, even for blank text.
pub fn speak(
    synthesizer: Option<&dyn SpeechSynthesizer>,
    text: &str,
    lang_code: &str,
) -> std::result::Result<(), Notice> {
    let Some(synthesizer) = synthesizer else {
        return Err(Notice::Error(SPEECH_UNSUPPORTED_MESSAGE.to_string()));
    };

    if text.trim().is_empty() {
        return Ok(());
    }

    synthesizer.speak(text, lang_code).map_err(|e| {
        tracing::warn!(error = %e, lang = %lang_code, "Speech synthesis failed");
        Notice::Error(SPEECH_UNSUPPORTED_MESSAGE.to_string())
    })
}
