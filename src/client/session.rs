//! Session state of the translation client.
//!
//! The host owns a `SessionState` for the lifetime of a UI session and
//! threads it through the transitions below; every transition consumes the
//! state and returns the next one. A translation is split into
//! `begin_translate` → `PendingTranslation::run` → `apply_outcome` so the
//! host can keep handling input while the request is in flight. Nothing
//! serializes overlapping translations: whichever outcome is applied last
//! wins.

use super::device::{Clipboard, Notice};
use super::transport::ProxyTransport;
use crate::domain::error::{AppError, CLIENT_TRANSPORT_MESSAGE};
use crate::domain::request::TranslateRequest;
use crate::domain::translation::{History, TranslationRecord};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

pub const COPIED_INDICATOR_SECS: i64 = 2;
pub const EMPTY_TEXT_MESSAGE: &str = "Please enter text to translate";
pub const TRANSLATED_MESSAGE: &str = "Translation complete";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub source_lang: String,
    pub target_lang: String,
    pub source_text: String,
    pub translated_text: String,
    pub history: History,
    pub is_translating: bool,
    pub error: Option<String>,
    pub history_open: bool,
    pub copied_at: Option<DateTime<Utc>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            source_lang: "en".to_string(),
            target_lang: "pt".to_string(),
            source_text: String::new(),
            translated_text: String::new(),
            history: History::new(),
            is_translating: false,
            error: None,
            history_open: false,
            copied_at: None,
        }
    }
}

/// A request that has been started but whose outcome is not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTranslation {
    pub request: TranslateRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateOutcome {
    Success { translation: String },
    /// The proxy answered with a failure; `message` is what it said, or the
    /// generic connectivity message when it said nothing usable.
    Rejected { message: String },
    /// No response reached the client.
    Transport,
}

impl PendingTranslation {
    pub async fn run(&self, transport: &dyn ProxyTransport) -> TranslateOutcome {
        match transport.send(&self.request).await {
            Ok(reply) => outcome_from_reply(reply.status, reply.body),
            Err(e) => {
                warn!(error = %e, "Translate request did not reach the proxy");
                TranslateOutcome::Transport
            }
        }
    }
}

fn outcome_from_reply(status: u16, body: Option<serde_json::Value>) -> TranslateOutcome {
    let field = |name: &str| {
        body.as_ref()
            .and_then(|b| b.get(name))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    };

    if (200..300).contains(&status) {
        if let Some(translation) = field("translation") {
            return TranslateOutcome::Success { translation };
        }
    }

    debug!(status, "Proxy returned a failure");
    TranslateOutcome::Rejected {
        message: field("error").unwrap_or_else(|| CLIENT_TRANSPORT_MESSAGE.to_string()),
    }
}

impl SessionState {
    pub fn set_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = text.into();
        self
    }

    pub fn set_source_lang(mut self, code: impl Into<String>) -> Self {
        self.source_lang = code.into();
        self
    }

    pub fn set_target_lang(mut self, code: impl Into<String>) -> Self {
        self.target_lang = code.into();
        self
    }

    /// Swaps the language pair and the two text buffers, so the previous
    /// translation becomes the new source.
    pub fn swap_languages(mut self) -> Self {
        std::mem::swap(&mut self.source_lang, &mut self.target_lang);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
        self
    }

    pub fn toggle_history(mut self) -> Self {
        self.history_open = !self.history_open;
        self
    }

    pub fn load_from_history(mut self, record: &TranslationRecord) -> Self {
        self.source_lang = record.source_lang.clone();
        self.target_lang = record.target_lang.clone();
        self.source_text = record.original_text.clone();
        self.translated_text = record.translated_text.clone();
        self.history_open = false;
        self
    }

    /// Starts a translation. Blank input leaves the state untouched and
    /// returns a validation notice instead of a pending request.
    pub fn begin_translate(mut self) -> (Self, Result<PendingTranslation, Notice>) {
        if self.source_text.trim().is_empty() {
            return (self, Err(Notice::Error(EMPTY_TEXT_MESSAGE.to_string())));
        }

        self.is_translating = true;
        self.error = None;
        let pending = PendingTranslation {
            request: TranslateRequest::new(
                self.source_text.clone(),
                self.source_lang.clone(),
                self.target_lang.clone(),
            ),
        };
        (self, Ok(pending))
    }

    pub fn apply_outcome(
        mut self,
        pending: PendingTranslation,
        outcome: TranslateOutcome,
        now: DateTime<Utc>,
    ) -> (Self, Notice) {
        self.is_translating = false;

        let message = match outcome {
            TranslateOutcome::Success { translation } => {
                self.translated_text = translation.clone();
                self.error = None;

                let request = pending.request;
                match TranslationRecord::new(
                    &request.source_lang,
                    &request.target_lang,
                    request.text,
                    translation,
                    now,
                ) {
                    Ok(record) => self.history.push(record),
                    Err(e) => warn!(error = %e, "Translation not added to history"),
                }

                return (self, Notice::Success(TRANSLATED_MESSAGE.to_string()));
            }
            TranslateOutcome::Rejected { message } => message,
            TranslateOutcome::Transport => {
                AppError::ClientTransport(String::new()).user_message()
            }
        };

        self.error = Some(message.clone());
        (self, Notice::Error(message))
    }

    /// Copies the current translation. On success the "copied" indicator
    /// shows for `COPIED_INDICATOR_SECS`.
    pub fn copy_translation(
        mut self,
        clipboard: &dyn Clipboard,
        now: DateTime<Utc>,
    ) -> (Self, Result<(), Notice>) {
        if self.translated_text.is_empty() {
            return (self, Ok(()));
        }

        match clipboard.set_text(&self.translated_text) {
            Ok(()) => {
                self.copied_at = Some(now);
                (self, Ok(()))
            }
            Err(e) => {
                warn!(error = %e, "Clipboard write failed");
                (self, Err(Notice::Error(COPY_FAILED_MESSAGE.to_string())))
            }
        }
    }

    pub fn is_copied(&self, now: DateTime<Utc>) -> bool {
        self.copied_at
            .map(|at| now >= at && now - at < Duration::seconds(COPIED_INDICATOR_SECS))
            .unwrap_or(false)
    }
}

/// Runs one full translation: begin, send once, apply.
pub async fn translate(
    state: SessionState,
    transport: &dyn ProxyTransport,
) -> (SessionState, Notice) {
    let (state, pending) = state.begin_translate();
    let pending = match pending {
        Ok(pending) => pending,
        Err(notice) => return (state, notice),
    };

    let outcome = pending.run(transport).await;
    state.apply_outcome(pending, outcome, Utc::now())
}
