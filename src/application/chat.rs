// SPDX-License-Identifier: MPL-2.0
//! Advisor chat: transcript state, prompt building and the model call.

use crate::application::port::{AssistantError, KeyValueStore, TextModel};
use crate::domain::chat::{ChatMessage, QuestionHistory, Role, HISTORY_CAPACITY};
use crate::i18n::{Dictionary, Key};
use std::sync::Arc;

/// Storage key of the question history (a JSON array of strings).
pub const HISTORY_KEY: &str = "fasalmitra_prev_questions";

/// Transcript and request state of one chat page.
///
/// The session is `Idle` until a question is submitted, then awaits exactly
/// one reply. Further submissions are refused until [`ChatSession::complete`]
/// is called.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    history: QuestionHistory,
    next_id: u64,
    awaiting: bool,
}

impl ChatSession {
    /// Starts a transcript with the localized greeting.
    #[must_use]
    pub fn new(greeting: impl Into<String>, history: QuestionHistory) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            history,
            next_id: 1,
            awaiting: false,
        };
        session.push(Role::Assistant, greeting.into());
        session
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn history(&self) -> &QuestionHistory {
        &self.history
    }

    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// Accepts a question and returns the prompt to send.
    ///
    /// Returns `None` (and changes nothing) for blank input or while a reply
    /// is pending. Otherwise the raw text is appended as a user message,
    /// recorded in the history, and the session starts awaiting.
    pub fn submit(&mut self, text: &str, instruction: &str) -> Option<String> {
        if self.awaiting || text.trim().is_empty() {
            return None;
        }
        self.push(Role::User, text.to_string());
        self.history.record(text);
        self.awaiting = true;
        Some(build_prompt(instruction, text))
    }

    /// Appends the reply, or a localized error message, and returns to idle.
    pub fn complete(&mut self, outcome: Result<String, AssistantError>, dictionary: &Dictionary<'_>) {
        let content = match outcome {
            Ok(reply) => reply,
            Err(AssistantError::NotConfigured) => dictionary.tr(Key::ChatErrorNotConfigured),
            Err(err) => {
                tracing::debug!(%err, "assistant request failed");
                dictionary.tr(Key::ChatErrorUnavailable)
            }
        };
        self.push(Role::Assistant, content);
        self.awaiting = false;
    }

    fn push(&mut self, role: Role, content: String) {
        self.messages.push(ChatMessage::new(self.next_id, role, content));
        self.next_id += 1;
    }
}

/// Prompt sent to the language model for one question.
#[must_use]
pub fn build_prompt(instruction: &str, question: &str) -> String {
    format!("{instruction}\nQuestion: {question}")
}

/// Asks the model, retrying once when the first reply is blank.
///
/// # Errors
///
/// [`AssistantError::NotConfigured`] without a usable key,
/// [`AssistantError::EmptyResponse`] when both replies are blank, or the
/// error of the failing call.
pub async fn ask_assistant(model: Arc<dyn TextModel>, prompt: String) -> Result<String, AssistantError> {
    if !model.is_configured() {
        return Err(AssistantError::NotConfigured);
    }
    let first = model.complete(prompt.clone()).await?;
    if !first.trim().is_empty() {
        return Ok(first);
    }
    tracing::debug!("blank assistant reply, retrying once");
    let second = model.complete(prompt).await?;
    if second.trim().is_empty() {
        Err(AssistantError::EmptyResponse)
    } else {
        Ok(second)
    }
}

/// Reads the stored question history. Unreadable data yields an empty one.
#[must_use]
pub fn load_history(store: &dyn KeyValueStore) -> QuestionHistory {
    let Some(raw) = store.get(HISTORY_KEY) else {
        return QuestionHistory::default();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(entries) => QuestionHistory::from_entries(entries),
        Err(err) => {
            tracing::debug!(%err, "discarding unreadable question history");
            QuestionHistory::default()
        }
    }
}

/// Persists the question history; failures are logged and ignored.
pub fn save_history(store: &dyn KeyValueStore, history: &QuestionHistory) {
    let entries = &history.entries()[..history.len().min(HISTORY_CAPACITY)];
    let json = match serde_json::to_string(entries) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(%err, "failed to encode question history");
            return;
        }
    };
    if let Err(err) = store.set(HISTORY_KEY, &json) {
        tracing::warn!(%err, "failed to persist question history");
    }
}
