// SPDX-License-Identifier: MPL-2.0
//! Chat transcript entries and the previous-question history.

use chrono::{DateTime, Local};

/// Maximum number of remembered questions.
pub const HISTORY_CAPACITY: usize = 50;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the transcript. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    id: u64,
    role: Role,
    content: String,
    created_at: DateTime<Local>,
}

impl ChatMessage {
    #[must_use]
    pub fn new(id: u64, role: Role, content: impl Into<String>) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            created_at: Local::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

/// Previously asked questions, most recent first.
///
/// Entries are unique by exact text and the list never grows past
/// [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionHistory {
    entries: Vec<String>,
}

impl QuestionHistory {
    /// Builds a history from stored entries, re-applying the ordering rules.
    #[must_use]
    pub fn from_entries(entries: Vec<String>) -> Self {
        let mut history = Self::default();
        for entry in entries.into_iter().rev() {
            history.record(entry);
        }
        history
    }

    /// Moves `question` to the front, dropping an older identical entry and
    /// anything past the capacity.
    pub fn record(&mut self, question: impl Into<String>) {
        let question = question.into();
        self.entries.retain(|existing| *existing != question);
        self.entries.insert(0, question);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
