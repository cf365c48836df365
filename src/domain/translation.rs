use crate::domain::error::{AppError, Result};
use crate::domain::language::is_supported;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 10;

/// One completed translation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub id: String,
    pub source_lang: String,
    pub target_lang: String,
    pub original_text: String,
    pub translated_text: String,
    pub created_at: DateTime<Utc>,
}

impl TranslationRecord {
    pub fn new(
        source_lang: &str,
        target_lang: &str,
        original_text: String,
        translated_text: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        for code in [source_lang, target_lang] {
            if !is_supported(code) {
                return Err(AppError::BadRequest(format!(
                    "Unsupported language: {}",
                    code
                )));
            }
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            original_text,
            translated_text,
            created_at,
        })
    }
}

/// Most-recent-first log of the session's translations, bounded to
/// `HISTORY_CAPACITY` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct History {
    entries: VecDeque<TranslationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TranslationRecord) {
        self.entries.push_front(record);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn entries(&self) -> impl Iterator<Item = &TranslationRecord> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TranslationRecord> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&TranslationRecord> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
