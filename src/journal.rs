//! In-memory journal of dated health observations.
//!
//! Entries are kept newest-first. The store only grows: entries are created
//! through [`JournalStore::create_entry`] and read back through
//! [`JournalStore::filter`], which yields a lazy view that can be iterated
//! any number of times.

use crate::models::empty_string_as_none;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{VecDeque, vec_deque};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Neutral, Mood::Sad];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Sad => "☹️",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = JournalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| JournalError::UnknownMood(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    High,
    Medium,
    Low,
}

impl Energy {
    pub const ALL: [Energy; 3] = [Energy::High, Energy::Medium, Energy::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Energy::High => "high",
            Energy::Medium => "medium",
            Energy::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Energy::High => "High",
            Energy::Medium => "Medium",
            Energy::Low => "Low",
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Energy {
    type Err = JournalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Energy::ALL
            .into_iter()
            .find(|energy| energy.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| JournalError::UnknownEnergy(value.to_string()))
    }
}

/// Field of a draft that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Title,
    Content,
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryField::Title => f.write_str("title"),
            EntryField::Content => f.write_str("content"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JournalError {
    #[error("invalid entry: {0} must not be empty")]
    InvalidEntry(EntryField),
    #[error("unknown mood `{0}`")]
    UnknownMood(String),
    #[error("unknown energy level `{0}`")]
    UnknownEnergy(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u64,
    pub date: NaiveDate,
    pub mood: Mood,
    pub energy: Energy,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl JournalEntry {
    /// `needle` must already be lowercased; an empty needle matches everything.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Unvalidated input for a new entry, as submitted by the journal form or
/// the JSON API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryDraft {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub mood: Option<Mood>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub energy: Option<Energy>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags_input: String,
}

/// Splits a comma-separated tag list, trimming each tag and dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug)]
pub struct JournalStore {
    entries: VecDeque<JournalEntry>,
    next_id: u64,
}

impl Default for JournalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalStore {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
        }
    }

    /// A store holding the five sample entries shown to first-time visitors.
    pub fn with_samples() -> Self {
        let mut store = Self::new();
        for (date, mood, energy, title, content, tags) in SAMPLE_ENTRIES {
            let Some(date) = NaiveDate::from_ymd_opt(date.0, date.1, date.2) else {
                continue;
            };
            let draft = EntryDraft {
                date: Some(date),
                mood: Some(mood),
                energy: Some(energy),
                title: title.to_string(),
                content: content.to_string(),
                tags_input: tags.to_string(),
            };
            if let Err(err) = store.create_entry_at(draft, date) {
                warn!("skipping sample entry {title:?}: {err}");
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> vec_deque::Iter<'_, JournalEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: u64) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn create_entry(&mut self, draft: EntryDraft) -> Result<JournalEntry, JournalError> {
        self.create_entry_at(draft, Local::now().date_naive())
    }

    /// Validates `draft` and prepends the resulting entry. An unset date
    /// falls back to `today`.
    pub fn create_entry_at(
        &mut self,
        draft: EntryDraft,
        today: NaiveDate,
    ) -> Result<JournalEntry, JournalError> {
        let title = draft.title.trim();
        if title.is_empty() {
            warn!("rejected journal entry with empty title");
            return Err(JournalError::InvalidEntry(EntryField::Title));
        }
        let content = draft.content.trim();
        if content.is_empty() {
            warn!("rejected journal entry with empty content");
            return Err(JournalError::InvalidEntry(EntryField::Content));
        }

        let entry = JournalEntry {
            id: self.next_id,
            date: draft.date.unwrap_or(today),
            mood: draft.mood.unwrap_or(Mood::Neutral),
            energy: draft.energy.unwrap_or(Energy::Medium),
            title: title.to_string(),
            content: content.to_string(),
            tags: parse_tags(&draft.tags_input),
        };
        self.next_id += 1;

        info!(id = entry.id, date = %entry.date, tags = entry.tags.len(), "journal entry created");
        self.entries.push_front(entry.clone());
        Ok(entry)
    }

    /// Entries whose title, content or any tag contains `query`, ignoring
    /// case. Leading and trailing whitespace in `query` is dropped before
    /// matching, so `"diet "` matches the same entries as `"diet"`. A blank
    /// query selects every entry.
    pub fn filter(&self, query: &str) -> FilteredEntries<'_> {
        FilteredEntries {
            entries: &self.entries,
            needle: query.trim().to_lowercase(),
        }
    }
}

/// Lazy filtered view over a [`JournalStore`]; iterate it with
/// [`FilteredEntries::iter`] as often as needed.
#[derive(Debug, Clone)]
pub struct FilteredEntries<'a> {
    entries: &'a VecDeque<JournalEntry>,
    needle: String,
}

impl<'a> FilteredEntries<'a> {
    pub fn iter(&self) -> Matches<'a, '_> {
        Matches {
            inner: self.entries.iter(),
            needle: &self.needle,
        }
    }

    /// True when the view was built from a blank query.
    pub fn is_unfiltered(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<'a, 'q> IntoIterator for &'q FilteredEntries<'a> {
    type Item = &'a JournalEntry;
    type IntoIter = Matches<'a, 'q>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Matches<'a, 'q> {
    inner: vec_deque::Iter<'a, JournalEntry>,
    needle: &'q str,
}

impl<'a> Iterator for Matches<'a, '_> {
    type Item = &'a JournalEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle;
        self.inner.find(|entry| entry.matches(needle))
    }
}

type SampleEntry = (
    (i32, u32, u32),
    Mood,
    Energy,
    &'static str,
    &'static str,
    &'static str,
);

// Oldest first, so that prepending leaves the newest on top.
const SAMPLE_ENTRIES: [SampleEntry; 5] = [
    (
        (2023, 5, 13),
        Mood::Neutral,
        Energy::Medium,
        "Nutrition check-in",
        "Had a good balance of macros today. Protein intake was on point. Need to work on reducing sugar cravings in the evening.",
        "nutrition, diet",
    ),
    (
        (2023, 5, 14),
        Mood::Happy,
        Energy::High,
        "New personal record!",
        "Set a new personal record on my 5K run today! Shaved 30 seconds off my previous best time. The new running shoes definitely helped.",
        "running, achievement",
    ),
    (
        (2023, 5, 15),
        Mood::Sad,
        Energy::Low,
        "Rest day",
        "Taking it easy today. Feeling a bit under the weather, might be catching a cold. Focusing on hydration and getting extra rest.",
        "rest, health",
    ),
    (
        (2023, 5, 16),
        Mood::Neutral,
        Energy::Medium,
        "Back to normal routine",
        "Getting back into my routine after the weekend. Diet was on point today, but felt a bit tired in the afternoon. Need to work on my sleep schedule.",
        "diet, routine",
    ),
    (
        (2023, 5, 17),
        Mood::Happy,
        Energy::High,
        "Great workout session",
        "Had an amazing HIIT session today. Feeling energized and accomplished. Made sure to stretch properly afterward to prevent soreness tomorrow.",
        "workout, energy, achievement",
    ),
];
