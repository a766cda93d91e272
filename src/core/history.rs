//! Bounded evaluation history.
//!
//! Entries are immutable and kept newest first. Recording is pure: `record`
//! returns a new log and leaves the original untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of entries kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 15;

/// Record of one successful evaluation.
///
/// `id` and `evaluated_at` are rendering metadata; two entries are equal
/// when their expression and result match.
///
/// # Example
///
/// ```rust
/// use keycalc::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("2+2", "4");
/// assert_eq!(entry.expression(), "2+2");
/// assert_eq!(entry.result(), "4");
/// assert_eq!(entry, HistoryEntry::new("2+2", "4"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: Uuid,
    expression: String,
    result: String,
    evaluated_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            expression: expression.into(),
            result: result.into(),
            evaluated_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn evaluated_at(&self) -> DateTime<Utc> {
        self.evaluated_at
    }
}

impl PartialEq for HistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression && self.result == other.result
    }
}

/// Capacity-bounded history, newest entry first.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{HistoryEntry, HistoryLog};
///
/// let log = HistoryLog::with_capacity(2)
///     .record(HistoryEntry::new("1+1", "2"))
///     .record(HistoryEntry::new("2+2", "4"))
///     .record(HistoryEntry::new("3+3", "6"));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.entries()[0].expression(), "3+3");
/// assert_eq!(log.entries()[1].expression(), "2+2");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    /// Create an empty log with the default capacity of 15.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record an entry, returning a new log.
    ///
    /// The entry becomes index 0; once the log is over capacity the oldest
    /// entry is evicted.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        entries.truncate(self.capacity);
        Self {
            capacity: self.capacity,
            entries,
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
