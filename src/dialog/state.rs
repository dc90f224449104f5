use super::field::DialogField;
use serde::{Deserialize, Serialize};

/// Snapshot of where a dialog stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogState {
    pub current_field: Option<DialogField>,
    /// Fixed at construction; never reordered or extended.
    pub missing_fields: Vec<DialogField>,
    pub completed_fields: Vec<DialogField>,
    pub answered_count: usize,
    pub is_complete: bool,
}

impl DialogState {
    pub(crate) fn start(missing_fields: Vec<DialogField>) -> Self {
        Self {
            current_field: missing_fields.first().copied(),
            is_complete: missing_fields.is_empty(),
            missing_fields,
            completed_fields: Vec::new(),
            answered_count: 0,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.missing_fields.len()
    }

    /// Marks the current field done and moves to the next unanswered one.
    pub(crate) fn advance(&mut self) {
        if let Some(done) = self.current_field {
            self.completed_fields.push(done);
            self.answered_count += 1;
        }
        self.current_field = self
            .missing_fields
            .iter()
            .copied()
            .find(|f| !self.completed_fields.contains(f));
        self.is_complete = self.current_field.is_none();
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.answered_count, self.total_questions())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    /// Rounded to the nearest integer; 100 when nothing had to be asked.
    pub percentage: u8,
}

impl Progress {
    pub fn new(current: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            100
        } else {
            ((current as f64 / total as f64) * 100.0).round().min(100.0) as u8
        };
        Self { current, total, percentage }
    }
}
