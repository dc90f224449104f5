//! The dialog state machine.
use super::error::DialogError;
use super::field::DialogField;
use super::questions::Question;
use super::state::{DialogState, Progress};
use crate::analysis::missing_fields;
use crate::model::ContractRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Wire shape of one transition: `{accepted, errorMessage?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> From<Result<T, DialogError>> for AnswerOutcome {
    fn from(result: Result<T, DialogError>) -> Self {
        match result {
            Ok(_) => Self { accepted: true, error_message: None },
            Err(err) => Self { accepted: false, error_message: Some(err.to_string()) },
        }
    }
}

/// Collects the fields a partial record lacks, one question at a time.
///
/// The controller owns the record it completes. Answers are merged into it
/// as they are accepted; `into_record` hands the merged record to the
/// calculation engine once the dialog is complete. One caller drives a
/// controller at a time.
#[derive(Debug, Clone)]
pub struct DialogController {
    record: ContractRecord,
    state: DialogState,
}

impl DialogController {
    /// Fixes the question list from the record's missing fields. A record
    /// with nothing missing starts out complete.
    pub fn new(record: ContractRecord) -> Self {
        let missing = missing_fields(&record);
        debug!(missing = ?missing, "Dialog started");
        Self {
            record,
            state: DialogState::start(missing),
        }
    }

    /// The question to present now, if any.
    pub fn question(&self) -> Option<&'static Question> {
        self.state.current_field.map(|f| f.question())
    }

    pub fn current_field(&self) -> Option<DialogField> {
        self.state.current_field
    }

    /// Answers the current question.
    ///
    /// On success returns the next question (`None` once complete). On
    /// rejection the state is untouched and the same question stays active.
    pub fn submit_answer(&mut self, answer: &str) -> Result<Option<&'static Question>, DialogError> {
        let field = self.state.current_field.ok_or(DialogError::NoActiveQuestion)?;

        let value = field.coerce(answer).map_err(|err| {
            warn!(%field, error = %err, "Answer rejected");
            DialogError::from(err)
        })?;
        value.apply(&mut self.record);
        self.state.advance();

        debug!(
            %field,
            answered = self.state.answered_count,
            total = self.state.total_questions(),
            "Answer accepted"
        );
        if self.state.is_complete {
            info!(answered = self.state.answered_count, "Dialog complete");
        }
        Ok(self.question())
    }

    /// `submit_answer` flattened into the wire outcome.
    pub fn submit(&mut self, answer: &str) -> AnswerOutcome {
        self.submit_answer(answer).into()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn progress(&self) -> Progress {
        self.state.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    /// The original fields merged with every accepted answer so far.
    pub fn record(&self) -> &ContractRecord {
        &self.record
    }

    pub fn into_record(self) -> ContractRecord {
        self.record
    }
}
