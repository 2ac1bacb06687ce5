//! Abstract asynchronous validation collaborator.
//!
//! The edit state machine must not assume any particular concurrency
//! primitive, only "eventually resolves exactly once". In the
//! single-threaded event model that means: `submit` hands a candidate
//! value to the collaborator and returns a task handle; the grid's tick
//! loop polls the handle until it yields an outcome.

use std::collections::HashMap;

use crate::types::CellValue;

/// Opaque handle to one in-flight validation task.
pub type TaskHandle = u64;

/// Result of a validation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected,
}

/// Swappable validation backend.
pub trait Validator {
    /// Submit a candidate value; the task starts at `now_ms`.
    fn submit(&mut self, candidate: &CellValue, now_ms: f64) -> TaskHandle;

    /// Poll a task. Yields `Some` exactly once, when the task has
    /// resolved; later polls of the same handle return `None`.
    fn poll(&mut self, task: TaskHandle, now_ms: f64) -> Option<ValidationOutcome>;
}

/// Simulated latency of the default validator (ms).
pub const MOCK_LATENCY_MS: f64 = 1000.0;

/// Default validation backend: rejects empty values and the
/// case-insensitive literal `"error"` after a fixed simulated latency.
///
/// This policy lives here and only here; the edit state machine treats
/// the validator as opaque.
#[derive(Debug)]
pub struct MockValidator {
    latency_ms: f64,
    next_handle: TaskHandle,
    tasks: HashMap<TaskHandle, (f64, ValidationOutcome)>,
}

impl Default for MockValidator {
    fn default() -> Self {
        Self::new(MOCK_LATENCY_MS)
    }
}

impl MockValidator {
    #[must_use]
    pub fn new(latency_ms: f64) -> Self {
        Self {
            latency_ms,
            next_handle: 0,
            tasks: HashMap::new(),
        }
    }

    fn judge(candidate: &CellValue) -> ValidationOutcome {
        let text = candidate.as_text();
        if text.is_empty() || text.eq_ignore_ascii_case("error") {
            ValidationOutcome::Rejected
        } else {
            ValidationOutcome::Accepted
        }
    }
}

impl Validator for MockValidator {
    fn submit(&mut self, candidate: &CellValue, now_ms: f64) -> TaskHandle {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.tasks
            .insert(handle, (now_ms + self.latency_ms, Self::judge(candidate)));
        handle
    }

    fn poll(&mut self, task: TaskHandle, now_ms: f64) -> Option<ValidationOutcome> {
        let resolved = matches!(self.tasks.get(&task), Some(&(at, _)) if now_ms >= at);
        if resolved {
            self.tasks.remove(&task).map(|(_, outcome)| outcome)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_rejects_empty_and_error_literal() {
        let mut v = MockValidator::new(1000.0);
        let ok = v.submit(&CellValue::from("User 42"), 0.0);
        let empty = v.submit(&CellValue::from(""), 0.0);
        let error = v.submit(&CellValue::from("ERROR"), 0.0);

        // Nothing resolves before the latency window elapses.
        assert_eq!(v.poll(ok, 999.0), None);

        assert_eq!(v.poll(ok, 1000.0), Some(ValidationOutcome::Accepted));
        assert_eq!(v.poll(empty, 1000.0), Some(ValidationOutcome::Rejected));
        assert_eq!(v.poll(error, 1000.0), Some(ValidationOutcome::Rejected));

        // Exactly once.
        assert_eq!(v.poll(ok, 2000.0), None);
    }
}
