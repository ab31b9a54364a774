//! Submission session state machine.
//!
//! Inspired by Elm's RemoteData pattern, this tracks the lifecycle of
//! one interactive submission surface:
//! - Idle: no submission in flight, possibly holding a message
//! - Loading: a submission is in flight
//! - Success: the last submission settled with data
//! - Failure: the last submission settled with a message only
//!
//! One generic session replaces the per-view ad hoc `loading` /
//! `results` / `message` triples: `begin()` is the sole concurrency
//! guard (a second submission while loading is a no-op), settling
//! clears whatever the previous cycle left behind, and `clear()`
//! discards everything unconditionally.
//!
//! `begin()` hands out a generation token; a settle carrying a stale
//! token (the session was cleared or re-begun in the meantime) mutates
//! nothing, so a late completion for a torn-down cycle is a no-op.

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase<T> {
    Idle,
    Loading,
    Success(T),
    Failure,
}

/// Proof that a submission cycle was started; required to settle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionToken(u64);

#[derive(Debug, Clone)]
pub struct SubmissionSession<T> {
    phase: Phase<T>,
    message: Option<String>,
    generation: u64,
}

impl<T> SubmissionSession<T> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            message: None,
            generation: 0,
        }
    }

    /// Start a submission cycle. Returns `None` while a cycle is
    /// already loading; otherwise discards the previous cycle's
    /// result and message and moves to Loading.
    pub fn begin(&mut self) -> Option<SubmissionToken> {
        if matches!(self.phase, Phase::Loading) {
            return None;
        }

        self.generation += 1;
        self.phase = Phase::Loading;
        self.message = None;
        Some(SubmissionToken(self.generation))
    }

    /// Settle the cycle identified by `token` with a result and an
    /// optional summary message. Returns false for a stale token.
    pub fn succeed(&mut self, token: SubmissionToken, value: T, message: Option<String>) -> bool {
        if token.0 != self.generation {
            return false;
        }

        self.phase = Phase::Success(value);
        self.message = message;
        true
    }

    /// Settle the cycle identified by `token` with a failure message,
    /// leaving no result installed. Returns false for a stale token.
    pub fn fail(&mut self, token: SubmissionToken, message: impl Into<String>) -> bool {
        if token.0 != self.generation {
            return false;
        }

        self.phase = Phase::Failure;
        self.message = Some(message.into());
        true
    }

    /// Reject input before any request is made: installs an inline
    /// message without starting a cycle. No-op while loading.
    pub fn reject(&mut self, message: impl Into<String>) {
        if matches!(self.phase, Phase::Loading) {
            return;
        }
        self.message = Some(message.into());
    }

    /// Reset to Idle and discard all transient state. Outstanding
    /// tokens become stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
        self.message = None;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Success(_) | Phase::Failure)
    }

    /// The installed result, if the last cycle succeeded.
    pub fn result(&self) -> Option<&T> {
        match &self.phase {
            Phase::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl<T> Default for SubmissionSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_guards_concurrent_submissions() {
        let mut session: SubmissionSession<Vec<String>> = SubmissionSession::new();
        let token = session.begin().unwrap();
        assert!(session.is_loading());
        assert!(session.begin().is_none());

        session.succeed(token, vec!["a".to_string()], None);
        assert!(session.begin().is_some());
    }

    #[test]
    fn test_success_installs_result_and_message() {
        let mut session = SubmissionSession::new();
        let token = session.begin().unwrap();
        assert!(session.succeed(token, 3usize, Some("Processed 3 records".to_string())));
        assert_eq!(session.result(), Some(&3));
        assert_eq!(session.message(), Some("Processed 3 records"));
    }

    #[test]
    fn test_failure_leaves_no_result() {
        let mut session: SubmissionSession<usize> = SubmissionSession::new();
        let token = session.begin().unwrap();
        session.fail(token, "Backend error");
        assert!(session.result().is_none());
        assert_eq!(session.message(), Some("Backend error"));
    }

    #[test]
    fn test_new_cycle_clears_previous_result() {
        let mut session = SubmissionSession::new();
        let token = session.begin().unwrap();
        session.succeed(token, 1usize, Some("done".to_string()));

        session.begin().unwrap();
        assert!(session.result().is_none());
        assert!(session.message().is_none());
    }

    #[test]
    fn test_stale_token_is_a_no_op() {
        let mut session = SubmissionSession::new();
        let stale = session.begin().unwrap();
        session.clear();

        assert!(!session.succeed(stale, 9usize, None));
        assert!(!session.fail(stale, "late failure"));
        assert!(session.result().is_none());
        assert!(session.message().is_none());
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut session = SubmissionSession::new();
        let token = session.begin().unwrap();
        session.succeed(token, 5usize, Some("ok".to_string()));

        session.clear();
        assert!(!session.is_loading());
        assert!(!session.is_settled());
        assert!(session.result().is_none());
        assert!(session.message().is_none());
    }

    #[test]
    fn test_reject_installs_message_without_cycle() {
        let mut session: SubmissionSession<usize> = SubmissionSession::new();
        session.reject("Enter a PRB ID or Link");
        assert!(!session.is_loading());
        assert_eq!(session.message(), Some("Enter a PRB ID or Link"));
    }
}
