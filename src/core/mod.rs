//! Core reconciliation pipeline: input classification, result
//! reconciliation, and the submission session state machine.

pub mod classify;
pub mod reconcile;
pub mod session;

pub use classify::{ClassifiedBatch, LookupMode, classify, split_entries};
pub use reconcile::{RecordRow, ResolutionRow};
pub use session::{SubmissionSession, SubmissionToken};
