pub mod monitor;
pub mod submission_ctx;
pub mod submission_flow;

pub use monitor::{MonitorHandle, MonitorState, PollOutcome, SubmissionMonitor};
pub use submission_ctx::SubmissionCtx;
pub use submission_flow::{AttemptOutcome, SubmissionFlow};
