pub mod loaders;
pub mod status;
pub mod submission;

pub use loaders::{load_document, ActiveDocument};
pub use status::SubmissionStatus;
pub use submission::{
    ExerciseInformation, SubmissionEnvelope, SubmissionLink, SubmissionReceipt, SubmissionRecord,
};
