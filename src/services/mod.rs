pub mod link_extractor;
pub mod reporter;
pub mod status_message;
pub mod submission_builder;

pub use link_extractor::{LinkExtractor, LinkPattern, DEFAULT_LINK_PATTERN};
pub use reporter::{ConsoleReporter, Reporter};
pub use status_message::{describe_result, map_status_to_message, GENERIC_EXERCISE_NAME};
pub use submission_builder::{build_from_link, build_submission};
