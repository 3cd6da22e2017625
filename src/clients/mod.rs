pub mod dodona_client;
#[cfg(test)]
pub(crate) mod fake_client;

pub use dodona_client::{authorization_header, DodonaApi, DodonaClient};
