//! Helpers behind the `iq-cli` binary, exposed for integration tests.

pub mod utils;
