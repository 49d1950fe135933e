/// Janggi domain types and rules.
pub mod janggi;
/// Assorted utilities.
pub mod util;
