/// Wall-clock time parsing, formatting, and checked arithmetic
pub mod datetime;
/// Structured command and system event logging helpers
pub mod logging;
