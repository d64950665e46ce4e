/// Bot command definitions and per-command handlers
pub mod commands;
/// Dispatcher schema, message and callback handlers
pub mod handlers;
