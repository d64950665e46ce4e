/// Best-effort operator fault notices
pub mod alerts;
/// HTTP health check endpoints
pub mod health;
/// Daily study plan notifications
pub mod notifier;
