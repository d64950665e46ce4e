use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::planner::{StudyPlanner, StudySettings};
use crate::utils::logging::{log_command_start, log_command_success};

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Renders the settings text and keyboard for the current snapshot.
///
/// The min/max time rows are display-only placeholders; their buttons are
/// answered as "coming soon" by the callback handler.
pub fn settings_view(settings: &StudySettings) -> (String, InlineKeyboardMarkup) {
    let text = format!(
        "⚙️ Study settings:\n\n\
        🔸 Morning study: {}\n\
        🔸 Evening study: {}\n\
        🔸 Min time: {} min\n\
        🔸 Max time: {} min\n\
        🔸 Notifications: {}",
        on_off(settings.morning_study),
        on_off(settings.evening_study),
        settings.min_study_minutes,
        settings.max_study_minutes,
        on_off(settings.notifications),
    );

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("🌅 Morning study", "settings:morning_study")],
        vec![InlineKeyboardButton::callback("🌃 Evening study", "settings:evening_study")],
        vec![InlineKeyboardButton::callback("⏱ Minimum time", "settings:min_time")],
        vec![InlineKeyboardButton::callback("⏱ Maximum time", "settings:max_time")],
        vec![InlineKeyboardButton::callback("🔔 Notifications", "settings:notifications")],
        vec![InlineKeyboardButton::callback("❌ Close", "settings:close")],
    ]);

    (text, keyboard)
}

pub async fn handle_settings(
    bot: Bot,
    msg: Message,
    planner: &StudyPlanner,
) -> ResponseResult<()> {
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.as_ref()).map_or("unknown", |v| v);
    let chat_id = msg.chat.id.0;

    log_command_start("settings", username, user_id, chat_id, None);

    let settings = planner.settings().await;
    let (text, keyboard) = settings_view(&settings);
    bot.send_message(msg.chat.id, text)
        .reply_markup(keyboard)
        .await?;

    log_command_success("settings", username, user_id, chat_id, None);
    Ok(())
}
