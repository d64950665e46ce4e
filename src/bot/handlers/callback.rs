use std::sync::Arc;
use teloxide::prelude::*;

use crate::bot::commands::settings::settings_view;
use crate::planner::{SettingToggle, StudyPlanner};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    planner: Arc<StudyPlanner>,
) -> ResponseResult<()> {
    let user_id = q.from.id.0;
    let username = q.from.username.as_ref().map_or("unknown", |v| v);

    let Some(data) = q.data.clone() else {
        bot.answer_callback_query(q.id)
            .text("Invalid callback data format")
            .await?;
        return Ok(());
    };

    tracing::info!(
        "Callback received: '{}' from user {} ({})",
        data, username, user_id
    );

    let Some(setting) = data.strip_prefix("settings:") else {
        bot.answer_callback_query(q.id).text("Unknown action").await?;
        return Ok(());
    };

    // The three functional toggles form a closed enum; everything else is
    // either a display placeholder or the close button.
    if let Some(toggle) = SettingToggle::from_key(setting) {
        let updated = planner.toggle(toggle).await;
        let state = if toggle.get(&updated) { "on" } else { "off" };

        bot.answer_callback_query(q.id)
            .text(format!("{} turned {}", toggle.label(), state))
            .await?;

        if let Some(message) = q.message {
            let (text, keyboard) = settings_view(&updated);
            bot.edit_message_text(message.chat.id, message.id, text)
                .reply_markup(keyboard)
                .await?;
        }
        return Ok(());
    }

    match setting {
        "min_time" => {
            bot.answer_callback_query(q.id)
                .text("⏱ Minimum study time settings will be available in a future update!")
                .await?;
        }
        "max_time" => {
            bot.answer_callback_query(q.id)
                .text("⏱ Maximum study time settings will be available in a future update!")
                .await?;
        }
        "close" => {
            bot.answer_callback_query(q.id)
                .text("Settings closed")
                .await?;

            if let Some(message) = q.message {
                bot.delete_message(message.chat.id, message.id).await?;
            }
        }
        _ => {
            bot.answer_callback_query(q.id)
                .text("Unknown setting")
                .await?;
        }
    }

    Ok(())
}
