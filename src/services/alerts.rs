use teloxide::prelude::*;

/// Best-effort operator notice to the configured admin chat.
///
/// A delivery failure is logged and dropped; alerting must never produce a
/// secondary fault.
pub async fn report_fault(bot: &Bot, admin_chat: Option<ChatId>, text: &str) {
    let Some(chat) = admin_chat else {
        return;
    };
    if let Err(e) = bot.send_message(chat, format!("⚠️ {text}")).await {
        tracing::warn!("Could not deliver operator notice: {}", e);
    }
}
