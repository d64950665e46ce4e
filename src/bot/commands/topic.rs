use teloxide::prelude::*;

use crate::planner::StudyPlanner;
use crate::utils::logging::{log_command_start, log_command_success};

pub async fn handle_next(
    bot: Bot,
    msg: Message,
    planner: &StudyPlanner,
) -> ResponseResult<()> {
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.as_ref()).map_or("unknown", |v| v);
    let chat_id = msg.chat.id.0;

    log_command_start("next", username, user_id, chat_id, None);

    let topic = planner.next_topic().await;
    bot.send_message(msg.chat.id, format!("Next study topic:\n🎯 {topic}"))
        .await?;

    log_command_success("next", username, user_id, chat_id, Some(topic.as_str()));
    Ok(())
}
