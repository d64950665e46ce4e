use teloxide::prelude::*;

use crate::planner::StudyPlanner;
use crate::utils::logging::{log_command_start, log_command_success};

pub async fn handle_schedule(
    bot: Bot,
    msg: Message,
    planner: &StudyPlanner,
) -> ResponseResult<()> {
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.as_ref()).map_or("unknown", |v| v);
    let chat_id = msg.chat.id.0;

    log_command_start("schedule", username, user_id, chat_id, None);

    bot.send_message(msg.chat.id, planner.schedule_overview()).await?;

    log_command_success("schedule", username, user_id, chat_id, None);
    Ok(())
}
