use teloxide::prelude::*;

use crate::planner::{DailyPlan, StudyPlanner};
use crate::utils::datetime::today;
use crate::utils::logging::{log_command_start, log_command_success};

pub async fn handle_today(
    bot: Bot,
    msg: Message,
    planner: &StudyPlanner,
) -> ResponseResult<()> {
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.as_ref()).map_or("unknown", |v| v);
    let chat_id = msg.chat.id.0;

    log_command_start("today", username, user_id, chat_id, None);

    let plan = planner.today_plan(today()).await;
    let outcome = match &plan {
        DailyPlan::Rest => "rest day",
        DailyPlan::Study { .. } => "study day",
    };

    bot.send_message(msg.chat.id, plan.to_message()).await?;

    log_command_success("today", username, user_id, chat_id, Some(outcome));
    Ok(())
}
