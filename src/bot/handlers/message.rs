use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::planner::StudyPlanner;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    planner: Arc<StudyPlanner>,
    admin_chat: Option<ChatId>,
) -> ResponseResult<()> {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            let mut text = String::from(
                "👋 Welcome to Study Scheduler Bot!\n\n\
                I plan study sessions around your work shifts and suggest what to learn next.\n\n\
                Available commands:\n\
                /today - Today's study plan\n\
                /next - Next study topic\n\
                /schedule - Show the work schedule\n\
                /settings - Study and notification settings",
            );
            if admin_chat == Some(msg.chat.id) {
                text.push_str("\n\n⚙️ Daily plan notifications are delivered to this chat.");
            }
            bot.send_message(msg.chat.id, text).await?;
        }
        Command::Today => {
            crate::bot::commands::today::handle_today(bot, msg, &planner).await?;
        }
        Command::Next => {
            crate::bot::commands::topic::handle_next(bot, msg, &planner).await?;
        }
        Command::Schedule => {
            crate::bot::commands::schedule::handle_schedule(bot, msg, &planner).await?;
        }
        Command::Settings => {
            crate::bot::commands::settings::handle_settings(bot, msg, &planner).await?;
        }
    }
    Ok(())
}
