pub mod schedule;
pub mod settings;
pub mod today;
pub mod topic;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Study Scheduler Bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show today's study plan")]
    Today,
    #[command(description = "Get the next study topic")]
    Next,
    #[command(description = "Show the work schedule")]
    Schedule,
    #[command(description = "Study and notification settings")]
    Settings,
}
