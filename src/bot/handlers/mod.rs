pub mod callback;
pub mod message;

use std::sync::Arc;
use teloxide::{
    dispatching::{dialogue, UpdateHandler},
    prelude::*,
};

use crate::planner::StudyPlanner;

pub struct BotHandler {
    pub planner: Arc<StudyPlanner>,
    pub admin_chat: Option<ChatId>,
}

impl BotHandler {
    pub fn new(planner: Arc<StudyPlanner>, admin_chat: Option<ChatId>) -> Self {
        Self { planner, admin_chat }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let planner = self.planner.clone();
        let planner_callback = self.planner.clone();
        let admin_chat = self.admin_chat;

        dialogue::enter::<Update, teloxide::dispatching::dialogue::InMemStorage<()>, (), _>()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let planner = planner.clone();
                        async move {
                            message::command_handler(bot, msg, cmd, planner, admin_chat).await
                        }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |bot, q| {
                let planner = planner_callback.clone();
                async move { callback::callback_handler(bot, q, planner).await }
            }))
    }
}
