use anyhow::Result;
use chrono::{NaiveTime, Timelike};
use std::sync::Arc;
use teloxide::prelude::*;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::planner::StudyPlanner;
use crate::services::alerts;
use crate::utils::datetime::{format_hhmm, today};

/// Pushes the daily study plan to the admin chat at a fixed local time.
///
/// The push respects the `notifications` toggle at fire time, so flipping it
/// off silences the service without restarting anything.
pub struct NotifierService {
    bot: Bot,
    planner: Arc<StudyPlanner>,
    admin_chat: Option<ChatId>,
    notify_time: NaiveTime,
    scheduler: JobScheduler,
}

impl NotifierService {
    pub async fn new(
        bot: Bot,
        planner: Arc<StudyPlanner>,
        admin_chat: Option<ChatId>,
        notify_time: NaiveTime,
    ) -> Result<Self> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            planner,
            admin_chat,
            notify_time,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<()> {
        let cron = format!(
            "0 {} {} * * *",
            self.notify_time.minute(),
            self.notify_time.hour()
        );

        let bot = self.bot.clone();
        let planner = self.planner.clone();
        let admin_chat = self.admin_chat;

        let daily_job = Job::new_async(cron.as_str(), move |_uuid, _l| {
            let bot = bot.clone();
            let planner = planner.clone();
            Box::pin(async move {
                if let Err(e) = push_daily_plan(&bot, planner, admin_chat).await {
                    tracing::error!("Failed to push daily plan: {}", e);
                    alerts::report_fault(
                        &bot,
                        admin_chat,
                        &format!("Daily plan push failed: {e}"),
                    )
                    .await;
                }
            })
        })?;

        self.scheduler.add(daily_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Notifier service started - daily plan at {}",
            format_hhmm(self.notify_time)
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn push_now(&self) -> Result<()> {
        push_daily_plan(&self.bot, self.planner.clone(), self.admin_chat).await
    }
}

async fn push_daily_plan(
    bot: &Bot,
    planner: Arc<StudyPlanner>,
    admin_chat: Option<ChatId>,
) -> Result<()> {
    let Some(chat) = admin_chat else {
        tracing::debug!("No admin chat configured, skipping daily plan push");
        return Ok(());
    };

    // Checked before composing so a silenced push never consumes a topic.
    if !planner.settings().await.notifications {
        tracing::debug!("Notifications disabled, skipping daily plan push");
        return Ok(());
    }

    let plan = planner.today_plan(today()).await;
    bot.send_message(chat, plan.to_message()).await?;

    tracing::info!("Daily plan pushed to chat {}", chat.0);
    Ok(())
}
