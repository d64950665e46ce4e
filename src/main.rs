//! # Study Scheduler Bot Main Entry Point
//!
//! This is the main entry point for the Study Scheduler Bot application.
//! It initializes logging, loads configuration, builds the study planner,
//! starts the notifier service, and runs the Telegram bot.

use anyhow::Result;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod planner;
mod services;
mod utils;

use crate::bot::handlers::BotHandler;
use crate::config::Config;
use crate::planner::StudyPlanner;
use crate::services::health::HealthService;
use crate::services::notifier::NotifierService;
use crate::utils::datetime::format_hhmm;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "study_scheduler_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Study Scheduler Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - HTTP Port: {}, daily plan at {}",
        config.http_port,
        format_hhmm(config.notify_time)
    );

    // Build the planner context
    info!("Building study planner...");
    let planner = Arc::new(StudyPlanner::with_builtin_data()?);
    info!(
        "Study planner ready: {} schedule entries, {} topics",
        planner.schedule().len(),
        planner.topic_count().await
    );

    let admin_chat = config.admin_chat_id.map(ChatId);

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(planner.clone(), admin_chat);
    info!("Telegram bot initialized successfully");

    // Initialize and start notifier service
    info!("Initializing notifier service...");
    let mut notifier = match NotifierService::new(
        bot.clone(),
        planner.clone(),
        admin_chat,
        config.notify_time,
    )
    .await
    {
        Ok(service) => {
            info!("Notifier service initialized successfully");
            service
        }
        Err(e) => {
            tracing::error!("Failed to create notifier service: {}", e);
            return Err(anyhow::anyhow!("Failed to create notifier service: {}", e));
        }
    };

    if let Err(e) = notifier.start().await {
        tracing::error!("Failed to start notifier service: {}", e);
        services::alerts::report_fault(
            &bot,
            admin_chat,
            &format!("Notifier service failed to start: {e}"),
        )
        .await;
    } else {
        info!("Notifier service started successfully");
    }

    // Initialize health service
    let health_service = HealthService::new(planner.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        let storage: std::sync::Arc<InMemStorage<()>> = InMemStorage::new().into();
        Dispatcher::builder(bot, handler.schema())
            .dependencies(dptree::deps![storage])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    // Stop notifier service on shutdown
    if let Err(e) = notifier.stop().await {
        tracing::warn!("Error stopping notifier service: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
