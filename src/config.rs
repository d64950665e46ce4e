use anyhow::{anyhow, Result};
use chrono::NaiveTime;
use std::env;

use crate::utils::datetime::parse_hhmm;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub admin_chat_id: Option<i64>,
    pub http_port: u16,
    pub notify_time: NaiveTime,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let admin_chat_id = match env::var("ADMIN_CHAT_ID") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| anyhow!("Invalid ADMIN_CHAT_ID"))?,
            ),
            _ => None,
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let notify_str = env::var("NOTIFY_TIME")
            .unwrap_or_else(|_| "08:00".to_string());
        let notify_str = if notify_str.trim().is_empty() {
            "08:00".to_string()
        } else {
            notify_str
        };
        let notify_time = parse_hhmm(&notify_str)
            .map_err(|_| anyhow!("Invalid NOTIFY_TIME, expected HH:MM"))?;

        Ok(Config {
            telegram_bot_token: token,
            admin_chat_id,
            http_port,
            notify_time,
        })
    }
}
