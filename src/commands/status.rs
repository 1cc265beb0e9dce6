//! Service health check command.

use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let client = super::client()?;

    match client.health().await {
        Ok(health) => {
            msg_success!(Message::ServiceHealthy {
                status: health.status,
                version: health.version,
            });
            Ok(())
        }
        Err(err) => {
            msg_error!(Message::ServiceUnhealthy(err.to_string()));
            Err(err.into())
        }
    }
}
