//! Message delivery for the contact form
//!
//! The form only sees the `MessageDelivery` trait: one call that resolves or
//! rejects. There is no retry, queue or persistence behind it.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::config::DeliveryConfig;
use crate::error::DeliveryError;

/// Placeholder key shipped in the default configuration
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

/// The four form fields plus the fixed destination address.
/// Field names follow the template variables of the delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

#[async_trait]
pub trait MessageDelivery: Send + Sync + std::fmt::Debug {
    async fn send(&self, message: OutgoingMessage) -> Result<(), DeliveryError>;
}

/// Request body of the EmailJS REST endpoint
#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a OutgoingMessage,
}

/// Delivers through the hosted EmailJS service
#[derive(Debug, Clone)]
pub struct EmailJsDelivery {
    client: reqwest::Client,
    config: DeliveryConfig,
}

impl EmailJsDelivery {
    pub fn new(config: DeliveryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn check_configured(&self) -> Result<(), DeliveryError> {
        let key = self.config.public_key.trim();
        if key.is_empty() || key == PLACEHOLDER_PUBLIC_KEY {
            return Err(DeliveryError::NotConfigured("missing EmailJS public key"));
        }
        if self.config.service_id.trim().is_empty() || self.config.template_id.trim().is_empty() {
            return Err(DeliveryError::NotConfigured("missing EmailJS service or template id"));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageDelivery for EmailJsDelivery {
    async fn send(&self, message: OutgoingMessage) -> Result<(), DeliveryError> {
        self.check_configured()?;

        let body = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: &message,
        };

        tracing::info!(endpoint = %self.config.endpoint, "📨 sending contact message");

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("✅ contact message delivered");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "delivery rejected");
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Run one delivery, tagging the outcome with the submission ticket
pub async fn deliver(
    delivery: Arc<dyn MessageDelivery>,
    ticket: u64,
    message: OutgoingMessage,
) -> (u64, Result<(), DeliveryError>) {
    let result = delivery.send(message).await;
    if let Err(err) = &result {
        tracing::error!(ticket, "delivery failed: {}", err);
    }
    (ticket, result)
}
