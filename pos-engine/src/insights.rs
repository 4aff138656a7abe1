//! AI business-summary collaborator
//!
//! Accepts a plain-text business summary (never structured order data) and
//! returns free-form analyst text, or a fixed fallback string on any
//! failure. Fire-and-forget with respect to the core: no retries, and no
//! outcome here can touch order or cart state.

use crate::analytics::SalesSummary;
use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Returned whenever the endpoint is unconfigured, unreachable, or
/// replies with anything we cannot use
pub const FALLBACK_INSIGHTS: &str =
    "Не удалось сгенерировать анализ. Проверьте соединение или API ключ.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Serialize)]
struct InsightsRequest<'a> {
    summary: &'a str,
}

#[derive(Debug, Deserialize)]
struct InsightsResponse {
    text: String,
}

/// HTTP client for the summary endpoint
#[derive(Debug, Clone)]
pub struct InsightsClient {
    api_url: Option<String>,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl InsightsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_url: config.insights_api_url.clone(),
            api_key: config.insights_api_key.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Generate analyst text for a plain-text summary
    ///
    /// Never returns an error: every failure collapses to
    /// [`FALLBACK_INSIGHTS`] so callers have nothing to handle.
    pub async fn generate(&self, summary: &str) -> String {
        let Some(url) = &self.api_url else {
            tracing::debug!("Insights endpoint not configured, returning fallback");
            return FALLBACK_INSIGHTS.to_string();
        };

        let mut request = self
            .client
            .post(url)
            .timeout(REQUEST_TIMEOUT)
            .json(&InsightsRequest { summary });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        match request.send().await {
            Ok(response) => match response.error_for_status() {
                Ok(response) => match response.json::<InsightsResponse>().await {
                    Ok(body) if !body.text.is_empty() => body.text,
                    Ok(_) => FALLBACK_INSIGHTS.to_string(),
                    Err(e) => {
                        tracing::warn!(error = %e, "Insights response was not usable");
                        FALLBACK_INSIGHTS.to_string()
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Insights endpoint returned an error status");
                    FALLBACK_INSIGHTS.to_string()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Insights request failed");
                FALLBACK_INSIGHTS.to_string()
            }
        }
    }
}

/// Render the plain-text report the manager view feeds to the client
pub fn build_business_summary(summary: &SalesSummary) -> String {
    let top_item = summary
        .top_products
        .first()
        .map(|p| p.name.as_str())
        .unwrap_or("N/A");
    let cook_time = summary
        .avg_cook_time_minutes
        .map(|m| format!("{m} min"))
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "Restaurant Daily Report:\n\
         - Revenue: {} RUB (Goal: {})\n\
         - Orders: {}\n\
         - Top Item: {}\n\
         - Avg Ticket: {} RUB\n\
         - Kitchen Speed: {}",
        summary.revenue,
        summary.revenue_target,
        summary.order_count,
        top_item,
        summary.average_ticket,
        cook_time,
    )
}
