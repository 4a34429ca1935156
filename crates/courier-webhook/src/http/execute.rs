/*
[INPUT]:  Validated webhook message
[OUTPUT]: Delivered message (or typed error) after rate-limit handling
[POS]:    HTTP layer - execute-webhook endpoint
[UPDATE]: When request encoding, retry policy or response handling changes
*/

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use tracing::{debug, info, warn};

use crate::http::{Result, WebhookClient, WebhookError};
use crate::types::{ApiErrorBody, RateLimitBody, Webhook, WebhookMessage};
use crate::validation::Validate;

const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(1);
const MAX_RETRY_AFTER: Duration = Duration::from_secs(300);

/// Delay and scope of a 429 response.
struct RateLimit {
    retry_after: Duration,
    global: bool,
}

impl WebhookClient {
    /// Execute the webhook
    ///
    /// POST {webhook_url}?wait={wait}&thread_id={thread_id}&with_components={bool}
    ///
    /// JSON body without attachments, `multipart/form-data` with them. Returns the
    /// created message when the endpoint sends one back (`wait=true`).
    pub async fn execute(&self, webhook: &Webhook) -> Result<Option<WebhookMessage>> {
        webhook.validate()?;

        let url = execute_url(webhook);
        let payload = webhook.to_json()?;
        debug!(
            host = url.host_str().unwrap_or_default(),
            attachments = webhook.attachments.len(),
            components = webhook.components.len(),
            embeds = webhook.embeds.len(),
            "executing webhook"
        );

        let mut attempt = 0;
        loop {
            let builder = self.build_request(url.clone(), webhook, &payload)?;
            let response = builder.send().await?;

            if response.status() != StatusCode::TOO_MANY_REQUESTS {
                return handle_response(response).await;
            }

            let limit = rate_limit(response).await;
            if attempt >= self.config().max_retries {
                return Err(WebhookError::RateLimit {
                    retry_after: limit.retry_after,
                    global: limit.global,
                });
            }

            attempt += 1;
            warn!(
                attempt,
                retry_after_ms = limit.retry_after.as_millis() as u64,
                global = limit.global,
                "rate limited, retrying"
            );
            tokio::time::sleep(limit.retry_after).await;
        }
    }

    fn build_request(&self, url: Url, webhook: &Webhook, payload: &str) -> Result<RequestBuilder> {
        let builder = self.post(url);

        if webhook.attachments.is_empty() {
            return Ok(builder
                .header(CONTENT_TYPE, "application/json")
                .body(payload.to_string()));
        }

        let mut form = Form::new().part(
            "payload_json",
            Part::text(payload.to_string()).mime_str("application/json")?,
        );
        for (id, attachment) in webhook.attachments.iter().enumerate() {
            let part = Part::bytes(attachment.content.clone())
                .file_name(attachment.filename.clone())
                .mime_str(&attachment.content_type())?;
            form = form.part(format!("files[{id}]"), part);
        }
        Ok(builder.multipart(form))
    }
}

/// Webhook URL with the execution's query options appended.
pub(crate) fn execute_url(webhook: &Webhook) -> Url {
    let mut url = webhook.url().clone();
    let query = webhook.query();
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &query {
            pairs.append_pair(key, value);
        }
    }
    url
}

async fn handle_response(response: Response) -> Result<Option<WebhookMessage>> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            info!(status = status.as_u16(), "webhook delivered");
            return Ok(None);
        }
        let message: WebhookMessage = serde_json::from_str(&body)
            .map_err(|err| WebhookError::InvalidResponse(format!("unexpected body: {err}")))?;
        info!(status = status.as_u16(), message_id = %message.id, "webhook delivered");
        return Ok(Some(message));
    }

    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(error) => Err(WebhookError::api_error(status, error.code, error.message)),
        Err(_) => {
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                body
            };
            Err(WebhookError::api_error(status, 0, message))
        }
    }
}

/// Prefer the body's fractional `retry_after`, fall back to the header.
async fn rate_limit(response: Response) -> RateLimit {
    let header = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<f64>().ok());

    let body = response
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<RateLimitBody>(&text).ok());

    let seconds = body.as_ref().map(|body| body.retry_after).or(header);

    RateLimit {
        retry_after: retry_delay(seconds),
        global: body.is_some_and(|body| body.global),
    }
}

/// Unusable values fall back to the default, long waits are capped.
fn retry_delay(seconds: Option<f64>) -> Duration {
    match seconds {
        Some(secs) if secs.is_finite() && secs >= 0.0 => {
            Duration::from_secs_f64(secs.min(MAX_RETRY_AFTER.as_secs_f64()))
        }
        _ => DEFAULT_RETRY_AFTER,
    }
}
