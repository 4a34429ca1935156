/*
[INPUT]:  Send arguments merged over file configuration
[OUTPUT]: Built webhook message, dry-run payload or delivery result
[POS]:    Command layer - send subcommand
[UPDATE]: When the send command gains options
*/

use anyhow::{Context, Result};
use courier_webhook::{MessageFlags, Validate, Webhook, WebhookClient};
use tracing::info;

use crate::cli::SendArgs;
use crate::config::CourierConfig;

/// Build the message; flags take precedence over configuration values.
pub fn build_webhook(args: &SendArgs, config: &CourierConfig) -> Result<Webhook> {
    let url = args
        .url
        .as_deref()
        .or(config.webhook_url.as_deref())
        .context("webhook url missing: pass --url, set COURIER_WEBHOOK_URL or webhook_url in config")?;
    let mut webhook = Webhook::new(url).context("invalid webhook url")?;

    if let Some(content) = &args.content {
        if args.fallback {
            webhook.set_content_with_fallback(content.as_str());
        } else {
            webhook.set_content(content.as_str());
        }
    }
    if let Some(username) = args.username.as_ref().or(config.username.as_ref()) {
        webhook.set_username(username.as_str());
    }
    if let Some(avatar_url) = args.avatar_url.as_ref().or(config.avatar_url.as_ref()) {
        webhook.set_avatar_url(avatar_url.as_str());
    }
    if let Some(thread_id) = args.thread_id.as_ref().or(config.thread_id.as_ref()) {
        webhook.set_thread_id(thread_id.as_str());
    }
    if let Some(thread_name) = &args.thread_name {
        webhook.set_thread_name(thread_name.as_str());
    }

    for path in &args.files {
        webhook
            .add_attachment_from_path(path, args.spoiler)
            .with_context(|| format!("attach {}", path.display()))?;
    }

    webhook
        .set_tts(args.tts)
        .set_wait(args.wait || config.wait)
        .set_flag(MessageFlags::SUPPRESS_NOTIFICATIONS, args.silent)
        .set_flag(MessageFlags::SUPPRESS_EMBEDS, args.suppress_embeds);

    Ok(webhook)
}

/// Run the send command; returns text for stdout, if any.
pub async fn send(args: &SendArgs, config: &CourierConfig, dry_run: bool) -> Result<Option<String>> {
    let webhook = build_webhook(args, config)?;

    if dry_run {
        webhook.validate().context("invalid message")?;
        info!("dry-run requested; message validated");
        return webhook.to_json().map(Some).context("serialize payload");
    }

    let client = WebhookClient::with_config(config.client_config()).context("build http client")?;
    let message = client.execute(&webhook).await.context("execute webhook")?;

    match message {
        Some(message) => {
            info!(message_id = %message.id, "message created");
            serde_json::to_string_pretty(&message)
                .map(Some)
                .context("serialize created message")
        }
        None => {
            info!("message sent");
            Ok(None)
        }
    }
}
