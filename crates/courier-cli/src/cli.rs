/*
[INPUT]:  Process arguments and environment
[OUTPUT]: Parsed command line for the courier binary
[POS]:    CLI layer - argument definitions
[UPDATE]: When changing CLI flags
*/

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "courier", version, about = "Send messages through Discord-style webhooks")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,
    /// Validate and print the payload without sending
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a webhook with the given message
    Send(SendArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SendArgs {
    /// Webhook execute URL
    #[arg(long, env = "COURIER_WEBHOOK_URL", value_name = "URL")]
    pub url: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    /// Send over-long content as a message.txt attachment
    #[arg(long)]
    pub fallback: bool,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long = "avatar-url", value_name = "URL")]
    pub avatar_url: Option<String>,
    #[arg(long)]
    pub tts: bool,
    /// Attach a file (repeatable)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,
    /// Mark every attached file as a spoiler
    #[arg(long)]
    pub spoiler: bool,
    /// Suppress push and desktop notifications
    #[arg(long)]
    pub silent: bool,
    #[arg(long = "suppress-embeds")]
    pub suppress_embeds: bool,
    #[arg(long = "thread-id", value_name = "ID")]
    pub thread_id: Option<String>,
    /// Create a forum thread with this name
    #[arg(long = "thread-name", value_name = "NAME")]
    pub thread_name: Option<String>,
    /// Wait for and print the created message
    #[arg(long)]
    pub wait: bool,
}
