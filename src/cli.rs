//! CLI interface and demo selection

use clap::{Parser, Subcommand};

/// LLM Playground - colorful interactive demos for OpenAI-compatible models
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Demo to run directly; omit to pick from the interactive menu
    #[command(subcommand)]
    pub demo: Option<Demo>,

    /// Enable debug logging
    #[arg(short, long, env = "OPENAI_DEBUG")]
    pub debug: bool,

    /// Override the model to use
    #[arg(short, long, env = "OPENAI_MODEL")]
    pub model: Option<String>,

    /// Override the base URL for the API (e.g., https://api.openai.com or custom endpoint)
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,

    /// Override maximum tokens
    #[arg(short = 't', long, env = "OPENAI_MAX_TOKENS")]
    pub max_tokens: Option<u32>,
}

/// The demos on offer
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Demo {
    /// Hold an interactive conversation with streamed replies
    Chat,

    /// Plan a team event from a templated one-shot prompt
    Planner,

    /// Hear a streamed story told from another year
    Storyteller,
}
