//! LLM Playground Library - interactive model demos with colored console output
//!
//! The interesting piece is [`console::Presenter`], which keeps terminal
//! colors consistent across prompts, echoed input, errors, and streamed
//! responses. [`streaming::forward_stream`] relays provider token streams
//! into it, and [`demos`] wires both around an OpenAI-compatible client.

pub mod api;
pub mod cli;
pub mod config;
pub mod console;
pub mod demos;
pub mod error;
pub mod streaming;

pub use error::{AppError, Result};
