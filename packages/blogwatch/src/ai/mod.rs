//! Generative AI boundary - summarization client, prompts, and
//! response parsing.

mod anthropic;
pub mod prompts;
pub mod tags;

pub use anthropic::{AnthropicSummarizer, DEFAULT_MODEL};
