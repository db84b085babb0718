//! # agri-ai
//!
//! Rule-based agriculture advisory service for Philippine farmers, with an
//! optional upstream language model in front of the local templates.
//!
//! ## Modules
//!
//! - [`classifier`] - Keyword routing of concerns and prompts to topics
//! - [`render`] - Advisory templates
//! - [`knowledge`] - Static crop and region knowledge base
//! - [`responder`] - Local, remote and fallback responders
//! - [`assistant`] - Facade used by the CLI and the server
//! - [`server`] - HTTP API
//! - [`config`] - Advisor and LLM configuration
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agri_ai::{AgriAssistant, FarmingContext};
//!
//! #[tokio::main]
//! async fn main() {
//!     let assistant = AgriAssistant::local();
//!     let ctx = FarmingContext::new("Rice", "Central Luzon", "Wet season", "Clay", "Water Management");
//!     println!("{}", assistant.get_advice(ctx).await);
//! }
//! ```

pub mod assistant;
pub mod classifier;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod prompts;
pub mod render;
pub mod responder;
pub mod server;

pub use assistant::AgriAssistant;
pub use config::{AdvisorConfig, LlmConfig};
pub use error::{AgriError, Result};
pub use models::{AdviceRequest, ConversationTopic, FarmingContext, Topic};
