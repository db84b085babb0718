//! Prompt module for the upstream model.
//!
//! This module provides the instructions sent to an OpenAI-compatible model
//! when AI mode is enabled.

pub mod advisor;

pub use advisor::*;
