//! Evaluation prompt API library
//!
//! Builds the messages for LLM applicant evaluations from a small library of
//! placeholder templates, and reports which keyword the model's verdict line
//! will carry. The HTTP layer serves the same functionality as a preview
//! service; it never calls a model itself.

pub mod api;
pub mod config;
pub mod prompts;
