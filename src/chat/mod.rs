//! Keyword chatbot
//!
//! Free text in, a filtered service listing and a one-line reply out. The
//! classifier is a fixed rule table, not a language model.

pub mod handlers;
pub mod rules;

pub use handlers::{chat, ChatRequest, ChatResponse};
pub use rules::{classify, Intent};
