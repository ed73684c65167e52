//! Symptom chat relay for Sahay Engine
//!
//! Forwards a user message, the active language, the prior conversation, and
//! the cached nearest-hospital shortlist to a chat-completion gateway, and
//! relays the assistant's reply verbatim. The system instruction pins the
//! reply language and the required answer structure (possible causes, first
//! aid, when to seek urgent care, the two nearest hospitals).
//!
//! Upstream failures are translated into three classes: rate limiting
//! (retry later, never retried automatically), payment/quota exhaustion
//! (configuration failure), and everything else (generic service error).
//! A missing gateway credential fails the request before any network call.

pub mod config;
pub mod error;
pub mod gateway;
pub mod message;
pub mod prompt;
pub mod service;

pub use config::*;
pub use error::*;
pub use gateway::*;
pub use message::*;
pub use prompt::*;
pub use service::*;
