//! Voice input and output services for Sahay Engine
//!
//! Speech capture is a two-state machine (idle, listening) over an injected
//! recognition capability; platforms without one degrade to a notification
//! instead of crashing. Speech output has two independent paths: a local
//! synthesis wrapper over an injected backend with cancel-before-speak
//! semantics, and a remote provider that forwards text to a third-party
//! voice-synthesis API and returns raw audio.
//!
//! Recognized languages and voices come from fixed mapping tables in
//! [`locale`], defaulting to a generic locale when unmapped.

pub mod capture;
pub mod config;
pub mod error;
pub mod locale;
pub mod remote;
pub mod synthesis;

pub use capture::*;
pub use config::*;
pub use error::*;
pub use locale::*;
pub use remote::*;
pub use synthesis::*;
