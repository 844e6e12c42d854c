//! Chiptone Melody Spec Library
//!
//! This crate provides the melody data model consumed by the synthesis
//! backend: notes, channels, envelopes, and named melodies, plus structural
//! validation and the built-in theme table.
//!
//! # Example
//!
//! ```
//! use chiptone_spec::{Channel, Melody, Note, Voice};
//! use chiptone_spec::validation::validate_melody;
//!
//! let melody = Melody::builder("ping")
//!     .seed(42)
//!     .voice(Voice::new(vec![
//!         Note::new(440.0, 200.0, Channel::Square { duty: 0.5 }),
//!         Note::rest(100.0),
//!         Note::new(880.0, 150.0, Channel::Triangle),
//!     ]))
//!     .build();
//!
//! assert!(validate_melody(&melody).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`melody`]: core data types and the builder
//! - [`themes`]: built-in named melodies as declarative tables
//! - [`validation`]: structural validation
//! - [`error`]: error types

pub mod error;
pub mod melody;
pub mod themes;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{MelodyError, ValidationError};
pub use melody::{Channel, Envelope, Melody, MelodyBuilder, Note, Voice};
pub use themes::{builtin, THEME_NAMES};
pub use validation::validate_melody;
