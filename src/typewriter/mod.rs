//! Animated title typewriter.
//!
//! Cycles through a fixed list of phrases, typing each one character by
//! character, pausing with a blinking cursor, deleting it, pausing again, and
//! moving on to the next phrase.
//!
//! - [`config`]: millisecond timings converted to tick counts
//! - [`machine`]: the pure per-tick state transition
//! - [`engine`]: the timer-driven wrapper used by the application state

pub mod config;
pub mod engine;
pub mod machine;

pub use config::{Timings, TypewriterConfig};
pub use engine::{TickTimer, Typewriter};
pub use machine::{AnimationState, Phase};
