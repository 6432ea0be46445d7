//! Typewriter timing configuration.
//!
//! Durations are given in milliseconds and converted once, at construction,
//! into whole animation ticks with `ceil(duration / tick_interval)`.

use crate::domain::error::{FolioError, Result};

/// Default animation tick interval in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 50;
/// Default cursor blink period in milliseconds.
pub const DEFAULT_CURSOR_FLASH_MS: u64 = 500;
/// Default pause after a phrase is fully typed.
pub const DEFAULT_WAIT_AFTER_TYPING_MS: u64 = 1500;
/// Default pause after a phrase is fully deleted.
pub const DEFAULT_WAIT_AFTER_DELETING_MS: u64 = 1000;
/// Default delay between typed characters.
pub const DEFAULT_TYPING_MS: u64 = 100;
/// Default delay between deleted characters.
pub const DEFAULT_DELETING_MS: u64 = 50;
/// Default upper bound of the random extra delay added after each typed character.
pub const DEFAULT_TYPING_JITTER_TICKS: u32 = 1;

/// Millisecond durations as supplied by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub tick_ms: u64,
    pub typing_ms: u64,
    pub deleting_ms: u64,
    pub wait_after_typing_ms: u64,
    pub wait_after_deleting_ms: u64,
    pub cursor_flash_ms: u64,
    pub typing_jitter_ticks: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            typing_ms: DEFAULT_TYPING_MS,
            deleting_ms: DEFAULT_DELETING_MS,
            wait_after_typing_ms: DEFAULT_WAIT_AFTER_TYPING_MS,
            wait_after_deleting_ms: DEFAULT_WAIT_AFTER_DELETING_MS,
            cursor_flash_ms: DEFAULT_CURSOR_FLASH_MS,
            typing_jitter_ticks: DEFAULT_TYPING_JITTER_TICKS,
        }
    }
}

/// Validated typewriter configuration with tick counts precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterConfig {
    phrases: Vec<String>,
    tick_ms: u64,
    typing_ticks: u32,
    deleting_ticks: u32,
    wait_after_typing_ticks: u32,
    wait_after_deleting_ticks: u32,
    cursor_flash_ticks: u32,
    typing_jitter_ticks: u32,
}

impl TypewriterConfig {
    /// Builds a configuration from phrases and millisecond timings.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] when `phrases` is empty or the tick
    /// interval is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use zfolio::typewriter::{Timings, TypewriterConfig};
    ///
    /// let config = TypewriterConfig::new(vec!["Rustacean".into()], Timings::default())?;
    /// assert_eq!(config.typing_ticks(), 2);
    /// assert_eq!(config.wait_after_typing_ticks(), 30);
    /// # Ok::<(), zfolio::FolioError>(())
    /// ```
    pub fn new(phrases: Vec<String>, timings: Timings) -> Result<Self> {
        if phrases.is_empty() {
            return Err(FolioError::Config("typewriter needs at least one phrase".to_string()));
        }
        if timings.tick_ms == 0 {
            return Err(FolioError::Config("tick interval must be greater than zero".to_string()));
        }

        let ticks = |duration_ms: u64| to_ticks(duration_ms, timings.tick_ms);

        Ok(Self {
            phrases,
            tick_ms: timings.tick_ms,
            typing_ticks: ticks(timings.typing_ms),
            deleting_ticks: ticks(timings.deleting_ms),
            wait_after_typing_ticks: ticks(timings.wait_after_typing_ms),
            wait_after_deleting_ticks: ticks(timings.wait_after_deleting_ms),
            cursor_flash_ticks: ticks(timings.cursor_flash_ms),
            typing_jitter_ticks: timings.typing_jitter_ticks,
        })
    }

    /// A single-phrase configuration with default timings.
    ///
    /// Infallible fallback used when the configured phrases or timings are
    /// rejected by [`TypewriterConfig::new`].
    #[must_use]
    pub fn single(phrase: impl Into<String>) -> Self {
        let timings = Timings::default();
        let ticks = |duration_ms: u64| to_ticks(duration_ms, timings.tick_ms);
        Self {
            phrases: vec![phrase.into()],
            tick_ms: timings.tick_ms,
            typing_ticks: ticks(timings.typing_ms),
            deleting_ticks: ticks(timings.deleting_ms),
            wait_after_typing_ticks: ticks(timings.wait_after_typing_ms),
            wait_after_deleting_ticks: ticks(timings.wait_after_deleting_ms),
            cursor_flash_ticks: ticks(timings.cursor_flash_ms),
            typing_jitter_ticks: timings.typing_jitter_ticks,
        }
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Phrase at `index`, wrapping modulo the phrase count.
    #[must_use]
    pub fn phrase(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }

    #[must_use]
    pub const fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    #[must_use]
    pub const fn typing_ticks(&self) -> u32 {
        self.typing_ticks
    }

    #[must_use]
    pub const fn deleting_ticks(&self) -> u32 {
        self.deleting_ticks
    }

    #[must_use]
    pub const fn wait_after_typing_ticks(&self) -> u32 {
        self.wait_after_typing_ticks
    }

    #[must_use]
    pub const fn wait_after_deleting_ticks(&self) -> u32 {
        self.wait_after_deleting_ticks
    }

    #[must_use]
    pub const fn cursor_flash_ticks(&self) -> u32 {
        self.cursor_flash_ticks
    }

    #[must_use]
    pub const fn typing_jitter_ticks(&self) -> u32 {
        self.typing_jitter_ticks
    }
}

/// `ceil(duration_ms / tick_ms)`, saturating at `u32::MAX`.
fn to_ticks(duration_ms: u64, tick_ms: u64) -> u32 {
    u32::try_from(duration_ms.div_ceil(tick_ms)).unwrap_or(u32::MAX)
}
