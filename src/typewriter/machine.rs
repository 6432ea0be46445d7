//! The typewriter state machine.
//!
//! [`AnimationState`] is an immutable snapshot; [`AnimationState::step`] is a
//! pure function producing the next snapshot for one animation tick. The
//! machine cycles `Typing → WaitAfterTyping → Deleting → WaitAfterDeleting`
//! forever, advancing to the next phrase each time a phrase has been fully
//! deleted.

use super::config::TypewriterConfig;

/// Animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Appending characters of the active phrase.
    Typing,
    /// Full phrase shown, cursor blinking.
    WaitAfterTyping,
    /// Removing characters from the end.
    Deleting,
    /// Empty text, cursor blinking, next phrase already selected.
    WaitAfterDeleting,
}

impl Phase {
    /// `true` for the two waiting phases, the only ones where the cursor blinks.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::WaitAfterTyping | Self::WaitAfterDeleting)
    }
}

/// One snapshot of the typewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    phase: Phase,
    current_text: String,
    current_index: usize,
    cursor_flash_counter: u32,
    cursor_flash_cooldown: u32,
    wait_cooldown: u32,
    character_cooldown: u32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Initial state: typing the first phrase, nothing shown yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Typing,
            current_text: String::new(),
            current_index: 0,
            cursor_flash_counter: 0,
            cursor_flash_cooldown: 0,
            wait_cooldown: 0,
            character_cooldown: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Text currently displayed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.current_text
    }

    /// Index of the phrase being typed or deleted.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub const fn cursor_flash_counter(&self) -> u32 {
        self.cursor_flash_counter
    }

    /// Whether the cursor is drawn this frame.
    ///
    /// Always `true` while typing or deleting. While waiting it follows the
    /// flash counter, visible on even values.
    #[must_use]
    pub const fn cursor_visible(&self) -> bool {
        !self.phase.is_idle() || self.cursor_flash_counter % 2 == 0
    }

    /// Advances the machine by one tick.
    ///
    /// `jitter` is the extra delay, in ticks, added after a typed character.
    /// It is clamped to the configured maximum and ignored outside `Typing`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zfolio::typewriter::{AnimationState, Phase, Timings, TypewriterConfig};
    ///
    /// let config = TypewriterConfig::new(vec!["hi".into()], Timings::default())?;
    /// let state = AnimationState::new().step(&config, 0);
    /// assert_eq!(state.text(), "h");
    /// assert_eq!(state.phase(), Phase::Typing);
    /// # Ok::<(), zfolio::FolioError>(())
    /// ```
    #[must_use]
    pub fn step(&self, config: &TypewriterConfig, jitter: u32) -> Self {
        let mut next = self.clone();

        if next.phase.is_idle() {
            next.cursor_flash_cooldown = next.cursor_flash_cooldown.saturating_sub(1);
            if next.cursor_flash_cooldown == 0 {
                next.cursor_flash_counter = next.cursor_flash_counter.wrapping_add(1);
                next.cursor_flash_cooldown = config.cursor_flash_ticks();
            }
        } else {
            next.cursor_flash_counter = 0;
            next.cursor_flash_cooldown = config.cursor_flash_ticks();
        }

        match next.phase {
            Phase::Typing => {
                if next.character_cooldown > 0 {
                    next.character_cooldown -= 1;
                } else {
                    let phrase = config.phrase(next.current_index);
                    let typed = next.current_text.chars().count();
                    if let Some(c) = phrase.chars().nth(typed) {
                        next.current_text.push(c);
                    }
                    next.character_cooldown = config
                        .typing_ticks()
                        .saturating_sub(1)
                        .saturating_add(jitter.min(config.typing_jitter_ticks()));
                    if next.current_text == phrase {
                        next.phase = Phase::WaitAfterTyping;
                        next.wait_cooldown = config.wait_after_typing_ticks();
                    }
                }
            }
            Phase::WaitAfterTyping => {
                if next.wait_cooldown > 0 {
                    next.wait_cooldown -= 1;
                } else {
                    next.phase = Phase::Deleting;
                }
            }
            Phase::Deleting => {
                if next.character_cooldown > 0 {
                    next.character_cooldown -= 1;
                } else {
                    next.current_text.pop();
                    next.character_cooldown = config.deleting_ticks().saturating_sub(1);
                    if next.current_text.is_empty() {
                        next.phase = Phase::WaitAfterDeleting;
                        next.wait_cooldown = config.wait_after_deleting_ticks();
                        next.current_index = (next.current_index + 1) % config.phrases().len();
                    }
                }
            }
            Phase::WaitAfterDeleting => {
                if next.wait_cooldown > 0 {
                    next.wait_cooldown -= 1;
                } else {
                    next.phase = Phase::Typing;
                }
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::config::Timings;

    fn config(phrases: &[&str]) -> TypewriterConfig {
        TypewriterConfig::new(phrases.iter().map(ToString::to_string).collect(), Timings::default()).unwrap()
    }

    fn run(config: &TypewriterConfig, ticks: usize) -> Vec<AnimationState> {
        let mut states = Vec::with_capacity(ticks);
        let mut state = AnimationState::new();
        for i in 0..ticks {
            state = state.step(config, (i % 2) as u32);
            states.push(state.clone());
        }
        states
    }

    #[test]
    fn types_one_character_every_typing_period() {
        let config = config(&["abc"]);
        let s1 = AnimationState::new().step(&config, 0);
        let s2 = s1.step(&config, 0);
        let s3 = s2.step(&config, 0);
        assert_eq!(s1.text(), "a");
        assert_eq!(s2.text(), "a");
        assert_eq!(s3.text(), "ab");
    }

    #[test]
    fn jitter_delays_next_character_by_at_most_configured_ticks() {
        let config = config(&["abc"]);
        let s1 = AnimationState::new().step(&config, 5);
        let s2 = s1.step(&config, 0);
        let s3 = s2.step(&config, 0);
        let s4 = s3.step(&config, 0);
        assert_eq!(s3.text(), "a");
        assert_eq!(s4.text(), "ab");
    }

    #[test]
    fn full_phrase_enters_wait_after_typing() {
        let config = config(&["ab"]);
        let states = run(&config, 4);
        let typed = states.iter().find(|s| s.text() == "ab").unwrap();
        assert_eq!(typed.phase(), Phase::WaitAfterTyping);
    }

    #[test]
    fn cycles_through_phrases_in_order_and_wraps() {
        let config = config(&["one", "two", "three"]);
        let states = run(&config, 2_000);

        let mut visited = vec![];
        for state in &states {
            if state.phase() == Phase::Typing && state.text().chars().count() == 1 {
                let idx = state.current_index();
                if visited.last() != Some(&idx) {
                    visited.push(idx);
                }
            }
        }

        assert!(visited.len() >= 5, "expected several cycles, got {visited:?}");
        for (i, idx) in visited.iter().enumerate() {
            assert_eq!(*idx, i % 3);
        }
    }

    #[test]
    fn text_is_always_a_prefix_of_the_active_phrase() {
        let config = config(&["Game Developer", "Créatif ✨", "x"]);
        let states = run(&config, 3_000);
        let mut previous_len = 0;
        let mut previous_phase = Phase::Typing;

        for state in &states {
            let len = state.text().chars().count();
            match state.phase() {
                Phase::Typing | Phase::WaitAfterTyping => {
                    let phrase = config.phrase(state.current_index());
                    assert!(phrase.starts_with(state.text()));
                    assert!(len <= phrase.chars().count());
                }
                Phase::Deleting => {
                    let phrase = config.phrase(state.current_index());
                    assert!(phrase.starts_with(state.text()));
                    if previous_phase == Phase::Deleting {
                        assert!(len <= previous_len, "deleting must not grow the text");
                    }
                }
                Phase::WaitAfterDeleting => assert!(state.text().is_empty()),
            }
            previous_len = len;
            previous_phase = state.phase();
        }
    }

    #[test]
    fn cursor_flash_only_advances_while_waiting() {
        let config = config(&["abc", "de"]);
        let states = run(&config, 1_500);
        let mut saw_blink = false;

        for pair in states.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            if before.cursor_flash_counter() != after.cursor_flash_counter() && after.cursor_flash_counter() != 0 {
                assert!(before.phase().is_idle(), "flash advanced outside a wait phase");
                saw_blink = true;
            }
            if matches!(after.phase(), Phase::Typing | Phase::Deleting) && !before.phase().is_idle() {
                assert_eq!(after.cursor_flash_counter(), 0);
            }
        }
        assert!(saw_blink);
    }

    #[test]
    fn cursor_is_solid_in_every_typing_and_deleting_frame() {
        let config = config(&["ab"]);
        let mut state = AnimationState::new();
        let mut saw_deleting = false;

        for tick in 0..400 {
            state = state.step(&config, 0);
            if matches!(state.phase(), Phase::Typing | Phase::Deleting) {
                saw_deleting |= state.phase() == Phase::Deleting;
                assert!(
                    state.cursor_visible(),
                    "tick {tick}: {:?} with counter {}",
                    state.phase(),
                    state.cursor_flash_counter()
                );
            }
        }
        assert!(saw_deleting);
    }

    #[test]
    fn cursor_blinks_at_flash_period_while_waiting() {
        let config = config(&["a"]);
        let mut state = AnimationState::new().step(&config, 0);
        assert_eq!(state.phase(), Phase::WaitAfterTyping);

        for _ in 0..9 {
            state = state.step(&config, 0);
            assert!(state.cursor_visible());
        }
        state = state.step(&config, 0);
        assert_eq!(state.cursor_flash_counter(), 1);
        assert!(!state.cursor_visible());
    }

    #[test]
    fn deleting_advances_index_when_text_empties() {
        let config = config(&["a", "b"]);
        let mut state = AnimationState::new();
        while state.phase() != Phase::WaitAfterDeleting {
            state = state.step(&config, 0);
        }
        assert_eq!(state.current_index(), 1);
        assert!(state.text().is_empty());
    }

    #[test]
    fn empty_phrase_does_not_stall_the_cycle() {
        let config = config(&["", "b"]);
        let states = run(&config, 500);
        assert!(states.iter().any(|s| s.text() == "b"));
    }
}
