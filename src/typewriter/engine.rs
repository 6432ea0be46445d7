//! Timer-driven typewriter engine.
//!
//! [`Typewriter`] couples the pure state machine with a jitter source and a
//! [`TickTimer`]. The timer models Zellij's one-shot `set_timeout`: a timer
//! cannot be cancelled, so teardown is expressed by unmounting, which makes the
//! next expiry a no-op and stops the re-arm chain.

use super::config::TypewriterConfig;
use super::machine::{AnimationState, Phase};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Lifecycle of the recurring animation timer.
///
/// At most one timer is pending at any time, so repeated mounts never speed
/// the animation up, and once unmounted no tick is ever run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickTimer {
    mounted: bool,
    armed: bool,
}

impl TickTimer {
    /// Activates the timer.
    ///
    /// Returns `true` when the caller must schedule a new host timer.
    pub fn mount(&mut self) -> bool {
        self.mounted = true;
        self.arm()
    }

    /// Deactivates the timer. A pending host timer is left to expire unused.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Records that a host timer fired.
    ///
    /// Returns `true` if a tick should run. When it does, the timer is armed
    /// again and the caller must schedule the next host timer.
    pub fn on_timer_fired(&mut self) -> bool {
        self.armed = false;
        if !self.mounted {
            return false;
        }
        self.arm()
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    fn arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }
}

/// The running typewriter: configuration, current snapshot, RNG and timer.
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    state: AnimationState,
    rng: SmallRng,
    timer: TickTimer,
}

impl Typewriter {
    /// Creates an unmounted typewriter seeded from the OS.
    #[must_use]
    pub fn new(config: TypewriterConfig) -> Self {
        Self::with_rng(config, SmallRng::from_os_rng())
    }

    /// Creates an unmounted typewriter with a deterministic jitter sequence.
    #[must_use]
    pub fn seeded(config: TypewriterConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: TypewriterConfig, rng: SmallRng) -> Self {
        Self {
            config,
            state: AnimationState::new(),
            rng,
            timer: TickTimer::default(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.state.text()
    }

    #[must_use]
    pub const fn cursor_visible(&self) -> bool {
        self.state.cursor_visible()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn active_phrase(&self) -> &str {
        self.config.phrase(self.state.current_index())
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.timer.is_mounted()
    }

    /// Starts animating. Returns `true` if a host timer must be scheduled.
    pub fn mount(&mut self) -> bool {
        tracing::debug!(armed = self.timer.is_armed(), "typewriter mounted");
        self.timer.mount()
    }

    /// Stops animating; any tick already scheduled is discarded when it fires.
    pub fn unmount(&mut self) {
        tracing::debug!("typewriter unmounted");
        self.timer.unmount();
    }

    /// Handles a host timer expiry.
    ///
    /// Returns `true` when a tick ran, in which case the caller re-renders and
    /// schedules the next host timer.
    pub fn on_timer(&mut self) -> bool {
        if !self.timer.on_timer_fired() {
            tracing::trace!("timer fired while unmounted, tick dropped");
            return false;
        }
        self.advance();
        true
    }

    /// Runs exactly one animation tick regardless of the timer.
    pub fn advance(&mut self) {
        let max_jitter = self.config.typing_jitter_ticks();
        let jitter = if max_jitter == 0 { 0 } else { self.rng.random_range(0..=max_jitter) };
        self.state = self.state.step(&self.config, jitter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::config::Timings;

    fn typewriter() -> Typewriter {
        let config = TypewriterConfig::new(vec!["Rust".into(), "Zellij".into()], Timings::default()).unwrap();
        Typewriter::seeded(config, 7)
    }

    #[test]
    fn first_mount_requests_a_timer_and_second_does_not() {
        let mut timer = TickTimer::default();
        assert!(timer.mount());
        assert!(!timer.mount());
        assert!(timer.is_armed());
    }

    #[test]
    fn firing_while_mounted_rearms() {
        let mut timer = TickTimer::default();
        timer.mount();
        assert!(timer.on_timer_fired());
        assert!(timer.is_armed());
    }

    #[test]
    fn no_tick_runs_after_unmount() {
        let mut tw = typewriter();
        assert!(tw.mount());
        assert!(tw.on_timer());
        let before = tw.state().clone();

        tw.unmount();
        assert!(!tw.on_timer());
        assert_eq!(tw.state(), &before);
    }

    #[test]
    fn remount_with_pending_timer_keeps_single_chain() {
        let mut tw = typewriter();
        assert!(tw.mount());
        tw.unmount();
        assert!(!tw.mount(), "a timer is still pending, no second one");
        assert!(tw.on_timer());
    }

    #[test]
    fn remount_after_pending_timer_expired_schedules_again() {
        let mut tw = typewriter();
        tw.mount();
        tw.unmount();
        assert!(!tw.on_timer());
        assert!(tw.mount());
    }

    #[test]
    fn jitter_never_breaks_typing_order() {
        let mut tw = typewriter();
        for _ in 0..500 {
            tw.advance();
            assert!(tw.active_phrase().starts_with(tw.text()));
        }
    }
}
