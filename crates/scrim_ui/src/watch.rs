//! Tick-driven reveal tasks
//!
//! A common pattern for game UIs: a hidden tree is built up front, then
//! revealed the first time some game-state predicate holds (player starts
//! reloading, enters an area, ...). Rather than an unbounded polling loop
//! with an internal sleep, the task here is driven by explicit scheduler
//! ticks and carries explicit stop signaling; the tick cadence belongs to
//! the caller.

use smallvec::SmallVec;

use scrim_core::{PlayerId, WidgetHandle};
use scrim_host::Host;

/// Lifecycle state of a [`RevealWatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchState {
    /// Waiting for the condition to hold.
    Armed,
    /// Targets are visible and input mode is enabled.
    Revealed,
    /// Permanently ended; ticks are no-ops.
    Stopped,
}

/// Reveals a set of widgets for one player when a caller-evaluated
/// condition first holds.
#[derive(Debug)]
pub struct RevealWatch {
    targets: SmallVec<[WidgetHandle; 4]>,
    player: PlayerId,
    state: WatchState,
}

impl RevealWatch {
    pub fn new(player: PlayerId, targets: impl IntoIterator<Item = WidgetHandle>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            player,
            state: WatchState::Armed,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Run one scheduler tick.
    ///
    /// While armed and the condition is false, nothing happens. On the
    /// first true condition the targets become visible and input mode is
    /// enabled for the player. Revealed and stopped watches ignore ticks.
    pub fn tick(&mut self, host: &mut dyn Host, condition: bool) -> WatchState {
        if self.state == WatchState::Armed && condition {
            for &target in &self.targets {
                host.set_widget_visible(target, true);
            }
            host.set_input_mode(self.player, true);
            self.state = WatchState::Revealed;
            tracing::debug!(player = self.player.0, "reveal watch fired");
        }
        self.state
    }

    /// Hide the targets again, release input mode, and re-arm.
    pub fn conceal(&mut self, host: &mut dyn Host) {
        if self.state == WatchState::Stopped {
            return;
        }
        for &target in &self.targets {
            host.set_widget_visible(target, false);
        }
        host.set_input_mode(self.player, false);
        self.state = WatchState::Armed;
    }

    /// Permanently end the task.
    pub fn stop(&mut self) {
        self.state = WatchState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::UiBuilder;
    use crate::props::ContainerProps;
    use scrim_host::HeadlessHost;

    fn hidden_panel(host: &mut HeadlessHost, builder: &mut UiBuilder) -> WidgetHandle {
        builder
            .container(host, ContainerProps::new().visible(false))
            .unwrap()
    }

    #[test]
    fn test_no_reveal_while_condition_false() {
        let mut host = HeadlessHost::new();
        let mut builder = UiBuilder::new();
        let panel = hidden_panel(&mut host, &mut builder);

        let mut watch = RevealWatch::new(PlayerId(1), [panel]);
        for _ in 0..5 {
            assert_eq!(watch.tick(&mut host, false), WatchState::Armed);
        }
        assert!(!host.record(panel).unwrap().visible);
        assert!(!host.input_mode_enabled(PlayerId(1)));
    }

    #[test]
    fn test_reveals_on_first_true_tick() {
        let mut host = HeadlessHost::new();
        let mut builder = UiBuilder::new();
        let panel = hidden_panel(&mut host, &mut builder);

        let mut watch = RevealWatch::new(PlayerId(1), [panel]);
        assert_eq!(watch.tick(&mut host, true), WatchState::Revealed);
        assert!(host.record(panel).unwrap().visible);
        assert!(host.input_mode_enabled(PlayerId(1)));
    }

    #[test]
    fn test_conceal_rearms() {
        let mut host = HeadlessHost::new();
        let mut builder = UiBuilder::new();
        let panel = hidden_panel(&mut host, &mut builder);

        let mut watch = RevealWatch::new(PlayerId(1), [panel]);
        watch.tick(&mut host, true);
        watch.conceal(&mut host);

        assert_eq!(watch.state(), WatchState::Armed);
        assert!(!host.record(panel).unwrap().visible);
        assert!(!host.input_mode_enabled(PlayerId(1)));

        // It can fire again.
        assert_eq!(watch.tick(&mut host, true), WatchState::Revealed);
    }

    #[test]
    fn test_stopped_watch_ignores_ticks() {
        let mut host = HeadlessHost::new();
        let mut builder = UiBuilder::new();
        let panel = hidden_panel(&mut host, &mut builder);

        let mut watch = RevealWatch::new(PlayerId(1), [panel]);
        watch.stop();
        assert_eq!(watch.tick(&mut host, true), WatchState::Stopped);
        assert!(!host.record(panel).unwrap().visible);
    }
}
