//! Hover tooltips with delayed show and grouped delay skipping.
//!
//! A tooltip moves through `Hidden -> PendingShow -> Visible -> Hidden`.
//! Entering the trigger arms a show timer; leaving cancels it and hides the
//! tooltip at once. Tooltips registered in a [`TooltipGroup`] share a
//! [`GroupHover`] so that once one member is showing, siblings show with no
//! delay until the group's grace period runs out.

mod group;
mod timer;

pub use group::{GroupHover, TooltipGroup, TooltipId};
pub use timer::Timer;

use ratatui::{layout::Rect, text::Text};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default delay before a tooltip shows.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Window after a pointer leaves during which the group stays "hovered".
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(100);

/// Visibility phase of a single tooltip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Pointer is outside the trigger
    #[default]
    Hidden,
    /// Pointer is on the trigger and the show timer is armed
    PendingShow,
    /// The content box is shown
    Visible,
}

/// Layout variants for the floating box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "independent layout flags"
)]
pub struct TooltipOptions {
    /// Wide box
    pub large: bool,
    /// Single line, truncated with an ellipsis
    pub line: bool,
    /// Light palette instead of the dark one
    pub light: bool,
    /// Draw a tick pointing at the trigger
    pub show_tick: bool,
    /// Citation sizing: box shrinks to content up to a max width
    pub citation: bool,
}

/// A tooltip attached to one trigger region.
#[derive(Debug, Clone)]
pub struct HoverTooltip {
    content: Text<'static>,
    options: TooltipOptions,
    delay: Duration,
    trigger: Rect,
    phase: Phase,
    show_timer: Timer,
}

impl HoverTooltip {
    /// Create a hidden tooltip with the default delay
    #[must_use]
    pub fn new(content: impl Into<Text<'static>>) -> Self {
        Self {
            content: content.into(),
            options: TooltipOptions::default(),
            delay: DEFAULT_DELAY,
            trigger: Rect::default(),
            phase: Phase::Hidden,
            show_timer: Timer::new(),
        }
    }

    /// Set the show delay
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the layout options
    #[must_use]
    pub const fn options(mut self, options: TooltipOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the trigger region
    #[must_use]
    pub const fn trigger(mut self, trigger: Rect) -> Self {
        self.trigger = trigger;
        self
    }

    /// Move the trigger region, e.g. after a relayout
    pub const fn set_trigger(&mut self, trigger: Rect) {
        self.trigger = trigger;
    }

    /// Replace the content
    pub fn set_content(&mut self, content: impl Into<Text<'static>>) {
        self.content = content.into();
    }

    /// Tooltip content
    #[must_use]
    pub const fn content(&self) -> &Text<'static> {
        &self.content
    }

    /// Layout options
    #[must_use]
    pub const fn layout(&self) -> TooltipOptions {
        self.options
    }

    /// Configured show delay
    #[must_use]
    pub const fn configured_delay(&self) -> Duration {
        self.delay
    }

    /// Trigger region
    #[must_use]
    pub const fn trigger_area(&self) -> Rect {
        self.trigger
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the content box should be drawn
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Visible
    }

    /// Whether the pointer is currently on the trigger
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Deadline of the pending show timer
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.show_timer.deadline()
    }

    /// Pointer entered the trigger.
    ///
    /// The show delay is skipped when the group already reports a hovered
    /// member. Repeated enters while hovered are ignored.
    pub fn pointer_enter(&mut self, now: Instant, group: Option<&mut GroupHover>) {
        if self.is_hovered() {
            return;
        }

        let delay = match group {
            Some(group) => {
                let delay = if group.is_hovered() {
                    Duration::ZERO
                } else {
                    self.delay
                };
                group.member_entered();
                delay
            }
            None => self.delay,
        };

        self.show_timer.arm(now, delay);
        self.phase = Phase::PendingShow;
        debug!(delay_ms = delay.as_millis(), "tooltip pending show");
    }

    /// Pointer left the trigger.
    ///
    /// Cancels the show timer and hides synchronously. Grouped tooltips
    /// schedule a grace check on the group.
    pub fn pointer_leave(&mut self, now: Instant, group: Option<&mut GroupHover>) {
        if !self.is_hovered() {
            return;
        }

        self.show_timer.cancel();
        self.phase = Phase::Hidden;
        if let Some(group) = group {
            group.member_left(now);
        }
        debug!("tooltip hidden");
    }

    /// Fire the show timer if it is due. Returns whether the tooltip became visible.
    pub fn tick(&mut self, now: Instant, group: Option<&mut GroupHover>) -> bool {
        if self.show_timer.fire(now).is_none() {
            return false;
        }

        self.phase = Phase::Visible;
        if let Some(group) = group {
            group.member_shown();
        }
        debug!("tooltip visible");
        true
    }
}

impl Drop for HoverTooltip {
    fn drop(&mut self) {
        if self.show_timer.cancel() {
            debug!("tooltip dropped with a pending show timer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_new_tooltip_is_hidden() {
        let tooltip = HoverTooltip::new("hint");
        assert_eq!(tooltip.phase(), Phase::Hidden);
        assert_eq!(tooltip.configured_delay(), DEFAULT_DELAY);
        assert!(tooltip.next_deadline().is_none());
    }

    #[test]
    fn test_shows_after_delay() {
        let t0 = Instant::now();
        let mut tooltip = HoverTooltip::new("hint");

        tooltip.pointer_enter(t0, None);
        assert_eq!(tooltip.phase(), Phase::PendingShow);
        assert!(!tooltip.tick(t0 + ms(499), None));
        assert!(tooltip.tick(t0 + ms(500), None));
        assert!(tooltip.is_visible());
    }

    #[test]
    fn test_leave_before_delay_never_shows() {
        let t0 = Instant::now();
        let mut tooltip = HoverTooltip::new("hint");

        tooltip.pointer_enter(t0, None);
        tooltip.pointer_leave(t0 + ms(200), None);

        assert!(!tooltip.tick(t0 + ms(500), None));
        assert!(!tooltip.tick(t0 + ms(5_000), None));
        assert_eq!(tooltip.phase(), Phase::Hidden);
    }

    #[test]
    fn test_leave_hides_visible_tooltip() {
        let t0 = Instant::now();
        let mut tooltip = HoverTooltip::new("hint").delay(ms(10));

        tooltip.pointer_enter(t0, None);
        tooltip.tick(t0 + ms(10), None);
        tooltip.pointer_leave(t0 + ms(20), None);
        assert_eq!(tooltip.phase(), Phase::Hidden);
    }

    #[test]
    fn test_repeated_enter_keeps_original_deadline() {
        let t0 = Instant::now();
        let mut tooltip = HoverTooltip::new("hint");

        tooltip.pointer_enter(t0, None);
        tooltip.pointer_enter(t0 + ms(300), None);
        assert_eq!(tooltip.next_deadline(), Some(t0 + ms(500)));
    }

    #[test]
    fn test_leave_without_enter_is_noop() {
        let t0 = Instant::now();
        let mut group = GroupHover::default();
        let mut tooltip = HoverTooltip::new("hint");

        tooltip.pointer_leave(t0, Some(&mut group));
        assert!(group.next_deadline().is_none());
    }

    #[test]
    fn test_grouped_enter_skips_delay_when_group_hovered() {
        let t0 = Instant::now();
        let mut group = GroupHover::default();
        let mut a = HoverTooltip::new("a");
        let mut b = HoverTooltip::new("b");

        a.pointer_enter(t0, Some(&mut group));
        assert!(a.tick(t0 + ms(500), Some(&mut group)));
        assert!(group.is_hovered());

        a.pointer_leave(t0 + ms(600), Some(&mut group));
        b.pointer_enter(t0 + ms(650), Some(&mut group));
        assert_eq!(b.next_deadline(), Some(t0 + ms(650)));
    }

    #[test]
    fn test_set_content_keeps_phase() {
        let t0 = Instant::now();
        let mut tooltip = HoverTooltip::new("old").delay(Duration::ZERO);

        tooltip.pointer_enter(t0, None);
        tooltip.tick(t0, None);
        tooltip.set_content("new");

        assert!(tooltip.is_visible());
        assert_eq!(tooltip.content(), &Text::from("new"));
    }
}
