//! Shared hover state for a set of tooltips.

use super::HoverTooltip;
use ratatui::layout::{Position, Rect};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Hover flags shared by every member of one group.
///
/// `group_hovered` is set when a member becomes visible and cleared by a
/// grace check that finds no member hovered.
#[derive(Debug, Clone)]
pub struct GroupHover {
    group_hovered: bool,
    member_hovered: bool,
    grace_period: Duration,
    grace_checks: VecDeque<Instant>,
}

impl Default for GroupHover {
    fn default() -> Self {
        Self::new(super::DEFAULT_GRACE_PERIOD)
    }
}

impl GroupHover {
    /// Create group state with the given grace period
    #[must_use]
    pub const fn new(grace_period: Duration) -> Self {
        Self {
            group_hovered: false,
            member_hovered: false,
            grace_period,
            grace_checks: VecDeque::new(),
        }
    }

    /// Whether some member has recently been shown
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.group_hovered
    }

    /// Whether the pointer is on some member's trigger
    #[must_use]
    pub const fn is_member_hovered(&self) -> bool {
        self.member_hovered
    }

    /// Grace period applied after a member is left
    #[must_use]
    pub const fn grace_period(&self) -> Duration {
        self.grace_period
    }

    /// Earliest pending grace check
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.grace_checks.front().copied()
    }

    pub(super) const fn member_entered(&mut self) {
        self.member_hovered = true;
    }

    pub(super) const fn member_shown(&mut self) {
        self.group_hovered = true;
    }

    pub(super) fn member_left(&mut self, now: Instant) {
        self.member_hovered = false;
        self.grace_checks.push_back(now + self.grace_period);
    }

    /// Run the earliest grace check if it is due. Returns whether one ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.next_deadline().is_some_and(|deadline| deadline <= now) {
            return false;
        }
        self.grace_checks.pop_front();

        if !self.member_hovered && self.group_hovered {
            self.group_hovered = false;
            debug!("tooltip group hover expired");
        }
        true
    }
}

/// Stable handle to a tooltip registered in a [`TooltipGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TooltipId(usize);

/// Tooltips sharing one [`GroupHover`].
///
/// The group owns its members, so timer events across all of them run in
/// deadline order and removing a member always drops its pending timer.
#[derive(Debug, Clone, Default)]
pub struct TooltipGroup {
    hover: GroupHover,
    members: Vec<Option<HoverTooltip>>,
}

enum Due {
    Show(usize),
    Grace,
}

impl TooltipGroup {
    /// Create an empty group with the given grace period
    #[must_use]
    pub const fn new(grace_period: Duration) -> Self {
        Self {
            hover: GroupHover::new(grace_period),
            members: Vec::new(),
        }
    }

    /// Shared hover state
    #[must_use]
    pub const fn hover(&self) -> &GroupHover {
        &self.hover
    }

    /// Register a tooltip
    pub fn insert(&mut self, tooltip: HoverTooltip) -> TooltipId {
        self.members.push(Some(tooltip));
        TooltipId(self.members.len() - 1)
    }

    /// Unmount a tooltip.
    ///
    /// Its show timer goes with it. A hovered member counts as left so the
    /// group flag can still expire.
    pub fn remove(&mut self, id: TooltipId, now: Instant) -> Option<HoverTooltip> {
        let mut tooltip = self.members.get_mut(id.0)?.take()?;
        tooltip.pointer_leave(now, Some(&mut self.hover));
        Some(tooltip)
    }

    /// Look up a member
    #[must_use]
    pub fn get(&self, id: TooltipId) -> Option<&HoverTooltip> {
        self.members.get(id.0)?.as_ref()
    }

    /// Look up a member mutably
    pub fn get_mut(&mut self, id: TooltipId) -> Option<&mut HoverTooltip> {
        self.members.get_mut(id.0)?.as_mut()
    }

    /// Live members with their ids
    pub fn iter(&self) -> impl Iterator<Item = (TooltipId, &HoverTooltip)> {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|tooltip| (TooltipId(index), tooltip)))
    }

    /// Number of live members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.iter().flatten().count()
    }

    /// Whether the group has no live members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The visible member, if any
    #[must_use]
    pub fn visible(&self) -> Option<&HoverTooltip> {
        self.iter()
            .map(|(_, tooltip)| tooltip)
            .find(|tooltip| tooltip.is_visible())
    }

    /// Pointer entered a member's trigger
    pub fn pointer_enter(&mut self, id: TooltipId, now: Instant) {
        self.advance(now);
        if let Some(Some(tooltip)) = self.members.get_mut(id.0) {
            tooltip.pointer_enter(now, Some(&mut self.hover));
        }
    }

    /// Pointer left a member's trigger
    pub fn pointer_leave(&mut self, id: TooltipId, now: Instant) {
        self.advance(now);
        if let Some(Some(tooltip)) = self.members.get_mut(id.0) {
            tooltip.pointer_leave(now, Some(&mut self.hover));
        }
    }

    /// Route a pointer position to enter/leave events by trigger hit-testing.
    ///
    /// `None` means the pointer left the surface. Leaves are delivered
    /// before enters so moving between adjacent triggers keeps the group warm.
    pub fn pointer_moved(&mut self, position: Option<Position>, now: Instant) {
        let hit = |area: Rect| position.is_some_and(|pos| area.contains(pos));

        let leaving: Vec<TooltipId> = self
            .iter()
            .filter(|(_, tooltip)| tooltip.is_hovered() && !hit(tooltip.trigger_area()))
            .map(|(id, _)| id)
            .collect();
        for id in leaving {
            self.pointer_leave(id, now);
        }

        let entering: Vec<TooltipId> = self
            .iter()
            .filter(|(_, tooltip)| !tooltip.is_hovered() && hit(tooltip.trigger_area()))
            .map(|(id, _)| id)
            .collect();
        for id in entering {
            self.pointer_enter(id, now);
        }
    }

    /// Run every timer due at `now`, earliest first. Returns whether anything fired.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut fired = false;
        while let Some(due) = self.next_due(now) {
            match due {
                Due::Show(index) => {
                    if let Some(Some(tooltip)) = self.members.get_mut(index) {
                        tooltip.tick(now, Some(&mut self.hover));
                    }
                }
                Due::Grace => {
                    self.hover.tick(now);
                }
            }
            fired = true;
        }
        fired
    }

    /// Earliest pending deadline across members and grace checks
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.iter()
            .filter_map(|(_, tooltip)| tooltip.next_deadline())
            .chain(self.hover.next_deadline())
            .min()
    }

    fn next_due(&self, now: Instant) -> Option<Due> {
        let show = self
            .iter()
            .filter_map(|(id, tooltip)| tooltip.next_deadline().map(|deadline| (deadline, id.0)))
            .filter(|(deadline, _)| *deadline <= now)
            .min();
        let grace = self.hover.next_deadline().filter(|deadline| *deadline <= now);

        match (show, grace) {
            (Some((show_at, index)), Some(grace_at)) if show_at <= grace_at => {
                Some(Due::Show(index))
            }
            (Some(_), Some(_)) | (None, Some(_)) => Some(Due::Grace),
            (Some((_, index)), None) => Some(Due::Show(index)),
            (None, None) => None,
        }
    }
}
