//! Filterable gallery state
//!
//! A gallery owns three things:
//! - the active `CategoryFilter` and the `visible` projects it selects,
//!   recomputed synchronously on every filter change
//! - the `rendered` projects, which lag behind `visible` while a transition runs
//! - a `TransitionCoordinator` that swaps `rendered` for `visible` between an
//!   exit animation and an enter animation
//!
//! The animation engine only reports "finished" back; timing and easing live
//! in the view layer. A filter change during a running transition cancels
//! it: the rendered set snaps to the in-flight target and a fresh exit
//! starts. Completion signals carry a generation so stale ones are ignored.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::catalog::Catalog;
use super::data::{CategoryFilter, Project};

/// Duration and per-item stagger of one exit or enter animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub duration: Duration,
    pub stagger: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            stagger: Duration::from_millis(50),
        }
    }
}

impl TransitionTiming {
    /// Time until the last of `items` staggered items finishes
    pub fn total(&self, items: usize) -> Duration {
        if items == 0 {
            return Duration::ZERO;
        }
        self.duration + self.stagger * (items as u32 - 1)
    }

    /// Progress (0.0 to 1.0) of item `index` after `elapsed`
    fn progress(&self, index: usize, elapsed: Duration) -> f32 {
        let delay = self.stagger * index as u32;
        let Some(local) = elapsed.checked_sub(delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (local.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Old items are animating out; `visible` is waiting to be rendered
    Exiting,
    /// New items are rendered and animating in
    Entering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Exit,
    Enter,
}

/// What the coordinator asks the animation engine to play.
/// The engine answers with the same `kind` and `generation` once done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRequest {
    pub kind: AnimationKind,
    pub generation: u64,
    pub items: usize,
    pub total: Duration,
}

/// Sequences exit → swap → enter around a filter change
#[derive(Debug)]
pub struct TransitionCoordinator {
    rendered: Vec<Arc<Project>>,
    pending: Option<Vec<Arc<Project>>>,
    phase: Phase,
    generation: u64,
    started_at: Option<Instant>,
    timing: TransitionTiming,
}

impl TransitionCoordinator {
    pub fn new(initial: Vec<Arc<Project>>, timing: TransitionTiming) -> Self {
        Self {
            rendered: initial,
            pending: None,
            phase: Phase::Idle,
            generation: 0,
            started_at: None,
            timing,
        }
    }

    /// Start a swap to `target`, cancelling any swap already in flight
    pub fn request(&mut self, target: Vec<Arc<Project>>, now: Instant) -> AnimationRequest {
        if self.phase == Phase::Exiting {
            if let Some(in_flight) = self.pending.take() {
                tracing::debug!(
                    generation = self.generation,
                    "transition interrupted during exit, snapping to its target"
                );
                self.rendered = in_flight;
            }
        }

        self.generation += 1;
        self.pending = Some(target);
        self.phase = Phase::Exiting;
        self.started_at = Some(now);

        AnimationRequest {
            kind: AnimationKind::Exit,
            generation: self.generation,
            items: self.rendered.len(),
            total: self.timing.total(self.rendered.len()),
        }
    }

    /// React to the animation engine's completion signal.
    /// Returns the enter request after a finished exit.
    pub fn finished(
        &mut self,
        kind: AnimationKind,
        generation: u64,
        now: Instant,
    ) -> Option<AnimationRequest> {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "ignoring stale animation signal");
            return None;
        }

        match (kind, self.phase) {
            (AnimationKind::Exit, Phase::Exiting) => {
                // The swap: rendered goes from entirely old to entirely new
                self.rendered = self.pending.take().unwrap_or_default();
                self.phase = Phase::Entering;
                self.started_at = Some(now);

                Some(AnimationRequest {
                    kind: AnimationKind::Enter,
                    generation: self.generation,
                    items: self.rendered.len(),
                    total: self.timing.total(self.rendered.len()),
                })
            }
            (AnimationKind::Enter, Phase::Entering) => {
                self.phase = Phase::Idle;
                self.started_at = None;
                None
            }
            _ => None,
        }
    }

    pub fn rendered(&self) -> &[Arc<Project>] {
        &self.rendered
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Opacity of rendered item `index` at `now`
    pub fn item_alpha(&self, index: usize, now: Instant) -> f32 {
        let elapsed = match self.started_at {
            Some(started) => now.saturating_duration_since(started),
            None => return 1.0,
        };
        let progress = self.timing.progress(index, elapsed);

        match self.phase {
            Phase::Idle => 1.0,
            Phase::Exiting => 1.0 - progress,
            Phase::Entering => progress,
        }
    }
}

/// Catalog + filter + transition state for one gallery on screen
#[derive(Debug)]
pub struct Gallery {
    catalog: Catalog,
    active: CategoryFilter,
    visible: Vec<Arc<Project>>,
    transition: TransitionCoordinator,
}

impl Gallery {
    /// Create a gallery showing the whole catalog
    pub fn new(catalog: Catalog, timing: TransitionTiming) -> Self {
        let visible = filter_catalog(&catalog, CategoryFilter::All);
        let transition = TransitionCoordinator::new(visible.clone(), timing);

        Self {
            catalog,
            active: CategoryFilter::All,
            visible,
            transition,
        }
    }

    /// Select a category.
    ///
    /// Recomputes the visible set immediately and returns the exit
    /// animation to play. Re-selecting the active filter is a no-op.
    pub fn set_active_category(
        &mut self,
        filter: CategoryFilter,
        now: Instant,
    ) -> Option<AnimationRequest> {
        if filter == self.active {
            return None;
        }

        self.active = filter;
        self.visible = filter_catalog(&self.catalog, filter);

        tracing::debug!(
            filter = filter.label(),
            visible = self.visible.len(),
            "gallery filter changed"
        );

        Some(self.transition.request(self.visible.clone(), now))
    }

    /// Forward an animation completion signal to the coordinator
    pub fn animation_finished(
        &mut self,
        kind: AnimationKind,
        generation: u64,
        now: Instant,
    ) -> Option<AnimationRequest> {
        self.transition.finished(kind, generation, now)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// The filter result, in catalog order
    #[cfg(test)]
    pub fn visible(&self) -> &[Arc<Project>] {
        &self.visible
    }

    /// What the renderer should draw right now
    pub fn rendered(&self) -> &[Arc<Project>] {
        self.transition.rendered()
    }

    pub fn transition(&self) -> &TransitionCoordinator {
        &self.transition
    }
}

/// The ordered sublist of `catalog` that passes `filter`
pub fn filter_catalog(catalog: &Catalog, filter: CategoryFilter) -> Vec<Arc<Project>> {
    catalog
        .projects()
        .iter()
        .filter(|project| filter.matches(project.category))
        .cloned()
        .collect()
}
