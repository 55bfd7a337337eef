//! Chart state and click dispatch.
//!
//! [`Chart`] ties the dataset to the current [`Selection`] and the
//! [`Animator`]. A title click goes through [`Chart::click`]: the next
//! selection is computed, the new scene built, the animator retargeted, and
//! only then is the selection committed. If the transition policy rejects
//! the change, the old selection stays and so do the label styles.

use crate::config::ChartConfig;
use crate::data::field::Axis;
use crate::data::layout::ChartLayout;
use crate::data::record::{Dataset, Record};
use crate::data::scene::Scene;
use crate::data::selection::{AxisLabel, LabelClick, Selection};
use crate::data::tooltip::{tooltip_text, TooltipText};
use crate::data::transition::{Animator, Frame, TransitionConfig};

/// Outcome of a title click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The selection changed and a transition started.
    Switched,
    /// The clicked title was already active.
    Unchanged,
    /// A transition is running and the policy drops overlapping clicks.
    Ignored,
}

pub struct Chart {
    dataset: Dataset,
    layout: ChartLayout,
    selection: Selection,
    animator: Animator,
}

impl Chart {
    pub fn new(
        dataset: Dataset,
        selection: Selection,
        layout: ChartLayout,
        transition: TransitionConfig,
    ) -> Self {
        let scene = Scene::build(&dataset, selection, &layout);
        Self {
            dataset,
            layout,
            selection,
            animator: Animator::new(scene, transition),
        }
    }

    pub fn from_config(dataset: Dataset, cfg: &ChartConfig) -> Self {
        Self::new(dataset, cfg.initial, cfg.layout, cfg.transition)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// The settled scene for the current selection.
    pub fn scene(&self) -> &Scene {
        self.animator.scene()
    }

    pub fn labels(&self, axis: Axis) -> [AxisLabel; 3] {
        self.selection.labels(axis)
    }

    pub fn click(&mut self, click: LabelClick, now: f64) -> ClickOutcome {
        let next = self.selection.apply(click);
        let changed = self.selection.changed_axes(next);
        if !changed.any() {
            return ClickOutcome::Unchanged;
        }
        let scene = Scene::build(&self.dataset, next, &self.layout);
        if !self.animator.retarget(scene, now) {
            return ClickOutcome::Ignored;
        }
        tracing::debug!(x = %next.x, y = %next.y, x_changed = changed.x, y_changed = changed.y, "selection changed");
        self.selection = next;
        ClickOutcome::Switched
    }

    pub fn frame(&self, now: f64) -> Frame {
        self.animator.frame(now)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.animator.is_animating(now)
    }

    pub fn settle(&mut self, now: f64) {
        self.animator.settle(now);
    }

    pub fn tooltip(&self, record: &Record) -> TooltipText {
        tooltip_text(record, self.selection)
    }
}
