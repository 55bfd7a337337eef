//! Animated moves between scenes.
//!
//! Marks and axis domains are interpolated independently, the way an axis
//! and its data glide together when the plotted field changes. Time is
//! passed in explicitly (seconds, as reported by egui), so everything here
//! is deterministic and testable without a window.

use egui::emath::easing;
use serde::{Deserialize, Serialize};

use crate::data::scale::LinearScale;
use crate::data::scene::Scene;

pub const DEFAULT_DURATION_SECS: f64 = 3.0;

/// What to do with a selection change while a transition is still running.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Cancel the running transition and start the new one from wherever
    /// the marks currently are.
    #[default]
    Restart,
    /// Drop the change; the caller keeps the previous selection.
    IgnoreWhileRunning,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_secs: f64,
    pub policy: TransitionPolicy,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            policy: TransitionPolicy::default(),
        }
    }
}

/// What to draw on a given frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub positions: Vec<[f64; 2]>,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl Frame {
    /// Mark positions in data coordinates of this frame's (interpolated)
    /// scales. A plot whose bounds are these domains draws each mark at the
    /// same spot as its pixel position.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.positions
            .iter()
            .map(|p| [self.x_scale.invert(p[0]), self.y_scale.invert(p[1])])
            .collect()
    }
}

#[derive(Clone, Debug)]
pub struct Transition {
    from: Frame,
    to: Frame,
    start: f64,
    duration: f64,
}

impl Transition {
    pub fn new(from: Frame, to: Frame, start: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(0.0),
        }
    }

    /// Eased progress in `[0, 1]` (cubic in-out).
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration == 0.0 {
            return 1.0;
        }
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        f64::from(easing::cubic_in_out(t as f32))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.start >= self.duration
    }

    pub fn sample(&self, now: f64) -> Frame {
        let t = self.progress(now);
        let positions = self
            .from
            .positions
            .iter()
            .zip(&self.to.positions)
            .map(|(a, b)| [a[0] + (b[0] - a[0]) * t, a[1] + (b[1] - a[1]) * t])
            .collect();
        Frame {
            positions,
            x_scale: LinearScale::lerp(&self.from.x_scale, &self.to.x_scale, t),
            y_scale: LinearScale::lerp(&self.from.y_scale, &self.to.y_scale, t),
        }
    }
}

impl From<&Scene> for Frame {
    fn from(scene: &Scene) -> Self {
        Frame {
            positions: scene.positions(),
            x_scale: scene.x_scale,
            y_scale: scene.y_scale,
        }
    }
}

/// Owns the target scene and at most one running transition towards it.
#[derive(Clone, Debug)]
pub struct Animator {
    scene: Scene,
    transition: Option<Transition>,
    config: TransitionConfig,
}

impl Animator {
    pub fn new(scene: Scene, config: TransitionConfig) -> Self {
        Self {
            scene,
            transition: None,
            config,
        }
    }

    /// The scene marks are moving towards (or resting at).
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|t| !t.is_finished(now))
    }

    /// Start moving towards `scene`. Returns `false` when the policy rejects
    /// the change, in which case nothing is modified.
    pub fn retarget(&mut self, scene: Scene, now: f64) -> bool {
        if self.is_animating(now) && self.config.policy == TransitionPolicy::IgnoreWhileRunning {
            tracing::debug!(
                x = %scene.selection.x,
                y = %scene.selection.y,
                "transition in flight, ignoring selection change"
            );
            return false;
        }
        let from = self.frame(now);
        let to = Frame::from(&scene);
        self.transition = Some(Transition::new(from, to, now, self.config.duration_secs));
        self.scene = scene;
        true
    }

    /// Positions and scales to draw at time `now`.
    pub fn frame(&self, now: f64) -> Frame {
        match &self.transition {
            Some(t) if !t.is_finished(now) => t.sample(now),
            _ => Frame::from(&self.scene),
        }
    }

    /// Drop a finished transition.
    pub fn settle(&mut self, now: f64) {
        if self.transition.as_ref().is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
    }
}
