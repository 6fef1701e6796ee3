//! Transition controller
//!
//! Applies a [`LayoutResult`] either immediately or as a batch of tweens
//! advanced by the host's frame callback.
//!
//! # Completion
//!
//! Exactly one tween per batch (the last in assignment order) carries the
//! completion flag. The batch's node order is handed back once, when that
//! tween finishes, so the caller can repopulate the selection container.
//! In the immediate path the order is returned by [`TransitionController::start`].
//! A new batch is refused while one is in flight, so no completion is lost.

use planorama_core::Easing;
use std::time::Duration;

use crate::geometry::lerp;
use crate::layout::LayoutResult;
use crate::scene::{NodeId, Scene};
use crate::transform::Transform;

/// How a batch should be applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSettings {
    pub duration: Duration,
    pub easing: Easing,
    /// Batches larger than this are applied immediately
    pub performance_item_limit: usize,
}

/// Result of starting a batch
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// Targets were applied synchronously; completion already happened
    Completed(Vec<NodeId>),
    /// Tweens are running; completion comes from [`TransitionController::advance`]
    Animating,
    /// Another batch is still in flight; nothing was applied
    Busy,
}

#[derive(Debug, Clone)]
struct Tween {
    node: NodeId,
    from: Transform,
    to: Transform,
    completes_batch: bool,
}

impl Tween {
    fn at(&self, eased: f64) -> Transform {
        Transform {
            x: lerp(self.from.x, self.to.x, eased),
            y: lerp(self.from.y, self.to.y, eased),
            rotation: lerp(self.from.rotation, self.to.rotation, eased),
            scale_x: lerp(self.from.scale_x, self.to.scale_x, eased),
            scale_y: lerp(self.from.scale_y, self.to.scale_y, eased),
        }
    }
}

#[derive(Debug, Clone)]
struct Batch {
    tweens: Vec<Tween>,
    order: Vec<NodeId>,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

/// Drives layout transitions
#[derive(Debug, Clone, Default)]
pub struct TransitionController {
    batch: Option<Batch>,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a batch is in flight
    pub fn is_running(&self) -> bool {
        self.batch.is_some()
    }

    /// Apply `result` to the scene
    ///
    /// Returns [`TransitionOutcome::Busy`] without touching the scene while a
    /// previous batch is running; finish it with [`advance`](Self::advance)
    /// or [`finish_now`](Self::finish_now) first.
    pub fn start(
        &mut self,
        scene: &mut Scene,
        result: &LayoutResult,
        settings: &TransitionSettings,
    ) -> TransitionOutcome {
        if self.is_running() {
            tracing::debug!("Batch of {} refused: transition in flight", result.len());
            return TransitionOutcome::Busy;
        }
        let order = result.order();

        if settings.duration.is_zero() || result.len() > settings.performance_item_limit {
            for target in &result.targets {
                if let Some(current) = scene.transform(target.node) {
                    scene.set_transform(target.node, target.resolve(current));
                }
            }
            tracing::debug!("Applied {} target(s) immediately", order.len());
            return TransitionOutcome::Completed(order);
        }

        let last = result.len().saturating_sub(1);
        let tweens: Vec<Tween> = result
            .targets
            .iter()
            .enumerate()
            .filter_map(|(i, target)| {
                let from = scene.transform(target.node)?;
                Some(Tween {
                    node: target.node,
                    from,
                    to: target.resolve(from),
                    completes_batch: i == last,
                })
            })
            .collect();

        if !tweens.iter().any(|t| t.completes_batch) {
            // The designated last node is gone; nothing would ever complete
            for tween in &tweens {
                scene.set_transform(tween.node, tween.to);
            }
            return TransitionOutcome::Completed(order);
        }

        tracing::debug!(
            "Animating {} target(s) over {:?}",
            tweens.len(),
            settings.duration
        );
        self.batch = Some(Batch {
            tweens,
            order,
            elapsed: Duration::ZERO,
            duration: settings.duration,
            easing: settings.easing,
        });
        TransitionOutcome::Animating
    }

    /// Advance every tween by `dt`.
    ///
    /// Returns the batch order exactly once, on the frame the completing
    /// tween reaches its target.
    pub fn advance(&mut self, scene: &mut Scene, dt: Duration) -> Option<Vec<NodeId>> {
        let batch = self.batch.as_mut()?;
        batch.elapsed = (batch.elapsed + dt).min(batch.duration);
        let progress = batch.elapsed.as_secs_f64() / batch.duration.as_secs_f64();
        let finished = batch.elapsed >= batch.duration;
        let eased = batch.easing.apply(progress);
        tracing::trace!("Transition progress {:.3}", progress);

        let mut completed = false;
        for tween in &batch.tweens {
            let pose = if finished { tween.to } else { tween.at(eased) };
            scene.set_transform(tween.node, pose);
            if finished && tween.completes_batch {
                completed = true;
            }
        }

        if completed {
            self.batch.take().map(|b| b.order)
        } else {
            None
        }
    }

    /// Jump every tween to its target and complete the batch
    pub fn finish_now(&mut self, scene: &mut Scene) -> Option<Vec<NodeId>> {
        let remaining = self
            .batch
            .as_ref()
            .map(|b| b.duration.saturating_sub(b.elapsed))?;
        self.advance(scene, remaining)
    }
}
