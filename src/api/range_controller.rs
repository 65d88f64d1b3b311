use tracing::{debug, trace};

use crate::calendar::Calendar;
use crate::core::TimeRange;
use crate::error::{AxisError, AxisResult};

use super::{InvalidationLevel, RangeAnimation, RangeEngine};

/// Options for [`RangeEngine::animate_range_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimateOptions {
    /// Explicit duration; derived from the span ratio when `None`.
    pub duration_seconds: Option<f64>,
    /// Snap to the nearest aligned range once the animation completes.
    pub snap_after: bool,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            duration_seconds: None,
            snap_after: true,
        }
    }
}

impl AnimateOptions {
    #[must_use]
    pub fn without_snap() -> Self {
        Self {
            duration_seconds: None,
            snap_after: false,
        }
    }
}

impl<C: Calendar> RangeEngine<C> {
    /// Displayed range, interpolated while an animation is running.
    #[must_use]
    pub fn get_range(&self) -> (f64, f64) {
        self.current.as_tuple()
    }

    /// Range the engine is animating toward; equals `get_range` when idle.
    #[must_use]
    pub fn get_target_range(&self) -> (f64, f64) {
        self.target().as_tuple()
    }

    /// Replaces the displayed range immediately and cancels any animation.
    pub fn set_range(&mut self, t1: f64, t2: f64) -> AxisResult<()> {
        let range = TimeRange::new(t1, t2)?;
        if self.animation.take().is_some() {
            trace!("set_range cancels running animation");
        }
        self.current = range;
        debug!(start = t1, end = t2, "set range");
        self.invalidate(InvalidationLevel::Range);
        Ok(())
    }

    /// Animates toward `(t1, t2)` with derived duration and snap-after.
    pub fn animate_range(&mut self, t1: f64, t2: f64) -> AxisResult<()> {
        self.animate_range_with(t1, t2, AnimateOptions::default())
    }

    /// Starts a transition from the displayed range to `(t1, t2)`.
    ///
    /// The transition is timed from the last recorded frame time (see
    /// [`RangeEngine::begin_frame`]). A running animation is replaced; its
    /// target is discarded.
    pub fn animate_range_with(
        &mut self,
        t1: f64,
        t2: f64,
        options: AnimateOptions,
    ) -> AxisResult<()> {
        let to = TimeRange::new(t1, t2)?;
        let duration_seconds = match options.duration_seconds {
            Some(duration) => {
                if !duration.is_finite() || duration < 0.0 {
                    return Err(AxisError::InvalidData(
                        "animation duration must be finite and >= 0".to_owned(),
                    ));
                }
                duration
            }
            None => self.default_animation_duration(self.current.span(), to.span()),
        };

        let animation = RangeAnimation {
            from: self.current,
            to,
            started_at: self.frame_now,
            duration_seconds,
            snap_after: options.snap_after,
        };
        debug!(
            from_start = animation.from.start,
            from_end = animation.from.end,
            to_start = t1,
            to_end = t2,
            duration_seconds,
            snap_after = options.snap_after,
            "animate range"
        );
        self.animation = Some(animation);
        self.invalidate(InvalidationLevel::Range);
        Ok(())
    }

    /// Duration the engine picks for a transition between two spans.
    #[must_use]
    pub fn default_animation_duration(&self, span_a: f64, span_b: f64) -> f64 {
        let tuning = self.config.animation;
        let larger = span_a.max(span_b);
        let smaller = span_a.min(span_b);
        let ratio = if smaller > 0.0 { larger / smaller } else { 1.0 };
        tuning.base_seconds + tuning.log_ratio_weight * ratio.ln()
    }

    /// Advances the running animation to `now`.
    ///
    /// Returns `true` when an animation was running. Calling this repeatedly
    /// with the same `now` yields the same range. Non-finite `now` is ignored.
    pub fn animation_update(&mut self, now: f64) -> bool {
        if !now.is_finite() {
            return false;
        }
        self.frame_now = now;
        let Some(animation) = self.animation else {
            return false;
        };

        if now >= animation.end_time() {
            self.current = animation.to;
            self.animation = None;
            debug!(
                start = animation.to.start,
                end = animation.to.end,
                "animation finished"
            );
            if animation.snap_after {
                self.snap();
            }
        } else {
            let remaining =
                ((animation.end_time() - now) / animation.duration_seconds).clamp(0.0, 1.0);
            let exponent = easing_exponent(animation.from.span(), animation.to.span());
            let weight = remaining.powf(exponent);
            self.current = animation.from.blend(animation.to, weight);
            trace!(
                weight,
                start = self.current.start,
                end = self.current.end,
                "animation frame"
            );
        }

        self.invalidate(InvalidationLevel::Frame);
        true
    }
}

/// Zooming out from a short span decelerates less linearly than zooming in.
fn easing_exponent(span_from: f64, span_to: f64) -> f64 {
    let ratio = (2.0 + span_from).ln() / (2.0 + span_to).ln();
    ratio * ratio
}
