//! Indicator slide animation.
//!
//! The first target snaps into place so the bar does not fly in from the
//! origin on first layout. Every later target animates from wherever the bar
//! currently is, so retargeting mid-slide stays continuous.

use std::time::Duration;

use crate::selection::IndicatorGeometry;

/// Cubic ease-in-out on `t` in [0, 1].
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[derive(Debug, Clone)]
pub struct IndicatorAnimation {
    from: IndicatorGeometry,
    target: IndicatorGeometry,
    elapsed: Duration,
    duration: Duration,
    initialized: bool,
}

impl IndicatorAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            from: IndicatorGeometry::default(),
            target: IndicatorGeometry::default(),
            elapsed: Duration::ZERO,
            duration,
            initialized: false,
        }
    }

    /// Change the slide duration. A settled bar stays settled; a running
    /// slide keeps its elapsed time, capped at the new duration.
    pub fn set_duration(&mut self, duration: Duration) {
        let settled = self.elapsed >= self.duration;
        self.duration = duration;
        self.elapsed = if settled {
            duration
        } else {
            self.elapsed.min(duration)
        };
    }

    /// Start moving towards `target`.
    pub fn set_target(&mut self, target: IndicatorGeometry) {
        if !self.initialized || self.duration.is_zero() {
            self.snap_to(target);
            return;
        }
        if let Some(current) = self.current() {
            self.from = current;
        }
        self.target = target;
        self.elapsed = Duration::ZERO;
    }

    /// Jump straight to `target`.
    pub fn snap_to(&mut self, target: IndicatorGeometry) {
        self.from = target;
        self.target = target;
        self.elapsed = self.duration;
        self.initialized = true;
    }

    /// Advance by `dt`. Returns whether the bar is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.initialized && self.elapsed < self.duration
    }

    /// Where the bar is drawn right now, or `None` before the first target.
    pub fn current(&self) -> Option<IndicatorGeometry> {
        if !self.initialized {
            return None;
        }
        if self.duration.is_zero() {
            return Some(self.target);
        }
        let progress = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let t = ease_in_out(progress.clamp(0.0, 1.0));
        Some(IndicatorGeometry {
            x: lerp(self.from.x, self.target.x, t),
            width: lerp(self.from.width, self.target.width, t),
        })
    }

    /// Where the bar is heading, or `None` before the first target.
    pub fn target(&self) -> Option<IndicatorGeometry> {
        self.initialized.then_some(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(300);

    fn geometry(x: f32, width: f32) -> IndicatorGeometry {
        IndicatorGeometry { x, width }
    }

    #[test]
    fn nothing_before_first_target() {
        let anim = IndicatorAnimation::new(DURATION);
        assert_eq!(anim.current(), None);
        assert_eq!(anim.target(), None);
        assert!(!anim.is_animating());
    }

    #[test]
    fn first_target_snaps() {
        let mut anim = IndicatorAnimation::new(DURATION);
        anim.set_target(geometry(40.0, 20.0));
        assert_eq!(anim.current(), Some(geometry(40.0, 20.0)));
        assert!(!anim.is_animating());
    }

    #[test]
    fn slides_to_new_target() {
        let mut anim = IndicatorAnimation::new(DURATION);
        anim.set_target(geometry(0.0, 10.0));
        anim.set_target(geometry(100.0, 30.0));
        assert!(anim.is_animating());
        assert_eq!(anim.current(), Some(geometry(0.0, 10.0)));

        assert!(anim.tick(Duration::from_millis(150)));
        let mid = anim.current().unwrap();
        assert!((mid.x - 50.0).abs() < 1e-3);
        assert!((mid.width - 20.0).abs() < 1e-3);

        assert!(!anim.tick(Duration::from_millis(200)));
        assert_eq!(anim.current(), Some(geometry(100.0, 30.0)));
    }

    #[test]
    fn retarget_mid_slide_starts_from_current() {
        let mut anim = IndicatorAnimation::new(DURATION);
        anim.set_target(geometry(0.0, 10.0));
        anim.set_target(geometry(100.0, 10.0));
        anim.tick(Duration::from_millis(150));
        let mid = anim.current().unwrap();

        anim.set_target(geometry(0.0, 10.0));
        assert_eq!(anim.current(), Some(mid));
        assert_eq!(anim.target(), Some(geometry(0.0, 10.0)));
    }

    #[test]
    fn zero_duration_snaps() {
        let mut anim = IndicatorAnimation::new(Duration::ZERO);
        anim.set_target(geometry(0.0, 10.0));
        anim.set_target(geometry(50.0, 10.0));
        assert!(!anim.is_animating());
        assert_eq!(anim.current(), Some(geometry(50.0, 10.0)));
    }

    #[test]
    fn shorter_duration_mid_slide_stays_between_endpoints() {
        let mut anim = IndicatorAnimation::new(DURATION);
        anim.set_target(geometry(0.0, 100.0));
        anim.set_target(geometry(100.0, 100.0));
        anim.tick(Duration::from_millis(250));

        anim.set_duration(Duration::from_millis(100));
        let now = anim.current().unwrap();
        assert_eq!(now, geometry(100.0, 100.0));
        assert!(!anim.is_animating());

        anim.set_target(geometry(0.0, 100.0));
        assert_eq!(anim.current(), Some(geometry(100.0, 100.0)));
    }

    #[test]
    fn longer_duration_after_snap_stays_settled() {
        let mut anim = IndicatorAnimation::new(DURATION);
        anim.snap_to(geometry(40.0, 20.0));
        anim.set_duration(Duration::from_secs(1));
        assert!(!anim.is_animating());
        assert_eq!(anim.current(), Some(geometry(40.0, 20.0)));
    }

    #[test]
    fn longer_duration_mid_slide_keeps_elapsed() {
        let mut anim = IndicatorAnimation::new(DURATION);
        anim.set_target(geometry(0.0, 10.0));
        anim.set_target(geometry(100.0, 10.0));
        anim.tick(Duration::from_millis(150));

        anim.set_duration(Duration::from_millis(600));
        assert!(anim.is_animating());
        let now = anim.current().unwrap();
        assert!(now.x > 0.0 && now.x < 100.0);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }
}
