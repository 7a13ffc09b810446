//! Ripple gesture tracking and geometry.

use cushy::figures::units::Px;
use cushy::figures::{Abs, FloatConversion, Point, Size, Zero};

/// The smallest radius a freshly seeded ripple may have, keeping the effect
/// visible on very small buttons.
const MIN_SEED_RADIUS: Px = Px::new(8);

/// The maximum pointer travel, per axis, for a release to still count as a
/// tap rather than a drag.
const TAP_TOLERANCE: Px = Px::new(2);

/// The radii of a newly started ripple cycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Spread {
    /// The radius the ripple shows immediately when the press begins.
    pub seed: Px,
    /// The radius at which the ripple covers the farthest corner of the
    /// button.
    pub target: Px,
}

/// Tracks a single press-and-release cycle of the ink ripple.
///
/// At most one cycle is in flight at a time: [`press`](Self::press) only
/// starts a cycle from the idle state, and [`release`](Self::release) always
/// returns to it.
#[derive(Debug, Default)]
pub struct Ripple {
    pressed: bool,
    origin: Point<Px>,
    size: Size<Px>,
}

impl Ripple {
    /// Updates the measured size of the button.
    ///
    /// Resizing while a cycle is in flight does not retarget it; the new size
    /// only affects subsequent presses and release bounds checks.
    pub fn resize(&mut self, size: Size<Px>) {
        self.size = size;
    }

    /// Returns the location the current cycle's press began at.
    pub const fn origin(&self) -> Point<Px> {
        self.origin
    }

    /// Returns true while a cycle is in flight.
    pub const fn pressed(&self) -> bool {
        self.pressed
    }

    /// Begins a press at `location`, returning the radii to animate.
    ///
    /// Returns `None` while a cycle is already in flight.
    pub fn press(&mut self, location: Point<Px>) -> Option<Spread> {
        if self.pressed {
            return None;
        }

        self.pressed = true;
        self.origin = location;
        Some(Spread {
            seed: seed_radius(self.size),
            target: spread_radius(location, self.size),
        })
    }

    /// Ends the in-flight cycle, returning true when the release qualifies as
    /// a tap.
    ///
    /// A release qualifies when the pointer moved less than [`TAP_TOLERANCE`]
    /// on both axes since the press began and `location` is within the
    /// button's bounds. `None` indicates the pointer left the window and
    /// never qualifies. Calling this while idle returns false.
    pub fn release(&mut self, location: Option<Point<Px>>) -> bool {
        if !self.pressed {
            return false;
        }

        self.pressed = false;
        location.is_some_and(|release| self.is_qualifying_tap(release))
    }

    fn is_qualifying_tap(&self, release: Point<Px>) -> bool {
        let translation = release - self.origin;
        translation.x.abs() < TAP_TOLERANCE
            && translation.y.abs() < TAP_TOLERANCE
            && release.x >= Px::ZERO
            && release.x <= self.size.width
            && release.y >= Px::ZERO
            && release.y <= self.size.height
    }
}

/// Returns the radius a ripple is seeded with: a quarter of the button's
/// shorter edge, floored at [`MIN_SEED_RADIUS`].
fn seed_radius(size: Size<Px>) -> Px {
    (size.width.min(size.height) / 4).max(MIN_SEED_RADIUS)
}

/// Returns the radius that reaches the corner of `size` farthest from
/// `origin`.
fn spread_radius(origin: Point<Px>, size: Size<Px>) -> Px {
    let x = origin.x.max(size.width - origin.x).into_float();
    let y = origin.y.max(size.height - origin.y).into_float();
    Px::from_float(x.hypot(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: i32, y: i32) -> Point<Px> {
        Point::new(Px::new(x), Px::new(y))
    }

    fn size(width: i32, height: i32) -> Size<Px> {
        Size::new(Px::new(width), Px::new(height))
    }

    #[test]
    fn tap_within_tolerance_qualifies() {
        let mut ripple = Ripple::default();
        ripple.resize(size(40, 20));
        assert!(ripple.press(point(10, 5)).is_some());
        assert!(ripple.release(Some(point(11, 6))));
        assert!(!ripple.pressed());
    }

    #[test]
    fn horizontal_drag_does_not_qualify() {
        let mut ripple = Ripple::default();
        ripple.resize(size(40, 20));
        ripple.press(point(10, 5));
        // A (5, 0) translation ends well within bounds but is a drag.
        assert!(!ripple.release(Some(point(15, 5))));
        assert!(!ripple.pressed());
    }

    #[test]
    fn tolerance_is_exclusive() {
        let mut ripple = Ripple::default();
        ripple.resize(size(40, 20));
        ripple.press(point(10, 5));
        assert!(!ripple.release(Some(point(10, 7))));
    }

    #[test]
    fn release_outside_bounds_does_not_qualify() {
        let mut ripple = Ripple::default();
        ripple.resize(size(40, 20));
        ripple.press(point(0, 0));
        // Negligible movement, but the pointer ended left of the button.
        assert!(!ripple.release(Some(point(-1, 0))));
    }

    #[test]
    fn release_outside_window_does_not_qualify() {
        let mut ripple = Ripple::default();
        ripple.resize(size(40, 20));
        ripple.press(point(10, 5));
        assert!(!ripple.release(None));
        assert!(!ripple.pressed());
    }

    #[test]
    fn release_on_edge_qualifies() {
        let mut ripple = Ripple::default();
        ripple.resize(size(40, 20));
        ripple.press(point(39, 19));
        assert!(ripple.release(Some(point(40, 20))));
    }

    #[test]
    fn one_cycle_at_a_time() {
        let mut ripple = Ripple::default();
        ripple.resize(size(40, 20));
        assert!(ripple.press(point(10, 5)).is_some());
        assert!(ripple.press(point(20, 10)).is_none());
        // The first release ends the cycle; a second cannot report a tap.
        assert!(ripple.release(Some(point(10, 5))));
        assert!(!ripple.release(Some(point(10, 5))));
    }

    #[test]
    fn seed_radius_applies_floor() {
        assert_eq!(seed_radius(size(20, 20)), Px::new(8));
        assert_eq!(seed_radius(size(100, 100)), Px::new(25));
    }

    #[test]
    fn spread_reaches_farthest_corner() {
        // max(10, 30) = 30 across, max(5, 15) = 15 down.
        let expected = Px::from_float(30.0f32.hypot(15.0));
        assert_eq!(spread_radius(point(10, 5), size(40, 20)), expected);
    }

    #[test]
    fn press_seeds_and_targets_the_ripple() {
        let mut ripple = Ripple::default();
        ripple.resize(size(40, 20));
        let spread = ripple.press(point(10, 5)).expect("idle press starts");
        assert!(ripple.pressed());
        assert_eq!(ripple.origin(), point(10, 5));
        assert_eq!(spread.seed, Px::new(8));
        // sqrt(30^2 + 15^2), roughly 33.54.
        assert_eq!(spread.target, Px::from_float(30.0f32.hypot(15.0)));
    }

    #[test]
    fn resize_mid_press_does_not_retrigger() {
        let mut ripple = Ripple::default();
        ripple.resize(size(40, 20));
        assert!(ripple.press(point(10, 5)).is_some());
        ripple.resize(size(400, 200));
        assert!(ripple.press(point(10, 5)).is_none());
        assert!(ripple.release(Some(point(10, 5))));
    }
}
