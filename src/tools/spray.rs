//! Spray tool: timer-driven airbrush painting.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use rand::Rng;

use crate::input::{relative_position, Gesture, PointerEvent, Ticker};

use super::ToolCtx;

/// Period of the spray's repeating schedule.
pub const SPRAY_TICK: Duration = Duration::from_millis(25);

/// Brush area (in square pixels) covered by one dot per tick. Chosen so
/// coverage feels proportional to brush size.
const AREA_PER_DOT: f32 = 30.0;

/// Sprays random dots around the pointer while the button is held.
///
/// The only tool with background activity: painting happens on a fixed
/// 25ms schedule owned by the gesture, not on pointer moves - moves just
/// retarget where the dots land. Ending the gesture disposes the
/// schedule, so no dot can be painted after release.
pub fn spray(event: &PointerEvent, ctx: &mut ToolCtx<'_>) {
    let radius = ctx.canvas.line_width() / 2.0;
    let dots_per_tick = dots_per_tick(radius);

    let geometry = ctx.geometry;
    let current = Rc::new(Cell::new(relative_position(event, geometry)));
    let tracked = Rc::clone(&current);

    let gesture = Gesture::new()
        .on_move(move |event, _ctx| tracked.set(relative_position(event, geometry)))
        .every(Ticker::new(SPRAY_TICK, ctx.now), move |pctx| {
            let center = current.get();
            for _ in 0..dots_per_tick {
                let (dx, dy) = random_point_in_disk(&mut *pctx.rng, radius);
                pctx.canvas
                    .fill_dot(center.x as f32 + dx, center.y as f32 + dy);
            }
        });

    ctx.gesture.track(gesture);
}

/// Dots emitted per tick for a brush of the given radius:
/// `ceil(pi * r^2 / AREA_PER_DOT)`.
pub(crate) fn dots_per_tick(radius: f32) -> u32 {
    let area = radius * radius * std::f32::consts::PI;
    (area / AREA_PER_DOT).ceil() as u32
}

/// Samples a uniformly random offset inside a disk of the given radius.
///
/// Rejection sampling: draw (x, y) uniformly in [-1, 1]^2 and accept when
/// x^2 + y^2 <= 1 (expected iterations about 4/pi). A non-positive radius
/// short-circuits to the zero offset rather than sampling at all.
pub fn random_point_in_disk(rng: &mut impl Rng, radius: f32) -> (f32, f32) {
    if radius <= 0.0 {
        return (0.0, 0.0);
    }
    loop {
        let x: f32 = rng.gen_range(-1.0..=1.0);
        let y: f32 = rng.gen_range(-1.0..=1.0);
        if x * x + y * y <= 1.0 {
            return (x * radius, y * radius);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn dot_rate_scales_with_brush_area() {
        assert_eq!(dots_per_tick(0.5), 1);
        assert_eq!(dots_per_tick(10.0), 11); // ceil(314.16 / 30)
        assert_eq!(dots_per_tick(50.0), 262); // ceil(7853.98 / 30)
    }

    #[test]
    fn samples_stay_inside_the_disk_and_fill_it_uniformly() {
        let mut rng = StdRng::seed_from_u64(42);
        let radius = 10.0;
        let trials = 10_000;

        let mut inner = 0u32;
        for _ in 0..trials {
            let (x, y) = random_point_in_disk(&mut rng, radius);
            let magnitude = (x * x + y * y).sqrt();
            assert!(magnitude <= radius + 1e-4);
            if magnitude < radius / 2.0 {
                inner += 1;
            }
        }

        // A uniform disk puts a quarter of its samples inside half the
        // radius; allow generous sampling noise around 0.25.
        let fraction = inner as f64 / trials as f64;
        assert!(
            (0.22..=0.28).contains(&fraction),
            "inner-disk fraction {fraction} outside tolerance"
        );
    }

    #[test]
    fn zero_and_negative_radii_terminate_with_the_zero_offset() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_point_in_disk(&mut rng, 0.0), (0.0, 0.0));
        assert_eq!(random_point_in_disk(&mut rng, -3.0), (0.0, 0.0));
    }
}
