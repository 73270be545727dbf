use glam::DVec3;
use gravwell_common::Body;
use gravwell_common::constants::{FIXED_DT, G, MIN_SEPARATION};

/// Constants the integrator closes over.
///
/// Kept on the state rather than read from globals so that tests can pick
/// gentler parameters than the production ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConstants {
    pub g: f64,
    /// Fixed timestep in simulated seconds, applied once per frame.
    pub dt: f64,
    /// Separation clamp; engages before the inverse-square division.
    pub min_separation: f64,
}

impl Default for SimConstants {
    fn default() -> Self {
        Self {
            g: G,
            dt: FIXED_DT,
            min_separation: MIN_SEPARATION,
        }
    }
}

/// The full mutable simulation state, threaded through the frame loop as a
/// value.
///
/// The black hole is a [`Body`] pinned at its creation position with its
/// creation mass; [`step`](Self::step) never integrates it. Only the star
/// moves.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub star: Body,
    pub black_hole: Body,
    pub constants: SimConstants,
    tick: u64,
}

impl SimulationState {
    /// Production state: star at `(0, 0, 10)` falling in along -Z toward
    /// the black hole at the origin.
    pub fn new() -> Self {
        Self::with_bodies(Body::star(), Body::black_hole(), SimConstants::default())
    }

    pub fn with_bodies(star: Body, black_hole: Body, constants: SimConstants) -> Self {
        Self {
            star,
            black_hole,
            constants,
            tick: 0,
        }
    }

    /// Frames integrated so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Gravitational acceleration at `position`, directed toward the black
    /// hole.
    ///
    /// The separation is clamped to `min_separation` before both the
    /// inverse-square magnitude and the direction division, so the result is
    /// finite everywhere, including at the hole itself.
    pub fn acceleration_at(&self, position: DVec3) -> DVec3 {
        let offset = position - self.black_hole.position;
        let r = offset.length().max(self.constants.min_separation);
        let magnitude = self.constants.g * self.black_hole.mass / (r * r);
        -offset / r * magnitude
    }

    /// Advance the star by one fixed timestep using semi-implicit Euler:
    /// velocity first, then position from the updated velocity.
    ///
    /// Called exactly once per frame regardless of wall-clock time, so
    /// simulated time rate follows frame rate by design.
    pub fn step(&mut self) {
        let dt = self.constants.dt;
        let accel = self.acceleration_at(self.star.position);
        self.star.velocity += accel * dt;
        self.star.position += self.star.velocity * dt;
        self.tick += 1;
        tracing::trace!(
            tick = self.tick,
            r = self.star.radial_distance(),
            "integrated star"
        );
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tame parameters for trajectory tests: unit G and mass keep per-step
    /// displacement far below the separation, so no overshoot occurs.
    fn gentle_constants() -> SimConstants {
        SimConstants {
            g: 1.0,
            dt: 0.01,
            min_separation: 1e-3,
        }
    }

    fn unit_hole() -> Body {
        Body::new(DVec3::ZERO, DVec3::ZERO, 1.0)
    }

    fn star_at_rest(z: f64) -> Body {
        Body::new(DVec3::new(0.0, 0.0, z), DVec3::ZERO, 1.0)
    }

    #[test]
    fn step_is_deterministic() {
        let mut a = SimulationState::new();
        let mut b = SimulationState::new();
        for _ in 0..100 {
            a.step();
            b.step();
        }
        // Bit-identical, not merely approximately equal.
        assert_eq!(a.star.position, b.star.position);
        assert_eq!(a.star.velocity, b.star.velocity);
        assert_eq!(a.tick(), b.tick());
    }

    #[test]
    fn acceleration_follows_inverse_square() {
        let sim = SimulationState::new();
        let near = sim.acceleration_at(DVec3::new(0.0, 0.0, 10.0)).length();
        let far = sim.acceleration_at(DVec3::new(0.0, 0.0, 20.0)).length();
        let ratio = near / far;
        assert!((ratio - 4.0).abs() < 1e-9, "got ratio {ratio}");
    }

    #[test]
    fn acceleration_points_at_the_hole() {
        let sim = SimulationState::new();
        let accel = sim.acceleration_at(DVec3::new(0.0, 0.0, 10.0));
        assert!(accel.z < 0.0);
        assert_eq!(accel.x, 0.0);
        assert_eq!(accel.y, 0.0);
    }

    #[test]
    fn radial_infall_is_monotonic() {
        let mut sim =
            SimulationState::with_bodies(star_at_rest(10.0), unit_hole(), gentle_constants());
        let mut previous = sim.star.radial_distance();
        for _ in 0..1000 {
            sim.step();
            let r = sim.star.radial_distance();
            assert!(r < previous, "infall must shrink r every step");
            assert!(r.is_finite());
            previous = r;
        }
    }

    #[test]
    fn degeneracy_guard_at_origin() {
        let mut sim =
            SimulationState::with_bodies(star_at_rest(0.0), unit_hole(), gentle_constants());
        sim.step();
        assert!(sim.star.position.is_finite());
        assert!(sim.star.velocity.is_finite());
    }

    #[test]
    fn degeneracy_guard_below_clamp() {
        let star = star_at_rest(1e-6);
        let mut sim =
            SimulationState::with_bodies(star, Body::black_hole(), SimConstants::default());
        for _ in 0..10 {
            sim.step();
            assert!(sim.star.position.is_finite());
            assert!(sim.star.velocity.is_finite());
        }
    }

    #[test]
    fn velocity_updates_before_position() {
        // Semi-implicit Euler: the position update must see the new velocity.
        let constants = gentle_constants();
        let mut sim = SimulationState::with_bodies(star_at_rest(10.0), unit_hole(), constants);
        let accel = sim.acceleration_at(sim.star.position);
        let expected_velocity = accel * constants.dt;
        let expected_position = sim.star.position + expected_velocity * constants.dt;
        sim.step();
        assert_eq!(sim.star.velocity, expected_velocity);
        assert_eq!(sim.star.position, expected_position);
    }

    #[test]
    fn black_hole_is_never_integrated() {
        let mut sim = SimulationState::new();
        let hole = sim.black_hole;
        for _ in 0..100 {
            sim.step();
        }
        assert_eq!(sim.black_hole, hole, "the hole is pinned");
        assert_eq!(sim.black_hole.position, DVec3::ZERO);
    }

    #[test]
    fn tick_counts_steps() {
        let mut sim = SimulationState::new();
        sim.step();
        sim.step();
        sim.step();
        assert_eq!(sim.tick(), 3);
    }
}
