use glam::DVec3;

use crate::constants::{BLACK_HOLE_MASS, STAR_MASS};

/// A point mass with kinematic state.
///
/// Physics runs in f64; positions are converted to f32 only at the render
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: DVec3,
    pub velocity: DVec3,
    /// Mass in kg. Must be positive.
    pub mass: f64,
}

impl Body {
    pub fn new(position: DVec3, velocity: DVec3, mass: f64) -> Self {
        debug_assert!(mass > 0.0, "body mass must be positive");
        Self {
            position,
            velocity,
            mass,
        }
    }

    /// The central black hole: pinned at the origin, never integrated.
    pub fn black_hole() -> Self {
        Self::new(DVec3::ZERO, DVec3::ZERO, BLACK_HOLE_MASS)
    }

    /// The star in its initial state, falling in along -Z.
    pub fn star() -> Self {
        Self::new(
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::new(0.0, 0.0, -0.1),
            STAR_MASS,
        )
    }

    /// Distance from the origin (the black hole's fixed position).
    pub fn radial_distance(&self) -> f64 {
        self.position.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_hole_sits_at_origin() {
        let bh = Body::black_hole();
        assert_eq!(bh.position, DVec3::ZERO);
        assert_eq!(bh.velocity, DVec3::ZERO);
        assert!(bh.mass > 0.0);
    }

    #[test]
    fn star_starts_on_positive_z() {
        let star = Body::star();
        assert_eq!(star.position, DVec3::new(0.0, 0.0, 10.0));
        assert!(star.velocity.z < 0.0, "star starts falling inward");
    }

    #[test]
    fn radial_distance_is_origin_distance() {
        let b = Body::new(DVec3::new(3.0, 0.0, 4.0), DVec3::ZERO, 1.0);
        assert_eq!(b.radial_distance(), 5.0);
    }
}
