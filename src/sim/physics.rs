//! Flyer integration
//!
//! Semi-implicit Euler with a one-frame step: velocity first, then position.

use super::state::Flyer;

/// Apply gravity to the flyer's velocity, then move it by the new velocity
#[inline]
pub fn integrate(flyer: &mut Flyer, gravity: f32) {
    flyer.vel += gravity;
    flyer.pos.y += flyer.vel;
}

/// Where the flyer's bottom edge will be after the next `integrate`
#[inline]
pub fn predicted_bottom(flyer: &Flyer, gravity: f32) -> f32 {
    flyer.bottom() + flyer.vel + gravity
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_single_step_from_rest() {
        let mut flyer = Flyer {
            pos: Vec2::new(50.0, 150.0),
            size: Vec2::splat(34.0),
            vel: 0.0,
        };
        integrate(&mut flyer, 0.5);
        assert_eq!(flyer.vel, 0.5);
        assert_eq!(flyer.pos.y, 150.5);
        assert_eq!(flyer.pos.x, 50.0);
    }

    #[test]
    fn test_acceleration_before_integration() {
        let mut flyer = Flyer {
            pos: Vec2::new(50.0, 200.0),
            size: Vec2::splat(34.0),
            vel: -8.0,
        };
        integrate(&mut flyer, 0.5);
        assert_eq!(flyer.vel, -7.5);
        assert_eq!(flyer.pos.y, 192.5);
        integrate(&mut flyer, 0.5);
        assert_eq!(flyer.vel, -7.0);
        assert_eq!(flyer.pos.y, 185.5);
    }

    #[test]
    fn test_predicted_bottom_matches_step() {
        let mut flyer = Flyer {
            pos: Vec2::new(50.0, 100.0),
            size: Vec2::splat(34.0),
            vel: 3.0,
        };
        let predicted = predicted_bottom(&flyer, 0.5);
        integrate(&mut flyer, 0.5);
        assert_eq!(flyer.bottom(), predicted);
    }
}
