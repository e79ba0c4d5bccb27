//! Circle-circle collision

use glam::Vec2;

/// True when the circles overlap. Touching exactly is not a hit.
#[inline]
pub fn collides(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    pos_a.distance(pos_b) < radius_a + radius_b
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap() {
        assert!(collides(Vec2::ZERO, 20.0, Vec2::new(10.0, 0.0), 5.0));
    }

    #[test]
    fn test_apart() {
        assert!(!collides(Vec2::ZERO, 20.0, Vec2::new(100.0, 0.0), 5.0));
    }

    #[test]
    fn test_touching_is_not_a_hit() {
        assert!(!collides(Vec2::ZERO, 20.0, Vec2::new(25.0, 0.0), 5.0));
        assert!(collides(Vec2::ZERO, 20.0, Vec2::new(24.999, 0.0), 5.0));
    }

    #[test]
    fn test_coincident_centers() {
        let p = Vec2::new(320.0, 240.0);
        assert!(collides(p, 20.0, p, 5.0));
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0, ra in 0.0f32..100.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0, rb in 0.0f32..100.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(collides(a, ra, b, rb), collides(b, rb, a, ra));
        }
    }
}
