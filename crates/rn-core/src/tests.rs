//! Unit tests for rn-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Location;

    #[test]
    fn clamp_is_identity_in_domain() {
        let loc = Location::new(48.745, 9.107);
        assert_eq!(loc.clamped(), loc);
    }

    #[test]
    fn latitude_clamps_to_89() {
        assert_eq!(Location::new(90.0, 0.0).clamped().lat, 89.0);
        assert_eq!(Location::new(-123.4, 0.0).clamped().lat, -89.0);
    }

    #[test]
    fn longitude_wraps_through_antimeridian() {
        assert_eq!(Location::new(0.0, 185.0).clamped().lon, -175.0);
        assert_eq!(Location::new(0.0, -200.0).clamped().lon, 160.0);
        // 180 itself is outside the half-open domain and wraps to -180.
        assert_eq!(Location::new(0.0, 180.0).clamped().lon, -180.0);
        assert_eq!(Location::new(0.0, 540.0).clamped().lon, -180.0);
    }

    #[test]
    fn sq_degree_dist() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(3.0, 4.0);
        assert_eq!(a.sq_degree_dist(b), 25.0);
        assert_eq!(a.sq_degree_dist(a), 0.0);
    }

    #[test]
    fn sq_degree_dist_wraps_longitude() {
        let east = Location::new(0.0, 179.5);
        let west = Location::new(0.0, -179.5);
        // Short way around: 1 degree, not 359.
        assert!((east.sq_degree_dist(west) - 1.0).abs() < 1e-9);
    }
}
