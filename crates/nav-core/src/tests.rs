//! Unit tests for nav-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CityId, CountryId, EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CityId(1_036_533_631) > CityId(1_036_074_917));
        assert!(CountryId(0) < CountryId(1));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CityId::INVALID.0, u64::MAX);
        assert_eq!(CountryId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert!(!CountryId::default().is_valid());
        assert!(CountryId(3).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(CityId(7).to_string(), "CityId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    const MELBOURNE:    GeoPoint = GeoPoint { lat: -37.8136, lon: 144.9631 };
    const KUALA_LUMPUR: GeoPoint = GeoPoint { lat: 3.1478, lon: 101.6953 };

    #[test]
    fn zero_distance() {
        assert_eq!(MELBOURNE.distance_km(MELBOURNE), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn melbourne_to_kuala_lumpur() {
        let d = MELBOURNE.distance_km(KUALA_LUMPUR);
        assert!((d - 6_368.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let half = std::f64::consts::PI * crate::EARTH_RADIUS_KM;
        assert!((a.distance_km(b) - half).abs() < 1e-6);
    }

    #[test]
    fn chord_matches_unit_vectors() {
        let [x1, y1, z1] = MELBOURNE.unit_vector();
        let [x2, y2, z2] = KUALA_LUMPUR.unit_vector();
        let chord = ((x1 - x2).powi(2) + (y1 - y2).powi(2) + (z1 - z2).powi(2)).sqrt();
        let expected = GeoPoint::chord_for_km(MELBOURNE.distance_km(KUALA_LUMPUR));
        assert!((chord - expected).abs() < 1e-9, "{chord} vs {expected}");
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.5000, -2.2500)");
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::GeoPoint;

    fn point() -> impl Strategy<Value = GeoPoint> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in point(), b in point()) {
            let ab = a.distance_km(b);
            let ba = b.distance_km(a);
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn distance_is_finite_and_bounded(a in point(), b in point()) {
            let d = a.distance_km(b);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * crate::EARTH_RADIUS_KM + 1e-6);
        }

        #[test]
        fn self_distance_is_zero(a in point()) {
            prop_assert_eq!(a.distance_km(a), 0.0);
        }
    }
}
