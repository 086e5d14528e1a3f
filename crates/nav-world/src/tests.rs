//! Unit tests for nav-world.
//!
//! All tests build small synthetic worlds; no dataset file is required.

#[cfg(test)]
mod helpers {
    use nav_core::{CityId, GeoPoint};
    use crate::{City, CityType, World};

    pub fn city(name: &str, lat: f64, lon: f64, ty: CityType, pop: u64, id: u64) -> City {
        City::new(name, GeoPoint::new(lat, lon), ty, pop, CityId(id))
    }

    /// Melbourne, Canberra, Sydney (Australia) and Kuala Lumpur (Malaysia).
    pub fn oceania() -> World {
        let mut w = World::new();
        w.add_city(city("Melbourne", -37.8136, 144.9631, CityType::Admin, 4_529_500, 1), "Australia", "AUS").unwrap();
        w.add_city(city("Canberra", -35.2931, 149.1269, CityType::Primary, 426_704, 2), "Australia", "AUS").unwrap();
        w.add_city(city("Sydney", -33.8688, 151.2093, CityType::Admin, 4_840_600, 3), "Australia", "AUS").unwrap();
        w.add_city(city("Kuala Lumpur", 3.1478, 101.6953, CityType::Primary, 8_639_000, 4), "Malaysia", "MYS").unwrap();
        w
    }
}

// ── City & CityType ───────────────────────────────────────────────────────────

#[cfg(test)]
mod city {
    use nav_core::CountryId;
    use crate::CityType;
    use super::helpers::city;

    #[test]
    fn flag_mapping() {
        assert_eq!(CityType::from_flag("primary"), CityType::Primary);
        assert_eq!(CityType::from_flag(" admin "), CityType::Admin);
        assert_eq!(CityType::from_flag("minor"), CityType::Minor);
        assert_eq!(CityType::from_flag(""), CityType::None);
        assert_eq!(CityType::from_flag("1992000"), CityType::Other("1992000".into()));
        assert_eq!(CityType::Other("x".into()).to_string(), "x");
    }

    #[test]
    fn new_city_is_unattached() {
        let c = city("Perth", -31.9505, 115.8605, CityType::Admin, 2_039_200, 9);
        assert!(!c.is_attached());
        assert_eq!(c.country(), CountryId::INVALID);
    }

    #[test]
    fn equality_is_by_id() {
        let a = city("Victoria", 48.4284, -123.3656, CityType::Admin, 1, 10);
        let b = city("Victoria", -4.6167, 55.45, CityType::Primary, 1, 11);
        let a2 = city("Renamed", 0.0, 0.0, CityType::None, 0, 10);
        assert_ne!(a, b);
        assert_eq!(a, a2);
    }

    #[test]
    fn distance_symmetric() {
        let a = city("A", 10.0, 20.0, CityType::None, 0, 1);
        let b = city("B", -5.0, 30.0, CityType::None, 0, 2);
        assert_eq!(a.distance_km(&a), 0.0);
        assert_eq!(a.distance_km(&b), b.distance_km(&a));
    }
}

// ── World catalog ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod world {
    use nav_core::CityId;
    use crate::{CityLookup, CityType, World, WorldError};
    use super::helpers::{city, oceania};

    #[test]
    fn countries_are_reused_by_name() {
        let w = oceania();
        assert_eq!(w.countries().len(), 2);
        assert_eq!(w.city_count(), 4);

        let aus = w.country_named("Australia").unwrap();
        assert_eq!(aus.iso3, "AUS");
        let names: Vec<_> = aus.cities().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Melbourne", "Canberra", "Sydney"]);
    }

    #[test]
    fn every_city_points_back_to_its_owner() {
        let w = oceania();
        for country in w.countries() {
            for c in country.cities() {
                assert!(c.is_attached());
                assert_eq!(w.country_of(c).unwrap().id, country.id);
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        let w = oceania();
        assert_eq!(w.city(CityId(4)).unwrap().name, "Kuala Lumpur");
        assert!(w.city(CityId(99)).is_none());
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut w = oceania();
        let dup = city("Impostor", 0.0, 0.0, CityType::None, 0, 2);
        let err = w.add_city(dup, "Nowhere", "NWH").unwrap_err();
        assert!(matches!(err, WorldError::DuplicateCity(CityId(2))));
        // No country created for the rejected row.
        assert!(w.country_named("Nowhere").is_none());
        assert_eq!(w.city_count(), 4);
    }

    #[test]
    fn ambiguous_names_are_surfaced() {
        let mut w = World::new();
        w.add_city(city("Victoria", 48.4284, -123.3656, CityType::Admin, 1, 1), "Canada", "CAN").unwrap();
        w.add_city(city("Victoria", -4.6167, 55.45, CityType::Primary, 1, 2), "Seychelles", "SYC").unwrap();
        w.add_city(city("Ottawa", 45.4247, -75.695, CityType::Primary, 1, 3), "Canada", "CAN").unwrap();

        match w.resolve_city("Victoria") {
            CityLookup::Ambiguous(found) => {
                let countries: Vec<_> = found
                    .iter()
                    .map(|c| w.country_of(c).unwrap().name.as_str())
                    .collect();
                assert_eq!(countries, ["Canada", "Seychelles"]);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
        assert!(matches!(w.resolve_city("Ottawa"), CityLookup::Unique(c) if c.id == CityId(3)));
        assert!(matches!(w.resolve_city("Atlantis"), CityLookup::Missing));
    }

    #[test]
    fn cities_sorted_by_population() {
        let w = oceania();
        let aus = w.country_named("Australia").unwrap();
        let names: Vec<_> = aus
            .cities_by_population()
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Sydney", "Melbourne", "Canberra"]);
    }

    #[test]
    fn filter_by_type() {
        let w = oceania();
        let aus = w.country_named("Australia").unwrap();
        let admin: Vec<_> = aus
            .cities_of_type(&[CityType::Admin])
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(admin, ["Melbourne", "Sydney"]);

        let primaries: Vec<_> = w.primary_cities().map(|c| c.name.as_str()).collect();
        assert_eq!(primaries, ["Canberra", "Kuala Lumpur"]);
    }

    #[test]
    fn empty_world() {
        let w = World::new();
        assert!(w.is_empty());
        assert_eq!(w.cities().count(), 0);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use nav_core::CityId;
    use crate::loader::parse_population;
    use crate::{CityType, LoadSummary, WorldError, load_world_reader, load_world_reader_with_summary};

    const CSV: &str = "\
city,city_ascii,lat,lng,country,iso2,iso3,admin_name,capital,population,id
Melbourne,Melbourne,-37.8136,144.9631,Australia,AU,AUS,Victoria,admin,4529500,1036533631
Canberra,Canberra,-35.2931,149.1269,Australia,AU,AUS,ACT,primary,,1036142029
Kuala Lumpur,Kuala Lumpur,3.1478,101.6953,Malaysia,MY,MYS,Kuala Lumpur,primary,8639000.0,1458988644
Broken,Broken,north,144.0,Australia,AU,AUS,Victoria,,100,1036000001
Sydney,Sydney,-33.8688,151.2093,Australia,AU,AUS,New South Wales,admin,n/a,1036074917
Again,Again,0.0,0.0,Australia,AU,AUS,,,,1036533631
";

    #[test]
    fn loads_rows_and_countries() {
        let (w, summary) = load_world_reader_with_summary(CSV.as_bytes()).unwrap();
        assert_eq!(summary, LoadSummary { loaded: 4, skipped: 2 });
        assert_eq!(w.countries().len(), 2);

        let kl = w.city(CityId(1_458_988_644)).unwrap();
        assert_eq!(kl.name, "Kuala Lumpur");
        assert_eq!(kl.city_type, CityType::Primary);
        assert_eq!(kl.population, 8_639_000);
        assert_eq!(w.country_of(kl).unwrap().iso3, "MYS");
    }

    #[test]
    fn bad_population_defaults_to_zero() {
        let w = load_world_reader(CSV.as_bytes()).unwrap();
        assert_eq!(w.city(CityId(1_036_142_029)).unwrap().population, 0);
        assert_eq!(w.city(CityId(1_036_074_917)).unwrap().population, 0);
    }

    #[test]
    fn duplicate_id_keeps_first() {
        let w = load_world_reader(CSV.as_bytes()).unwrap();
        assert_eq!(w.city(CityId(1_036_533_631)).unwrap().name, "Melbourne");
        assert!(w.cities_named("Again").is_empty());
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "city_ascii,lat,lng,country,capital,population,id\nX,0,0,Y,,1,1\n";
        let err = load_world_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, WorldError::MissingColumn("iso3")));
    }

    #[test]
    fn population_parsing() {
        assert_eq!(parse_population("42"), 42);
        assert_eq!(parse_population(" 42 "), 42);
        assert_eq!(parse_population("42.9"), 42);
        assert_eq!(parse_population(""), 0);
        assert_eq!(parse_population("-5"), 0);
        assert_eq!(parse_population("lots"), 0);
    }
}
