//! The `Country` entity.

use std::fmt;

use nav_core::CountryId;

use crate::{City, CityType};

/// A country and the cities it owns, in insertion order.
///
/// Countries are created and filled by [`World`](crate::World); the only
/// way to attach a city is [`World::add_city`](crate::World::add_city),
/// which keeps the city's back-reference consistent.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Country {
    pub id:   CountryId,
    pub name: String,
    /// ISO 3166-1 alpha-3 code, e.g. `"AUS"`.
    pub iso3: String,
    cities:   Vec<City>,
}

impl Country {
    pub(crate) fn new(id: CountryId, name: String, iso3: String) -> Self {
        Self { id, name, iso3, cities: Vec::new() }
    }

    /// Take ownership of `city`, set its back-reference, and return its slot.
    pub(crate) fn push(&mut self, mut city: City) -> usize {
        city.country = self.id;
        self.cities.push(city);
        self.cities.len() - 1
    }

    #[inline]
    pub(crate) fn city_at(&self, slot: usize) -> Option<&City> {
        self.cities.get(slot)
    }

    /// All cities, in insertion order.
    #[inline]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Cities whose type is one of `types`, in insertion order.
    pub fn cities_of_type<'a>(&'a self, types: &'a [CityType]) -> impl Iterator<Item = &'a City> + 'a {
        self.cities.iter().filter(move |c| types.contains(&c.city_type))
    }

    pub fn primary_cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.iter().filter(|c| c.is_primary())
    }

    /// Cities sorted from most to least populous.  Equal populations keep
    /// insertion order.
    pub fn cities_by_population(&self) -> Vec<&City> {
        let mut sorted: Vec<&City> = self.cities.iter().collect();
        sorted.sort_by(|a, b| b.population.cmp(&a.population));
        sorted
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
