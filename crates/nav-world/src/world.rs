//! The `World` catalog: every country, every city, and the indices used to
//! find them.
//!
//! Lookups are explicit methods on a `World` value passed by reference; there
//! are no global registries.  Once ingestion has finished the catalog is
//! read-only and can be shared across threads (`World: Sync`).

use rustc_hash::FxHashMap;

use nav_core::{CityId, CountryId};

use crate::{City, Country, WorldError, WorldResult};

// ── CityLookup ────────────────────────────────────────────────────────────────

/// Outcome of resolving a display name to a city.
///
/// Ambiguity is surfaced rather than resolved: the caller decides which of
/// several same-named cities was meant.
#[derive(Debug)]
pub enum CityLookup<'w> {
    Unique(&'w City),
    /// Two or more matches, in insertion order.
    Ambiguous(Vec<&'w City>),
    Missing,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Location of a city inside the ownership tree.
#[derive(Copy, Clone, Debug)]
struct CitySlot {
    country: CountryId,
    slot:    u32,
}

/// Owner of all countries (and, through them, all cities).
#[derive(Default, Debug)]
pub struct World {
    countries:       Vec<Country>,
    country_by_name: FxHashMap<String, CountryId>,
    city_slots:      FxHashMap<CityId, CitySlot>,
    cities_by_name:  FxHashMap<String, Vec<CityId>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Attach `city` to the country called `country_name`, creating the
    /// country (with `iso3`) on first reference.
    ///
    /// A later call for an existing country name appends to that country;
    /// its `iso3` argument is ignored.
    ///
    /// # Errors
    ///
    /// [`WorldError::DuplicateCity`] if a city with the same id is already
    /// registered.  The world is left unchanged.
    pub fn add_city(&mut self, city: City, country_name: &str, iso3: &str) -> WorldResult<CityId> {
        let id = city.id;
        if self.city_slots.contains_key(&id) {
            return Err(WorldError::DuplicateCity(id));
        }

        let country_id = match self.country_by_name.get(country_name) {
            Some(&cid) => cid,
            None => {
                let cid = CountryId(self.countries.len() as u32);
                self.countries
                    .push(Country::new(cid, country_name.to_owned(), iso3.to_owned()));
                self.country_by_name.insert(country_name.to_owned(), cid);
                cid
            }
        };

        let name = city.name.clone();
        let slot = self.countries[country_id.index()].push(city);
        self.city_slots
            .insert(id, CitySlot { country: country_id, slot: slot as u32 });
        self.cities_by_name.entry(name).or_default().push(id);
        Ok(id)
    }

    // ── City lookups ──────────────────────────────────────────────────────

    pub fn city(&self, id: CityId) -> Option<&City> {
        let loc = self.city_slots.get(&id)?;
        self.countries
            .get(loc.country.index())?
            .city_at(loc.slot as usize)
    }

    /// Every city called exactly `name`, in insertion order.
    pub fn cities_named(&self, name: &str) -> Vec<&City> {
        self.cities_by_name
            .get(name)
            .map(|ids| ids.iter().filter_map(|&id| self.city(id)).collect())
            .unwrap_or_default()
    }

    pub fn resolve_city(&self, name: &str) -> CityLookup<'_> {
        let mut matches = self.cities_named(name);
        match matches.len() {
            0 => CityLookup::Missing,
            1 => CityLookup::Unique(matches.remove(0)),
            _ => CityLookup::Ambiguous(matches),
        }
    }

    /// All cities, country by country, each in insertion order.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.countries.iter().flat_map(|c| c.cities().iter())
    }

    /// All primary cities of the world, in the same order as [`cities`](Self::cities).
    pub fn primary_cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.countries.iter().flat_map(|c| c.primary_cities())
    }

    pub fn city_count(&self) -> usize {
        self.city_slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.city_slots.is_empty()
    }

    // ── Country lookups ───────────────────────────────────────────────────

    pub fn country(&self, id: CountryId) -> Option<&Country> {
        self.countries.get(id.index())
    }

    pub fn country_named(&self, name: &str) -> Option<&Country> {
        self.country_by_name
            .get(name)
            .and_then(|&id| self.country(id))
    }

    /// The country owning `city`, or `None` if the city was never attached
    /// to this world.
    pub fn country_of(&self, city: &City) -> Option<&Country> {
        self.country(city.country())
    }

    /// All countries in creation order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }
}
