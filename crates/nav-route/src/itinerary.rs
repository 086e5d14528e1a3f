//! Ordered sequences of cities to visit.

use std::fmt;

use nav_world::City;

/// An ordered list of cities, borrowed from the [`World`](nav_world::World)
/// that owns them.
///
/// May be empty or hold a single city; both have a total distance of 0.
/// Equality compares city ids position by position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Itinerary<'w> {
    cities: Vec<&'w City>,
}

impl<'w> Itinerary<'w> {
    pub fn new(cities: Vec<&'w City>) -> Self {
        Self { cities }
    }

    /// The two-city itinerary `from → to`.
    pub fn direct(from: &'w City, to: &'w City) -> Self {
        Self { cities: vec![from, to] }
    }

    #[inline]
    pub fn cities(&self) -> &[&'w City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn first(&self) -> Option<&'w City> {
        self.cities.first().copied()
    }

    pub fn last(&self) -> Option<&'w City> {
        self.cities.last().copied()
    }

    /// Consecutive `(departure, arrival)` pairs.
    pub fn legs(&self) -> impl Iterator<Item = (&'w City, &'w City)> + '_ {
        self.cities.windows(2).map(|w| (w[0], w[1]))
    }

    /// Sum of great-circle distances between consecutive cities, in km.
    pub fn total_distance_km(&self) -> f64 {
        self.legs().map(|(a, b)| a.distance_km(b)).sum()
    }

    /// Add `city` at the end.
    pub fn append(&mut self, city: &'w City) {
        self.cities.push(city);
    }

    /// Insert `city` at the position (0 ..= len) giving the smallest total
    /// distance, and return that position.
    ///
    /// Ties keep the lowest position.  Each candidate is scored with a full
    /// pass over the would-be sequence, so the cost is O(n²).
    pub fn insert_minimizing_distance(&mut self, city: &'w City) -> usize {
        let mut best_at = 0;
        let mut best_km = f64::INFINITY;
        for at in 0..=self.cities.len() {
            let km = self.total_distance_with(city, at);
            if km < best_km {
                best_km = km;
                best_at = at;
            }
        }
        self.cities.insert(best_at, city);
        best_at
    }

    /// Total distance of the sequence with `city` inserted at `at`, without
    /// materialising it.  Summation order matches `total_distance_km`.
    fn total_distance_with(&self, city: &City, at: usize) -> f64 {
        let (head, tail) = self.cities.split_at(at);
        let virtual_seq = head
            .iter()
            .copied()
            .chain(std::iter::once(city))
            .chain(tail.iter().copied());

        let mut total = 0.0;
        let mut prev: Option<&City> = None;
        for c in virtual_seq {
            if let Some(p) = prev {
                total += p.distance_km(c);
            }
            prev = Some(c);
        }
        total
    }
}

impl<'w> FromIterator<&'w City> for Itinerary<'w> {
    fn from_iter<I: IntoIterator<Item = &'w City>>(iter: I) -> Self {
        Self { cities: iter.into_iter().collect() }
    }
}

/// `Melbourne -> Canberra -> Kuala Lumpur (6992 km)`
impl fmt::Display for Itinerary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(&city.name)?;
        }
        if !self.cities.is_empty() {
            f.write_str(" ")?;
        }
        write!(f, "({:.0} km)", self.total_distance_km())
    }
}
