//! Route the same trip with several vehicles and report their travel times.

use nav_world::{City, World};

use crate::{Itinerary, RouteResult, Vehicle, find_shortest_path};

/// One vehicle's answer for a trip.
#[derive(Clone, Debug)]
pub struct VehicleComparison<'w> {
    pub vehicle:   Vehicle,
    /// `None` when the destination is unreachable for this vehicle.
    pub itinerary: Option<Itinerary<'w>>,
    /// Total hours along `itinerary` for this vehicle.
    pub hours:     Option<f64>,
}

/// Route `from → to` once per vehicle, in the order given.
///
/// With the `parallel` feature the queries run on Rayon's thread pool; the
/// output order is the same either way.
pub fn compare_vehicles<'w>(
    world:    &'w World,
    vehicles: &[Vehicle],
    from:     &'w City,
    to:       &'w City,
) -> RouteResult<Vec<VehicleComparison<'w>>> {
    let run = |vehicle: &Vehicle| -> RouteResult<VehicleComparison<'w>> {
        let itinerary = find_shortest_path(world, vehicle, from, to)?;
        let hours = itinerary.as_ref().and_then(|it| vehicle.itinerary_hours(it));
        Ok(VehicleComparison { vehicle: *vehicle, itinerary, hours })
    };

    #[cfg(not(feature = "parallel"))]
    {
        vehicles.iter().map(run).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        vehicles.par_iter().map(run).collect()
    }
}
