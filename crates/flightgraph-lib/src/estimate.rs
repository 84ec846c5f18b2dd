//! Distance-based fare and flight-time estimates.
//!
//! The dataset loader uses these to fill route rows that carry a distance but
//! omit the estimated cost or duration columns.

/// Fixed part of every fare.
const BASE_FARE: f64 = 25.0;

/// Ground time added to every flight, in hours.
const BASE_DURATION_HOURS: f64 = 1.0;

/// Average cruise speed in km/h.
const CRUISE_SPEED_KMH: f64 = 800.0;

/// Per-kilometre rate by distance band.
fn rate_per_km(distance_km: f64) -> f64 {
    if distance_km < 600.0 {
        0.19
    } else if distance_km < 1000.0 {
        0.20
    } else if distance_km < 1500.0 {
        0.22
    } else {
        0.25
    }
}

/// Estimated ticket price for a flight of `distance_km`, rounded up to a whole unit.
pub fn estimate_cost(distance_km: f64) -> f64 {
    (BASE_FARE + distance_km * rate_per_km(distance_km)).ceil()
}

/// Estimated flight time in hours for a flight of `distance_km`.
pub fn estimate_duration(distance_km: f64) -> f64 {
    BASE_DURATION_HOURS + distance_km / CRUISE_SPEED_KMH
}
