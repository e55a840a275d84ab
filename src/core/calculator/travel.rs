//! Great-circle distance and travel-time estimate between two points.

use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use serde::Serialize;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TripLeg {
    Pickup,
    Dropoff,
}

impl TripLeg {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripLeg::Pickup => "pickup",
            TripLeg::Dropoff => "dropoff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelEstimate {
    pub distance_km: f64,
    pub eta_minutes: i64,
    pub average_speed_kmh: f64,
}

impl TravelEstimate {
    /// Message shown to the driver after choosing a location.
    pub fn advisory(&self) -> String {
        format!(
            "It will take {} minutes at avg speed of {} km/h.",
            self.eta_minutes, self.average_speed_kmh
        )
    }
}

/// Haversine distance in kilometres.
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push antipodal points just past 1
    let h = h.clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn estimate_travel(
    origin: &Coordinate,
    destination: &Coordinate,
    average_speed_kmh: f64,
) -> AppResult<TravelEstimate> {
    if !average_speed_kmh.is_finite() || average_speed_kmh <= 0.0 {
        return Err(AppError::InvalidSpeed(average_speed_kmh));
    }

    let distance_km = haversine_km(origin, destination);
    let eta_minutes = (distance_km / average_speed_kmh * 60.0).round() as i64;

    Ok(TravelEstimate {
        distance_km,
        eta_minutes,
        average_speed_kmh,
    })
}

/// Estimate for a freshly selected pickup or dropoff location.
///
/// Without a known current position there is nothing to measure from and
/// no estimate is produced.
pub fn estimate_for_selection(
    current: Option<&Coordinate>,
    leg: TripLeg,
    selected: &Coordinate,
    average_speed_kmh: f64,
) -> AppResult<Option<TravelEstimate>> {
    let Some(current) = current else {
        tracing::debug!(leg = leg.as_str(), "no current position, skipping estimate");
        return Ok(None);
    };

    estimate_travel(current, selected, average_speed_kmh).map(Some)
}
