use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// List row: ride columns plus joined driver/passenger summary fields.
#[derive(Debug, Serialize, FromRow)]
pub struct RideSummary {
    pub ride_id: i64,
    pub pickup_latitude: Option<f64>,
    pub pickup_longitude: Option<f64>,
    pub pickup_address: Option<String>,
    pub dropoff_latitude: Option<f64>,
    pub dropoff_longitude: Option<f64>,
    pub dropoff_address: Option<String>,
    pub ride_distance_km: Option<f64>,
    pub ride_duration_minutes: Option<i32>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub driver_id: i64,
    pub driver_first_name: String,
    pub driver_last_name: String,
    pub license_number: String,
    pub vehicle_plate_number: Option<String>,
    pub passenger_id: i64,
    pub passenger_first_name: String,
    pub passenger_last_name: String,
    pub passenger_phone: Option<String>,
}

/// Detail row: everything in the summary plus the wider driver/passenger
/// projection.
#[derive(Debug, Serialize, FromRow)]
pub struct RideDetail {
    pub ride_id: i64,
    pub pickup_latitude: Option<f64>,
    pub pickup_longitude: Option<f64>,
    pub pickup_address: Option<String>,
    pub dropoff_latitude: Option<f64>,
    pub dropoff_longitude: Option<f64>,
    pub dropoff_address: Option<String>,
    pub ride_distance_km: Option<f64>,
    pub ride_duration_minutes: Option<i32>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub driver_id: i64,
    pub driver_first_name: String,
    pub driver_last_name: String,
    pub driver_middle_name: Option<String>,
    pub driver_phone: Option<String>,
    pub license_number: String,
    pub vehicle_plate_number: Option<String>,
    pub vehicle_ownership: Option<String>,
    pub passenger_id: i64,
    pub passenger_first_name: String,
    pub passenger_last_name: String,
    pub passenger_middle_name: Option<String>,
    pub passenger_phone: Option<String>,
    pub passenger_email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRideDto {
    pub driver_id: i64,
    pub passenger_id: i64,
    #[validate(range(min = -90.0, max = 90.0, message = "Pickup latitude must be between -90 and 90"))]
    pub pickup_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Pickup longitude must be between -180 and 180"))]
    pub pickup_longitude: Option<f64>,
    pub pickup_address: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Dropoff latitude must be between -90 and 90"))]
    pub dropoff_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Dropoff longitude must be between -180 and 180"))]
    pub dropoff_longitude: Option<f64>,
    pub dropoff_address: Option<String>,
    #[validate(range(min = 0.0, message = "Ride distance cannot be negative"))]
    pub ride_distance_km: Option<f64>,
    #[validate(range(min = 0, message = "Ride duration cannot be negative"))]
    pub ride_duration_minutes: Option<i32>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct CreatedRide {
    pub ride_id: i64,
}
