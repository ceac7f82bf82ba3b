use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// List row: feedback columns plus joined ride/driver/passenger summaries.
#[derive(Debug, Serialize, FromRow)]
pub struct FeedbackSummary {
    pub feedback_id: i64,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub ride_id: i64,
    pub pickup_address: Option<String>,
    pub dropoff_address: Option<String>,
    pub ride_started_at: Option<DateTime<Utc>>,
    pub ride_completed_at: Option<DateTime<Utc>>,
    pub driver_id: i64,
    pub driver_first_name: String,
    pub driver_last_name: String,
    pub license_number: String,
    pub passenger_id: i64,
    pub passenger_first_name: String,
    pub passenger_last_name: String,
    pub passenger_email: String,
}

#[derive(Debug, Serialize, FromRow)]
pub struct FeedbackDetail {
    pub feedback_id: i64,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub ride_id: i64,
    pub pickup_latitude: Option<f64>,
    pub pickup_longitude: Option<f64>,
    pub pickup_address: Option<String>,
    pub dropoff_latitude: Option<f64>,
    pub dropoff_longitude: Option<f64>,
    pub dropoff_address: Option<String>,
    pub ride_distance_km: Option<f64>,
    pub ride_duration_minutes: Option<i32>,
    pub ride_started_at: Option<DateTime<Utc>>,
    pub ride_completed_at: Option<DateTime<Utc>>,
    pub driver_id: i64,
    pub driver_first_name: String,
    pub driver_last_name: String,
    pub driver_middle_name: Option<String>,
    pub driver_phone: Option<String>,
    pub license_number: String,
    pub vehicle_plate_number: Option<String>,
    pub passenger_id: i64,
    pub passenger_first_name: String,
    pub passenger_last_name: String,
    pub passenger_middle_name: Option<String>,
    pub passenger_phone: Option<String>,
    pub passenger_email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeedbackDto {
    pub ride_id: i64,
    pub passenger_id: i64,
    pub driver_id: i64,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    #[validate(length(max = 1000, message = "Comment cannot exceed 1000 characters"))]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedFeedback {
    pub feedback_id: i64,
}
