use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, FromRow)]
pub struct Driver {
    pub driver_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub address_region: Option<String>,
    pub address_province: Option<String>,
    pub address_city: Option<String>,
    pub address_barangay: Option<String>,
    pub address_street: Option<String>,
    pub phone_number: Option<String>,
    pub license_number: String,
    pub license_expiration_date: NaiveDate,
    pub license_status: String,
    pub vehicle_ownership: Option<String>,
    pub vehicle_plate_number: Option<String>,
    pub qr_code: Option<String>,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverDto {
    #[validate(length(min = 2, max = 50, message = "First name must be at least 2 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 50, message = "Last name must be at least 2 characters"))]
    pub last_name: String,
    pub middle_name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub address_region: Option<String>,
    pub address_province: Option<String>,
    pub address_city: Option<String>,
    pub address_barangay: Option<String>,
    pub address_street: Option<String>,
    pub phone_number: Option<String>,
    #[validate(length(min = 1, max = 50, message = "License number is required"))]
    pub license_number: String,
    pub license_expiration_date: NaiveDate,
    /// Defaults to `active`; validated against the status set in the service.
    pub license_status: Option<String>,
    pub vehicle_ownership: Option<String>,
    pub vehicle_plate_number: Option<String>,
    pub qr_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedDriver {
    pub driver_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
}
