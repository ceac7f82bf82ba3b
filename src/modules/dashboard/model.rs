use serde::Serialize;

/// Aggregate counts for the admin dashboard; keys stay camelCase to match
/// the API contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_passengers: i64,
    pub total_drivers: i64,
    pub total_rides: i64,
    pub total_admins: i64,
    /// Rides whose `started_at` falls on the server-local current date.
    pub today_rides: i64,
    /// Drivers with `license_status = 'active'`.
    pub active_drivers: i64,
}
