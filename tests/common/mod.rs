use ridedesk::config::jwt::JwtConfig;
use ridedesk::router::init_router;
use ridedesk::state::AppState;
use ridedesk::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "testpass123";

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig {
            secret: "integration-test-secret".to_string(),
            token_expiry: 3600,
        },
    };
    init_router(state)
}

pub fn generate_unique_username(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Insert an admin row directly; returns (id, username). Password is always
/// [`TEST_PASSWORD`].
pub async fn create_test_admin(pool: &PgPool, role: &str) -> (i64, String) {
    let username = generate_unique_username("admin");
    let hashed = hash_password(TEST_PASSWORD).unwrap();

    let admin_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO admins (username, first_name, last_name, email, password_hash, role, is_active) \
         VALUES ($1, 'Test', 'Admin', $2, $3, $4, TRUE) \
         RETURNING admin_id",
    )
    .bind(&username)
    .bind(generate_unique_email())
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    (admin_id, username)
}

#[allow(dead_code)]
pub async fn create_test_passenger(pool: &PgPool) -> i64 {
    let hashed = hash_password(TEST_PASSWORD).unwrap();

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO passengers (first_name, last_name, date_of_birth, username, email, password_hash) \
         VALUES ('Test', 'Passenger', '1995-06-15', $1, $2, $3) \
         RETURNING passenger_id",
    )
    .bind(generate_unique_username("passenger"))
    .bind(generate_unique_email())
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a driver row directly; returns (id, license_number).
#[allow(dead_code)]
pub async fn create_test_driver(pool: &PgPool) -> (i64, String) {
    let license_number = format!("LIC-{}", Uuid::new_v4());

    let driver_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO drivers (first_name, last_name, date_of_birth, license_number, license_expiration_date) \
         VALUES ('Test', 'Driver', '1990-01-01', $1, '2030-01-01') \
         RETURNING driver_id",
    )
    .bind(&license_number)
    .fetch_one(pool)
    .await
    .unwrap();

    (driver_id, license_number)
}

#[allow(dead_code)]
pub async fn create_test_ride(pool: &PgPool, driver_id: i64, passenger_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO rides (driver_id, passenger_id, pickup_address, started_at) \
         VALUES ($1, $2, 'Test pickup', NOW()) \
         RETURNING ride_id",
    )
    .bind(driver_id)
    .bind(passenger_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
