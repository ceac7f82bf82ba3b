//! CLI bootstrap commands.
//!
//! Super admins are created from the command line, not through the API, so a
//! fresh deployment has a way to mint its first account. Arguments not given
//! as flags are prompted for interactively; the password prompt never echoes.

use clap::{Args, Parser, Subcommand};
use dialoguer::{Input, Password};
use sqlx::PgPool;

use crate::modules::admins::service::{ADMIN_EMAIL, ADMIN_SCHEMA, ADMIN_USERNAME};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;
use crate::utils::schema::ensure_unique;

#[derive(Parser)]
#[command(name = "ridedesk")]
#[command(about = "RideDesk API - ride-hailing administration backend", long_about = None)]
pub struct Cli {
    /// With no subcommand, the API server starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a super admin account
    CreateAdmin(CreateAdminArgs),
}

#[derive(Args)]
pub struct CreateAdminArgs {
    /// Username for the new account
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// First name
    #[arg(short = 'f', long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(short = 'l', long)]
    pub last_name: Option<String>,

    /// Email address
    #[arg(short = 'e', long)]
    pub email: Option<String>,

    /// Password (will be prompted securely if not provided)
    #[arg(short = 'p', long)]
    pub password: Option<String>,
}

pub async fn handle_create_admin(pool: &PgPool, args: CreateAdminArgs) {
    let username = args.username.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Username")
            .interact_text()
            .expect("Failed to read username")
    });

    let first_name = args.first_name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("First name")
            .interact_text()
            .expect("Failed to read first name")
    });

    let last_name = args.last_name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Last name")
            .interact_text()
            .expect("Failed to read last name")
    });

    let email = args.email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    let password = args.password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_super_admin(pool, &username, &first_name, &last_name, &email, &password).await {
        Ok(admin_id) => {
            println!("\n✅ Super admin created successfully!");
            println!("   ID: {}", admin_id);
            println!("   Username: {}", username);
            println!("   Email: {}", email);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating super admin: {}", e.message());
            std::process::exit(1);
        }
    }
}

pub async fn create_super_admin(
    pool: &PgPool,
    username: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<i64, AppError> {
    ensure_unique(pool, &ADMIN_SCHEMA, &ADMIN_USERNAME, username, None).await?;
    ensure_unique(pool, &ADMIN_SCHEMA, &ADMIN_EMAIL, email, None).await?;

    let password_hash = hash_password(password)?;

    let admin_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO admins (username, first_name, last_name, email, password_hash, role, is_active) \
         VALUES ($1, $2, $3, $4, $5, 'super_admin', TRUE) \
         RETURNING admin_id",
    )
    .bind(username)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await?;

    Ok(admin_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["ridedesk"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_create_admin_parses_flags() {
        let cli = Cli::try_parse_from([
            "ridedesk",
            "create-admin",
            "--username",
            "ops_root",
            "--first-name",
            "Ana",
            "--last-name",
            "Cruz",
            "--email",
            "ops@ridedesk.test",
            "--password",
            "secret-123",
        ])
        .unwrap();

        let Some(Command::CreateAdmin(args)) = cli.command else {
            panic!("expected create-admin subcommand");
        };
        assert_eq!(args.username.as_deref(), Some("ops_root"));
        assert_eq!(args.first_name.as_deref(), Some("Ana"));
        assert_eq!(args.last_name.as_deref(), Some("Cruz"));
        assert_eq!(args.email.as_deref(), Some("ops@ridedesk.test"));
        assert_eq!(args.password.as_deref(), Some("secret-123"));
    }

    #[test]
    fn test_create_admin_flags_are_optional() {
        // Missing flags fall back to interactive prompts at run time.
        let cli = Cli::try_parse_from(["ridedesk", "create-admin", "-u", "ops_root"]).unwrap();
        let Some(Command::CreateAdmin(args)) = cli.command else {
            panic!("expected create-admin subcommand");
        };
        assert_eq!(args.username.as_deref(), Some("ops_root"));
        assert!(args.password.is_none());
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["ridedesk", "seed"]).is_err());
    }
}
