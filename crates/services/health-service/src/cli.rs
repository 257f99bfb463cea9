//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Health monitoring service: patients, doctors, readings and reminders
#[derive(Parser, Debug)]
#[command(name = "health-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Walk through a doctor and patient session end to end
    Demo,

    /// Generate recommendations for a stored health record
    Recommend(RecommendArgs),

    /// List medicine reminders for a user
    Reminders(RemindersArgs),

    /// List the patients of a doctor
    Patients(PatientsArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the recommend command
#[derive(Parser, Debug)]
pub struct RecommendArgs {
    /// Health record to evaluate
    #[arg(long)]
    pub record_id: i32,
}

/// Arguments for the reminders command
#[derive(Parser, Debug)]
pub struct RemindersArgs {
    /// Owner of the reminders
    #[arg(long)]
    pub user_id: i32,

    /// Only reminders due today
    #[arg(long)]
    pub due: bool,

    /// Only reminders due on this day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub on: Option<String>,
}

/// Arguments for the patients command
#[derive(Parser, Debug)]
pub struct PatientsArgs {
    /// Doctor whose patients are listed
    #[arg(long)]
    pub doctor_id: i32,
}
