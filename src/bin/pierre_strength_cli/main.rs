// ABOUTME: Pierre Strength CLI - command-line access to workout analytics and the training log
// ABOUTME: Scores sets, estimates e1RM, projects strength, logs sets, and prints coaching reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score a set
//! pierre-strength-cli quality --tempo controlled --rir 2
//!
//! # Estimate a one-rep max
//! pierre-strength-cli e1rm --weight 225 --reps 5
//!
//! # Project strength from an exported history
//! pierre-strength-cli predict --history bench.json --rest-days 2 --one-month
//!
//! # Log a set and print the report for the exercise
//! pierre-strength-cli log --user <uuid> --exercise bench-press --weight 185 --reps 8 --rir 2 --tempo controlled
//! pierre-strength-cli report --user <uuid> --exercise bench-press
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use pierre_strength::errors::{AppError, AppResult};
use pierre_strength::logging::LoggingConfig;
use pierre_strength::models::Tempo;
use std::env;
use std::path::PathBuf;
use uuid::Uuid;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pierre-strength-cli",
    about = "Pierre Strength workout analytics CLI",
    long_about = "Score sets, estimate one-rep maxes, project strength, and keep a training log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (defaults to DATABASE_URL or a local SQLite file)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score a set from its tempo and reps in reserve
    Quality {
        /// Tempo: slow, controlled, fast, very-fast
        #[arg(long)]
        tempo: Tempo,

        /// Reps in reserve
        #[arg(long, allow_negative_numbers = true)]
        rir: i32,
    },

    /// Estimate a one-rep max from a set
    E1rm {
        /// Load lifted
        #[arg(long)]
        weight: f64,

        /// Reps completed
        #[arg(long)]
        reps: u32,
    },

    /// Project strength from a JSON history file
    Predict {
        /// JSON array of {"session_index": n, "e1rm": x}
        #[arg(long)]
        history: PathBuf,

        /// Rest days per week
        #[arg(long, default_value = "2")]
        rest_days: u32,

        /// History spans at least one month (unlocks the one-year projection)
        #[arg(long)]
        one_month: bool,
    },

    /// Define or update an exercise
    Exercise {
        /// User ID
        #[arg(long)]
        user: Uuid,

        /// Exercise ID
        #[arg(long)]
        id: String,

        /// Display name (defaults to the ID)
        #[arg(long)]
        name: Option<String>,

        /// Bottom of the target rep range
        #[arg(long, default_value = "8")]
        rep_min: u32,

        /// Top of the target rep range
        #[arg(long, default_value = "12")]
        rep_max: u32,

        /// Planned working sets
        #[arg(long, default_value = "3")]
        sets: u32,
    },

    /// Set the declared rest days per week
    Settings {
        /// User ID
        #[arg(long)]
        user: Uuid,

        /// Rest days per week
        #[arg(long)]
        rest_days: u32,
    },

    /// Log a set to the training history
    Log {
        /// User ID
        #[arg(long)]
        user: Uuid,

        /// Exercise ID (created with default rep range if unknown)
        #[arg(long)]
        exercise: String,

        /// Load lifted
        #[arg(long)]
        weight: f64,

        /// Reps completed
        #[arg(long)]
        reps: u32,

        /// Reps in reserve
        #[arg(long, allow_negative_numbers = true)]
        rir: i32,

        /// Tempo: slow, controlled, fast, very-fast
        #[arg(long)]
        tempo: Tempo,

        /// Existing workout to add the set to (a new workout is recorded otherwise)
        #[arg(long)]
        workout: Option<Uuid>,

        /// Rest before the set in seconds
        #[arg(long)]
        rest_seconds: Option<u32>,
    },

    /// Print the forecast and coaching report for an exercise
    Report {
        /// User ID
        #[arg(long)]
        user: Uuid,

        /// Exercise ID
        #[arg(long)]
        exercise: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let database_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/strength.db".into());

    match cli.command {
        Command::Quality { tempo, rir } => commands::analytics::quality(tempo, rir),
        Command::E1rm { weight, reps } => commands::analytics::e1rm(weight, reps),
        Command::Predict {
            history,
            rest_days,
            one_month,
        } => commands::analytics::predict(&history, rest_days, one_month).await?,
        Command::Exercise {
            user,
            id,
            name,
            rep_min,
            rep_max,
            sets,
        } => {
            let repository = commands::history::connect(&database_url).await?;
            commands::history::define_exercise(&repository, user, id, name, rep_min, rep_max, sets)
                .await?;
        }
        Command::Settings { user, rest_days } => {
            let repository = commands::history::connect(&database_url).await?;
            commands::history::settings(&repository, user, rest_days).await?;
        }
        Command::Log {
            user,
            exercise,
            weight,
            reps,
            rir,
            tempo,
            workout,
            rest_seconds,
        } => {
            let repository = commands::history::connect(&database_url).await?;
            let set = commands::history::LogSetArgs {
                exercise_id: exercise,
                weight,
                reps,
                rir,
                tempo,
                workout_id: workout,
                rest_time_seconds: rest_seconds,
            };
            commands::history::log_set(&repository, user, set).await?;
        }
        Command::Report { user, exercise } => {
            let repository = commands::history::connect(&database_url).await?;
            commands::history::report(repository, user, &exercise).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_rir_is_accepted_when_scoring_and_logging() {
        let quality = Cli::try_parse_from([
            "pierre-strength-cli",
            "quality",
            "--tempo",
            "controlled",
            "--rir",
            "-1",
        ])
        .unwrap();
        assert!(matches!(quality.command, Command::Quality { rir: -1, .. }));

        let user = Uuid::new_v4().to_string();
        let log = Cli::try_parse_from([
            "pierre-strength-cli",
            "log",
            "--user",
            user.as_str(),
            "--exercise",
            "bench-press",
            "--weight",
            "100",
            "--reps",
            "5",
            "--rir",
            "-1",
            "--tempo",
            "controlled",
        ])
        .unwrap();
        assert!(matches!(log.command, Command::Log { rir: -1, .. }));
    }
}
