//! Anclora Flow CLI - data administration in your terminal

use std::process::ExitCode;

use anclora_core::DbConfig;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
mod output;

use commands::{doctor, reassign};

/// Anclora Flow - data administration in your terminal
#[derive(Parser)]
#[command(name = "anclora", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    db: DbArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Store connection options, environment-sourced with flag overrides
#[derive(Args)]
struct DbArgs {
    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost", global = true)]
    db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432, global = true)]
    db_port: u16,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "anclora_flow", global = true)]
    db_name: String,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres", global = true)]
    db_user: String,

    /// Database password
    #[arg(
        long,
        env = "DB_PASSWORD",
        default_value = "",
        hide_env_values = true,
        global = true
    )]
    db_password: String,
}

impl DbArgs {
    fn to_config(&self) -> DbConfig {
        DbConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            database: self.db_name.clone(),
            user: self.db_user.clone(),
            password: self.db_password.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Transfer ownership of all seeded rows to another user
    Reassign {
        /// Email of the user that should own the data
        #[arg(long)]
        email: String,

        /// Email of the user currently owning the data (inferred from the
        /// lowest user id when omitted)
        #[arg(long)]
        from_email: Option<String>,

        /// Comma-separated subset of tables to process (default: all owned tables)
        #[arg(long, value_delimiter = ',')]
        tables: Vec<String>,

        /// Report row counts without applying changes
        #[arg(long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run database pre-flight checks
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.db.to_config();

    match cli.command {
        Commands::Reassign {
            email,
            from_email,
            tables,
            dry_run,
            yes,
            json,
        } => reassign::run(&config, &email, from_email, tables, dry_run, yes, json),
        Commands::Doctor { json } => doctor::run(&config, json),
    }
}
