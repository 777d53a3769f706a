// Copyright (c) 2024 Agent Dashboard. All rights reserved.

mod backend;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_handler;
mod events;
mod logging;
mod profile;
mod session;
mod stars;
mod ui;

use crate::config::{Config, get_config_path, get_log_path};
use crate::environment::Environment;
use crate::logging::init_file_logger;
use crate::session::{SessionOptions, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the agent dashboard
    Start {
        /// Run without the terminal UI: look up the agent once and print it.
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Show agent lookup failures on the dashboard, with a retry key.
        #[arg(long, default_value_t = false)]
        surface_errors: bool,

        /// Keep the terminal's own background instead of the dark page.
        #[arg(long, default_value_t = false)]
        no_background: bool,
    },
    /// Store the session token used to identify the current user
    Login {
        /// Session access token issued by the backend's auth service
        #[arg(long, value_name = "TOKEN", env = "AGENT_DASHBOARD_TOKEN")]
        access_token: String,

        /// Public project key sent with every request
        #[arg(long, value_name = "KEY", env = "AGENT_DASHBOARD_API_KEY")]
        api_key: Option<String>,
    },
    /// Clear the stored session
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            headless,
            surface_errors,
            no_background,
        } => {
            // A missing config means no session; the dashboard still opens.
            let config = if config_path.exists() {
                Config::load_from_file(&config_path).map_err(|e| {
                    print_cmd_error!("Failed to load config", &e.to_string());
                    e
                })?
            } else {
                Config::default()
            };
            let log_path = get_log_path()?;
            if let Err(e) = init_file_logger(&log_path) {
                print_cmd_error!("Failed to open log file", &e.to_string());
            }
            let options = SessionOptions {
                surface_errors,
                with_background: !no_background,
            };
            let session = setup_session(&config, environment, options)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Login {
            access_token,
            api_key,
        } => {
            // Keep preferences from an existing file.
            let config = match Config::load_from_file(&config_path) {
                Ok(existing) => Config {
                    access_token,
                    api_key: api_key.unwrap_or(existing.api_key),
                    ..existing
                },
                Err(_) => Config::new(access_token, api_key.unwrap_or_default()),
            };
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Session saved", "{}", config_path.display());
            Ok(())
        }
        Command::Logout => {
            print_cmd_info!("Logging out", "clearing {}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
