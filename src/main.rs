// src/main.rs
use clap::{CommandFactory, Parser};
use nba_cli::cli::{Args, is_config_operation};
use nba_cli::commands::{
    CommandOutput, failure_message, handle_config_update_command, handle_list_config_command,
    run_command,
};
use nba_cli::config::Config;
use nba_cli::data_fetcher::NbaClient;
use nba_cli::logging::setup_logging;
use nba_cli::ui::{print_error, print_message, print_table};
use std::io::stdout;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    // The guard must be kept alive for the duration of the program
    let _guard = match setup_logging(&args) {
        Ok((log_file_path, guard)) => {
            tracing::info!("Logs are being written to: {log_file_path}");
            Some(guard)
        }
        Err(e) => {
            // Logging is best-effort; the command still runs without it
            report(&e.user_hint());
            None
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::error!("{message}");
            report(&message);
            ExitCode::FAILURE
        }
    }
}

fn report(message: &str) {
    // Nothing sensible is left to do if stdout is gone
    let _ = print_error(&mut stdout(), message);
}

/// Runs the requested operation, returning the message to show on failure.
fn run(args: &Args) -> Result<(), String> {
    let mut out = stdout();

    if args.list_config {
        let summary = handle_list_config_command().map_err(|e| e.user_hint())?;
        print_message(&mut out, &summary).map_err(|e| e.to_string())?;
        return Ok(());
    }

    if is_config_operation(args) {
        for line in handle_config_update_command(args).map_err(|e| e.user_hint())? {
            println!("{line}");
        }
        return Ok(());
    }

    let Some(command) = &args.command else {
        Args::command().print_help().map_err(|e| e.to_string())?;
        return Ok(());
    };

    let client = Config::load()
        .and_then(|config| NbaClient::from_config(&config))
        .map_err(|e| e.user_hint())?;

    let output = run_command(&client, command).map_err(|e| failure_message(command, &e))?;

    let printed = match output {
        CommandOutput::Table(table) => print_table(&mut out, &table),
        CommandOutput::Message(message) => print_message(&mut out, &message),
    };
    printed.map_err(|e| e.to_string())
}
