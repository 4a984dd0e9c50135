//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use retro_events::{
    cli::{Commands, Retro},
    commands::{
        build_stats::handle_build_stats,
        process::{handle_process, ProcessParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let app = Retro::parse();

    match app.command {
        Commands::Process {
            year,
            working_dir,
            db,
            converter,
            timeout_secs,
            verbose,
        } => {
            handle_process(ProcessParams {
                year,
                working_dir,
                db,
                converter,
                timeout_secs,
                verbose,
            })
            .await?
        }

        Commands::BuildStats {
            raw_table,
            output_table,
            stats,
            db,
        } => handle_build_stats(raw_table, output_table, stats, db)?,
    }

    Ok(())
}
