use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use redraft_core::RenameOutcome;

#[derive(Parser)]
#[command(name = "redraft")]
#[command(about = "Batch rename DXF files inside a ZIP archive")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename matching .dxf entries and write a new archive
    Rename {
        /// Input ZIP archive of DXF files
        archive: PathBuf,
        /// Text to find in filenames
        #[arg(long)]
        find: String,
        /// Replacement text (empty deletes the found text)
        #[arg(long, default_value = "")]
        replace: String,
        /// Path to write the output archive to
        #[arg(short, long, default_value = "renamed_dxf_files.zip")]
        output: PathBuf,
        /// Print the outcomes as JSON instead of human-readable lines
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rename {
            archive,
            find,
            replace,
            output,
            json,
        } => {
            match redraft::commands::rename::run(&archive, &find, &replace, &output) {
                Ok(report) => {
                    if json {
                        match serde_json::to_string_pretty(&report.outcomes) {
                            Ok(text) => println!("{}", text),
                            Err(e) => {
                                eprintln!("Error: {}", e);
                                process::exit(2);
                            }
                        }
                    } else {
                        println!("Renamed {} file(s).", report.renamed_count());
                        for outcome in &report.outcomes {
                            match outcome {
                                RenameOutcome::Renamed { original, new } => {
                                    println!("{} -> {}", original, new);
                                }
                                RenameOutcome::Failed { original, reason } => {
                                    println!("{}: {}", original, reason);
                                }
                            }
                        }
                        if report.failed_count() > 0 {
                            eprintln!("{} file(s) failed to rename.", report.failed_count());
                        }
                        println!("Output written to {}", output.display());
                    }

                    if report.failed_count() > 0 {
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
    }
}
