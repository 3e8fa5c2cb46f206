// src/bin/cli.rs

use clap::Parser;

use hz_watch::config::Config;
use hz_watch::runner;

/// Watch for events and send email notifications.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// If set, do not send email, just print what would be sent.
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    match runner::run(&config, args.dry_run) {
        Ok(report) => {
            if report.matches.is_empty() {
                println!("No matching events found.");
            } else {
                let sent = if args.dry_run {
                    "No email sent (dry run)."
                } else {
                    "Email sent."
                };
                println!("Found {} matching events. {sent}", report.matches.len());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
