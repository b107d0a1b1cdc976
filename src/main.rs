use std::{env, process};

use anyhow::{Context, Result};
use chrono::Utc;

use ipo_calendar::{cli, Config, DateWindow, RecordPolicy};

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "ipo_calendar=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

async fn refresh(args: cli::Args) -> Result<()> {
    let mut config = Config::from_env().context("Configuration error")?;

    if let Some(output) = args.output {
        config.output = output;
    }
    if args.skip_invalid {
        config.policy = RecordPolicy::Skip;
    }

    let window = DateWindow::current(&config.timezone);
    let summary = ipo_calendar::run(&config, window, Utc::now())
        .await
        .context("Calendar refresh failed")?;

    if !summary.skipped.is_empty() {
        eprintln!("Skipped {} malformed IPO records", summary.skipped.len());
    }
    println!("Calendar refreshed → {}", summary.path.display());

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    if let Err(err) = refresh(args).await {
        eprintln!("Script failed: {err:#}");
        process::exit(1);
    }
}
