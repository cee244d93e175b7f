use clap::Parser;
use color_eyre::eyre::Result;
use std::process::ExitCode;

use merge_release::{Args, actions};

fn initialize_logger(debug: bool) -> merge_release::Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("merge_release")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

async fn run(args: &Args) -> merge_release::Result<()> {
    let config = args.release_config()?;
    merge_release::execute(&config).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    // the failure is reported once here rather than again in an eyre report
    if let Err(err) = run(&cli_args).await {
        actions::report_failure(&err.to_string(), &mut std::io::stdout());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
