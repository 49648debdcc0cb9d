#[macro_use]
extern crate log;

mod cli;
mod client_config;
mod constants;
mod errors;
mod internals;
mod kafka_types;
mod logging;
mod renderer;
mod topic_config;

use std::io::{self, Write};
use std::process;

use clap::Parser;

use cli::Cli;
use errors::AppResult;
use internals::Describer;
use kafka_types::ResourceDescriptor;
use topic_config::AdminDescriber;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = parse_cli_and_init_logging();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}

fn parse_cli_and_init_logging() -> Cli {
    // Parse command line input and initialize logging
    let cli = Cli::parse();
    logging::init(cli.verbosity_level());

    trace!("Created:\n{:#?}", cli);

    cli
}

async fn run(cli: &Cli) -> AppResult<()> {
    let app_config = cli.build_app_config()?;
    let describer = AdminDescriber::new(&app_config.client_config)?;

    let stdout = io::stdout();
    describe_and_render(&describer, &app_config.resource, &mut stdout.lock()).await
}

/// Describe `resource` and render its configuration on `out`.
///
/// Nothing is written to `out` if describing fails.
async fn describe_and_render<D: Describer, W: Write>(
    describer: &D,
    resource: &ResourceDescriptor,
    out: &mut W,
) -> AppResult<()> {
    let entries = topic_config::describe_resource(describer, resource).await?;
    renderer::render(entries, out)?;

    Ok(())
}
