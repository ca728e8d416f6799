use clap::Parser;
use endpoint_binder::cli::commands::{cmd_fetch, cmd_render, cmd_replay, cmd_scaffold};
use endpoint_binder::cli::config::{Cli, Commands, load_config};
use endpoint_binder::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Render { page, base } => {
            cmd_render(&config, &page, base.as_deref(), cli.verbose)?;
        }
        Commands::Replay {
            page,
            events,
            output,
        } => {
            let tracer = match cli.trace.as_deref() {
                Some(path) => TraceLogger::new(path),
                None => TraceLogger::disabled(),
            };
            cmd_replay(&config, &page, &events, output.as_deref(), tracer, cli.verbose)?;
        }
        Commands::Scaffold { kind, output } => {
            cmd_scaffold(&config, &kind, output.as_deref())?;
        }
        Commands::Fetch { page, base, output } => {
            cmd_fetch(&config, &page, base.as_deref(), output.as_deref(), cli.verbose)?;
        }
    }

    Ok(())
}
