use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use docdown::cli;
use docdown::config::Config;
use docdown::resolver::Resolver;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let matches = Command::new("docdown")
        .about("Render symbol documentation as Markdown")
        .disable_help_flag(true)
        .arg(
            Arg::new("identifiers")
                .help("Module, class or function names, or paths to symbol dumps")
                .action(ArgAction::Append)
                .num_args(1..)
                .allow_hyphen_values(true)
                .required(false)
                .index(1),
        )
        .get_matches();

    let identifiers: Vec<String> = matches
        .get_many::<String>("identifiers")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let config = Config::from_env();
    let resolver = Resolver::new(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run("docdown", &identifiers, &resolver, &mut out)?;
    out.flush()?;

    Ok(())
}
