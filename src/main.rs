use clap::Parser;
use log::LevelFilter;

use chart_prep::cli::Cli;

const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();

    std::process::exit(chart_prep::commands::run(&cli));
}
