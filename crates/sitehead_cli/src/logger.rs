use std::io::Write;

use chrono::Local;
use log::LevelFilter;

/// Timestamped `target [LEVEL] message` lines on stderr. `RUST_LOG` overrides
/// the level picked from the command line.
pub fn configure_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} [{}] {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.target(),
                record.level(),
                record.args(),
            )
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}

pub fn level_for_verbosity(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
