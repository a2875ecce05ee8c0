#![warn(clippy::all)]
mod cli;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    if let Err(e) = cli::Entry::main() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
