// src/bin/cli.rs
use xtream_export::{cli::{self, Mode}, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let params = match cli::parse_args(std::env::args().skip(1))? {
        Mode::Help => {
            print!("{}", cli::HELP);
            return Ok(());
        }
        Mode::Run(params) => params,
    };

    log::init(params.verbose)?;

    // Already logged by cli::run
    if cli::run(&params).is_err() {
        std::process::exit(1);
    }
    Ok(())
}
