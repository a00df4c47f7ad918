// SPDX-License-Identifier: MPL-2.0
use iced_masonry::app::{self, Flags};
use iced_masonry::logging;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: iced_masonry [OPTIONS] [DIR]...

Shows every DIR as one masonry gallery (current directory if none).

Options:
  --config-dir DIR   Read settings.toml from DIR
  -v, --verbose      Log debug output
  -h, --help         Print this help";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    let directories: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();

    logging::init(verbose);

    let flags = Flags {
        directories,
        config_dir,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
