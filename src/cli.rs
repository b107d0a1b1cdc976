use std::{path::PathBuf, process};

use getopts::Options;

use crate::config::DEFAULT_OUTPUT;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub output: Option<PathBuf>,
    pub skip_invalid: bool,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "o",
        "output",
        &format!("File to write the calendar to [Default: {DEFAULT_OUTPUT}]"),
        "FILE",
    );
    opts.optflag(
        "s",
        "skip-invalid",
        "Skip IPO records with unreadable dates instead of failing [Default: false]",
    );
    opts
}

/// Parses the arguments after the program name. Prints usage and exits on
/// `--help` or malformed input.
pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    if let Some(extra) = matches.free.first() {
        eprintln!("Unexpected argument '{extra}'");
        process::exit(1);
    }

    Args {
        output: matches.opt_str("output").map(PathBuf::from),
        skip_invalid: matches.opt_present("skip-invalid"),
    }
}
