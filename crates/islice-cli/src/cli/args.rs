//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Slice arguments (positional): one `start:stop:step` token or 1 to 3 bounds.
pub fn slice_arg() -> Arg {
    Arg::new("slice")
        .value_name("SLICE")
        .num_args(1..=3)
        .required(true)
        .help("Slice as `start:stop:step`, or 1-3 bounds (`none` or `_` for absent)")
}

/// Length of the generated `0..N` source (--range).
pub fn range_arg() -> Arg {
    Arg::new("range")
        .long("range")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .default_value("10")
        .help("Slice the integers 0..N")
}

/// Line-oriented input source (-i/--input).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("range")
        .help("Slice the lines of FILE (`-` for stdin)")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print a JSON report instead of a list")
}

/// Report pulled elements (--count).
pub fn count_arg() -> Arg {
    Arg::new("count")
        .long("count")
        .action(ArgAction::SetTrue)
        .help("Print how many elements were pulled from the source")
}

/// Execution trace (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print the execution trace to stderr")
}

/// Verbosity level (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Trace every pull and drop (implies --trace)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
