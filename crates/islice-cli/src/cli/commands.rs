//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("islice")
        .about("Lazy slicing with negative indices and steps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(run_command())
        .subcommand(demo_command())
}

/// Usage examples shown by `islice run --help`, one command per line.
pub const RUN_EXAMPLES: &str = r#"EXAMPLES:
  islice run 5                       # first five of 0..10
  islice run ::-1                    # reversed
  islice run -3 none                 # last three
  islice run --count -- -10:-5       # notation starting with `-` goes after `--`
  islice run -i log.txt -- -20:      # last twenty lines
  islice run 3 0 -1 --trace -v       # show every pull and drop"#;

/// Slice a source and print the result.
pub fn run_command() -> Command {
    Command::new("run")
        .about("Slice a range or the lines of a file")
        .allow_negative_numbers(true)
        .override_usage(
            "\
  islice run <SLICE>
  islice run <START> <STOP> [STEP]
  islice run -i <FILE> <SLICE>",
        )
        .after_help(RUN_EXAMPLES)
        .arg(slice_arg())
        .arg(range_arg())
        .arg(input_arg())
        .arg(json_arg())
        .arg(count_arg())
        .arg(trace_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Replay the reference cases next to a plain forward-only slice.
pub fn demo_command() -> Command {
    Command::new("demo")
        .about("Compare extended slicing with plain forward slicing on 0..10")
        .arg(color_arg())
}
