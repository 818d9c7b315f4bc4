//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep CLI-level choices
//! (`ColorChoice`, raw verbosity count); the `From` impls resolve them.

use std::path::PathBuf;

use clap::ArgMatches;
use islice_lib::Verbosity;

use super::ColorChoice;
use crate::commands::demo::DemoArgs;
use crate::commands::input::SourceSpec;
use crate::commands::run::RunArgs;

pub struct RunParams {
    pub slice: Vec<String>,
    pub range: usize,
    pub input: Option<PathBuf>,
    pub json: bool,
    pub count: bool,
    pub trace: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            slice: m
                .get_many::<String>("slice")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            range: m.get_one::<usize>("range").copied().unwrap_or(10),
            input: m.get_one::<PathBuf>("input").cloned(),
            json: m.get_flag("json"),
            count: m.get_flag("count"),
            trace: m.get_flag("trace"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<RunParams> for RunArgs {
    fn from(p: RunParams) -> Self {
        let source = match p.input {
            Some(path) => SourceSpec::Lines(path),
            None => SourceSpec::Range(p.range),
        };
        let trace = match p.verbose {
            0 if p.trace => Some(Verbosity::Default),
            0 => None,
            _ => Some(Verbosity::Verbose),
        };
        Self {
            slice: p.slice,
            source,
            json: p.json,
            count: p.count,
            trace,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DemoParams {
    pub color: ColorChoice,
}

impl DemoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            color: parse_color(m),
        }
    }
}

impl From<DemoParams> for DemoArgs {
    fn from(p: DemoParams) -> Self {
        Self {
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
