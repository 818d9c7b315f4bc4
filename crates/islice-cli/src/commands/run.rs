use std::io;

use islice_lib::{
    Colors, IsliceExtended, IteratorCounter, NoopTracer, ParseSliceError, PrintTracer,
    SliceArgs, SliceError, Strategy, Tracer, Verbosity, parse_bound,
};
use serde::Serialize;

use super::input::{InputError, SourceSpec};

pub struct RunArgs {
    pub slice: Vec<String>,
    pub source: SourceSpec,
    pub json: bool,
    pub count: bool,
    pub trace: Option<Verbosity>,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseSliceError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Slice(#[from] SliceError),
    #[error("failed to read source: {0}")]
    Read(#[from] io::Error),
}

/// Outcome of one run, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub slice: SliceArgs,
    pub strategy: Option<Strategy>,
    pub items: Vec<String>,
    pub pulled: usize,
}

pub fn run(args: RunArgs) {
    let colors = Colors::new(args.color);
    let mut tracer = args.trace.map(|verbosity| PrintTracer::new(verbosity, colors));

    let result = parse_slice(&args.slice)
        .map_err(RunError::from)
        .and_then(|slice| {
            let source = args.source.open()?;
            match tracer.as_mut() {
                Some(tracer) => execute(source, slice, tracer),
                None => execute(source, slice, NoopTracer),
            }
        });

    // The trace is most useful when the run fails, so print it first.
    if let Some(tracer) = &tracer {
        tracer.print();
    }

    let report = result.unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    if args.count {
        eprintln!("pulled {} element(s) from the source", report.pulled);
    }

    if args.json {
        match serde_json::to_string(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", render_items(&report.items));
    }
}

/// Parse either a single `start:stop:step` token or 1 to 3 loose bounds.
pub fn parse_slice(tokens: &[String]) -> Result<SliceArgs, ParseSliceError> {
    if let [token] = tokens
        && token.contains(':')
    {
        return token.parse();
    }
    let parts = tokens
        .iter()
        .map(|token| parse_bound(token))
        .collect::<Result<Vec<_>, _>>()?;
    SliceArgs::from_parts(&parts)
}

/// Slice `source`, counting what the executor pulls from it.
pub fn execute<I, R>(source: I, slice: SliceArgs, tracer: R) -> Result<Report, RunError>
where
    I: Iterator<Item = io::Result<String>>,
    R: Tracer,
{
    let mut sliced = IsliceExtended::with_tracer(IteratorCounter::new(source), slice, tracer);

    let mut items = Vec::new();
    for item in sliced.by_ref() {
        items.push(item??);
    }

    let strategy = sliced.strategy();
    let pulled = sliced.into_inner().pulled();
    Ok(Report {
        slice,
        strategy,
        items,
        pulled,
    })
}

pub fn render_items<T: AsRef<str>>(items: &[T]) -> String {
    let joined: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    format!("[{}]", joined.join(", "))
}
