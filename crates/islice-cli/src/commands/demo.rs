//! Side-by-side comparison of extended and plain forward slicing on `0..10`.

use std::fmt::Write;

use islice_lib::{Colors, IsliceExt, SliceArgs};

use super::run::render_items;

pub struct DemoArgs {
    pub color: bool,
}

const INPUT_LEN: usize = 10;
const RULE_WIDTH: usize = 40;

/// `(start, stop, step)` triples compared by the demo.
pub const CASES: [(isize, isize, isize); 8] = [
    (0, 5, 1),
    (5, 0, -1),
    (-10, -5, 1),
    (-10, 5, 1),
    (0, -5, 1),
    (-5, -10, -1),
    (-5, 0, -1),
    (5, -10, -1),
];

pub fn run(args: DemoArgs) {
    print!("{}", render(Colors::new(args.color)));
}

pub fn render(colors: Colors) -> String {
    let Colors {
        heading,
        muted,
        reset,
        ..
    } = colors;
    let mut out = String::new();

    let input: Vec<String> = (0..INPUT_LEN).map(|i| i.to_string()).collect();
    writeln!(out, "input: {}", render_items(&input)).unwrap();
    writeln!(out, "{muted}{}{reset}", "=".repeat(RULE_WIDTH)).unwrap();

    for (start, stop, step) in CASES {
        let args = SliceArgs::new(Some(start), Some(stop), Some(step));
        writeln!(out, "{heading}slice: {args}{reset}").unwrap();
        writeln!(out, "  extended: {}", extended(args)).unwrap();
        let plain = match plain(start, stop, step) {
            Ok(items) => render_numbers(&items),
            Err(msg) => format!("error: {msg}"),
        };
        writeln!(out, "  plain:    {plain}").unwrap();
        writeln!(out, "{muted}{}{reset}", "-".repeat(RULE_WIDTH)).unwrap();
    }
    out
}

fn extended(args: SliceArgs) -> String {
    match (0..INPUT_LEN)
        .islice_extended(args)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(items) => render_numbers(&items),
        Err(e) => format!("error: {e}"),
    }
}

/// What a forward-only adapter chain (`skip`, `take`, `step_by`) can express.
pub fn plain(start: isize, stop: isize, step: isize) -> Result<Vec<usize>, &'static str> {
    let (Ok(start), Ok(stop)) = (usize::try_from(start), usize::try_from(stop)) else {
        return Err("bounds must be non-negative");
    };
    let Ok(step) = usize::try_from(step) else {
        return Err("step must be a positive integer");
    };
    if step == 0 {
        return Err("step must be a positive integer");
    }
    Ok((0..INPUT_LEN)
        .skip(start)
        .take(stop.saturating_sub(start))
        .step_by(step)
        .collect())
}

fn render_numbers(items: &[usize]) -> String {
    let items: Vec<String> = items.iter().map(usize::to_string).collect();
    render_items(&items)
}
