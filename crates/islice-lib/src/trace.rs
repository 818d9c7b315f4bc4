//! Tracing infrastructure for observing slice execution.
//!
//! # Design: Zero-Cost Abstraction
//!
//! `IsliceExtended` is generic over its tracer with `NoopTracer` as the
//! default. Every `NoopTracer` method is an `#[inline(always)]` empty function,
//! so an untraced executor carries no tracing state and no tracing calls.
//!
//! `PrintTracer` keeps its own line buffer; the executor only hands it the
//! indices and counts it already tracks.

use crate::Colors;
use crate::error::SliceError;
use crate::slice::{NormalizedSlice, Strategy};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Plan, buffer summary, yields, end and errors.
    #[default]
    Default,
    /// Verbose (-v): also every pull from the source and every dropped element.
    Verbose,
}

/// Tracer trait for executor instrumentation.
///
/// Indices are positions in the source (0-based), not in the result.
pub trait Tracer {
    /// Called once, when the first advance picks a strategy.
    fn trace_plan(&mut self, slice: &NormalizedSlice, strategy: Strategy);

    /// Called after the source produced the element at `index`.
    fn trace_pull(&mut self, index: usize);

    /// Called when the source reports exhaustion after `pulled` elements.
    fn trace_source_exhausted(&mut self, pulled: usize);

    /// Called when an element is released without being yielded.
    fn trace_drop(&mut self, index: usize);

    /// Called once a buffering strategy has materialized its working buffer.
    fn trace_buffer(&mut self, pulled: usize, kept: usize);

    /// Called right before the element at `index` is handed to the caller.
    fn trace_yield(&mut self, index: usize);

    /// Called when the first advance fails.
    fn trace_error(&mut self, error: &SliceError);

    /// Called once, when the executor enters its terminal state.
    fn trace_end(&mut self, pulled: usize);
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_plan(&mut self, _slice: &NormalizedSlice, _strategy: Strategy) {}

    #[inline(always)]
    fn trace_pull(&mut self, _index: usize) {}

    #[inline(always)]
    fn trace_source_exhausted(&mut self, _pulled: usize) {}

    #[inline(always)]
    fn trace_drop(&mut self, _index: usize) {}

    #[inline(always)]
    fn trace_buffer(&mut self, _pulled: usize, _kept: usize) {}

    #[inline(always)]
    fn trace_yield(&mut self, _index: usize) {}

    #[inline(always)]
    fn trace_error(&mut self, _error: &SliceError) {}

    #[inline(always)]
    fn trace_end(&mut self, _pulled: usize) {}
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn trace_plan(&mut self, slice: &NormalizedSlice, strategy: Strategy) {
        (**self).trace_plan(slice, strategy);
    }

    fn trace_pull(&mut self, index: usize) {
        (**self).trace_pull(index);
    }

    fn trace_source_exhausted(&mut self, pulled: usize) {
        (**self).trace_source_exhausted(pulled);
    }

    fn trace_drop(&mut self, index: usize) {
        (**self).trace_drop(index);
    }

    fn trace_buffer(&mut self, pulled: usize, kept: usize) {
        (**self).trace_buffer(pulled, kept);
    }

    fn trace_yield(&mut self, index: usize) {
        (**self).trace_yield(index);
    }

    fn trace_error(&mut self, error: &SliceError) {
        (**self).trace_error(error);
    }

    fn trace_end(&mut self, pulled: usize) {
        (**self).trace_end(pulled);
    }
}

/// Width of the tag column.
const TAG_WIDTH: usize = 7;

/// Tracer that collects one line per event.
#[derive(Clone, Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    /// Collected trace lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines to stderr, keeping stdout for results.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn add_line(&mut self, color: &str, tag: &str, content: &str) {
        let reset = self.colors.reset;
        self.lines.push(format!(
            "{color}{tag:<width$}{reset}{content}",
            width = TAG_WIDTH
        ));
    }
}

impl Tracer for PrintTracer {
    fn trace_plan(&mut self, slice: &NormalizedSlice, strategy: Strategy) {
        let heading = self.colors.heading;
        self.add_line(heading, "plan", &format!("{strategy} {slice}"));
    }

    fn trace_pull(&mut self, index: usize) {
        if self.is_verbose() {
            let muted = self.colors.muted;
            self.add_line(muted, "pull", &format!("#{index}"));
        }
    }

    fn trace_source_exhausted(&mut self, pulled: usize) {
        if self.is_verbose() {
            let muted = self.colors.muted;
            self.add_line(muted, "source", &format!("exhausted after {pulled}"));
        }
    }

    fn trace_drop(&mut self, index: usize) {
        if self.is_verbose() {
            let muted = self.colors.muted;
            self.add_line(muted, "drop", &format!("#{index}"));
        }
    }

    fn trace_buffer(&mut self, pulled: usize, kept: usize) {
        let heading = self.colors.heading;
        self.add_line(heading, "buffer", &format!("pulled={pulled} kept={kept}"));
    }

    fn trace_yield(&mut self, index: usize) {
        let item = self.colors.item;
        self.add_line(item, "yield", &format!("#{index}"));
    }

    fn trace_error(&mut self, error: &SliceError) {
        self.add_line("", "error", &error.to_string());
    }

    fn trace_end(&mut self, pulled: usize) {
        let heading = self.colors.heading;
        self.add_line(heading, "end", &format!("pulled={pulled}"));
    }
}
