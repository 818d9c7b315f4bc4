//! Shared helpers for executor tests: instrumented sources and a reference slicer.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::SliceArgs;

/// Bounds exercised by the grid tests.
pub const BOUNDS: [Option<isize>; 12] = [
    None,
    Some(-15),
    Some(-10),
    Some(-9),
    Some(-4),
    Some(-1),
    Some(0),
    Some(1),
    Some(4),
    Some(9),
    Some(10),
    Some(15),
];

/// Steps exercised by the grid tests (zero is tested separately).
pub const STEPS: [Option<isize>; 7] = [
    None,
    Some(-7),
    Some(-3),
    Some(-1),
    Some(1),
    Some(3),
    Some(7),
];

/// Every `start:stop:step` combination of the grid.
pub fn slice_grid() -> impl Iterator<Item = SliceArgs> {
    BOUNDS.into_iter().flat_map(|start| {
        BOUNDS.into_iter().flat_map(move |stop| {
            STEPS
                .into_iter()
                .map(move |step| SliceArgs::new(start, stop, step))
        })
    })
}

/// Shared view on how many times a [`ProbeSource`] was asked for an element.
#[derive(Clone, Debug, Default)]
pub struct Probe(Rc<Cell<usize>>);

impl Probe {
    /// Calls to `next`, including the ones that reported exhaustion.
    pub fn calls(&self) -> usize {
        self.0.get()
    }

    pub fn reset(&self) {
        self.0.set(0);
    }
}

/// Source counting every call to `next`, like a mocked `__next__`.
pub struct ProbeSource<T> {
    items: VecDeque<T>,
    probe: Probe,
}

impl ProbeSource<usize> {
    pub fn range(len: usize) -> (Self, Probe) {
        Self::new(0..len)
    }
}

impl<T> ProbeSource<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> (Self, Probe) {
        let probe = Probe::default();
        let source = Self {
            items: items.into_iter().collect(),
            probe: probe.clone(),
        };
        (source, probe)
    }
}

impl<T> Iterator for ProbeSource<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.probe.0.set(self.probe.0.get() + 1);
        self.items.pop_front()
    }
}

/// Source of `Rc` handles whose liveness can be observed from the outside.
///
/// The source holds the only strong reference to each element until it is
/// pulled, so an element is alive exactly while somebody still owns it.
pub struct TrackedSource {
    items: VecDeque<Rc<usize>>,
    watchers: Vec<Weak<usize>>,
}

impl TrackedSource {
    pub fn new(len: usize) -> Self {
        let items: VecDeque<Rc<usize>> = (0..len).map(Rc::new).collect();
        let watchers = items.iter().map(Rc::downgrade).collect();
        Self { items, watchers }
    }

    /// Liveness handles, one per element, in source order.
    pub fn watchers(&self) -> Watchers {
        Watchers(self.watchers.clone())
    }
}

impl Iterator for TrackedSource {
    type Item = Rc<usize>;

    fn next(&mut self) -> Option<Rc<usize>> {
        self.items.pop_front()
    }
}

pub struct Watchers(Vec<Weak<usize>>);

impl Watchers {
    /// `1` for every element still owned by someone, `0` for released ones.
    pub fn alive(&self) -> Vec<u8> {
        self.0
            .iter()
            .map(|w| u8::from(w.strong_count() > 0))
            .collect()
    }
}

/// Positions selected by `list(range(len))[start:stop:step]`, computed directly.
pub fn reference_slice(len: usize, args: SliceArgs) -> Vec<usize> {
    let len = len as isize;
    let step = args.step.unwrap_or(1);
    assert_ne!(step, 0, "reference slicing needs a non-zero step");

    let resolve = |bound: isize, lower: isize, upper: isize| {
        let bound = if bound < 0 { bound + len } else { bound };
        bound.max(lower).min(upper)
    };

    let mut out = Vec::new();
    if step > 0 {
        let mut i = args.start.map_or(0, |s| resolve(s, 0, len));
        let end = args.stop.map_or(len, |s| resolve(s, 0, len));
        while i < end {
            out.push(i as usize);
            i += step;
        }
    } else {
        let mut i = args.start.map_or(len - 1, |s| resolve(s, -1, len - 1));
        let end = args.stop.map_or(-1, |s| resolve(s, -1, len - 1));
        while i > end {
            out.push(i as usize);
            i += step;
        }
    }
    out
}

/// Expected number of `next` calls on a source of `len` elements.
///
/// `first_only` asks for the count after a single advance instead of after
/// full consumption.
pub fn expected_calls(len: usize, args: SliceArgs, first_only: bool) -> usize {
    let step = args.step.unwrap_or(1);
    let start = args.start.unwrap_or(if step > 0 { 0 } else { -1 });
    let drain = len + 1;

    if start < 0 || args.stop.is_some_and(|stop| stop < 0) {
        return drain;
    }
    let start = start as usize;
    if step < 0 {
        return (start + 1).min(drain);
    }

    let stop = args.stop.map(|stop| stop as usize);
    let yields_something = start < len && stop.is_none_or(|stop| start < stop);
    if first_only && yields_something {
        return start + 1;
    }
    match stop {
        Some(stop) => start.max(stop).min(drain),
        None => drain,
    }
}
