//! Lazy slice executor over a forward-only source.
//!
//! The executor is a small state machine driven by `advance`:
//!
//! ```text
//! Pending ──first advance──┬─> Streaming ──┐
//!    │                     └─> Buffered  ──┴─> Exhausted
//!    └──── zero step ─────────────────────────> Exhausted
//! ```
//!
//! Nothing touches the source before the first advance. `Exhausted` is sticky:
//! once there, the source is never pulled again.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::mem;

use crate::error::SliceError;
use crate::slice::{NormalizedSlice, SliceArgs, Strategy};
use crate::trace::{NoopTracer, Tracer};

/// Iterator adapter slicing `source` with Python semantics.
///
/// Yields `Err(SliceError::ZeroStep)` once if the step is zero, then ends.
pub struct IsliceExtended<I: Iterator, R: Tracer = NoopTracer> {
    source: I,
    tracer: R,
    /// Elements the source has produced so far.
    pulled: usize,
    strategy: Option<Strategy>,
    state: State<I::Item>,
}

enum State<T> {
    Pending(SliceArgs),
    Streaming(ForwardCursor),
    /// Result elements in yield order, tagged with their source index.
    Buffered(VecDeque<(usize, T)>),
    Exhausted,
}

/// Position bookkeeping for the forward strategy, `itertools.islice` style.
#[derive(Clone, Copy, Debug)]
struct ForwardCursor {
    /// Source index of the next element to yield.
    next: usize,
    stop: Option<usize>,
    step: usize,
}

impl ForwardCursor {
    fn new(slice: &NormalizedSlice) -> Self {
        Self {
            next: slice.start().unsigned_abs(),
            stop: slice.stop().map(isize::unsigned_abs),
            step: slice.step().unsigned_abs(),
        }
    }
}

impl<I: Iterator> IsliceExtended<I> {
    pub fn new(source: impl IntoIterator<IntoIter = I>, args: impl Into<SliceArgs>) -> Self {
        Self::with_tracer(source, args, NoopTracer)
    }
}

impl<I: Iterator, R: Tracer> IsliceExtended<I, R> {
    pub fn with_tracer(
        source: impl IntoIterator<IntoIter = I>,
        args: impl Into<SliceArgs>,
        tracer: R,
    ) -> Self {
        Self {
            source: source.into_iter(),
            tracer,
            pulled: 0,
            strategy: None,
            state: State::Pending(args.into()),
        }
    }

    /// Strategy picked on the first advance; `None` before it or on a zero step.
    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Number of elements pulled from the source so far.
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    pub fn tracer(&self) -> &R {
        &self.tracer
    }

    /// Give the source back, positioned wherever slicing left it.
    pub fn into_inner(self) -> I {
        self.source
    }

    /// Produce the next element, `Ok(None)` at the end of the slice.
    ///
    /// A zero step fails here, on the first call only.
    pub fn advance(&mut self) -> Result<Option<I::Item>, SliceError> {
        loop {
            match mem::replace(&mut self.state, State::Exhausted) {
                State::Pending(args) => match self.plan(args) {
                    Ok(state) => self.state = state,
                    Err(err) => {
                        self.tracer.trace_error(&err);
                        return Err(err);
                    }
                },
                State::Streaming(mut cursor) => {
                    let Some(item) = self.stream(&mut cursor) else {
                        self.tracer.trace_end(self.pulled);
                        return Ok(None);
                    };
                    self.tracer.trace_yield(self.pulled - 1);
                    self.state = State::Streaming(cursor);
                    return Ok(Some(item));
                }
                State::Buffered(mut buffer) => {
                    let Some((index, item)) = buffer.pop_front() else {
                        self.tracer.trace_end(self.pulled);
                        return Ok(None);
                    };
                    self.tracer.trace_yield(index);
                    self.state = State::Buffered(buffer);
                    return Ok(Some(item));
                }
                State::Exhausted => return Ok(None),
            }
        }
    }

    fn plan(&mut self, args: SliceArgs) -> Result<State<I::Item>, SliceError> {
        let slice = args.normalize()?;
        let strategy = slice.strategy();
        self.strategy = Some(strategy);
        self.tracer.trace_plan(&slice, strategy);

        let state = match strategy {
            Strategy::NegativeIndex => State::Buffered(self.fill(&slice, None)),
            Strategy::NegativeStep => {
                // Walking backwards from `start`, nothing past it can be selected.
                let limit = slice.start().unsigned_abs().saturating_add(1);
                State::Buffered(self.fill(&slice, Some(limit)))
            }
            Strategy::Forward => State::Streaming(ForwardCursor::new(&slice)),
        };
        Ok(state)
    }

    fn pull(&mut self) -> Option<I::Item> {
        match self.source.next() {
            Some(item) => {
                self.tracer.trace_pull(self.pulled);
                self.pulled += 1;
                Some(item)
            }
            None => {
                self.tracer.trace_source_exhausted(self.pulled);
                None
            }
        }
    }

    /// Pull up to `limit` elements (all of them when `None`) and keep only
    /// those `slice` selects, already in yield order.
    fn fill(
        &mut self,
        slice: &NormalizedSlice,
        limit: Option<usize>,
    ) -> VecDeque<(usize, I::Item)> {
        let mut items = Vec::new();
        while limit.is_none_or(|limit| items.len() < limit) {
            match self.pull() {
                Some(item) => items.push(item),
                None => break,
            }
        }

        let pulled = items.len();
        let window = slice.indices(pulled);
        let mut buffer = VecDeque::with_capacity(window.len());
        for (index, item) in items.into_iter().enumerate() {
            if !window.contains(index) {
                drop(item);
                self.tracer.trace_drop(index);
            } else if slice.step() > 0 {
                buffer.push_back((index, item));
            } else {
                buffer.push_front((index, item));
            }
        }

        self.tracer.trace_buffer(pulled, buffer.len());
        buffer
    }

    /// One forward step: skip up to `cursor.next`, then take that element.
    fn stream(&mut self, cursor: &mut ForwardCursor) -> Option<I::Item> {
        while self.pulled < cursor.next {
            let index = self.pulled;
            drop(self.pull()?);
            self.tracer.trace_drop(index);
        }

        if cursor.stop.is_some_and(|stop| self.pulled >= stop) {
            return None;
        }

        let item = self.pull()?;
        cursor.next = cursor.next.saturating_add(cursor.step);
        if let Some(stop) = cursor.stop {
            cursor.next = cursor.next.min(stop);
        }
        Some(item)
    }
}

impl<I: Iterator, R: Tracer> Iterator for IsliceExtended<I, R> {
    type Item = Result<I::Item, SliceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Pending(_) => (0, None),
            // Every yield costs at least one pull.
            State::Streaming(_) => (0, self.source.size_hint().1),
            State::Buffered(buffer) => (buffer.len(), Some(buffer.len())),
            State::Exhausted => (0, Some(0)),
        }
    }
}

impl<I: Iterator, R: Tracer> FusedIterator for IsliceExtended<I, R> {}
