//! Slice arguments, their normalized form, and the execution strategy derived from them.
//!
//! Three layers:
//! - **Raw** (`SliceArgs`): what the caller wrote, every bound optional
//! - **Normalized** (`NormalizedSlice`): defaults applied, step proven non-zero
//! - **Resolved** (`SliceIndices`): bounds clamped against a known length,
//!   only available once a buffer has been materialized

use std::fmt;
use std::num::NonZeroIsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseSliceError, SliceError};

/// Raw `start:stop:step` triple, each bound independently optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SliceArgs {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceArgs {
    /// Full form: `start:stop:step`.
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Single-argument form: `:stop`.
    pub fn stop(stop: Option<isize>) -> Self {
        Self::new(None, stop, None)
    }

    /// Two-argument form: `start:stop`.
    pub fn range(start: Option<isize>, stop: Option<isize>) -> Self {
        Self::new(start, stop, None)
    }

    /// Build from positional parts, mirroring the 1/2/3 argument call shapes.
    pub fn from_parts(parts: &[Option<isize>]) -> Result<Self, ParseSliceError> {
        match *parts {
            [stop] => Ok(Self::stop(stop)),
            [start, stop] => Ok(Self::range(start, stop)),
            [start, stop, step] => Ok(Self::new(start, stop, step)),
            _ => Err(ParseSliceError::Arity { found: parts.len() }),
        }
    }

    /// Apply defaults and reject a zero step.
    pub fn normalize(&self) -> Result<NormalizedSlice, SliceError> {
        let step = NonZeroIsize::new(self.step.unwrap_or(1)).ok_or(SliceError::ZeroStep)?;
        let start = self.start.unwrap_or(if step.get() > 0 { 0 } else { -1 });

        Ok(NormalizedSlice {
            start,
            stop: self.stop,
            step,
        })
    }

    /// Resolve against a sequence of `len` elements, like Python's `slice.indices`.
    pub fn indices(&self, len: usize) -> Result<SliceIndices, SliceError> {
        Ok(self.normalize()?.indices(len))
    }
}

impl From<(Option<isize>,)> for SliceArgs {
    fn from((stop,): (Option<isize>,)) -> Self {
        Self::stop(stop)
    }
}

impl From<(Option<isize>, Option<isize>)> for SliceArgs {
    fn from((start, stop): (Option<isize>, Option<isize>)) -> Self {
        Self::range(start, stop)
    }
}

impl From<(Option<isize>, Option<isize>, Option<isize>)> for SliceArgs {
    fn from((start, stop, step): (Option<isize>, Option<isize>, Option<isize>)) -> Self {
        Self::new(start, stop, step)
    }
}

/// Parse one bound: an integer, or `None` / `none` / `_` / empty for "absent".
pub fn parse_bound(text: &str) -> Result<Option<isize>, ParseSliceError> {
    let trimmed = text.trim();
    match trimmed {
        "" | "_" | "None" | "none" => Ok(None),
        _ => trimmed
            .parse::<isize>()
            .map(Some)
            .map_err(|_| ParseSliceError::InvalidBound {
                text: text.to_string(),
            }),
    }
}

impl FromStr for SliceArgs {
    type Err = ParseSliceError;

    /// Python notation. Without a colon the text is a lone `stop`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() > 3 {
            return Err(ParseSliceError::TooManyParts { found: parts.len() });
        }

        let bounds = parts
            .iter()
            .map(|part| parse_bound(part))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_parts(&bounds)
    }
}

impl fmt::Display for SliceArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn bound(f: &mut fmt::Formatter<'_>, value: Option<isize>) -> fmt::Result {
            match value {
                Some(v) => write!(f, "{v}"),
                None => Ok(()),
            }
        }

        bound(f, self.start)?;
        f.write_str(":")?;
        bound(f, self.stop)?;
        if self.step.is_some() {
            f.write_str(":")?;
            bound(f, self.step)?;
        }
        Ok(())
    }
}

/// Slice with defaults applied: `start` is always known and `step` is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NormalizedSlice {
    start: isize,
    stop: Option<isize>,
    step: NonZeroIsize,
}

impl NormalizedSlice {
    pub fn start(&self) -> isize {
        self.start
    }

    pub fn stop(&self) -> Option<isize> {
        self.stop
    }

    pub fn step(&self) -> isize {
        self.step.get()
    }

    /// Pick the cheapest strategy that can still produce the right result.
    pub fn strategy(&self) -> Strategy {
        if self.start < 0 || self.stop.is_some_and(|stop| stop < 0) {
            Strategy::NegativeIndex
        } else if self.step.get() < 0 {
            Strategy::NegativeStep
        } else {
            Strategy::Forward
        }
    }

    /// Clamp the bounds against `len`.
    ///
    /// Negative bounds count from the end. Out-of-range bounds clamp to
    /// `[0, len]` for a positive step and to `[-1, len - 1]` for a negative one,
    /// where `-1` means "before the first element".
    pub fn indices(&self, len: usize) -> SliceIndices {
        let len = len as isize;
        let step = self.step.get();
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

        let resolve = |bound: isize| {
            let bound = if bound < 0 { bound + len } else { bound };
            bound.clamp(lower, upper)
        };

        let start = resolve(self.start);
        let stop = match self.stop {
            Some(stop) => resolve(stop),
            None if step > 0 => len,
            None => -1,
        };

        SliceIndices { start, stop, step }
    }
}

impl fmt::Display for NormalizedSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start={} stop=", self.start)?;
        match self.stop {
            Some(stop) => write!(f, "{stop}")?,
            None => f.write_str("none")?,
        }
        write!(f, " step={}", self.step)
    }
}

/// Slice bounds resolved against a known length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceIndices {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
}

impl SliceIndices {
    /// Number of selected positions.
    pub fn len(&self) -> usize {
        let span = if self.step > 0 {
            self.stop - self.start
        } else {
            self.start - self.stop
        };
        if span <= 0 {
            return 0;
        }
        (span.unsigned_abs() - 1) / self.step.unsigned_abs() + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the element at `index` belongs to the slice.
    pub fn contains(&self, index: usize) -> bool {
        let index = index as isize;
        let stride = self.step.unsigned_abs();
        if self.step > 0 {
            self.start <= index
                && index < self.stop
                && (index - self.start).unsigned_abs() % stride == 0
        } else {
            self.stop < index
                && index <= self.start
                && (self.start - index).unsigned_abs() % stride == 0
        }
    }
}

/// How the executor consumes its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// A negative bound: the length is needed, so the source is drained.
    NegativeIndex,
    /// Non-negative bounds, negative step: only `start + 1` elements matter.
    NegativeStep,
    /// Non-negative bounds, positive step: streamed without buffering.
    Forward,
}

impl Strategy {
    /// Whether the strategy materializes elements before yielding.
    pub fn is_buffered(self) -> bool {
        !matches!(self, Strategy::Forward)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::NegativeIndex => "negative-index",
            Strategy::NegativeStep => "negative-step",
            Strategy::Forward => "forward",
        })
    }
}
