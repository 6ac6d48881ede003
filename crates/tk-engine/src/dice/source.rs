//! Pseudorandom integer sources.

use std::collections::VecDeque;

use rand::{Rng, RngCore};

/// Draws integers from an inclusive range.
pub trait RollSource {
    /// Return a value in `min..=max`.
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;
}

impl<R: RngCore> RollSource for R {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.random_range(min..=max)
    }
}

/// A roll source that replays a fixed sequence of values.
///
/// Values are clamped into the requested range. Once the script runs out,
/// every draw returns the range minimum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    values: VecDeque<i32>,
    drawn: usize,
}

impl ScriptedRolls {
    /// Create a script from the given values, drawn front to back.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Append more values to the end of the script.
    pub fn push(&mut self, values: impl IntoIterator<Item = i32>) {
        self.values.extend(values);
    }

    /// Number of scripted values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Total number of draws made so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RollSource for ScriptedRolls {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        self.drawn += 1;
        match self.values.pop_front() {
            Some(v) => v.clamp(min, max.max(min)),
            None => min,
        }
    }
}
