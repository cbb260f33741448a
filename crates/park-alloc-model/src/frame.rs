// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Assignments, frames and traces.
//!
//! An [`Assignment`] holds one [`Slot`] per car and settles cars in arrival
//! order, each exactly once.
//! A [`Frame`] is an immutable snapshot of an assignment, and a [`Trace`] is
//! the ordered sequence of frames a simulation produced, starting with the
//! all-undecided frame.

use crate::outcome::Outcome;
use park_alloc_core::spot::{CarIndex, Spot, StreetLength};
use serde::Serialize;
use std::fmt::Display;

/// Where a single car stands at one point of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "state", content = "spot", rename_all = "snake_case")]
pub enum Slot {
    /// The car has not been processed yet.
    #[default]
    Undecided,
    /// The car claimed this spot.
    Parked(Spot),
    /// The car was processed and found no spot.
    Unparked,
}

impl Slot {
    #[inline]
    pub fn is_decided(&self) -> bool {
        !matches!(self, Slot::Undecided)
    }

    #[inline]
    pub fn spot(&self) -> Option<Spot> {
        match self {
            Slot::Parked(s) => Some(*s),
            _ => None,
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Undecided => write!(f, "_"),
            Slot::Parked(s) => write!(f, "{}", s.value()),
            Slot::Unparked => write!(f, "x"),
        }
    }
}

/// The final decision for one car.
///
/// Unlike [`Slot`] there is no undecided state, so a decision can never
/// reset a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Parked(Spot),
    Unparked,
}

impl From<Decision> for Slot {
    #[inline]
    fn from(d: Decision) -> Self {
        match d {
            Decision::Parked(s) => Slot::Parked(s),
            Decision::Unparked => Slot::Unparked,
        }
    }
}

/// The mutable per-car decisions of a run in progress.
///
/// Cars are decided strictly in arrival order. The cursor only moves
/// forward, so every car is settled at most once and never reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    slots: Vec<Slot>,
    next: usize,
}

impl Assignment {
    #[inline]
    pub fn new(cars: usize) -> Self {
        Self {
            slots: vec![Slot::Undecided; cars],
            next: 0,
        }
    }

    #[inline]
    pub fn car_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn decided_count(&self) -> usize {
        self.next
    }

    #[inline]
    pub fn get(&self, car: CarIndex) -> Option<Slot> {
        self.slots.get(car.value()).copied()
    }

    /// The car that would be settled by the next call to [`Assignment::decide`].
    #[inline]
    pub fn next_car(&self) -> Option<CarIndex> {
        (self.next < self.slots.len()).then(|| CarIndex::new(self.next))
    }

    /// Settles the next undecided car and returns its index.
    ///
    /// Returns `None` and leaves the assignment untouched once every car
    /// has been decided.
    pub fn decide(&mut self, decision: Decision) -> Option<CarIndex> {
        let car = self.next_car()?;
        self.slots[car.value()] = decision.into();
        self.next += 1;
        Some(car)
    }

    #[inline]
    pub fn snapshot(&self) -> Frame {
        Frame {
            slots: self.slots.clone(),
        }
    }
}

/// A full snapshot of every car's slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Frame {
    slots: Vec<Slot>,
}

impl Frame {
    /// The frame in which no car has been processed.
    #[inline]
    pub fn undecided(cars: usize) -> Self {
        Self {
            slots: vec![Slot::Undecided; cars],
        }
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    pub fn get(&self, car: CarIndex) -> Option<Slot> {
        self.slots.get(car.value()).copied()
    }

    #[inline]
    pub fn car_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn decided_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_decided()).count()
    }

    #[inline]
    pub fn parked_count(&self) -> usize {
        self.slots.iter().filter(|s| s.spot().is_some()).count()
    }

    #[inline]
    pub fn unparked_count(&self) -> usize {
        self.slots.iter().filter(|s| **s == Slot::Unparked).count()
    }

    #[inline]
    pub fn first_unparked(&self) -> Option<CarIndex> {
        self.slots
            .iter()
            .position(|s| *s == Slot::Unparked)
            .map(CarIndex::new)
    }

    /// Claimed spots per car, `None` for undecided or unparked cars.
    #[inline]
    pub fn spots(&self) -> impl Iterator<Item = Option<Spot>> + '_ {
        self.slots.iter().map(Slot::spot)
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, s) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, "]")
    }
}

/// The ordered frames of one simulation run.
///
/// A trace is never empty: it starts with the all-undecided frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Trace {
    street_length: StreetLength,
    frames: Vec<Frame>,
}

impl Trace {
    /// Starts a trace with the all-undecided frame for `street` cars.
    #[inline]
    pub fn new(street: StreetLength) -> Self {
        Self {
            street_length: street,
            frames: vec![Frame::undecided(street.value())],
        }
    }

    #[inline]
    pub fn push(&mut self, frame: Frame) {
        debug_assert_eq!(frame.car_count(), self.street_length.value());
        self.frames.push(frame);
    }

    #[inline]
    pub fn street_length(&self) -> StreetLength {
        self.street_length
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn initial_frame(&self) -> &Frame {
        &self.frames[0]
    }

    #[inline]
    pub fn final_frame(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Pass/fail of the run as read off the final frame.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        Outcome::of_frame(self.final_frame())
    }

    #[inline]
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
