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

use park_alloc_core::spot::{CarIndex, StreetLength};
use park_alloc_model::frame::{Assignment, Decision, Trace};

/// Builds a [`Trace`] while a run progresses.
///
/// The recorder starts with frame 0 already recorded. Each call to
/// [`FrameRecorder::record`] appends a full snapshot of the assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecorder {
    assignment: Assignment,
    trace: Trace,
}

impl FrameRecorder {
    #[inline]
    pub fn new(street: StreetLength) -> Self {
        Self {
            assignment: Assignment::new(street.value()),
            trace: Trace::new(street),
        }
    }

    #[inline]
    pub fn next_car(&self) -> Option<CarIndex> {
        self.assignment.next_car()
    }

    #[inline]
    pub fn decide(&mut self, decision: Decision) -> Option<CarIndex> {
        self.assignment.decide(decision)
    }

    #[inline]
    pub fn record(&mut self) {
        self.trace.push(self.assignment.snapshot());
    }

    #[inline]
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.trace.len()
    }

    #[inline]
    pub fn finish(self) -> Trace {
        self.trace
    }
}
