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

//! # Parking Allocation Model (`park-alloc-model`)
//!
//! The data model around a parking function simulation: what goes in, what
//! comes out, and how the result is reported.
//!
//! ## Inputs
//!
//! - **`PreferenceList`**: one preferred spot per car, used by the classical,
//!   k-Naples and (derived) unit-interval rules.
//! - **`NaplesReach`**: the backward look-back `k` of the k-Naples rule.
//! - **`IntervalList`** / **`UnitIntervalList`**: one closed interval
//!   `[alpha_i, beta_i]` of acceptable spots per car.
//!
//! Each input type validates on construction, so a simulator holding one can
//! rely on every spot lying on the street.
//!
//! ## Outputs
//!
//! - **`Slot`**: `Undecided`, `Parked(spot)` or `Unparked` for a single car.
//! - **`Frame`**: a full snapshot of all slots; **`Trace`**: the frame sequence
//!   of one run, starting with the all-undecided frame.
//! - **`Outcome`** and **`Verdict`**: pass/fail of a run and the message shown
//!   to the user.

pub mod err;
pub mod frame;
pub mod input;
pub mod outcome;
pub mod parse;

pub mod prelude {
    pub use crate::err::{
        IntervalError, IntervalReversedError, IntervalTooWideError,
        LengthMismatchError, NaplesReachOutOfRangeError, ParseTupleError, PreferenceError,
        SpotOutOfRangeError,
    };
    pub use crate::frame::{Assignment, Decision, Frame, Slot, Trace};
    pub use crate::input::{IntervalList, NaplesReach, PreferenceList, UnitIntervalList};
    pub use crate::outcome::{Outcome, RuleKind, Verdict};
    pub use crate::parse::parse_tuple;
}
