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

//! # Parking Simulation (`park-alloc-sim`)
//!
//! Car-by-car simulation of parking functions on a one-way street.
//!
//! ## Building blocks
//!
//! - **`street`**: the occupancy tracker. `StreetRead` / `StreetWrite` with a
//!   `Vec<bool>` and a `BTreeSet` implementation. Occupancy only grows.
//! - **`rule`**: placement rules. A `PlacementRule` yields the spots a car
//!   tries, in order, and says whether the run stops at the first failure.
//! - **`recorder`**: collects full-snapshot frames into a `Trace`.
//! - **`engine`**: `ParkingEngine` drives any rule over any street.
//!
//! ## Entry points
//!
//! `simulate_classical`, `simulate_k_naples`, `simulate_interval` and
//! `simulate_unit_interval` take validated inputs from `park-alloc-model` and
//! return the trace of one run.

pub mod engine;
pub mod recorder;
pub mod rule;
pub mod simulate;
pub mod street;

pub use simulate::{simulate_classical, simulate_interval, simulate_k_naples, simulate_unit_interval};

pub mod prelude {
    pub use crate::engine::ParkingEngine;
    pub use crate::recorder::FrameRecorder;
    pub use crate::rule::{
        ClassicalRule, FailurePolicy, IntervalRule, NaplesRule, PlacementRule, UnitIntervalRule,
    };
    pub use crate::simulate::{
        simulate_classical, simulate_interval, simulate_k_naples, simulate_unit_interval,
    };
    pub use crate::street::{
        BTreeSetStreet, BooleanVecStreet, Street, StreetOutOfBoundsError, StreetRead, StreetWrite,
    };
}
