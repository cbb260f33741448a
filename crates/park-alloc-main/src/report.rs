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

//! Printing a finished run.

use park_alloc_core::spot::StreetLength;
use park_alloc_model::{
    frame::{Frame, Trace},
    outcome::{Outcome, RuleKind, Verdict},
};
use serde::Serialize;
use std::{io::Write, thread, time::Duration};

#[derive(Debug, Clone, Serialize)]
pub struct RunReport<'a> {
    rule: RuleKind,
    street_length: StreetLength,
    frames: &'a [Frame],
    outcome: Outcome,
    valid: bool,
    verdict: String,
}

impl<'a> RunReport<'a> {
    pub fn new(rule: RuleKind, trace: &'a Trace) -> Self {
        let outcome = trace.outcome();
        let verdict = Verdict::new(rule, outcome, trace.street_length());
        Self {
            rule,
            street_length: trace.street_length(),
            frames: trace.frames(),
            outcome,
            valid: verdict.is_valid(),
            verdict: verdict.message(),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn verdict(&self) -> &str {
        &self.verdict
    }

    /// Header, one line per frame, then the verdict. Sleeps `delay` between frames.
    pub fn write_text<W: Write>(&self, out: &mut W, delay: Duration) -> std::io::Result<()> {
        writeln!(
            out,
            "{} parking on a street of {} spots",
            self.rule,
            self.street_length.value()
        )?;
        for (step, frame) in self.frames.iter().enumerate() {
            if step > 0 && !delay.is_zero() {
                out.flush()?;
                thread::sleep(delay);
            }
            writeln!(out, "frame {:>2}: {}", step, frame)?;
        }
        writeln!(out, "{}", self.verdict)
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out).map_err(serde_json::Error::io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_model::input::PreferenceList;
    use park_alloc_sim::simulate_classical;

    fn trace(values: &[usize]) -> Trace {
        simulate_classical(&PreferenceList::new(values).unwrap())
    }

    #[test]
    fn test_text_report() {
        let t = trace(&[1, 1]);
        let report = RunReport::new(RuleKind::Classical, &t);
        let mut buf = Vec::new();
        report.write_text(&mut buf, Duration::ZERO).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Classical parking on a street of 2 spots\n\
             frame  0: [_, _]\n\
             frame  1: [1, _]\n\
             frame  2: [1, 2]\n\
             All cars parked. This is a valid Classical Parking Function of length 2!\n"
        );
        assert!(report.is_valid());
    }

    #[test]
    fn test_json_report() {
        let t = trace(&[2, 2]);
        let report = RunReport::new(RuleKind::Classical, &t);
        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["rule"]["kind"], "classical");
        assert_eq!(value["street_length"], 2);
        assert_eq!(value["frames"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["frames"][2][1]["state"], "unparked");
        assert_eq!(value["outcome"]["result"], "invalid");
        assert_eq!(value["outcome"]["car"], 1);
        assert_eq!(value["valid"], false);
        assert!(!report.is_valid());
        assert!(report.verdict().contains("not a valid Classical"));
    }
}
