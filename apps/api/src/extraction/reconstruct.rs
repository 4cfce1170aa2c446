//! Line Reconstruction Engine: merges wrapped physical lines into logical statements.
//!
//! PDF text breaks a bullet wherever the page column ended. The engine keeps one
//! open accumulator: a bullet opens it, ordinary lines extend it, and a section
//! signal, job metadata, or contact line closes it.

use crate::extraction::classifier::{LineSignals, LineTag};
use crate::extraction::models::LogicalLine;
use crate::extraction::normalize::{split_lines, strip_zero_width};

#[derive(Debug, Default)]
pub struct Reconstructor {
    current: Option<LogicalLine>,
    merged: Vec<LogicalLine>,
}

impl Reconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one physical line through the state machine.
    pub fn step(&mut self, raw: &str) {
        let line = strip_zero_width(raw.trim());
        if line.is_empty() {
            return;
        }
        let signals = LineSignals::inspect(&line);
        let new_section = signals.starts_new_section();

        // Job-history metadata closes the open statement and is dropped.
        if signals.job_meta && self.current.is_some() {
            self.flush();
            return;
        }

        if signals.bullet_start {
            self.flush();
            self.current = Some(LogicalLine::new(LineTag::BulletStart, line));
        } else if let Some(current) = self.current.as_mut() {
            if !new_section && !signals.contact {
                current.text.push(' ');
                current.text.push_str(&line);
            } else {
                self.flush();
                if !new_section {
                    self.current = Some(LogicalLine::new(signals.tag(), line));
                }
            }
        } else if signals.is_continuation() && !self.merged.is_empty() {
            if let Some(last) = self.merged.last_mut() {
                last.text.push(' ');
                last.text.push_str(&line);
            }
        } else if !new_section {
            self.merged.push(LogicalLine::new(signals.tag(), line));
        }
    }

    fn flush(&mut self) {
        if let Some(done) = self.current.take() {
            self.merged.push(done);
        }
    }

    pub fn finish(mut self) -> Vec<LogicalLine> {
        self.flush();
        self.merged
    }
}

/// Rebuilds the logical statements of a whole document.
pub fn reconstruct(text: &str) -> Vec<LogicalLine> {
    let mut engine = Reconstructor::new();
    for line in split_lines(text) {
        engine.step(line);
    }
    engine.finish()
}
