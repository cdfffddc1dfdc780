//! Phase timings.
//!
//! Phases run back to back: starting a phase closes the one in progress.

use std::fmt;
use std::time::{Duration, Instant};

/// Wall-clock durations of the driver phases.
///
/// # Examples
///
/// ```
/// use moosec_drv::timings::Timings;
///
/// let mut timings = Timings::new();
/// timings.start("read");
/// timings.start("lex");
/// timings.end();
///
/// let names: Vec<_> = timings.phases().iter().map(|(name, _)| name.as_str()).collect();
/// assert_eq!(names, ["read", "lex"]);
/// assert!(timings.to_string().ends_with("s."));
/// ```
#[derive(Debug, Default)]
pub struct Timings {
    current: Option<(String, Instant)>,
    phases: Vec<(String, Duration)>,
}

impl Timings {
    /// Creates an empty set of timings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts timing `name`, ending the current phase if there is one.
    pub fn start(&mut self, name: impl Into<String>) {
        let now = Instant::now();
        self.close(now);
        self.current = Some((name.into(), now));
    }

    /// Ends the current phase. Does nothing when no phase is running.
    pub fn end(&mut self) {
        self.close(Instant::now());
    }

    fn close(&mut self, now: Instant) {
        if let Some((name, started)) = self.current.take() {
            self.phases.push((name, now.duration_since(started)));
        }
    }

    /// Completed phases in the order they ran.
    pub fn phases(&self) -> &[(String, Duration)] {
        &self.phases
    }

    /// Sum of all completed phases.
    pub fn total(&self) -> Duration {
        self.phases.iter().map(|(_, duration)| *duration).sum()
    }
}

impl fmt::Display for Timings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timings:")?;
        for (name, duration) in &self.phases {
            writeln!(f, "{}: {:.2}s.", name, duration.as_secs_f64())?;
        }
        write!(f, "total: {:.2}s.", self.total().as_secs_f64())
    }
}
