//! Run result collection and the console summary.
//!
//! The runner reports lifecycle events into a `RunObserver`; the shipped
//! implementation is `BasicReporter`, an accumulator that records one line
//! per completed test and prints the whole run summary at the end. A
//! reporting problem must never fail the run it is reporting on, so nothing
//! in here returns an error or panics: bad input degrades to whatever fields
//! are available and write failures are swallowed.

use std::fmt;
use std::io::Write;

use chrono::Local;

/// Final outcome of a single test (or of the whole run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed,
    Skipped,
    TimedOut,
}

impl TestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestOutcome::Passed => "passed",
            TestOutcome::Failed => "failed",
            TestOutcome::Skipped => "skipped",
            TestOutcome::TimedOut => "timedOut",
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a test as shown in the summary.
#[derive(Debug, Clone)]
pub struct TestId {
    pub suite: String,
    pub name: String,
}

impl TestId {
    pub fn new(suite: &str, name: &str) -> Self {
        Self {
            suite: suite.to_string(),
            name: name.to_string(),
        }
    }
}

/// Observer of the test run lifecycle. The runner calls
/// `on_test_completed` once per test, in completion order, and
/// `on_run_completed` exactly once at the end.
pub trait RunObserver {
    fn on_test_completed(&mut self, test: &TestId, outcome: TestOutcome);
    fn on_run_completed(&mut self, overall: TestOutcome);
}

/// Accumulates `"<outcome> | <suite> > <test>"` lines and prints them as a
/// run summary, one line per test, in recording order.
#[derive(Default)]
pub struct BasicReporter {
    list_results: Vec<String>,
}

impl BasicReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded result lines, in completion order.
    pub fn lines(&self) -> &[String] {
        &self.list_results
    }

    fn format_line(test: &TestId, outcome: TestOutcome) -> String {
        // Empty identity fields still produce a line; visibility over
        // strictness.
        let suite = if test.suite.trim().is_empty() {
            "(unnamed suite)"
        } else {
            test.suite.as_str()
        };
        let name = if test.name.trim().is_empty() {
            "(unnamed test)"
        } else {
            test.name.as_str()
        };
        format!("{} | {} > {}", outcome, suite, name)
    }

    /// Write the summary: timestamp (captured now, not at construction),
    /// every recorded line, overall status. Write errors are ignored.
    pub fn write_summary<W: Write>(&self, overall: TestOutcome, out: &mut W) {
        let timestamp = Local::now().format("%d-%m-%Y %H:%M:%S");
        writeln!(out, "\nReport made at {}", timestamp).ok();
        for line in &self.list_results {
            writeln!(out, "{}", line).ok();
        }
        writeln!(out, "Suite total result: {}", overall).ok();
    }
}

impl RunObserver for BasicReporter {
    fn on_test_completed(&mut self, test: &TestId, outcome: TestOutcome) {
        self.list_results.push(Self::format_line(test, outcome));
    }

    fn on_run_completed(&mut self, overall: TestOutcome) {
        self.write_summary(overall, &mut std::io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_one_line_per_test_in_completion_order() {
        let mut reporter = BasicReporter::new();
        reporter.on_test_completed(
            &TestId::new("Rooms", "create a room"),
            TestOutcome::Passed,
        );
        reporter.on_test_completed(
            &TestId::new("Rooms", "invalid price"),
            TestOutcome::Failed,
        );
        reporter.on_test_completed(&TestId::new("Login", "smoke"), TestOutcome::TimedOut);

        assert_eq!(reporter.lines().len(), 3);
        assert_eq!(reporter.lines()[0], "passed | Rooms > create a room");
        assert_eq!(reporter.lines()[1], "failed | Rooms > invalid price");
        assert_eq!(reporter.lines()[2], "timedOut | Login > smoke");
    }

    #[test]
    fn summary_contains_every_line_in_order() {
        let mut reporter = BasicReporter::new();
        reporter.on_test_completed(&TestId::new("Rooms", "a"), TestOutcome::Passed);
        reporter.on_test_completed(&TestId::new("Rooms", "b"), TestOutcome::Skipped);

        let mut out = Vec::new();
        reporter.write_summary(TestOutcome::Passed, &mut out);
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Report made at "));
        let a = text.find("passed | Rooms > a").unwrap();
        let b = text.find("skipped | Rooms > b").unwrap();
        assert!(a < b);
        assert!(text.trim_end().ends_with("Suite total result: passed"));
    }

    #[test]
    fn empty_identity_degrades_instead_of_failing() {
        let mut reporter = BasicReporter::new();
        reporter.on_test_completed(&TestId::new("", ""), TestOutcome::Failed);
        assert_eq!(
            reporter.lines()[0],
            "failed | (unnamed suite) > (unnamed test)"
        );
    }

    #[test]
    fn write_errors_are_swallowed() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "closed"))
            }
        }

        let mut reporter = BasicReporter::new();
        reporter.on_test_completed(&TestId::new("Rooms", "a"), TestOutcome::Passed);
        // Must not panic or return an error.
        reporter.write_summary(TestOutcome::Failed, &mut Broken);
    }

    #[test]
    fn outcome_rendering_matches_the_runner_vocabulary() {
        assert_eq!(TestOutcome::Passed.to_string(), "passed");
        assert_eq!(TestOutcome::Failed.to_string(), "failed");
        assert_eq!(TestOutcome::Skipped.to_string(), "skipped");
        assert_eq!(TestOutcome::TimedOut.to_string(), "timedOut");
    }
}
