//! Console result reporter for runner lifecycle events
//!
//! The external runner owns test execution; this reporter only observes the
//! run-begin / test-begin / test-end / run-end sequence and renders it as
//! colored console lines plus pass/fail/skip counts. It never alters test
//! outcomes.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

/// A single test case as the runner reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub title: String,
}

impl TestCase {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A suite node in the runner's test tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suite {
    pub title: String,
    pub tests: Vec<TestCase>,
    pub suites: Vec<Suite>,
}

impl Suite {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Total test count across this suite and all nested sub-suites.
    pub fn total_tests(&self) -> usize {
        self.tests.len()
            + self
                .suites
                .iter()
                .map(Suite::total_tests)
                .sum::<usize>()
    }
}

/// Terminal outcome of one test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    TimedOut,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::TimedOut => "timedOut",
        }
    }
}

/// Renders lifecycle events to a console stream.
///
/// Holds only the running counts between events; everything else is derived
/// from the event arguments.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
    passed: usize,
    failed: usize,
    skipped: usize,
}

const BANNER: &str = "===============================================";

impl ConsoleReporter<io::Stderr> {
    /// Reporter on stderr, colored only when stderr is a terminal.
    pub fn stderr() -> Self {
        let color = io::stderr().is_terminal();
        Self::new(io::stderr(), color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    /// Run start: banner, recursive test count, worker count, timestamp.
    pub fn on_begin(&mut self, run_name: &str, workers: u32, suite: &Suite) -> io::Result<()> {
        let total = suite.total_tests();
        let banner = self.paint(Color::Cyan, BANNER);

        writeln!(self.out, "{banner}")?;
        let headline = format!(
            "🚀 Starting {run_name}: {total} tests using {workers} workers"
        );
        writeln!(self.out, "{}", self.paint(Color::Magenta, &headline))?;
        writeln!(self.out, "{banner}")?;

        let started = format!(
            "Test run started at: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        writeln!(self.out, "{}", self.paint(Color::Cyan, &started))
    }

    pub fn on_test_begin(&mut self, title: &str) -> io::Result<()> {
        let tag = self.paint(Color::Yellow, "[TEST BEGIN]");
        writeln!(self.out, "{tag} {title}")
    }

    pub fn on_test_end(&mut self, title: &str, status: TestStatus) -> io::Result<()> {
        match status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Skipped => self.skipped += 1,
            TestStatus::Failed | TestStatus::TimedOut => self.failed += 1,
        }

        let color = if status == TestStatus::Passed {
            Color::Green
        } else {
            Color::Red
        };
        let tag = self.paint(color, "[TEST END]");
        writeln!(self.out, "{tag} {title} - {}", status.as_str())
    }

    /// Run end: closing line with the accumulated counts.
    pub fn on_end(&mut self) -> io::Result<()> {
        let tag = self.paint(Color::Magenta, "[END]");
        writeln!(
            self.out,
            "{tag} Test run finished. {} passed, {} failed, {} skipped",
            self.passed, self.failed, self.skipped
        )
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}
