//! Terminal rendering: step traces and result tables.
//!
//! Everything here returns `String`s; printing is the caller's business.
//! Colors are plain ANSI SGR sequences and can be switched off with
//! [`ColorMode::Never`] (for pipes, logs, and tests).

use std::fmt::{Display, Write as _};

use pivot_kernel::trace::{SettleView, StepView, TraceSink};
use pivot_kernel::window::{SearchWindow, WindowConvention};

use crate::classify::AgreementVerdict;
use crate::compare::ComparisonV1;
use crate::report::ExperimentReportV1;

const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const RED: &str = "\x1b[91m";
const REVERSE: &str = "\x1b[7m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Whether to emit ANSI escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Always,
    Never,
}

impl ColorMode {
    fn paint(self, out: &mut String, style: &str, text: &str) {
        match self {
            Self::Always => {
                out.push_str(style);
                out.push_str(text);
                out.push_str(RESET);
            }
            Self::Never => out.push_str(text),
        }
    }
}

fn verdict_style(verdict: AgreementVerdict) -> &'static str {
    match verdict {
        AgreementVerdict::AllAgree => GREEN,
        AgreementVerdict::AgreeOnValue => YELLOW,
        AgreementVerdict::Disagree => RED,
    }
}

/// Index just past the window's last candidate.
fn exclusive_end(window: &SearchWindow) -> usize {
    match window.convention {
        WindowConvention::HalfOpen => window.hi,
        WindowConvention::Closed => window.hi + 1,
    }
}

/// [`TraceSink`] that renders one line per event.
///
/// Each line shows the variant label, the whole sequence with the live
/// window highlighted (midpoint reversed, first index past the window in
/// red), and `l = , m = , r =` markers. The settle line repeats the final
/// window with `m = -`.
#[derive(Debug, Clone, Default)]
pub struct AnsiTraceRenderer {
    color: ColorMode,
    lines: Vec<String>,
}

impl AnsiTraceRenderer {
    #[must_use]
    pub fn new(color: ColorMode) -> Self {
        Self {
            color,
            lines: Vec::new(),
        }
    }

    /// Rendered lines so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines, each newline-terminated.
    #[must_use]
    pub fn into_string(self) -> String {
        let mut out = String::new();
        for line in self.lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn render<T: Display>(
        &mut self,
        label: &str,
        window: SearchWindow,
        mid: Option<usize>,
        seq: &[T],
    ) {
        let cells: Vec<String> = seq.iter().map(ToString::to_string).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0).max(3);
        let end = exclusive_end(&window);

        let mut line = format!("{label:<12}");
        for (i, cell) in cells.iter().enumerate() {
            line.push(' ');
            let padded = format!("{cell:>width$}");
            if Some(i) == mid {
                self.color.paint(&mut line, &format!("{GREEN}{REVERSE}"), &padded);
            } else if window.contains(i) {
                self.color.paint(&mut line, GREEN, &padded);
            } else if i == end {
                self.color.paint(&mut line, RED, &padded);
            } else {
                line.push_str(&padded);
            }
        }
        let m = mid.map_or_else(|| "-".to_string(), |m| m.to_string());
        let _ = write!(line, "    l = {}, m = {m}, r = {}", window.lo, window.hi);
        self.lines.push(line);
    }
}

impl<T: Display> TraceSink<T> for AnsiTraceRenderer {
    fn on_step(&mut self, view: &StepView<'_, T>) {
        self.render(view.label, view.window, Some(view.mid), view.seq);
    }

    fn on_settle(&mut self, view: &SettleView<'_, T>) {
        self.render(view.label, view.window, None, view.seq);
    }
}

/// One row per variant plus the verdict, colored by verdict.
#[must_use]
pub fn render_comparison(comparison: &ComparisonV1, color: ColorMode) -> String {
    let style = verdict_style(comparison.verdict);
    let mut out = String::new();
    for run in &comparison.runs {
        let row = format!(
            "{:<12}{:>6}    {}",
            run.variant.as_str(),
            run.outcome.to_string(),
            run.stats
        );
        color.paint(&mut out, style, &row);
        out.push('\n');
    }
    let verdict = format!("verdict: {}", comparison.verdict);
    color.paint(&mut out, style, &verdict);
    out.push('\n');
    out
}

/// Trial listing: one row per trial, colored by verdict, then the tally.
#[must_use]
pub fn render_table(report: &ExperimentReportV1, color: ColorMode) -> String {
    let mut out = String::new();

    let mut header = format!("{:<7}{:>7}", "trial", "target");
    for variant in &report.variants {
        let _ = write!(header, "{:>12}", variant.as_str());
    }
    let _ = write!(header, "  {:<16}sequence", "verdict");
    color.paint(&mut out, BOLD, &header);
    out.push('\n');
    out.push_str(&"=".repeat(header.len()));
    out.push('\n');

    for record in &report.trials {
        let mut row = format!("{:<7}{:>7}", record.index, record.trial.target);
        for run in &record.comparison.runs {
            let _ = write!(row, "{:>12}", run.outcome.to_string());
        }
        let _ = write!(
            row,
            "  {:<16}{:?}",
            record.verdict().as_str(),
            record.trial.sequence
        );
        color.paint(&mut out, verdict_style(record.verdict()), &row);
        out.push('\n');
    }

    out.push('\n');
    for verdict in AgreementVerdict::ALL {
        let line = format!("{:<16}{}", verdict.as_str(), report.tally.count(verdict));
        color.paint(&mut out, verdict_style(verdict), &line);
        out.push('\n');
    }
    out
}

/// Per-variant averages and maxima.
#[must_use]
pub fn render_bulk(report: &ExperimentReportV1, color: ColorMode) -> String {
    let mut out = String::new();
    let header = format!(
        "{:<12}{:>8}{:>12}{:>12}{:>10}{:>10}",
        "variant", "trials", "mean_iter", "mean_cmp", "max_iter", "max_cmp"
    );
    color.paint(&mut out, BOLD, &header);
    out.push('\n');
    for agg in &report.aggregates {
        let _ = writeln!(
            out,
            "{:<12}{:>8}{:>12.3}{:>12.3}{:>10}{:>10}",
            agg.variant.as_str(),
            agg.trials,
            agg.mean_iterations(),
            agg.mean_comparisons(),
            agg.max_iterations,
            agg.max_comparisons
        );
    }
    out
}
