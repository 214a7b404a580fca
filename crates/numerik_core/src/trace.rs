use num_traits::ToPrimitive;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};

/// Recorder for per-iteration diagnostics of the iterative methods.
///
/// Instrumented routines accept an `Option<&mut StepTrace>`; when a trace is
/// supplied and enabled, they clear it at the start of the run and append one
/// row of values per iteration step. The recorder is an explicit, caller-owned
/// object, so nested or repeated calls each scope their own recording instead
/// of sharing process-wide state.
#[derive(Debug, Clone)]
pub struct StepTrace {
    enabled: bool,
    steps: Vec<Vec<f64>>,
}

impl StepTrace {
    /// Creates an enabled recorder.
    pub fn new() -> Self {
        Self {
            enabled: true,
            steps: Vec::new(),
        }
    }

    /// Creates a disabled recorder. Useful to keep one long-lived trace around
    /// and only switch it on (e.g. via [`with_recording`]) for selected calls.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            steps: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Marks the start of an instrumented run: drops any rows from a previous
    /// run if recording is enabled. Called by the instrumented routines.
    pub fn begin(&mut self) {
        if self.enabled {
            self.steps.clear();
        }
    }

    /// Appends one row of iteration values if recording is enabled.
    pub fn push(&mut self, row: &[f64]) {
        if self.enabled {
            self.steps.push(row.to_vec());
        }
    }

    /// The recorded rows, one per iteration step.
    pub fn steps(&self) -> &[Vec<f64>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Formats the recorded rows as a column-aligned table. The first column
    /// is always a step counter starting from 0; `headers` optionally labels
    /// the columns (counter column included), and `tostr` converts the
    /// recorded values to their display form.
    pub fn render_table<F>(&self, headers: Option<&[&str]>, tostr: F) -> String
    where
        F: Fn(f64) -> String,
    {
        let rows: Vec<Vec<String>> = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let mut row = vec![i.to_string()];
                row.extend(step.iter().map(|&v| tostr(v)));
                row
            })
            .collect();

        let columns = rows
            .iter()
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
            .max(headers.map_or(0, |h| h.len()));
        let mut widths = vec![0usize; columns];
        if let Some(headers) = headers {
            for (j, title) in headers.iter().enumerate() {
                widths[j] = title.len();
            }
        }
        for row in &rows {
            for (j, cell) in row.iter().enumerate() {
                widths[j] = widths[j].max(cell.len());
            }
        }

        let format_row = |cells: &[String]| -> String {
            let mut line = String::from(" ");
            for (j, &width) in widths.iter().enumerate() {
                if j > 0 {
                    line.push_str(" | ");
                }
                let cell = cells.get(j).map(String::as_str).unwrap_or("");
                line.push_str(&format!("{:>width$}", cell));
            }
            line.push('\n');
            line
        };

        let mut out = String::new();
        if let Some(headers) = headers {
            let titles: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
            out.push_str(&format_row(&titles));
            let separator: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
            out.push_str(&separator.join("+"));
            out.push('\n');
        }
        for row in &rows {
            out.push_str(&format_row(row));
        }
        out
    }
}

impl Default for StepTrace {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `f` with recording switched on and restores the recorder's previous
/// enabled/disabled state afterwards, even when `f` panics.
pub fn with_recording<R, F>(trace: &mut StepTrace, f: F) -> R
where
    F: FnOnce(&mut StepTrace) -> R,
{
    let prior = trace.enabled;
    trace.enabled = true;
    let result = catch_unwind(AssertUnwindSafe(|| f(&mut *trace)));
    trace.enabled = prior;
    match result {
        Ok(value) => value,
        Err(payload) => resume_unwind(payload),
    }
}

// Internal helpers shared by the instrumented routines. Rows are converted to
// f64 for recording; values outside the f64 range record as NaN.

pub(crate) fn begin(trace: &mut Option<&mut StepTrace>) {
    if let Some(trace) = trace.as_deref_mut() {
        trace.begin();
    }
}

pub(crate) fn record<T: ToPrimitive>(trace: &mut Option<&mut StepTrace>, row: &[T]) {
    if let Some(trace) = trace.as_deref_mut() {
        let row: Vec<f64> = row
            .iter()
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .collect();
        trace.push(&row);
    }
}
