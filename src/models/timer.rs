use crossbeam_channel::Sender;

use super::clock::Timestamp;
use super::constant::{ELAPSED_DECIMALS, REPORT_UNIT, REPORT_VERB};

/// Times the scope it lives in: captures a timestamp on construction and
/// prints `<label>: took <elapsed> seconds.` to stdout when dropped.
///
/// The report fires exactly once per instance, on every exit path out of
/// the owning scope, normal return, early return, or unwind.
pub struct AutoTimer {
    label: String,
    start: Timestamp,
    tap: Option<Sender<String>>,
}

impl AutoTimer {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            start: Timestamp::now(),
            tap: None,
        }
    }

    /// Fractional seconds since construction.
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed_seconds()
    }

    // test seam: route the report line into a channel instead of stdout
    #[cfg(test)]
    pub(crate) fn with_tap(label: &str, tap: Sender<String>) -> Self {
        Self {
            label: label.to_string(),
            start: Timestamp::now(),
            tap: Some(tap),
        }
    }

    fn report_line(&self) -> String {
        format!(
            "{}: {} {:.prec$} {}.",
            self.label,
            REPORT_VERB,
            self.elapsed(),
            REPORT_UNIT,
            prec = ELAPSED_DECIMALS
        )
    }
}

impl Drop for AutoTimer {
    fn drop(&mut self) {
        let line = self.report_line();
        match &self.tap {
            Some(tx) => {
                // fire and forget, a closed tap drops the line
                let _ = tx.send(line);
            }
            None => println!("{}", line),
        }
    }
}
