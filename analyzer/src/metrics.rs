use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};
use tracing::{error, warn};

/// map of case label -> metric record
/// iteration order is the order the cases first appear in the file
pub type MetricsTable = IndexMap<char, MetricRecord>;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub average_time: f64,
}

static CASE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"Case ([A-J])").unwrap());
static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Average Time \(ms\): ([\d.]+)").unwrap());

/// extract the average execution time for each case from a metrics log
///
/// A case line selects the current case, a time line records an entry for it.
/// Time lines repeated under the same case overwrite the earlier value and
/// everything else in the log is ignored. Failures degrade instead of
/// propagating: a missing or unreadable file yields whatever was collected up
/// to that point and a malformed time value only skips its own entry.
pub fn read_metrics_file(path: &Path) -> MetricsTable {
    let mut metrics = MetricsTable::new();
    let mut current_case: Option<char> = None;

    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            error!("Metrics file not found: {}", path.display());

            return metrics;
        }
        Err(error) => {
            error!(error = ?error, "Failed to open metrics file {}", path.display());

            return metrics;
        }
    };

    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                error!(error = ?error, "Failed to read from metrics file {}", path.display());

                return metrics;
            }
        };

        if let Some(captures) = CASE_PATTERN.captures(&line) {
            current_case = captures[1].chars().next();
        }

        if let Some(captures) = TIME_PATTERN.captures(&line) {
            if let Some(case) = current_case {
                // the time pattern admits strings like `12..5` that are not
                // valid floats, those entries are skipped
                match captures[1].parse::<f64>() {
                    Ok(average_time) => {
                        metrics.insert(case, MetricRecord { average_time });
                    }
                    Err(error) => {
                        warn!(
                            "Skipping unparsable average time for case {case} in {}: {error}",
                            path.display()
                        );
                    }
                }
            }
        }
    }

    metrics
}
