use crate::{
    config::SpeedupConfig,
    metrics::{read_metrics_file, MetricsTable},
    speedup::calculate_speedup,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report")]
    WriteReport(#[from] std::io::Error),
}

/// run the pipeline once: read both metrics logs, write the report
///
/// Failures while reading already degraded to partial tables, a failure while
/// writing is reported here. The run never aborts.
pub fn run(config: &SpeedupConfig) {
    let sequential = read_metrics_file(&config.sequential_path);
    let concurrent = read_metrics_file(&config.concurrent_path);

    match write_results(&config.output_path, &sequential, &concurrent) {
        Ok(()) => info!(
            "Speed-up calculation completed. Results saved in {}",
            config.output_path.display()
        ),
        Err(error) => error!(
            error = ?error,
            "Error writing to output file {}",
            config.output_path.display()
        ),
    }
}

/// render one block per case of the sequential table
///
/// The join is driven by the sequential table, cases that only appear in the
/// concurrent table are not part of the report.
pub fn write_results(
    path: &Path,
    sequential: &MetricsTable,
    concurrent: &MetricsTable,
) -> Result<(), ReportError> {
    let mut output = BufWriter::new(File::create(path)?);

    writeln!(output, "Speed-up Results:")?;
    writeln!(output)?;

    for (case, seq_record) in sequential {
        match concurrent.get(case) {
            Some(conc_record) => {
                writeln!(output, "Case {case}:")?;
                writeln!(
                    output,
                    "Sequential Avg Time (ms): {:.4}",
                    seq_record.average_time
                )?;
                writeln!(
                    output,
                    "Concurrent Avg Time (ms): {:.4}",
                    conc_record.average_time
                )?;

                match calculate_speedup(seq_record.average_time, conc_record.average_time) {
                    Some(speedup) => {
                        writeln!(output, "Speed-up (S = Ts / Tc): {speedup:.4}")?;

                        // a ratio of exactly 1.0 counts as sequential
                        let verdict = if speedup > 1.0 {
                            "Concurrent version is faster."
                        } else {
                            "Sequential version is faster."
                        };
                        writeln!(output, "Result: {verdict}")?;
                    }
                    None => {
                        writeln!(
                            output,
                            "Speed-up: Could not be calculated (invalid concurrent time)"
                        )?;
                    }
                }

                writeln!(output)?;
            }
            None => {
                writeln!(output, "Case {case}: No data for concurrent version.")?;
                writeln!(output)?;
            }
        }
    }

    output.flush()?;

    Ok(())
}
