use crate::metrics::{MetricRecord, MetricsTable};
use crate::report::write_results;
use crate::speedup::calculate_speedup;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn table(entries: &[(char, f64)]) -> MetricsTable {
    entries
        .iter()
        .map(|(case, average_time)| {
            (
                *case,
                MetricRecord {
                    average_time: *average_time,
                },
            )
        })
        .collect()
}

#[test]
pub fn speedup_of_two() {
    assert_eq!(calculate_speedup(120.0, 60.0), Some(2.0));
}

#[test]
pub fn speedup_below_one_when_sequential_wins() {
    assert_eq!(calculate_speedup(50.0, 100.0), Some(0.5));
}

#[test]
pub fn zero_concurrent_time_is_not_computable() {
    assert_eq!(calculate_speedup(100.0, 0.0), None);
}

#[test]
pub fn negative_concurrent_time_is_not_computable() {
    assert_eq!(calculate_speedup(100.0, -3.5), None);
}

#[test]
pub fn renders_all_block_variants() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.txt");

    let sequential = table(&[('A', 120.0), ('C', 50.0), ('F', 10.0), ('B', 30.0)]);
    let concurrent = table(&[('A', 60.0), ('C', 0.0), ('B', 30.0)]);

    write_results(&path, &sequential, &concurrent).unwrap();

    let expected = "\
Speed-up Results:

Case A:
Sequential Avg Time (ms): 120.0000
Concurrent Avg Time (ms): 60.0000
Speed-up (S = Ts / Tc): 2.0000
Result: Concurrent version is faster.

Case C:
Sequential Avg Time (ms): 50.0000
Concurrent Avg Time (ms): 0.0000
Speed-up: Could not be calculated (invalid concurrent time)

Case F: No data for concurrent version.

Case B:
Sequential Avg Time (ms): 30.0000
Concurrent Avg Time (ms): 30.0000
Speed-up (S = Ts / Tc): 1.0000
Result: Sequential version is faster.

";

    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
pub fn empty_sequential_table_renders_header_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.txt");

    write_results(&path, &MetricsTable::new(), &table(&[('A', 60.0)])).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Speed-up Results:\n\n");
}

#[test]
pub fn report_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    let sequential = table(&[('A', 120.0), ('B', 30.0)]);
    let concurrent = table(&[('A', 60.0)]);

    write_results(&first, &sequential, &concurrent).unwrap();
    write_results(&second, &sequential, &concurrent).unwrap();

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}
