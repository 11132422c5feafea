//! File-level tests for the telemetry readers and the plan writer

use anyhow::Result;
use placement_io::telemetry::{FAST_TIER_WRITE_COLUMN, SLOW_TIER_WRITE_COLUMN};
use placement_io::{read_allocation_log, read_bandwidth, read_plan, save_plan, BenchmarkPaths};
use placement_select::AllocationPlan;
use std::fs;
use std::path::Path;

/// A PCM-style export: two header rows, then `values` in 1-based `column`
fn write_pcm_csv(path: &Path, column: usize, values: &[f64]) -> Result<()> {
    let width = 80;
    let mut text = String::new();
    text.push_str(&vec!["Socket"; width].join(","));
    text.push('\n');
    text.push_str(&vec!["Write (MB/s)"; width].join(","));
    text.push('\n');
    for value in values {
        let mut row = vec!["0".to_string(); width];
        row[column - 1] = value.to_string();
        text.push_str(&row.join(","));
        text.push('\n');
    }
    fs::write(path, text)?;
    Ok(())
}

#[test]
fn reads_both_tiers_from_their_columns() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = BenchmarkPaths::in_dir(dir.path(), "bench");

    write_pcm_csv(&paths.slow_tier_csv, SLOW_TIER_WRITE_COLUMN, &[1.0, 2.0, 3.5])?;
    write_pcm_csv(&paths.fast_tier_csv, FAST_TIER_WRITE_COLUMN, &[10.0, 20.0, 30.0])?;

    let telemetry = read_bandwidth(&paths.slow_tier_csv, &paths.fast_tier_csv)?;
    assert_eq!(telemetry.slow, vec![1.0, 2.0, 3.5]);
    assert_eq!(telemetry.fast, vec![10.0, 20.0, 30.0]);
    Ok(())
}

#[test]
fn reads_allocator_log_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = BenchmarkPaths::in_dir(dir.path(), "bench");
    fs::write(
        &paths.log,
        "monitor started\n\
         Allocated: 64 bytes (second 0.25) (objects alive = 3)\n\
         Allocated: 128 bytes (second 0.5) (objects alive = 7)\n",
    )?;

    let log = read_allocation_log(&paths.log)?;
    assert_eq!(log.allocated_bytes, vec![0, 64, 128]);
    assert_eq!(log.objects_alive, vec![0, 3, 7]);
    Ok(())
}

#[test]
fn plan_file_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("output.txt");

    let plan = AllocationPlan::new(vec![4096, 8192, 0, 512]);
    save_plan(&output, Some(&plan))?;
    assert_eq!(fs::read_to_string(&output)?, "4\n4096\n8192\n0\n512\n");
    assert_eq!(read_plan(&output)?, Some(plan));

    save_plan(&output, None)?;
    assert_eq!(fs::read_to_string(&output)?, "0\n");
    assert_eq!(read_plan(&output)?, None);
    Ok(())
}

#[test]
fn missing_inputs_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let paths = BenchmarkPaths::in_dir(dir.path(), "absent");
    assert!(read_allocation_log(&paths.log).is_err());
    assert!(read_bandwidth(&paths.slow_tier_csv, &paths.fast_tier_csv).is_err());
}
