//! End-to-end runs over telemetry files written to a temporary directory

use anyhow::Result;
use approx::assert_relative_eq;
use placement_io::telemetry::{FAST_TIER_WRITE_COLUMN, SLOW_TIER_WRITE_COLUMN};
use placement_io::{read_plan, save_plan, BenchmarkPaths};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tier_placement::{PlacementConfig, PlacementPipeline};

fn write_log(path: &Path, rows: &[(u64, u64)]) -> Result<()> {
    let mut text = String::from("allocator monitor attached\n");
    for (i, (bytes, objects)) in rows.iter().enumerate() {
        writeln!(
            text,
            "Allocated: {bytes} bytes (second {:.2}) (objects alive = {objects})",
            (i + 1) as f64 * 0.25
        )?;
    }
    fs::write(path, text)?;
    Ok(())
}

fn write_pcm_csv(path: &Path, column: usize, values: &[f64]) -> Result<()> {
    let width = 80;
    let mut text = format!("{}\n{}\n", vec!["Socket 0"; width].join(","), vec!["MB/s"; width].join(","));
    for value in values {
        let mut row = vec!["0.0".to_string(); width];
        row[column - 1] = format!("{value:.2}");
        text.push_str(&row.join(","));
        text.push('\n');
    }
    fs::write(path, text)?;
    Ok(())
}

/// Two allocation bursts, each followed by a fast-tier bandwidth window
fn write_two_phase_benchmark(paths: &BenchmarkPaths) -> Result<()> {
    // log sample n sits at index n + 1 once the leading zero is added
    let mut rows = vec![(0u64, 0u64); 99];
    let mut objects = 0;
    for (n, row) in rows.iter_mut().enumerate() {
        let index = n + 1;
        let bytes = if (20..28).contains(&index) {
            objects += 50;
            1000
        } else if (60..64).contains(&index) {
            objects += 100;
            500
        } else {
            10
        };
        *row = (bytes, objects);
    }
    write_log(&paths.log, &rows)?;

    // bandwidth at 1 s per sample: dominant over [8, 14) and [18, 23)
    let mut fast = vec![1.0; 25];
    for (i, value) in fast.iter_mut().enumerate() {
        if (8..14).contains(&i) || (18..23).contains(&i) {
            *value = 50.0;
        }
    }
    write_pcm_csv(&paths.fast_tier_csv, FAST_TIER_WRITE_COLUMN, &fast)?;
    write_pcm_csv(&paths.slow_tier_csv, SLOW_TIER_WRITE_COLUMN, &vec![1.0; 25])?;
    Ok(())
}

#[test]
fn two_bursts_become_two_fast_segments() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = BenchmarkPaths::in_dir(dir.path(), "twophase");
    write_two_phase_benchmark(&paths)?;

    let pipeline = PlacementPipeline::new(PlacementConfig::default())?;
    let outcome = pipeline.run_benchmark(&paths)?;

    assert_eq!(outcome.ao_spikes.len(), 2);
    assert_eq!(outcome.bw_spikes.len(), 2);
    assert_relative_eq!(outcome.bw_spikes[0].start, 8.0);
    assert_relative_eq!(outcome.bw_spikes[0].mid, 11.0);
    assert_relative_eq!(outcome.bw_spikes[1].end, 23.0);
    assert_eq!(outcome.selected.len(), 2);
    assert!(outcome.selected[0].interval.start() < outcome.selected[1].interval.start());

    let plan = outcome.plan.expect("two selected spikes");
    assert_eq!(plan.len(), 4);
    // bursts land on the fast tier
    assert!(plan.segments()[1] >= 8 * 1000);
    assert!(plan.segments()[3] >= 4 * 500);

    let total: u64 = fs::read_to_string(&paths.log)?
        .lines()
        .filter_map(|line| line.strip_prefix("Allocated: "))
        .filter_map(|rest| rest.split(' ').next()?.parse::<u64>().ok())
        .sum();
    assert!(plan.segments().iter().sum::<u64>() <= total);

    save_plan(&paths.output, Some(&plan))?;
    assert_eq!(read_plan(&paths.output)?, Some(plan));
    Ok(())
}

#[test]
fn comparable_tiers_produce_empty_plan() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = BenchmarkPaths::in_dir(dir.path(), "flat");
    write_log(&paths.log, &[(10, 1), (10, 2), (4096, 400), (10, 401)])?;
    write_pcm_csv(&paths.fast_tier_csv, FAST_TIER_WRITE_COLUMN, &[10.0; 10])?;
    write_pcm_csv(&paths.slow_tier_csv, SLOW_TIER_WRITE_COLUMN, &[8.0; 10])?;

    let outcome = PlacementPipeline::new(PlacementConfig::default())?.run_benchmark(&paths)?;
    assert!(outcome.bw_spikes.is_empty());
    assert!(outcome.plan.is_none());

    save_plan(&paths.output, outcome.plan.as_ref())?;
    assert_eq!(fs::read_to_string(&paths.output)?, "0\n");
    Ok(())
}

#[test]
fn top_k_from_config_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("placement.json");
    fs::write(&config_path, r#"{ "selection": { "top_k": 0 } }"#)?;

    let paths = BenchmarkPaths::in_dir(dir.path(), "twophase");
    write_two_phase_benchmark(&paths)?;

    let config = PlacementConfig::from_json_file(&config_path)?;
    let outcome = PlacementPipeline::new(config)?.run_benchmark(&paths)?;
    assert_eq!(outcome.bw_spikes.len(), 2);
    assert!(outcome.selected.is_empty());
    assert!(outcome.plan.is_none());
    Ok(())
}

#[test]
fn missing_telemetry_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let paths = BenchmarkPaths::in_dir(dir.path(), "missing");
    let pipeline = PlacementPipeline::new(PlacementConfig::default()).unwrap();
    let err = pipeline.run_benchmark(&paths).unwrap_err();
    assert!(err.to_string().contains("missing_logfile.txt"));
}
