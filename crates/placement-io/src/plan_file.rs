//! Plan file read by the tiered allocator
//!
//! Format: the number of segments on the first line, then one byte count per
//! line, alternating slow, fast, slow, ... A plan with nothing to place is the
//! single line `0`.

use crate::error::{Error, Result};
use placement_select::AllocationPlan;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Serialize `plan` (or the "no placement" marker for `None`)
pub fn write_plan<W: Write>(mut writer: W, plan: Option<&AllocationPlan>) -> Result<()> {
    match plan {
        None => writeln!(writer, "0")?,
        Some(plan) => {
            writeln!(writer, "{}", plan.len())?;
            for bytes in plan.segments() {
                writeln!(writer, "{bytes}")?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write the plan file at `path`, replacing any previous plan
pub fn save_plan(path: &Path, plan: Option<&AllocationPlan>) -> Result<()> {
    let file = File::create(path).map_err(|err| Error::file(path, err))?;
    write_plan(BufWriter::new(file), plan)?;
    match plan {
        Some(plan) => info!(path = %path.display(), entries = plan.len(), "Wrote allocation plan"),
        None => info!(path = %path.display(), "No spikes found, wrote empty plan"),
    }
    Ok(())
}

/// Parse a plan file; `None` is the "no placement" marker
pub fn parse_plan<R: BufRead>(reader: R) -> Result<Option<AllocationPlan>> {
    let mut lines = reader.lines();
    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| Error::MalformedPlan("missing entry count".to_string()))?;
    let count: usize = header
        .trim()
        .parse()
        .map_err(|_| Error::MalformedPlan(format!("bad entry count {header:?}")))?;
    if count == 0 {
        return Ok(None);
    }

    let mut segments = Vec::with_capacity(count);
    for line in lines.take(count) {
        let line = line?;
        let bytes = line
            .trim()
            .parse()
            .map_err(|_| Error::MalformedPlan(format!("bad byte count {line:?}")))?;
        segments.push(bytes);
    }
    if segments.len() != count {
        return Err(Error::MalformedPlan(format!(
            "expected {count} entries, found {}",
            segments.len()
        )));
    }
    Ok(Some(AllocationPlan::new(segments)))
}

/// Read the plan file at `path`
pub fn read_plan(path: &Path) -> Result<Option<AllocationPlan>> {
    let file = File::open(path).map_err(|err| Error::file(path, err))?;
    parse_plan(BufReader::new(file))
}
