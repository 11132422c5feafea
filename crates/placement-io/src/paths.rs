//! Input and output file names for a benchmark run

use std::path::{Path, PathBuf};

/// Default location of the generated plan
pub const DEFAULT_PLAN_FILE: &str = "output.txt";

/// Files read and written for one benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkPaths {
    /// Allocator log with allocated bytes and live objects
    pub log: PathBuf,
    /// PCM export for the slow tier
    pub slow_tier_csv: PathBuf,
    /// PCM export for the fast tier
    pub fast_tier_csv: PathBuf,
    /// Plan file consumed by the allocator
    pub output: PathBuf,
}

impl BenchmarkPaths {
    /// Conventional names for benchmark `name` in the working directory
    pub fn for_benchmark(name: &str) -> Self {
        Self::in_dir(Path::new(""), name)
    }

    /// Conventional names for benchmark `name` inside `dir`
    pub fn in_dir(dir: &Path, name: &str) -> Self {
        Self {
            log: dir.join(format!("{name}_logfile.txt")),
            slow_tier_csv: dir.join(format!("{name}_optane-pcm-memory.csv")),
            fast_tier_csv: dir.join(format!("{name}_dram-pcm-memory.csv")),
            output: dir.join(DEFAULT_PLAN_FILE),
        }
    }

    pub fn with_log(mut self, log: impl Into<PathBuf>) -> Self {
        self.log = log.into();
        self
    }

    pub fn with_slow_tier_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.slow_tier_csv = path.into();
        self
    }

    pub fn with_fast_tier_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.fast_tier_csv = path.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
