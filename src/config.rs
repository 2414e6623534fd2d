//! Configuration for batch codec operations

/// Configuration for encoding and decoding batches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Number of threads for computation (0 = auto-detect)
    pub threads: usize,
    /// Whether to spread rows across threads (false = single-threaded everything)
    pub parallel: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Auto-detect CPU cores
            parallel: true,
        }
    }
}

impl CodecConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self { threads, parallel }
    }

    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self::new(1, false)
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches.get_one::<usize>("threads").copied().unwrap_or(0);

        let parallel = !matches.get_flag("no-parallel");

        Self::new(threads, parallel)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1, // Sequential mode always uses single thread
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4), // Auto-detect CPU cores
            (true, n) => n, // Use specified thread count
        }
    }
}
