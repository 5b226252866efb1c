//! Sequential or parallel execution over row indices

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How the sampler spreads work across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Single-threaded processing
    Sequential,
    /// Parallel processing using all available cores
    #[default]
    Parallel,
    /// Parallel with specified number of threads
    ParallelWith(usize),
}

impl ProcessingMode {
    /// Map `f` over `range` and collect the results in order.
    ///
    /// Without the `parallel` feature every mode runs sequentially.
    pub fn map<T, F>(&self, range: std::ops::Range<usize>, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        match self {
            ProcessingMode::Sequential => range.map(f).collect(),
            #[cfg(feature = "parallel")]
            ProcessingMode::Parallel => range.into_par_iter().map(f).collect(),
            #[cfg(feature = "parallel")]
            ProcessingMode::ParallelWith(threads) => {
                match rayon::ThreadPoolBuilder::new().num_threads(*threads).build() {
                    Ok(pool) => pool.install(|| range.into_par_iter().map(f).collect()),
                    Err(e) => {
                        tracing::warn!("could not build a {}-thread pool ({}), using the global pool", threads, e);
                        range.into_par_iter().map(f).collect()
                    }
                }
            }
            #[cfg(not(feature = "parallel"))]
            _ => range.map(f).collect(),
        }
    }
}
