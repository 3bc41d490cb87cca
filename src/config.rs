//! Run configuration for the synthetic dataset generator.

/// Knobs for one generation run.
///
/// The seed lives here so callers construct the generator state
/// explicitly; nothing in the crate touches a process-wide RNG, which
/// keeps runs reproducible and tests free of cross-talk.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Seed for the `StdRng` driving every draw.
    pub seed: u64,
    /// Number of account records to synthesize.
    pub records: usize,
    /// Every `dup_stride`-th record (skipping the first) reuses the
    /// previous record's customer identity. Zero disables the injection.
    pub dup_stride: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            records: 500,
            dup_stride: 50,
        }
    }
}
