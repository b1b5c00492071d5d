use clap::Args;
use serde::{Deserialize, Serialize};

/// Knobs for the three-phase search. The defaults follow the
/// top-100-survivors parallel strategy.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Phase-1 candidates carried into the ring and plugboard phases
    #[arg(long, default_value_t = 100)]
    pub keep_top: usize,

    /// Upper bound on committed plugboard pairs
    #[arg(long, default_value_t = 10)]
    pub max_plug_pairs: usize,

    /// Gram size scoring the plugboard phase (2, 3, or 4)
    #[arg(long, default_value_t = 2)]
    pub ngram: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            keep_top: 100,
            max_plug_pairs: 10,
            ngram: 2,
        }
    }
}
