/// Weight of an edge whose line carries no weight token, unless configured otherwise.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Fixed parse settings of a [`DimacsReader`](crate::DimacsReader).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReaderConfig {
    /// Apply edge weights through [`GraphTarget::set_edge_weight`](crate::GraphTarget::set_edge_weight).
    pub weighted: bool,
    /// Used for `e` lines without a 4th token when `weighted` is set.
    pub default_weight: f64,
}

impl ReaderConfig {
    pub fn unweighted() -> Self {
        ReaderConfig {
            weighted: false,
            default_weight: DEFAULT_EDGE_WEIGHT,
        }
    }

    pub fn weighted(default_weight: f64) -> Self {
        ReaderConfig {
            weighted: true,
            default_weight,
        }
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::unweighted()
    }
}
