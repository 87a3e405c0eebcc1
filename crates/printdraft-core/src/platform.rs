//! Seam for per-platform design adjustments.

use crate::element::DesignElement;

/// Rewrites a design for a target print platform.
///
/// Returned elements replace the whole document contents in one step.
/// Implementations should keep element ids stable.
pub trait PlatformOptimizer {
    fn optimize(&self, elements: &[DesignElement], platform: &str) -> Vec<DesignElement>;
}

impl<F> PlatformOptimizer for F
where
    F: Fn(&[DesignElement], &str) -> Vec<DesignElement>,
{
    fn optimize(&self, elements: &[DesignElement], platform: &str) -> Vec<DesignElement> {
        self(elements, platform)
    }
}

/// Leaves every design untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl PlatformOptimizer for Passthrough {
    fn optimize(&self, elements: &[DesignElement], _platform: &str) -> Vec<DesignElement> {
        elements.to_vec()
    }
}
