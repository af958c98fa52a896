//! Conjunction of two criteria.

use crate::traits::Criterion;
use std::sync::Arc;
use view_files::ViewFile;

/// Accepts a file only when both children accept it.
///
/// Children are shared handles, so later changes to a child are visible
/// through the composed criterion without rebuilding it.
pub struct AndCriteria {
    a: Arc<dyn Criterion>,
    b: Arc<dyn Criterion>,
}

impl AndCriteria {
    pub fn new(a: Arc<dyn Criterion>, b: Arc<dyn Criterion>) -> Self {
        Self { a, b }
    }
}

impl Criterion for AndCriteria {
    fn name(&self) -> &str {
        "AndCriteria"
    }

    fn meets_criteria(&self, file: &ViewFile) -> bool {
        self.a.meets_criteria(file) && self.b.meets_criteria(file)
    }
}
