//! Continuous output assembled from the dense output of each step.

use crate::{Float, methods::euler::LinearInterpolant};

/// Piecewise dense output over all steps of an integration.
#[derive(Debug, Clone, Default)]
pub struct OdeSolution {
    segs: Vec<LinearInterpolant>,
}

impl OdeSolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the dense output of the next step. Zero-length steps are skipped.
    pub fn push(&mut self, seg: LinearInterpolant) {
        if seg.t_max() > seg.t_min() {
            self.segs.push(seg);
        }
    }

    pub fn len(&self) -> usize {
        self.segs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// Domain covered by the dense output.
    pub fn t_span(&self) -> Option<(Float, Float)> {
        let lo = self.segs.iter().map(LinearInterpolant::t_min).reduce(Float::min)?;
        let hi = self.segs.iter().map(LinearInterpolant::t_max).reduce(Float::max)?;
        Some((lo, hi))
    }

    /// Interpolate y(t) if t lies within any recorded step; returns None if outside.
    pub fn evaluate(&self, t: Float) -> Option<Vec<Float>> {
        self.find_segment(t).map(|seg| seg.evaluate(t))
    }

    /// Batch-evaluate at many times; returns None for points outside coverage.
    pub fn evaluate_many(&self, ts: &[Float]) -> Vec<Option<Vec<Float>>> {
        ts.iter().map(|&t| self.evaluate(t)).collect()
    }

    fn find_segment(&self, t: Float) -> Option<&LinearInterpolant> {
        self.segs
            .iter()
            .find(|seg| t >= seg.t_min() && t <= seg.t_max())
    }
}
