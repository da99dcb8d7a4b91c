use crate::types::Axis;
use thiserror::Error;

/// Why an orientation sample cannot be fed to the math engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("{0} axis unavailable")]
    AxisUnavailable(Axis),
    #[error("{0} axis is not a finite number")]
    NonFinite(Axis),
}
