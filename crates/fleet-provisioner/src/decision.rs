//! Scale decisions.
//!
//! Each call moves a pool by at most one node. The outer control loop keeps
//! calling until the bound is satisfied.

/// Outcome of evaluating a bound against the current quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleStep {
    /// The bound is already met; nothing to do.
    Satisfied,
    /// Request the pool be set to this quantity.
    Adjust(i64),
    /// An adjustment was due but would leave the pool empty, so no request is
    /// issued.
    Suppressed(i64),
}

impl ScaleStep {
    /// The boolean reported to the control loop: true only when the bound is
    /// already met.
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// Decide how to move `quantity` towards the ceiling `max_n`.
#[must_use]
pub const fn plan_scale_up(quantity: i64, max_n: i64) -> ScaleStep {
    if quantity >= max_n {
        return ScaleStep::Satisfied;
    }
    ScaleStep::Adjust(quantity.saturating_add(1))
}

/// Decide how to move `quantity` towards the floor `min_n`.
///
/// Never requests a non-positive quantity, even when `min_n` would allow it.
/// Scale-up has no matching guard.
#[must_use]
pub const fn plan_scale_down(quantity: i64, min_n: i64) -> ScaleStep {
    if quantity <= min_n {
        return ScaleStep::Satisfied;
    }
    let target = quantity.saturating_sub(1);
    if target > 0 {
        ScaleStep::Adjust(target)
    } else {
        ScaleStep::Suppressed(target)
    }
}
