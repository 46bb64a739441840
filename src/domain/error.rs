//! Error taxonomy for donation data operations

use thiserror::Error;

/// Errors surfaced by the core computations and the data provider boundary.
///
/// `StoreUnavailable` and `UnknownIntern` are absorbed by the service layer
/// (the request is answered from fallback data); `InvalidAmount` always
/// propagates to the caller.
#[derive(Debug, Error)]
pub enum FundboardError {
    /// A donation total was negative or not a finite number.
    #[error("invalid donation amount: {0}")]
    InvalidAmount(f64),

    /// No intern record exists for the requested id.
    #[error("unknown intern: {0}")]
    UnknownIntern(i64),

    /// The backing data store could not be reached or the query failed.
    #[error("data store unavailable: {0}")]
    StoreUnavailable(String),
}

impl FundboardError {
    /// True for the failures the service layer answers from fallback data.
    pub fn is_fallback_eligible(&self) -> bool {
        matches!(
            self,
            FundboardError::UnknownIntern(_) | FundboardError::StoreUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_eligibility() {
        assert!(FundboardError::UnknownIntern(7).is_fallback_eligible());
        assert!(FundboardError::StoreUnavailable("io".to_string()).is_fallback_eligible());
        assert!(!FundboardError::InvalidAmount(-1.0).is_fallback_eligible());
    }
}
