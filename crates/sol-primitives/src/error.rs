use thiserror::Error;

/// Solana primitive errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("no bump seed in 0..=255 yields an off-curve address")]
    DerivationExhausted,

    #[error("seed {index} is {len} bytes, max is 32")]
    MaxSeedLengthExceeded { index: usize, len: usize },

    #[error("too many seeds: {0}")]
    TooManySeeds(usize),

    #[error("invalid mint data: {0}")]
    InvalidMintData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = SolError::InvalidAddress("bad decode".into());
        assert_eq!(err.to_string(), "invalid address: bad decode");
    }

    #[test]
    fn display_derivation_exhausted() {
        let err = SolError::DerivationExhausted;
        assert_eq!(
            err.to_string(),
            "no bump seed in 0..=255 yields an off-curve address"
        );
    }

    #[test]
    fn display_max_seed_length_exceeded() {
        let err = SolError::MaxSeedLengthExceeded { index: 1, len: 40 };
        assert_eq!(err.to_string(), "seed 1 is 40 bytes, max is 32");
    }

    #[test]
    fn display_too_many_seeds() {
        let err = SolError::TooManySeeds(17);
        assert_eq!(err.to_string(), "too many seeds: 17");
    }

    #[test]
    fn display_invalid_mint_data() {
        let err = SolError::InvalidMintData("expected 82 bytes, got 10".into());
        assert_eq!(
            err.to_string(),
            "invalid mint data: expected 82 bytes, got 10"
        );
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(SolError::InvalidAddress("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
