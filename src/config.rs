use ark_ff::Zero;
use groth16::ScalarField;

use crate::circuit::demo_secret_input;
use crate::types::{Error, Result};

/// Vector length used by the demo when none is given.
pub const DEFAULT_DIMENSION: usize = 10;

/// Upper bound on the demo dimension. The QAP then needs at most 2^16 rows.
pub const MAX_DIMENSION: usize = (1 << 15) - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub dimension: usize,
    /// Seed for deterministic randomness; fresh OS randomness when unset.
    pub seed: Option<u64>,
    /// Index of a private element to negate before proving.
    pub flip: Option<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            seed: None,
            flip: None,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.dimension > MAX_DIMENSION {
            return Err(Error::Config(format!(
                "dimension {} exceeds the maximum of {MAX_DIMENSION}",
                self.dimension
            )));
        }
        if let Some(index) = self.flip {
            if index >= self.dimension {
                return Err(Error::Config(format!(
                    "flip index {index} out of range for dimension {}",
                    self.dimension
                )));
            }
            // Negating zero would leave the relation satisfied.
            if demo_secret_input::<ScalarField>(self.dimension)[index].is_zero() {
                return Err(Error::Config(format!(
                    "flip index {index} targets a zero private element"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = DemoConfig::default();
        assert_eq!(config.dimension, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let flip = DemoConfig {
            flip: Some(10),
            ..DemoConfig::default()
        };
        assert!(matches!(flip.validate(), Err(Error::Config(_))));

        let huge = DemoConfig {
            dimension: MAX_DIMENSION + 1,
            ..DemoConfig::default()
        };
        assert!(huge.validate().is_err());

        let empty = DemoConfig {
            dimension: 0,
            flip: Some(0),
            seed: Some(1),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn rejects_flip_of_zero_padding() {
        let padded = DemoConfig {
            dimension: 3,
            seed: Some(1),
            flip: Some(2),
        };
        assert!(matches!(padded.validate(), Err(Error::Config(_))));

        let first = DemoConfig {
            flip: Some(0),
            ..padded
        };
        assert!(first.validate().is_ok());
    }
}
