use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{MatrixError, Result};
use crate::matrix::{validate_dims, Matrix};

/// Declarative description of how to build a matrix.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatrixConfig {
    pub rows: i64,
    pub cols: i64,

    /// Seed for `Init::Uniform`; `None` draws from the thread-local generator.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(flatten)]
    pub init: Init,
}

/// Supported initializers and their parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "init")]
pub enum Init {
    Zeros,
    Identity,
    Uniform { min: f64, max: f64 },
}

impl Default for Init {
    fn default() -> Self {
        Init::Zeros
    }
}

impl FromStr for Init {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zeros" => Ok(Init::Zeros),
            "identity" | "eye" => Ok(Init::Identity),
            "uniform" => Ok(Init::Uniform { min: 0.0, max: 1.0 }),
            _ => Err(format!(
                "Unknown initializer: {}. Expected one of zeros, identity, uniform",
                s
            )),
        }
    }
}

impl MatrixConfig {
    pub fn new(rows: i64, cols: i64, init: Init) -> Self {
        Self {
            rows,
            cols,
            seed: None,
            init,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Construct the described matrix.
    pub fn build(&self) -> Result<Matrix> {
        validate_dims(self.rows, self.cols)?;
        match self.init {
            Init::Zeros => Matrix::zeros(self.rows, self.cols),
            Init::Identity => {
                if self.rows != self.cols {
                    return Err(MatrixError::DimensionMismatch {
                        context: "identity config",
                        expected: self.rows as usize,
                        actual: self.cols,
                    });
                }
                Matrix::identity(self.rows)
            }
            Init::Uniform { min, max } => match self.seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    Matrix::random(self.rows, self.cols, min, max, &mut rng)
                }
                None => Matrix::random(self.rows, self.cols, min, max, &mut thread_rng()),
            },
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            seed: None,
            init: Init::default(),
        }
    }
}
