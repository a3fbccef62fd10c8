//! True-mean specifications for the arms of a bandit.
//!
//! Means can be given explicitly, drawn from a standard normal, or laid out as
//! the sequence `0, 1, ..., k-1`. The string forms `"random"` and `"sequence"`
//! parse through [`FromStr`]; anything else is rejected.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{ConfigError, Result};

/// How the true means of a bandit's arms are chosen.
///
/// # Examples
///
/// ```
/// use kbandit::Means;
///
/// let explicit = Means::from(vec![5.0, 0.0, -5.0]);
/// let random: Means = "random".parse().unwrap();
/// assert_eq!(random, Means::Random);
/// assert!("linear".parse::<Means>().is_err());
/// # let _ = explicit;
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Means {
    /// User-supplied means, one per arm.
    Explicit(Vec<f64>),
    /// k i.i.d. draws from a standard normal.
    #[default]
    Random,
    /// Evenly spaced values from 0 to k-1 inclusive.
    Sequence,
}

impl Means {
    /// Resolves this specification into exactly `arm_count` means.
    pub fn resolve<R>(&self, arm_count: usize, rng: &mut R) -> Result<Vec<f64>>
    where
        R: Rng + ?Sized,
    {
        if arm_count == 0 {
            return Err(ConfigError::NoArms);
        }
        match self {
            Means::Explicit(means) if means.len() != arm_count => {
                Err(ConfigError::MeansLengthMismatch {
                    expected: arm_count,
                    got: means.len(),
                })
            }
            Means::Explicit(means) => Ok(means.clone()),
            Means::Random => Ok((0..arm_count)
                .map(|_| rng.sample::<f64, _>(StandardNormal))
                .collect()),
            Means::Sequence => Ok((0..arm_count).map(|i| i as f64).collect()),
        }
    }
}

impl FromStr for Means {
    type Err = ConfigError;

    fn from_str(mode: &str) -> Result<Self> {
        match mode {
            "random" => Ok(Means::Random),
            "sequence" => Ok(Means::Sequence),
            _ => Err(ConfigError::UnknownMeansMode {
                mode: mode.to_string(),
            }),
        }
    }
}

impl fmt::Display for Means {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Means::Explicit(means) => write!(f, "{:?}", means),
            Means::Random => write!(f, "random"),
            Means::Sequence => write!(f, "sequence"),
        }
    }
}

impl From<Vec<f64>> for Means {
    fn from(means: Vec<f64>) -> Self {
        Means::Explicit(means)
    }
}

impl From<&[f64]> for Means {
    fn from(means: &[f64]) -> Self {
        Means::Explicit(means.to_vec())
    }
}
