use super::errors::BanditError;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Reward distribution shared by every arm of a bandit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DistType {
    /// Unit-variance normal rewards around each arm's mean.
    Gaussian,
    /// 0/1 rewards with each arm's success probability.
    Bernoulli,
}

impl DistType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistType::Gaussian => "gaussian",
            DistType::Bernoulli => "bernoulli",
        }
    }

    /// Name of the parameter vector for this distribution.
    pub fn parameter_name(&self) -> &'static str {
        match self {
            DistType::Gaussian => "means",
            DistType::Bernoulli => "p",
        }
    }
}

impl FromStr for DistType {
    type Err = BanditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gaussian" => Ok(DistType::Gaussian),
            "bernoulli" => Ok(DistType::Bernoulli),
            other => Err(BanditError::Validation(format!(
                "invalid dist_type '{other}', expected 'gaussian' or 'bernoulli'"
            ))),
        }
    }
}

impl TryFrom<String> for DistType {
    type Error = BanditError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DistType> for String {
    fn from(value: DistType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for DistType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("gaussian".parse::<DistType>(), Ok(DistType::Gaussian));
        assert_eq!("Bernoulli".parse::<DistType>(), Ok(DistType::Bernoulli));
    }

    #[test]
    fn parse_unsupported() {
        assert!(matches!(
            "poisson".parse::<DistType>(),
            Err(BanditError::Validation(_))
        ));
    }

    #[test]
    fn deserialize() {
        let dist: DistType = serde_json::from_str("\"bernoulli\"").unwrap();
        assert_eq!(dist, DistType::Bernoulli);
        assert!(serde_json::from_str::<DistType>("\"uniform\"").is_err());
    }
}
