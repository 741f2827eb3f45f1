//! Tagged rule configuration and static dispatch.
//!
//! Orchestration code names rules through [`RuleDescriptor`], an
//! explicit tagged configuration, instead of stringly-typed lookup
//! tables. String parsing happens once, at the CLI boundary, via
//! [`FromStr`]; everything downstream works with the enum or with a
//! resolved [`RuleFn`].

use std::fmt;
use std::str::FromStr;

use mav_election::{Election, Outcome};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};
use crate::{leximin_owa, owa_rule, sequential_thiele, sequential_utilitarian};

/// A resolved voting rule: a plain function value from election to
/// outcome, callable without reference to the descriptor it came from.
pub type RuleFn = Box<dyn Fn(&Election) -> Result<Outcome> + Send + Sync>;

/// Tagged configuration naming one rule of the family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum RuleDescriptor {
    /// Sequential utilitarian.
    Utilitarian,
    /// Sequential Thiele with the given decay exponent.
    Thiele {
        /// Decay exponent, `>= 0` and finite.
        decay: f64,
    },
    /// Parametric OWA with the given tail length.
    Owa {
        /// Tail length, in `[0, n_voters - 1]`.
        x: usize,
    },
    /// The leximin limit of the OWA family (`x = n_voters - 1`).
    LeximinOwa,
}

impl RuleDescriptor {
    /// Applies the described rule to an election.
    pub fn apply(&self, elec: &Election) -> Result<Outcome> {
        match *self {
            Self::Utilitarian => Ok(sequential_utilitarian(elec)),
            Self::Thiele { decay } => sequential_thiele(elec, decay),
            Self::Owa { x } => owa_rule(elec, x),
            Self::LeximinOwa => leximin_owa(elec),
        }
    }

    /// Resolves the descriptor into a plain function value.
    pub fn resolve(self) -> RuleFn {
        Box::new(move |elec| self.apply(elec))
    }

    /// All rule identifiers accepted by [`FromStr`], for help output.
    pub fn identifiers() -> &'static [&'static str] {
        &["utilitarian", "pav", "cc", "thiele:<decay>", "owa:<x>", "leximin"]
    }
}

impl fmt::Display for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Utilitarian => write!(f, "utilitarian"),
            Self::Thiele { decay } => write!(f, "thiele:{decay}"),
            Self::Owa { x } => write!(f, "owa:{x}"),
            Self::LeximinOwa => write!(f, "leximin"),
        }
    }
}

impl FromStr for RuleDescriptor {
    type Err = RuleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, param) = match s.split_once(':') {
            Some((name, param)) => (name, Some(param)),
            None => (s, None),
        };
        match (name, param) {
            ("utilitarian", None) => Ok(Self::Utilitarian),
            ("pav", None) => Ok(Self::Thiele { decay: 1.0 }),
            ("cc", None) => Ok(Self::Thiele { decay: 1000.0 }),
            ("leximin", None) => Ok(Self::LeximinOwa),
            ("thiele", Some(p)) => {
                let decay = p.parse::<f64>().map_err(|e| RuleError::BadParameter {
                    input: s.to_string(),
                    detail: e.to_string(),
                })?;
                if !decay.is_finite() || decay < 0.0 {
                    return Err(RuleError::InvalidDecay { decay });
                }
                Ok(Self::Thiele { decay })
            }
            ("owa", Some(p)) => {
                let x = p.parse::<usize>().map_err(|e| RuleError::BadParameter {
                    input: s.to_string(),
                    detail: e.to_string(),
                })?;
                Ok(Self::Owa { x })
            }
            _ => Err(RuleError::UnknownRule {
                name: s.to_string(),
            }),
        }
    }
}
