//! Account role model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two roles the platform knows about.
///
/// An Investor may view any client's dashboard; an Investee may view
/// only its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Investor,
    Investee,
}

impl Role {
    /// The prefix used in client IDs issued to accounts of this role.
    pub fn client_id_prefix(&self) -> &'static str {
        match self {
            Role::Investor => "INV",
            Role::Investee => "IVE",
        }
    }

    /// The reserved username of this role's demo account.
    pub fn demo_username(&self) -> &'static str {
        match self {
            Role::Investor => "demo_investor",
            Role::Investee => "demo_investee",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Investor => "Investor",
            Role::Investee => "Investee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Investor" => Ok(Role::Investor),
            "Investee" => Ok(Role::Investee),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_str() {
        for role in [Role::Investor, Role::Investee] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("Admin".parse::<Role>().is_err());
    }
}
