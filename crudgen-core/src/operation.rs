//! Operation kinds.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the five data-access operations generated per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl Operation {
    /// All operations, in generation order.
    pub const ALL: [Operation; 5] = [
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
        Operation::List,
    ];

    /// Returns the operation identifier, also used as the output file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::List => "list",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" | "c" => Ok(Operation::Create),
            "read" | "r" => Ok(Operation::Read),
            "update" | "u" => Ok(Operation::Update),
            "delete" | "d" => Ok(Operation::Delete),
            "list" | "l" => Ok(Operation::List),
            _ => Err(format!(
                "unknown operation '{}', expected one of create, read, update, delete, list",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Operation::from_str("create").unwrap(), Operation::Create);
        assert_eq!(Operation::from_str("Read").unwrap(), Operation::Read);
        assert_eq!(Operation::from_str("u").unwrap(), Operation::Update);
        assert_eq!(Operation::from_str("DELETE").unwrap(), Operation::Delete);
        assert_eq!(Operation::from_str("list").unwrap(), Operation::List);
        assert!(Operation::from_str("upsert").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_str(&op.to_string()).unwrap(), op);
        }
    }

    #[test]
    fn test_generation_order() {
        let names: Vec<_> = Operation::ALL.iter().map(Operation::as_str).collect();
        assert_eq!(names, ["create", "read", "update", "delete", "list"]);
    }
}
