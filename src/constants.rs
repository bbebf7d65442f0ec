use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::errors::Error;

bitflags! {
    /// Sense bits of a versioned dependency, as stored in the `*FLAGS` header tags.
    ///
    /// Only the comparison bits are modelled here. A dependency with none of them set
    /// is unversioned and matches anything.
    #[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
    pub struct DependencyFlags: u32 {
        const ANY = 0;
        const LESS = 1 << 1;
        const GREATER = 1 << 2;
        const EQUAL = 1 << 3;

        const LE = Self::LESS.bits() | Self::EQUAL.bits();
        const GE = Self::GREATER.bits() | Self::EQUAL.bits();
    }
}

impl DependencyFlags {
    /// The comparison bits only, with any unknown bits dropped
    pub fn sense(self) -> Self {
        self & (Self::LESS | Self::GREATER | Self::EQUAL)
    }

    /// The operator as it is written in a spec file, e.g. `>=`
    pub fn as_operator(self) -> &'static str {
        let sense = self.sense();
        if sense == Self::LESS {
            "<"
        } else if sense == Self::LE {
            "<="
        } else if sense == Self::EQUAL {
            "="
        } else if sense == Self::GE {
            ">="
        } else if sense == Self::GREATER {
            ">"
        } else if sense == Self::LESS | Self::GREATER {
            "!="
        } else {
            ""
        }
    }
}

impl fmt::Display for DependencyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_operator())
    }
}

impl FromStr for DependencyFlags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let flags = match s {
            "<" | "lt" => Self::LESS,
            "<=" | "le" => Self::LE,
            "=" | "==" | "eq" => Self::EQUAL,
            ">=" | "ge" => Self::GE,
            ">" | "gt" => Self::GREATER,
            "!=" | "ne" => Self::LESS | Self::GREATER,
            _ => return Err(Error::InvalidOperator(s.to_string())),
        };
        Ok(flags)
    }
}
