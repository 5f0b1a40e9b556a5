//! Unit table: the seven power-of-1024 scales a byte count is measured in.
//!
//! The table is static data. Unit tokens are looked up against an explicit
//! list of accepted spellings per unit, not by case folding: the accepted set
//! is irregular ("kB" and "mB" parse, "Mb" and "Gb" do not) and existing
//! configuration files depend on exactly this set.

use std::fmt;

/// A power-of-1024 unit, from bytes (1024^0) to exbibytes (1024^6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Byte,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
}

/// Every unit, ordered from smallest to largest.
pub const UNITS: [Unit; 7] = [
    Unit::Byte,
    Unit::Kilo,
    Unit::Mega,
    Unit::Giga,
    Unit::Tera,
    Unit::Peta,
    Unit::Exa,
];

impl Unit {
    /// Power of 1024 this unit represents (0 for bytes, 6 for exbibytes).
    #[inline]
    pub const fn exponent(self) -> u32 {
        self as u32
    }

    /// Number of bytes in one of this unit.
    #[inline]
    pub const fn multiplier(self) -> u64 {
        1u64 << (10 * self.exponent())
    }

    /// Canonical short name used by the formatters.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "B",
            Self::Kilo => "KB",
            Self::Mega => "MB",
            Self::Giga => "GB",
            Self::Tera => "TB",
            Self::Peta => "PB",
            Self::Exa => "EB",
        }
    }

    /// Every token the parser accepts for this unit, after whitespace trimming.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Byte => &["", "B", "b"],
            Self::Kilo => &["K", "KB", "k", "kb", "kB"],
            Self::Mega => &["M", "MB", "m", "mb", "mB"],
            Self::Giga => &["G", "GB", "g", "gb", "gB"],
            Self::Tera => &["T", "TB", "t", "tb", "tB"],
            Self::Peta => &["P", "PB", "p", "pb", "pB"],
            Self::Exa => &["E", "EB", "e", "eb", "eB"],
        }
    }

    /// Look up an already-trimmed unit token. Returns `None` for anything
    /// outside the alias table, including near misses such as `"Mb"`.
    pub fn from_token(token: &str) -> Option<Self> {
        UNITS
            .iter()
            .copied()
            .find(|unit| unit.aliases().contains(&token))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
