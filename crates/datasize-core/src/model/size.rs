//! The `ByteSize` value type, its unit accessors, and its two formatters.
//!
//! All sizes are stored as `u64` bytes. Floating point is only used by the
//! unit accessors and the human-readable formatter; the canonical form
//! (`Display`) is exact and parses back to the same value.

use super::unit::{Unit, UNITS};
use std::fmt;
use std::ops::{Add, Mul};

/// A count of bytes.
///
/// `Display` renders the canonical form: the largest unit that divides the
/// value exactly, with no space (`"2GB"`, `"1044KB"`, `"1025B"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteSize(u64);

impl ByteSize {
    pub const B: Self = Self(Unit::Byte.multiplier());
    pub const KB: Self = Self(Unit::Kilo.multiplier());
    pub const MB: Self = Self(Unit::Mega.multiplier());
    pub const GB: Self = Self(Unit::Giga.multiplier());
    pub const TB: Self = Self(Unit::Tera.multiplier());
    pub const PB: Self = Self(Unit::Peta.multiplier());
    pub const EB: Self = Self(Unit::Exa.multiplier());

    pub const ZERO: Self = Self(0);
    /// Largest representable size. Overflowing parses saturate to this.
    pub const MAX: Self = Self(u64::MAX);

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// The raw byte count.
    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    pub fn kbytes(self) -> f64 {
        self.in_unit(Unit::Kilo)
    }

    pub fn mbytes(self) -> f64 {
        self.in_unit(Unit::Mega)
    }

    pub fn gbytes(self) -> f64 {
        self.in_unit(Unit::Giga)
    }

    pub fn tbytes(self) -> f64 {
        self.in_unit(Unit::Tera)
    }

    pub fn pbytes(self) -> f64 {
        self.in_unit(Unit::Peta)
    }

    pub fn ebytes(self) -> f64 {
        self.in_unit(Unit::Exa)
    }

    /// Value expressed in `unit`, as a plain IEEE-754 division.
    pub fn in_unit(self, unit: Unit) -> f64 {
        self.0 as f64 / unit.multiplier() as f64
    }

    /// The unit chosen by the canonical formatter: the largest unit that
    /// divides the value with no remainder. Zero maps to `Unit::Byte`.
    pub fn canonical_unit(self) -> Unit {
        if self.0 == 0 {
            return Unit::Byte;
        }
        UNITS
            .iter()
            .rev()
            .copied()
            .find(|unit| self.0 % unit.multiplier() == 0)
            .unwrap_or(Unit::Byte)
    }

    /// Approximate display form with one decimal place and a space before the
    /// unit, e.g. `"1.5 KB"`. Uses the largest unit strictly smaller than the
    /// value and falls back to whole bytes at or below 1 KB.
    ///
    /// This is lossy and does not parse back.
    pub fn human_readable(self) -> String {
        match UNITS[1..]
            .iter()
            .rev()
            .copied()
            .find(|unit| self.0 > unit.multiplier())
        {
            Some(unit) => format!("{:.1} {}", self.in_unit(unit), unit.name()),
            None => format!("{} B", self.0),
        }
    }

    /// Short alias for [`ByteSize::human_readable`].
    pub fn hr(self) -> String {
        self.human_readable()
    }

    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(bytes) => Some(Self(bytes)),
            None => None,
        }
    }

    pub const fn checked_mul(self, factor: u64) -> Option<Self> {
        match self.0.checked_mul(factor) {
            Some(bytes) => Some(Self(bytes)),
            None => None,
        }
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.canonical_unit();
        write!(f, "{}{}", self.0 / unit.multiplier(), unit.name())
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl From<Unit> for ByteSize {
    fn from(unit: Unit) -> Self {
        Self(unit.multiplier())
    }
}

// Arithmetic follows plain `u64` semantics: it panics on overflow in debug
// builds. Use `checked_add` / `checked_mul` for untrusted operands.
impl Add for ByteSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u64> for ByteSize {
    type Output = Self;

    fn mul(self, factor: u64) -> Self {
        Self(self.0 * factor)
    }
}

impl Mul<ByteSize> for u64 {
    type Output = ByteSize;

    fn mul(self, size: ByteSize) -> ByteSize {
        ByteSize(self * size.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_single_units() {
        assert_eq!(ByteSize::ZERO.to_string(), "0B");
        assert_eq!(ByteSize::B.to_string(), "1B");
        assert_eq!(ByteSize::KB.to_string(), "1KB");
        assert_eq!(ByteSize::MB.to_string(), "1MB");
        assert_eq!(ByteSize::GB.to_string(), "1GB");
        assert_eq!(ByteSize::TB.to_string(), "1TB");
        assert_eq!(ByteSize::PB.to_string(), "1PB");
        assert_eq!(ByteSize::EB.to_string(), "1EB");
    }

    #[test]
    fn test_canonical_picks_largest_exact_unit() {
        assert_eq!((400 * ByteSize::TB).to_string(), "400TB");
        assert_eq!((2048 * ByteSize::MB).to_string(), "2GB");
        assert_eq!((ByteSize::B + ByteSize::KB).to_string(), "1025B");
        assert_eq!((ByteSize::MB + 20 * ByteSize::KB).to_string(), "1044KB");
        assert_eq!((100 * ByteSize::MB + ByteSize::KB).to_string(), "102401KB");
    }

    #[test]
    fn test_canonical_max_value() {
        assert_eq!(ByteSize::MAX.canonical_unit(), Unit::Byte);
        assert_eq!(ByteSize::MAX.to_string(), "18446744073709551615B");
        assert_eq!((15 * ByteSize::EB).to_string(), "15EB");
    }

    #[test]
    fn test_accessors() {
        let size = 3 * ByteSize::GB;
        assert_eq!(size.bytes(), 3_221_225_472);
        assert_eq!(size.kbytes(), 3_145_728.0);
        assert_eq!(size.mbytes(), 3072.0);
        assert_eq!(size.gbytes(), 3.0);
        assert_eq!(size.tbytes(), 3.0 / 1024.0);
        assert_eq!(ByteSize::EB.ebytes(), 1.0);
        assert_eq!((512 * ByteSize::TB).pbytes(), 0.5);
    }

    #[test]
    fn test_human_readable_bytes() {
        assert_eq!(ByteSize::ZERO.human_readable(), "0 B");
        assert_eq!(ByteSize::new(512).human_readable(), "512 B");
        // Exactly one KB is not "greater than" KB.
        assert_eq!(ByteSize::KB.human_readable(), "1024 B");
    }

    #[test]
    fn test_human_readable_units() {
        assert_eq!(ByteSize::new(1025).human_readable(), "1.0 KB");
        assert_eq!(ByteSize::new(1536).human_readable(), "1.5 KB");
        assert_eq!(ByteSize::MB.human_readable(), "1024.0 KB");
        assert_eq!((ByteSize::MB + ByteSize::B).human_readable(), "1.0 MB");
        assert_eq!((5 * ByteSize::GB).human_readable(), "5.0 GB");
        assert_eq!((20 * ByteSize::TB + 512 * ByteSize::GB).hr(), "20.5 TB");
        assert_eq!(ByteSize::MAX.human_readable(), "16.0 EB");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ByteSize::from(4096u64), 4 * ByteSize::KB);
        assert_eq!(u64::from(ByteSize::MB), 1_048_576);
        assert_eq!(ByteSize::from(Unit::Giga), ByteSize::GB);
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(ByteSize::EB.checked_mul(15), Some(15 * ByteSize::EB));
        assert_eq!(ByteSize::EB.checked_mul(16), None);
        assert_eq!(ByteSize::MAX.checked_add(ByteSize::B), None);
        assert_eq!(ByteSize::KB.checked_add(ByteSize::KB), Some(2 * ByteSize::KB));
    }
}
