use std::fmt;

/// A supported numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Base {
    /// All supported bases, in the order they appear in the UI.
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hex];

    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hex => 16,
        }
    }

    /// Look up a base by its radix value.
    ///
    /// Radixes reach this crate as plain integers from the CLI and the config
    /// file; anything outside {2, 8, 10, 16} is rejected here, at the
    /// boundary, so the rest of the code only ever sees a valid `Base`.
    pub fn from_radix(radix: u32) -> Option<Base> {
        match radix {
            2 => Some(Base::Binary),
            8 => Some(Base::Octal),
            10 => Some(Base::Decimal),
            16 => Some(Base::Hex),
            _ => None,
        }
    }

    /// Display name for the UI button row.
    pub fn label(self) -> &'static str {
        match self {
            Base::Binary => "Binary",
            Base::Octal => "Octal",
            Base::Decimal => "Decimal",
            Base::Hex => "Hex",
        }
    }

    /// Whether `c` belongs to this base's digit alphabet.
    ///
    /// Hex digits are accepted in either case.
    pub fn contains_digit(self, c: char) -> bool {
        match self {
            Base::Binary => matches!(c, '0'..='1'),
            Base::Octal => matches!(c, '0'..='7'),
            Base::Decimal => c.is_ascii_digit(),
            Base::Hex => c.is_ascii_hexdigit(),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}
