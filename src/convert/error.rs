use thiserror::Error;

use crate::convert::base::Base;

/// User-input failures of a conversion attempt.
///
/// Messages are surfaced verbatim: as the body of the modal dialog in the
/// interactive UI, and on stderr in one-shot mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Please enter a number.")]
    EmptyInput,

    #[error("Please select both FROM and TO bases.")]
    MissingSelection,

    #[error("FROM and TO bases are the same. No conversion needed.")]
    SameBase,

    #[error("Invalid input for base {base}.")]
    InvalidDigits { base: Base },

    /// The digits passed validation but the parse still failed, which for
    /// `u64::from_str_radix` means the value exceeds the representable range.
    #[error("Conversion failed – invalid number for this base.")]
    ParseFailed,
}
