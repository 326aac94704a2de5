use crate::convert::{Base, Conversion, ConvertError};
use crate::ui::mvi::UiState;
use crate::ui::selection::SelectionGroup;

/// Longest input the form accepts. u64::MAX in binary is 64 digits; anything
/// longer can only ever fail the parse.
pub const MAX_INPUT_LEN: usize = 64;

/// Which region of the form receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Input,
    FromGroup,
    ToGroup,
}

/// What the result region shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormOutcome {
    #[default]
    Empty,
    Converted(Conversion),
}

/// Complete state of the converter form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConvertFormState {
    pub input: String,
    pub from: SelectionGroup,
    pub to: SelectionGroup,
    pub focus: FormFocus,
    pub outcome: FormOutcome,
    /// `Some` means the modal error dialog is open and blocks everything
    /// except dismissal.
    pub error: Option<ConvertError>,
}

impl UiState for ConvertFormState {}

impl ConvertFormState {
    /// A fresh form with the configured default bases preselected.
    pub fn with_defaults(from: Option<Base>, to: Option<Base>) -> Self {
        Self {
            from: from.map(SelectionGroup::with_selected).unwrap_or_default(),
            to: to.map(SelectionGroup::with_selected).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn error_visible(&self) -> bool {
        self.error.is_some()
    }

    /// The rendered result line, if a conversion has completed.
    pub fn result_line(&self) -> Option<String> {
        match &self.outcome {
            FormOutcome::Empty => None,
            FormOutcome::Converted(conversion) => Some(conversion.to_string()),
        }
    }
}
