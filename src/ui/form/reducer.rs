use crate::convert::convert_request;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{ConvertFormState, FormFocus, FormOutcome, MAX_INPUT_LEN};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = ConvertFormState;
    type Intent = FormIntent;

    fn reduce(mut state: ConvertFormState, intent: FormIntent) -> ConvertFormState {
        // The error dialog is modal: until it is acknowledged, every other
        // intent is a no-op. Dismissal returns focus to the input field.
        if state.error.is_some() {
            if matches!(intent, FormIntent::DismissError) {
                state.error = None;
                state.focus = FormFocus::Input;
            }
            return state;
        }

        match intent {
            FormIntent::TypeChar(c) => {
                if state.focus == FormFocus::Input
                    && c.is_ascii_alphanumeric()
                    && state.input.len() < MAX_INPUT_LEN
                {
                    state.input.push(c);
                }
            }
            FormIntent::Backspace => {
                if state.focus == FormFocus::Input {
                    state.input.pop();
                }
            }
            FormIntent::ClearInput => {
                if state.focus == FormFocus::Input {
                    state.input.clear();
                }
            }
            FormIntent::FocusNext => {
                state.focus = match state.focus {
                    FormFocus::Input => FormFocus::FromGroup,
                    FormFocus::FromGroup => FormFocus::ToGroup,
                    FormFocus::ToGroup => FormFocus::Input,
                };
            }
            FormIntent::FocusPrev => {
                state.focus = match state.focus {
                    FormFocus::Input => FormFocus::ToGroup,
                    FormFocus::FromGroup => FormFocus::Input,
                    FormFocus::ToGroup => FormFocus::FromGroup,
                };
            }
            FormIntent::MoveCursor(direction) => match state.focus {
                FormFocus::FromGroup => state.from.move_cursor(direction),
                FormFocus::ToGroup => state.to.move_cursor(direction),
                FormFocus::Input => {}
            },
            FormIntent::SelectFocused => match state.focus {
                FormFocus::FromGroup => state.from.select_cursor(),
                FormFocus::ToGroup => state.to.select_cursor(),
                FormFocus::Input => {}
            },
            FormIntent::SelectIndex(index) => match state.focus {
                FormFocus::FromGroup => state.from.select_index(index),
                FormFocus::ToGroup => state.to.select_index(index),
                FormFocus::Input => {}
            },
            FormIntent::Submit => {
                match convert_request(&state.input, state.from.selected(), state.to.selected()) {
                    Ok(conversion) => {
                        state.outcome = FormOutcome::Converted(conversion);
                        state.input.clear();
                    }
                    // The input stays put so the user can correct it after
                    // acknowledging the dialog.
                    Err(err) => state.error = Some(err),
                }
            }
            FormIntent::DismissError => {}
        }

        state
    }
}
