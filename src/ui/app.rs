use crate::config::Config;
use crate::convert::Base;
use crate::ui::form::{ConvertFormState, FormIntent, FormReducer};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Converter form state (MVI pattern).
    form: ConvertFormState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let form = ConvertFormState::with_defaults(
            config.defaults.from_base.and_then(Base::from_radix),
            config.defaults.to_base.and_then(Base::from_radix),
        );
        Self {
            should_quit: false,
            form,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &ConvertFormState {
        &self.form
    }

    /// Dispatch an intent to the form reducer.
    pub fn dispatch(&mut self, intent: FormIntent) {
        let submitting = matches!(intent, FormIntent::Submit);
        dispatch_mvi!(self, form, FormReducer, intent);
        if submitting {
            match &self.form.error {
                Some(err) => tracing::debug!(%err, "conversion rejected"),
                None => tracing::debug!(result = ?self.form.result_line(), "conversion done"),
            }
        }
    }
}
