mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{ConvertFormState, FormFocus, FormOutcome, MAX_INPUT_LEN};
