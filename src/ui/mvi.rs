//! Model-View-Intent primitives for the UI layer.
//!
//! Unidirectional data flow: the event loop turns key presses into intents,
//! a pure reducer folds each intent into the state, and the view renders
//! from state alone.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// Marker trait for UI state containers.
///
/// States are self-contained (everything the view needs) and comparable, so
/// redraw decisions and tests can diff them directly.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for user or system actions handled by a reducer.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
///
/// The reducer is the only place state changes. No side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
