//! Model-View-Intent primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State is an immutable value replaced wholesale on every transition;
//! intents are user actions or completion events; the reducer is the only
//! place transitions happen.

/// Marker trait for UI state objects.
///
/// States are cloned to produce successors, carry everything the view needs,
/// and are comparable so redraw logic can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions (key presses), and system events
/// (request completions, ticks).
pub trait Intent: Send + 'static {}

/// Pure transition function over a state/intent pair.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
