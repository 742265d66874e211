//! The request lifecycle controller for the generator screen.
//!
//! Owns the form fields and the single request's state machine:
//!
//! ```text
//! Idle ──submit(valid)──→ Loading ──ok──→ Success
//!   │                        └───err───→ Failed
//!   └──submit(invalid)──→ Failed          (no network call)
//! Success | Failed ──submit──→ Loading    (re-entrant)
//! ```
//!
//! Transitions happen only in [`GeneratorReducer`]; the network side effect
//! lives in the app layer, which spawns the request exactly when a `Submit`
//! lands the state in `Loading`.

mod intent;
mod reducer;
mod state;

pub use intent::GeneratorIntent;
pub use reducer::GeneratorReducer;
pub use state::{
    Field, FormFields, GeneratorState, RequestState, LENGTH_MAX, LENGTH_MIN, LENGTH_STEP,
    VALIDATION_MESSAGE,
};
