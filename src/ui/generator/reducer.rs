use crate::ui::generator::intent::GeneratorIntent;
use crate::ui::generator::state::{
    Field, GeneratorState, RequestState, LENGTH_MAX, LENGTH_MIN, LENGTH_STEP, VALIDATION_MESSAGE,
};
use crate::ui::mvi::Reducer;

/// Digit capacity of the length buffer; enough for any plausible talk.
const LENGTH_INPUT_MAX_LEN: usize = 4;

pub struct GeneratorReducer;

impl Reducer for GeneratorReducer {
    type State = GeneratorState;
    type Intent = GeneratorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GeneratorIntent::FocusNext => GeneratorState {
                focus: state.focus.next(),
                ..state
            },
            GeneratorIntent::FocusPrev => GeneratorState {
                focus: state.focus.prev(),
                ..state
            },
            GeneratorIntent::Input(ch) => {
                let mut form = state.form;
                match state.focus {
                    Field::Topic => form.topic.push(ch),
                    Field::Audience => form.audience.push(ch),
                    Field::Length => {
                        if ch.is_ascii_digit() && form.length_input.len() < LENGTH_INPUT_MAX_LEN {
                            form.length_input.push(ch);
                        }
                    }
                }
                GeneratorState { form, ..state }
            }
            GeneratorIntent::Backspace => {
                let mut form = state.form;
                match state.focus {
                    Field::Topic => {
                        form.topic.pop();
                    }
                    Field::Audience => {
                        form.audience.pop();
                    }
                    Field::Length => {
                        form.length_input.pop();
                    }
                }
                GeneratorState { form, ..state }
            }
            GeneratorIntent::StepLength(delta) => {
                if state.focus != Field::Length {
                    return state;
                }
                let mut form = state.form;
                let current = form.length_minutes().unwrap_or(LENGTH_MIN + 2 * LENGTH_STEP);
                let stepped = if delta >= 0 {
                    current.saturating_add(LENGTH_STEP).min(LENGTH_MAX)
                } else {
                    current.saturating_sub(LENGTH_STEP).max(LENGTH_MIN)
                };
                form.length_input = stepped.to_string();
                GeneratorState { form, ..state }
            }
            GeneratorIntent::Submit => {
                // At most one request in flight: resubmission while loading
                // is a no-op.
                if state.request.is_loading() {
                    return state;
                }
                let request = match state.form.validated() {
                    Some(_) => RequestState::Loading,
                    None => RequestState::Failed {
                        message: VALIDATION_MESSAGE.to_string(),
                    },
                };
                GeneratorState {
                    request,
                    scroll: 0,
                    ..state
                }
            }
            GeneratorIntent::Complete(outcome) => {
                // A completion can only belong to the one in-flight request;
                // anything else is stale and dropped.
                if !state.request.is_loading() {
                    return state;
                }
                let request = match outcome {
                    Ok(draft) => RequestState::Success { draft },
                    Err(message) => RequestState::Failed { message },
                };
                GeneratorState {
                    request,
                    scroll: 0,
                    ..state
                }
            }
            GeneratorIntent::Scroll(delta) => {
                let scroll = if delta >= 0 {
                    state.scroll.saturating_add(delta as u16)
                } else {
                    state.scroll.saturating_sub(delta.unsigned_abs() as u16)
                };
                GeneratorState { scroll, ..state }
            }
        }
    }
}
