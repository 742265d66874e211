use crate::ui::mvi::Intent;

/// User actions and completion events for the generator screen.
#[derive(Debug, Clone)]
pub enum GeneratorIntent {
    FocusNext,
    FocusPrev,
    /// Append a character to the focused field. The length field accepts
    /// digits only.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Step the length field by +/- 5 minutes within the soft 5-60 range.
    StepLength(i32),
    /// Validate the form and, if it passes, enter `Loading`. Ignored while a
    /// request is already in flight.
    Submit,
    /// The in-flight request finished. `Ok` carries the draft text, `Err`
    /// the user-facing message. Ignored unless currently `Loading`.
    Complete(Result<String, String>),
    /// Scroll the output panel by the given number of lines.
    Scroll(i32),
}

impl Intent for GeneratorIntent {}
