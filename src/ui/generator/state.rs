use crate::backend::GenerateRequest;
use crate::config::FormDefaults;
use crate::ui::mvi::UiState;

/// Shown when submission fails local validation. Exact text is part of the
/// contract with the tests and mirrors what users expect to see.
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields with valid values.";

/// Soft range the UI steps the length field through. Typed digits may leave
/// it; only positivity is enforced at submission.
pub const LENGTH_STEP: u32 = 5;
pub const LENGTH_MIN: u32 = 5;
pub const LENGTH_MAX: u32 = 60;

/// Which form field currently receives text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Topic,
    Audience,
    Length,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Topic => Field::Audience,
            Field::Audience => Field::Length,
            Field::Length => Field::Topic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Topic => Field::Length,
            Field::Audience => Field::Topic,
            Field::Length => Field::Audience,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Topic => "Topic",
            Field::Audience => "Audience",
            Field::Length => "Length (minutes)",
        }
    }
}

/// Editable form fields.
///
/// The length is kept as a raw digit buffer so the view can show exactly
/// what the user typed; it is parsed at submission time, where an empty or
/// non-positive buffer fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub topic: String,
    pub audience: String,
    pub length_input: String,
}

impl FormFields {
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            topic: defaults.topic.clone(),
            audience: defaults.audience.clone(),
            length_input: defaults.length_minutes.to_string(),
        }
    }

    /// Parsed length, if the buffer holds a positive integer.
    pub fn length_minutes(&self) -> Option<u32> {
        match self.length_input.trim().parse::<u32>() {
            Ok(minutes) if minutes > 0 => Some(minutes),
            _ => None,
        }
    }

    /// Validates the fields and captures a request snapshot.
    ///
    /// Returns `None` when the trimmed topic or audience is empty or the
    /// length is not a positive integer.
    pub fn validated(&self) -> Option<GenerateRequest> {
        let topic = self.topic.trim();
        let audience = self.audience.trim();
        let length_minutes = self.length_minutes()?;
        if topic.is_empty() || audience.is_empty() {
            return None;
        }
        Some(GenerateRequest {
            topic: topic.to_string(),
            audience: audience.to_string(),
            length_minutes,
        })
    }
}

/// Lifecycle of the single in-flight generation request.
///
/// Exactly one variant is active at any time; entering `Loading`
/// structurally discards any prior draft or error payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success {
        draft: String,
    },
    Failed {
        message: String,
    },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Full state of the generator screen: the form, the focused field, the
/// request lifecycle, and the output scroll offset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratorState {
    pub form: FormFields,
    pub focus: Field,
    pub request: RequestState,
    pub scroll: u16,
}

impl UiState for GeneratorState {}

impl GeneratorState {
    pub fn with_defaults(defaults: &FormDefaults) -> Self {
        Self {
            form: FormFields::from_defaults(defaults),
            ..Self::default()
        }
    }
}
