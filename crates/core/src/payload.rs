//! Response payload returned for every chat step.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Carousel;
use crate::conversation::ConversationState;

/// Text returned when a step fails unexpectedly.
pub const APOLOGY_TEXT: &str =
    "I'm sorry, but I encountered an error processing your message. Please try again.";

/// Scripted call-to-action attached to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Exploratory prompt after the first topic has been shown.
    SoftCta,
    /// Waitlist prompt once every topic has been shown.
    Cta,
}

/// Everything the caller needs to render one assistant turn.
///
/// Only `text` and `state` are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carousel: Option<Carousel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_tasks: Option<PartyTasks>,
    pub state: ConversationState,
}

impl ResponsePayload {
    /// Plain text response with no attachments.
    pub fn text(text: impl Into<String>, state: ConversationState) -> Self {
        Self {
            text: text.into(),
            carousel: None,
            options: None,
            action: None,
            buttons: None,
            party_tasks: None,
            state,
        }
    }

    /// Generic apology that preserves the caller's state.
    pub fn apology(state: ConversationState) -> Self {
        Self::text(APOLOGY_TEXT, state)
    }

    pub fn with_carousel(mut self, carousel: Carousel) -> Self {
        self.carousel = Some(carousel);
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(to_strings(options));
        self
    }

    /// Attach an action whose button labels double as the quick-reply options.
    pub fn with_action(mut self, action: Action, buttons: &[&str]) -> Self {
        self.action = Some(action);
        self.buttons = Some(to_strings(buttons));
        self.options = Some(to_strings(buttons));
        self
    }

    pub fn with_party_tasks(mut self, tasks: PartyTasks) -> Self {
        self.party_tasks = Some(tasks);
        self
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Wedding party tasks
// ---------------------------------------------------------------------------

/// Role-keyed task breakdown for the wedding party.
///
/// Maps keep insertion order so roles render in a stable sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyTasks {
    pub assign_tasks: IndexMap<String, Vec<String>>,
    pub track_progress: IndexMap<String, Vec<String>>,
}

const ASSIGN_TASKS: &[(&str, &[&str])] = &[
    (
        "Best Person",
        &["Plan bachelor/bachelorette party", "Give a toast at the reception"],
    ),
    (
        "Maid of Honor",
        &["Help with dress shopping", "Assist with wedding day prep"],
    ),
    ("Groomsmen", &["Assist with setup", "Help with transportation"]),
    (
        "Bridesmaids",
        &["Help with decorations", "Support the bride emotionally"],
    ),
];

const TRACK_PROGRESS: &[(&str, &[&str])] = &[
    ("Best Person", &["Party planning in progress", "Toast prepared"]),
    (
        "Maid of Honor",
        &["Dress shopping scheduled", "Prep checklist ready"],
    ),
    ("Groomsmen", &["Setup confirmed", "Transportation arranged"]),
    ("Bridesmaids", &["Decorations in progress", "Support ongoing"]),
];

impl Default for PartyTasks {
    fn default() -> Self {
        Self {
            assign_tasks: role_map(ASSIGN_TASKS),
            track_progress: role_map(TRACK_PROGRESS),
        }
    }
}

fn role_map(rows: &[(&str, &[&str])]) -> IndexMap<String, Vec<String>> {
    rows.iter()
        .map(|(role, tasks)| (role.to_string(), to_strings(tasks)))
        .collect()
}
