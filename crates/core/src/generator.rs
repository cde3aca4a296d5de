//! Natural-language text generation for chat responses.
//!
//! [`TextGenerator`] is the seam between the state machine and whatever
//! produces assistant text. [`LocalRules`] answers from fixed strings; a
//! language-model backed implementation lives in the `sayyes-llm` crate and
//! falls back to [`LocalRules`] when the model is unavailable.

use async_trait::async_trait;

use crate::conversation::{latest_user_text, Message};
use crate::keywords::mentions_any;

/// Conversation branch a piece of text is generated for.
///
/// Drives both the canned local text and the persona prompt sent to a
/// language model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Venues,
    Dresses,
    Hairstyles,
    Cakes,
    WeddingParty,
    General,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Venues => "venues",
            Topic::Dresses => "dresses",
            Topic::Hairstyles => "hairstyles",
            Topic::Cakes => "cakes",
            Topic::WeddingParty => "wedding_party",
            Topic::General => "general",
        }
    }
}

/// Persona shared by every system prompt.
pub const BASE_PERSONA: &str = "You are SayYes, a wedding planning assistant. \
Keep replies short (one or two sentences), friendly and casual, and use a couple of emojis.";

/// System prompt for a language model answering on `topic`.
pub fn persona_prompt(topic: Topic) -> String {
    let focus = match topic {
        Topic::Venues => {
            "The user is about to see a carousel of wedding venues. \
             Hype them up and ask if any catch their eye."
        }
        Topic::Dresses => {
            "The user is about to see a carousel of wedding dresses. \
             Be excited and make them feel like the main character."
        }
        Topic::Hairstyles => {
            "The user is about to see a carousel of bridal hairstyles. \
             Be playful and enthusiastic about hair."
        }
        Topic::Cakes => {
            "The user is about to see a carousel of wedding cakes. \
             Make it sound delicious."
        }
        Topic::WeddingParty => {
            "The user wants help organizing their wedding party. \
             Encourage them to delegate tasks to their best person, maid of honor, \
             groomsmen and bridesmaids."
        }
        Topic::General => {
            "Answer the user's latest message and steer them toward venues, \
             dresses, hairstyles or wedding party help."
        }
    };
    format!("{BASE_PERSONA} {focus}")
}

/// Produces assistant text for a topic given the conversation so far.
///
/// Implementations must not fail: any internal fault degrades to fixed text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, topic: Topic, history: &[Message]) -> String;

    /// Short name for logs and health output.
    fn name(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// Local rules
// ---------------------------------------------------------------------------

/// Keyword categories for free-text replies, checked in order.
const GENERAL_RULES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi", "hey"],
        "Hey there! ✨ What can I help you with for your wedding planning journey?",
    ),
    (
        &["theme", "style"],
        "Ooh, let's talk aesthetic! ✨ Are you thinking classic elegance, rustic charm, \
         beachy vibes, or something totally unique? I've got ideas for days! 💭",
    ),
    (
        &["budget", "cost"],
        "Let's talk budget! 💰 I can help you find options that won't break the bank but \
         still give you that dream wedding vibe. What range are we working with? 💎",
    ),
    (
        &["date", "when"],
        "When are you thinking of having the big day? 📅 Summer weddings are gorgeous, but \
         fall has those amazing colors. Winter is magical too! What season speaks to you? 🌸❄️🍂",
    ),
];

/// Reply when no general keyword matches.
pub const GENERAL_FALLBACK: &str = "I'm here to help with your wedding planning journey! \
    What aspect are you most excited about? 💖";

/// Deterministic generator backed by fixed strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalRules;

impl LocalRules {
    /// Synchronous form of [`TextGenerator::generate`].
    pub fn reply(&self, topic: Topic, history: &[Message]) -> String {
        let text = match topic {
            Topic::Venues => "Check out these gorgeous venues! Any catching your eye? 👀",
            Topic::Dresses => "These dresses are giving MAIN CHARACTER energy! ✨",
            Topic::Hairstyles => "Hair is everything! Check these out! 💇‍♀️",
            Topic::Cakes => "Here are some delicious wedding cake designs! 🎂",
            Topic::WeddingParty => "Here's who does what in your squad! Delegate like a boss! 💅",
            Topic::General => {
                let message = latest_user_text(history).unwrap_or_default().to_lowercase();
                general_reply(&message)
            }
        };
        text.to_string()
    }
}

/// Match `message` (lowercase) against the general keyword rules.
pub fn general_reply(message: &str) -> &'static str {
    GENERAL_RULES
        .iter()
        .find(|(keywords, _)| mentions_any(message, keywords))
        .map_or(GENERAL_FALLBACK, |(_, reply)| *reply)
}

#[async_trait]
impl TextGenerator for LocalRules {
    async fn generate(&self, topic: Topic, history: &[Message]) -> String {
        self.reply(topic, history)
    }

    fn name(&self) -> &'static str {
        "local_rules"
    }
}
