//! Conversation state machine.
//!
//! [`ChatEngine::step`] looks at the latest user message and the caller's
//! [`ConversationState`] and picks exactly one branch, first match wins:
//!
//! 1. empty history: greeting
//! 2. venues (once per session)
//! 3. dresses (once per session)
//! 4. hairstyles (once per session)
//! 5. wedding party (repeatable)
//! 6. cakes (repeatable)
//! 7. soft call-to-action, after the first topic
//! 8. full call-to-action, after every topic
//! 9. free text from the [`TextGenerator`]
//!
//! A topic whose flag is already set falls through to 7-9 rather than
//! showing its catalog again.

use std::sync::Arc;

use crate::catalog::{Catalog, Category, QueryOptions};
use crate::conversation::{latest_user_text, ConversationState, Message};
use crate::generator::{TextGenerator, Topic};
use crate::keywords::{extract_location, extract_style, mentions_any};
use crate::payload::{Action, PartyTasks, ResponsePayload};

// ---------------------------------------------------------------------------
// Fixed copy
// ---------------------------------------------------------------------------

pub const GREETING_TEXT: &str =
    "Hey! I'm your AI wedding planner. Ready to explore your dream day?";

pub const SOFT_CTA_TEXT: &str =
    "Would you like to explore more options or get personalized wedding planning assistance?";

pub const CTA_TEXT: &str = "I've shown you a sneak peek of what I can do! Ready to take your \
wedding planning to the next level? Over 500 couples have already joined our exclusive wedding \
planning community!";

pub const SOFT_CTA_BUTTONS: &[&str] = &["Explore More", "Get Planning Help"];
pub const CTA_BUTTONS: &[&str] = &["Join the Waitlist", "Continue Exploring"];

const SHOW_VENUES: &str = "Show me venues";
const SHOW_DRESSES: &str = "Show me dresses";
const SHOW_HAIRSTYLES: &str = "Show me hairstyles";
const PARTY_HELP: &str = "Help with wedding party";

const VENUE_KEYWORDS: &[&str] = &["venue", "location"];
const DRESS_KEYWORDS: &[&str] = &["dress", "gown"];
const HAIR_KEYWORDS: &[&str] = &["hair", "hairstyle"];
const PARTY_KEYWORDS: &[&str] = &["wedding party", "party"];
const CAKE_KEYWORDS: &[&str] = &["cake"];

/// Quick-reply options derived from the flags.
///
/// Only the first set flag in the order venues, dresses, hairstyles decides
/// the suggestions; with none set every topic is offered.
pub fn options_for_state(state: &ConversationState) -> &'static [&'static str] {
    if state.seen_venues {
        &[SHOW_DRESSES, SHOW_HAIRSTYLES, PARTY_HELP]
    } else if state.seen_dresses {
        &[SHOW_VENUES, SHOW_HAIRSTYLES, PARTY_HELP]
    } else if state.seen_hairstyles {
        &[SHOW_VENUES, SHOW_DRESSES, PARTY_HELP]
    } else {
        &[SHOW_VENUES, SHOW_DRESSES, SHOW_HAIRSTYLES, PARTY_HELP]
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Stateless decision policy over a shared catalog and text generator.
///
/// Cheap to clone; holds nothing per session.
#[derive(Clone)]
pub struct ChatEngine {
    catalog: Arc<Catalog>,
    generator: Arc<dyn TextGenerator>,
}

impl ChatEngine {
    pub fn new(catalog: Arc<Catalog>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { catalog, generator }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Run one conversation step.
    ///
    /// `state` is the caller's copy; the updated flags come back in the
    /// payload and nothing is retained here.
    pub async fn step(&self, history: &[Message], mut state: ConversationState) -> ResponsePayload {
        let Some(message) = latest_user_text(history) else {
            return ResponsePayload::text(GREETING_TEXT, state)
                .with_options(options_for_state(&state));
        };
        let message = message.to_lowercase();

        if mentions_any(&message, VENUE_KEYWORDS) && !state.seen_venues {
            state.seen_venues = true;
            let options = QueryOptions::default()
                .with_style(extract_style(&message))
                .with_location(extract_location(&message));
            return self
                .topic_payload(Topic::Venues, Category::Venues, &options, history, state)
                .await
                .with_options(&[SHOW_DRESSES, SHOW_HAIRSTYLES, PARTY_HELP]);
        }

        if mentions_any(&message, DRESS_KEYWORDS) && !state.seen_dresses {
            state.seen_dresses = true;
            let options = QueryOptions::default().with_style(extract_style(&message));
            return self
                .topic_payload(Topic::Dresses, Category::Dresses, &options, history, state)
                .await
                .with_options(&[SHOW_VENUES, SHOW_HAIRSTYLES, PARTY_HELP]);
        }

        if mentions_any(&message, HAIR_KEYWORDS) && !state.seen_hairstyles {
            state.seen_hairstyles = true;
            let options = QueryOptions::default().with_style(extract_style(&message));
            return self
                .topic_payload(Topic::Hairstyles, Category::Hairstyles, &options, history, state)
                .await
                .with_options(&[SHOW_VENUES, SHOW_DRESSES, PARTY_HELP]);
        }

        if mentions_any(&message, PARTY_KEYWORDS) {
            tracing::debug!(branch = "wedding_party", "Chat step");
            let text = self.generator.generate(Topic::WeddingParty, history).await;
            return ResponsePayload::text(text, state)
                .with_party_tasks(PartyTasks::default())
                .with_options(&[SHOW_VENUES, SHOW_DRESSES, SHOW_HAIRSTYLES]);
        }

        if mentions_any(&message, CAKE_KEYWORDS) {
            let options = QueryOptions::default();
            return self
                .topic_payload(Topic::Cakes, Category::Cakes, &options, history, state)
                .await
                .with_options(&[SHOW_VENUES, SHOW_DRESSES, SHOW_HAIRSTYLES]);
        }

        if state.seen_any_topic() && !state.soft_cta_shown {
            tracing::debug!(branch = "soft_cta", "Chat step");
            state.soft_cta_shown = true;
            return ResponsePayload::text(SOFT_CTA_TEXT, state)
                .with_action(Action::SoftCta, SOFT_CTA_BUTTONS);
        }

        if state.seen_all_topics() && !state.cta_shown {
            tracing::debug!(branch = "cta", "Chat step");
            state.cta_shown = true;
            return ResponsePayload::text(CTA_TEXT, state).with_action(Action::Cta, CTA_BUTTONS);
        }

        tracing::debug!(branch = "default", generator = self.generator.name(), "Chat step");
        let text = self.generator.generate(Topic::General, history).await;
        ResponsePayload::text(text, state).with_options(options_for_state(&state))
    }

    /// Generated text plus a carousel for one visual topic.
    async fn topic_payload(
        &self,
        topic: Topic,
        category: Category,
        options: &QueryOptions,
        history: &[Message],
        state: ConversationState,
    ) -> ResponsePayload {
        tracing::debug!(
            branch = topic.as_str(),
            style = options.style.as_deref().unwrap_or_default(),
            location = options.location.as_deref().unwrap_or_default(),
            "Chat step"
        );
        let result = self.catalog.query_category(category, options);
        let text = self.generator.generate(topic, history).await;
        ResponsePayload::text(text, state).with_carousel(result.carousel)
    }
}
