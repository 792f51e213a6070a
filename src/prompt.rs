//! Action table and prompt composition.
//!
//! The set of supported documents is [`ActionKey::ALL`], each mapped to its
//! instruction by [`ActionKey::instruction`]; the prompt around it is a tera
//! template registered once at startup.

use std::fmt;
use std::str::FromStr;

use tera::{Context, Tera};

use crate::error::DraftError;
use crate::web::models::ChatMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKey {
    EmailLandlord,
    DisputeMessage,
    StepByStepGuide,
    EmailCouncil,
    CallCouncil,
}

impl ActionKey {
    pub const ALL: [ActionKey; 5] = [
        ActionKey::EmailLandlord,
        ActionKey::DisputeMessage,
        ActionKey::StepByStepGuide,
        ActionKey::EmailCouncil,
        ActionKey::CallCouncil,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKey::EmailLandlord => "email_landlord",
            ActionKey::DisputeMessage => "dispute_message",
            ActionKey::StepByStepGuide => "step_by_step_guide",
            ActionKey::EmailCouncil => "email_council",
            ActionKey::CallCouncil => "call_council",
        }
    }

    /// The drafting instruction sent to the model for this action.
    pub const fn instruction(self) -> &'static str {
        match self {
            ActionKey::EmailLandlord => "Draft a polite but firm email to the landlord.",
            ActionKey::DisputeMessage => {
                "Draft a clear, factual dispute message for a tenancy deposit scheme."
            }
            ActionKey::StepByStepGuide => "Create a simple, step-by-step guide on how to proceed.",
            ActionKey::EmailCouncil => "Draft a formal email to the local council's housing team.",
            ActionKey::CallCouncil => {
                "Create a bullet-point list of key points for a phone call to the council."
            }
        }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKey {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DraftError::UnknownAction(s.to_string()))
    }
}

/// Flattens the conversation into `sender: text` lines.
pub fn build_transcript(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(|msg| format!("{}: {}", msg.sender, msg.text))
        .collect::<Vec<_>>()
        .join("\n")
}

const TEMPLATE_NAME: &str = "document_prompt";

const DOCUMENT_PROMPT: &str = "You are an expert AI assistant providing drafting support to UK tenants.
Your task is to help the user by completing the following request: {{ instruction }}

Here is the full conversation history with the user:
---
{{ transcript }}
---

Instructions:
1. Review the entire conversation to understand the user's situation.
2. Generate the requested document in a professional tone.
3. Use bracketed placeholders such as [Your Name], [Date] or [Landlord's Name] for any details you do not know.
4. Return only the text of the generated document, with no conversational introduction or closing remarks.";

pub struct PromptComposer {
    tera: Tera,
}

impl PromptComposer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, DOCUMENT_PROMPT)?;
        // Transcript text goes to the model verbatim.
        tera.autoescape_on(vec![]);
        Ok(Self { tera })
    }

    pub fn compose(&self, action: ActionKey, transcript: &str) -> Result<String, DraftError> {
        let mut context = Context::new();
        context.insert("instruction", action.instruction());
        context.insert("transcript", transcript);
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| DraftError::Template(e.to_string()))
    }
}
