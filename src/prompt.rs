//! Prompt templates for the Organize and Freeze endpoints.
//!
//! System instructions are fixed per endpoint. User instructions
//! interpolate the caller's fields verbatim: no escaping and no
//! sanitization, the values are forwarded into the prompt as plain text.

use crate::models::freeze::FreezeRequest;

/// Placeholder rendered for an optional Freeze field left empty.
pub const NONE_PLACEHOLDER: &str = "(none)";

/// System instruction for Organize: brain dump in, decision structure out.
pub const ORGANIZE_SYSTEM: &str = r#"You are Plutox Organizer.
Your job: turn a messy brain-dump into a clean decision structure for a later Decision Freezer.

Return ONLY valid JSON (no markdown, no backticks), matching this schema:
{
  "decision": "string (one sentence; the decision to make)",
  "optionA": "string (best guess)",
  "optionB": "string (best guess)",
  "horizon": "string (best guess, e.g., 3 months / 6 months / 1 year)",
  "nonnegotiables": "string (bulleted text allowed, but as plain string)",
  "constraints": "string",
  "fears": "string",
  "goal": "string",
  "missing_questions": ["string (2-6 short questions to ask user)"]
}

Rules:
- If options are unclear, propose two plausible options based on the text.
- Keep everything concise and usable.
- Never ask for more than 6 questions."#;

/// System instruction for Freeze: commit to one executable option.
pub const FREEZE_SYSTEM: &str = r#"You are Plutox, a Decision Freezer.
Freeze a decision into a single executable commitment.
Be direct, specific, and opinionated. No vague advice.

Return ONLY valid JSON (no markdown, no backticks), matching this schema:
{
  "decision": "string",
  "summary": "string",
  "assumptions": ["string"],
  "tradeoffs": ["string"],
  "next7days": ["string"],
  "fallback": "string"
}"#;

/// The two-message prompt sent to the completion API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Build the Organize prompt from an already-trimmed brain dump.
pub fn organize_prompt(text: &str) -> Prompt {
    let user = format!(
        "Brain dump:\n{text}\n\n\
         Task:\n\
         Extract a decision structure so the user can confirm it quickly."
    );
    Prompt { system: ORGANIZE_SYSTEM.to_string(), user }
}

/// Build the Freeze prompt; empty optional fields render as `(none)`.
pub fn freeze_prompt(req: &FreezeRequest) -> Prompt {
    let user = format!(
        "Decision statement: {decision}\n\n\
         Option A: {option_a}\n\
         Option B: {option_b}\n\n\
         Time horizon: {horizon}\n\n\
         Non-negotiables: {nonnegotiables}\n\
         Constraints: {constraints}\n\
         Biggest fears: {fears}\n\
         Primary goal: {goal}\n\n\
         Rules:\n\
         - Pick ONE option (A or B). No \"it depends\".\n\
         - Make trade-offs explicit.\n\
         - Next7days must be actionable.\n\
         - If info is missing, make reasonable assumptions and list them.",
        decision = req.decision,
        option_a = req.option_a,
        option_b = req.option_b,
        horizon = req.horizon,
        nonnegotiables = or_none(&req.nonnegotiables),
        constraints = or_none(&req.constraints),
        fears = or_none(&req.fears),
        goal = or_none(&req.goal),
    );
    Prompt { system: FREEZE_SYSTEM.to_string(), user }
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        NONE_PLACEHOLDER
    } else {
        value
    }
}
