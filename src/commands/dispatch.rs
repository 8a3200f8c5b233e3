//! Runs session actions and the effects they request
//!
//! The reducer only describes work. [`dispatch`] carries it out against a
//! provider, feeding each result back into the reducer until no effects are
//! left.

use crate::providers::Provider;
use crate::services::{run_tool, safe_complete, ToolOutcome};
use crate::session::{reduce, SessionAction, SessionEffect, SessionState};
use std::collections::VecDeque;

/// What happened while an action was processed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatched {
    /// At least one render was requested
    pub render: bool,
    /// The tool run triggered by the action
    pub tool_outcome: Option<ToolOutcome>,
    /// The assistant reply triggered by the action
    pub chat_reply: Option<String>,
}

impl Dispatched {
    /// Whether the action was accepted at all
    pub fn changed(&self) -> bool {
        self.render || self.tool_outcome.is_some() || self.chat_reply.is_some()
    }
}

/// Apply `action` and run every resulting effect to completion
pub async fn dispatch(
    state: &mut SessionState,
    provider: &dyn Provider,
    action: SessionAction,
) -> Dispatched {
    let mut outcome = Dispatched::default();
    let mut pending: VecDeque<SessionEffect> = reduce(state, action).into();

    while let Some(effect) = pending.pop_front() {
        match effect {
            SessionEffect::Render => outcome.render = true,
            SessionEffect::RunTool(request) => {
                let result = run_tool(provider, &request).await;
                pending.extend(reduce(
                    state,
                    SessionAction::ToolCompleted {
                        feature: result.feature,
                        input: result.input.clone(),
                        output: result.output.clone(),
                    },
                ));
                outcome.tool_outcome = Some(result);
            }
            SessionEffect::CompleteChat { context } => {
                let reply = safe_complete(provider, &context).await;
                pending.extend(reduce(state, SessionAction::ChatResponse(reply.clone())));
                outcome.chat_reply = Some(reply);
            }
        }
    }

    outcome
}
