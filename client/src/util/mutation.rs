//! Outcome rules shared by the signup and unregister flows.
//!
//! Both flows resolve a finished request into the same three effects: which
//! status message to show, whether to refetch, and whether to clear the
//! signup form.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use crate::net::api::ApiError;
use crate::net::types::MutationReply;
use crate::state::status::StatusMessage;

/// Shown when a rejection carries no `detail`.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    Signup,
    Unregister,
}

impl MutationKind {
    /// Shown when the request never completes.
    #[must_use]
    pub fn transport_failure_message(self) -> &'static str {
        match self {
            Self::Signup => "Failed to sign up. Please try again.",
            Self::Unregister => "Failed to unregister. Please try again.",
        }
    }

    /// Verb used in console diagnostics.
    #[must_use]
    pub fn action(self) -> &'static str {
        match self {
            Self::Signup => "signing up",
            Self::Unregister => "unregistering",
        }
    }
}

/// UI effects of a finished mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationEffects {
    pub message: StatusMessage,
    pub refetch: bool,
    pub reset_form: bool,
}

#[must_use]
pub fn resolve_mutation(kind: MutationKind, result: &Result<MutationReply, ApiError>) -> MutationEffects {
    match result {
        Ok(reply) if reply.ok => MutationEffects {
            message: StatusMessage::success(reply.body.message.clone().unwrap_or_default()),
            refetch: true,
            reset_form: kind == MutationKind::Signup,
        },
        Ok(reply) => MutationEffects {
            message: StatusMessage::error(
                reply
                    .body
                    .detail
                    .clone()
                    .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned()),
            ),
            refetch: false,
            reset_form: false,
        },
        Err(_) => MutationEffects {
            message: StatusMessage::error(kind.transport_failure_message()),
            refetch: false,
            reset_form: false,
        },
    }
}
