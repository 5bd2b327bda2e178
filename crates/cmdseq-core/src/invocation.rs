//! Execution request state machine
//!
//! An [`Invocation`] owns one request's names and walks
//! `Pending → Resolving → Validating → Executing → Completed`, dropping to
//! `Failed` from any of the three working states. Both terminal states are
//! final; an invocation cannot be retried.

use std::fmt;

use cmdseq_core_types::{RequestContext, RequestId};
use serde::{Deserialize, Serialize};

use crate::errors::{CmdSeqError, Result};
use crate::executor::{run_actions, run_request, ExecutionReport};
use crate::registry::Registry;
use crate::resolver::resolve;
use crate::rules::validate_order;

/// Lifecycle of one execution request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionState {
    Pending,
    Resolving,
    Validating,
    Executing,
    Completed,
    Failed,
}

impl ExecutionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExecutionState::Completed | ExecutionState::Failed)
    }

    /// Whether `self → next` is an edge of the state machine
    pub fn can_transition_to(&self, next: ExecutionState) -> bool {
        use ExecutionState::*;
        matches!(
            (*self, next),
            (Pending, Resolving)
                | (Resolving, Validating)
                | (Validating, Executing)
                | (Executing, Completed)
                | (Resolving, Failed)
                | (Validating, Failed)
                | (Executing, Failed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionState::Pending => "pending",
            ExecutionState::Resolving => "resolving",
            ExecutionState::Validating => "validating",
            ExecutionState::Executing => "executing",
            ExecutionState::Completed => "completed",
            ExecutionState::Failed => "failed",
        }
    }
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One execution request
#[derive(Debug, Clone)]
pub struct Invocation {
    names: Vec<String>,
    context: RequestContext,
    state: ExecutionState,
    history: Vec<ExecutionState>,
    executed: Vec<String>,
}

impl Invocation {
    /// Create a pending invocation for the given names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            context: RequestContext::new(),
            state: ExecutionState::Pending,
            history: vec![ExecutionState::Pending],
            executed: Vec::new(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn request_id(&self) -> &RequestId {
        &self.context.request_id
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    pub fn state(&self) -> ExecutionState {
        self.state
    }

    /// Every state visited so far, starting with `Pending`
    pub fn history(&self) -> &[ExecutionState] {
        &self.history
    }

    /// Commands whose actions completed, in order
    ///
    /// After an `ActionFailed` error this is what ran and was not undone.
    pub fn executed(&self) -> &[String] {
        &self.executed
    }

    /// Resolve, validate and execute against `registry`
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` if the invocation already ran.
    /// - `UnknownCommand`, `EmptyCommandSet`, `IndependenceConflict`,
    ///   `InvalidOrder` before anything runs.
    /// - `ActionFailed` when an action fails mid-sequence.
    pub fn run(&mut self, registry: &Registry) -> Result<ExecutionReport> {
        self.transition(ExecutionState::Resolving)?;

        let ctx = self.context.clone();
        let mut executed = Vec::with_capacity(self.names.len());
        let outcome = run_request(&ctx, self.names.len(), &mut executed, |executed| {
            self.drive(registry, executed)
        });
        self.executed = executed;

        if outcome.is_err() {
            self.transition(ExecutionState::Failed)?;
        }
        outcome
    }

    fn drive(&mut self, registry: &Registry, executed: &mut Vec<String>) -> Result<()> {
        let commands = resolve(registry, &self.names)?;

        self.transition(ExecutionState::Validating)?;
        validate_order(&commands)?;

        self.transition(ExecutionState::Executing)?;
        run_actions(&commands, &self.context, executed)?;

        self.transition(ExecutionState::Completed)
    }

    fn transition(&mut self, next: ExecutionState) -> Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(CmdSeqError::IllegalTransition {
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }

        tracing::trace!(
            request_id = %self.context.request_id,
            from = %self.state,
            to = %next,
            "invocation state transition"
        );
        self.state = next;
        self.history.push(next);
        Ok(())
    }
}
