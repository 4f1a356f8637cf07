//! Two-phase confirm flow for cascading disables.
//!
//! Disabling is destructive-ish (it fans out across the hierarchy and is
//! not transactional), so it is never a single call: a target is staged,
//! then confirmed or cancelled. The state machine lives here as plain
//! data so the contract is testable without any UI toolkit; the
//! [`Catalog`](crate::Catalog) drives the transitions and executes the
//! cascade itself.

use std::fmt;

use crate::error::CoreError;
use crate::model::ModelRef;

/// What a staged disable will deactivate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisableTarget {
    /// The device type itself, every brand under it (with all their
    /// models), and every part category scoped to it.
    Device { id: String },
    /// The brand and all its models, in one full-brand rewrite.
    Brand { id: String },
    /// A single model, addressed by position; only that entry flips.
    Model(ModelRef),
    /// One part category, via its dedicated disable endpoint.
    PartCategory { id: String },
}

impl DisableTarget {
    /// Short human label for notices and prompts.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Device { .. } => "Device type",
            Self::Brand { .. } => "Brand",
            Self::Model(_) => "Model",
            Self::PartCategory { .. } => "Part category",
        }
    }
}

impl fmt::Display for DisableTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device { id } => write!(f, "device type {id}"),
            Self::Brand { id } => write!(f, "brand {id}"),
            Self::Model(mref) => write!(f, "model {mref}"),
            Self::PartCategory { id } => write!(f, "part category {id}"),
        }
    }
}

/// The disable flow: `Idle → Staged(target) → Executing → Idle`.
///
/// Only one target may be staged at a time. Transitions are pure —
/// each returns the next state (or a validation error) without touching
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisableState {
    #[default]
    Idle,
    Staged(DisableTarget),
    Executing(DisableTarget),
}

impl DisableState {
    /// Stage a target for confirmation. Nothing is mutated yet.
    pub fn stage(&self, target: DisableTarget) -> Result<Self, CoreError> {
        match self {
            Self::Idle => Ok(Self::Staged(target)),
            Self::Staged(_) | Self::Executing(_) => Err(CoreError::validation(
                "Another disable is already pending confirmation",
            )),
        }
    }

    /// Move from staged to executing, handing back the target to run.
    pub fn begin_execute(&self) -> Result<(Self, DisableTarget), CoreError> {
        match self {
            Self::Staged(target) => {
                Ok((Self::Executing(target.clone()), target.clone()))
            }
            Self::Idle => Err(CoreError::validation("No disable staged")),
            Self::Executing(_) => {
                Err(CoreError::validation("A disable is already executing"))
            }
        }
    }

    /// The staged target, if any (not reported while executing).
    pub fn staged(&self) -> Option<&DisableTarget> {
        match self {
            Self::Staged(target) => Some(target),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_executing(&self) -> bool {
        matches!(self, Self::Executing(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn target() -> DisableTarget {
        DisableTarget::Brand { id: "b1".into() }
    }

    #[test]
    fn idle_can_stage() {
        let state = DisableState::Idle;
        let staged = state.stage(target()).unwrap();
        assert_eq!(staged.staged(), Some(&target()));
    }

    #[test]
    fn only_one_target_at_a_time() {
        let staged = DisableState::Idle.stage(target()).unwrap();
        let second = staged.stage(DisableTarget::PartCategory { id: "c1".into() });
        assert!(second.is_err());
    }

    #[test]
    fn begin_execute_requires_a_stage() {
        assert!(DisableState::Idle.begin_execute().is_err());

        let staged = DisableState::Idle.stage(target()).unwrap();
        let (executing, handed) = staged.begin_execute().unwrap();
        assert!(executing.is_executing());
        assert_eq!(handed, target());

        // Executing is terminal until reset to Idle.
        assert!(executing.begin_execute().is_err());
        assert!(executing.stage(target()).is_err());
        assert!(executing.staged().is_none());
    }

    #[test]
    fn model_target_displays_position() {
        let t = DisableTarget::Model(crate::model::ModelRef::new("b1", 2));
        assert_eq!(t.to_string(), "model b1#2");
        assert_eq!(t.describe(), "Model");
    }
}
