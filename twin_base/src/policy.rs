//! Invocation dispatch policy

use twin_types::SpaceKind;

/// Where a mirrored method executes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchPolicy {
    /// Execute locally on both sides; the design side additionally forwards
    /// the call so the run-side counterpart performs it too
    Both,
    /// Execute only in the design space; a run-side invocation is a no-op
    DesignOnly,
    /// Forward from the design space without executing locally; execute
    /// when invoked in the run space
    RunOnly,
}

/// Outcome of a dispatch decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchDecision {
    /// Execute the method in the current space
    pub run_local: bool,
    /// Pack and send an invoke message to the counterpart space
    pub forward: bool,
}

/// Decides where a call executes, given its policy and the active space kind
///
/// The run side never forwards, which is what prevents echo loops: a call
/// that arrived over the channel is applied locally and goes no further.
pub fn decide(policy: DispatchPolicy, side: SpaceKind) -> DispatchDecision {
    let (run_local, forward) = match (policy, side) {
        (DispatchPolicy::Both, SpaceKind::Design) => (true, true),
        (DispatchPolicy::Both, SpaceKind::Run) => (true, false),
        (DispatchPolicy::DesignOnly, SpaceKind::Design) => (true, false),
        (DispatchPolicy::DesignOnly, SpaceKind::Run) => (false, false),
        (DispatchPolicy::RunOnly, SpaceKind::Design) => (false, true),
        (DispatchPolicy::RunOnly, SpaceKind::Run) => (true, false),
    };
    DispatchDecision { run_local, forward }
}
