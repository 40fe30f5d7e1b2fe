//! Public action dispatch.
//!
//! The gateway exposes an allow-list of actions selected by the
//! `action` query parameter. The list currently has a single entry,
//! but routing goes through a table so adding an action is a new row,
//! not new control flow.

/// Query parameter that selects the action.
pub const ACTION_PARAM: &str = "action";

/// Actions the gateway is willing to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward a public submission to the upstream web app.
    SubmitPublic,
}

impl Action {
    /// Wire name of the action, as it appears in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::SubmitPublic => "submitPublic",
        }
    }
}

/// Dispatch table: wire name → action.
const ACTIONS: &[(&str, Action)] = &[("submitPublic", Action::SubmitPublic)];

/// Resolve an action name against the allow-list.
///
/// Unknown names and known-but-unlisted names are indistinguishable to
/// callers; both read as "no such route".
pub fn resolve(name: &str) -> Option<Action> {
    ACTIONS
        .iter()
        .find(|(wire, _)| *wire == name)
        .map(|(_, action)| *action)
}
