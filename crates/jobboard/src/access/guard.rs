use serde::{Deserialize, Serialize};

use super::domain::{Identity, Role};

/// Where both the unauthenticated and wrong-role cases are sent.
///
/// The guard deliberately does not distinguish the two: a visitor with the
/// wrong role lands on the sign-in screen as well. Known ambiguity, kept.
pub const SIGN_IN_PATH: &str = "/login";

/// Outcome of evaluating route access for the current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    Render,
    RedirectToLogin,
}

impl AccessDecision {
    pub const fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectToLogin => Some(SIGN_IN_PATH),
        }
    }
}

/// Decide render-vs-redirect for a route restricted to `allowed_roles`.
///
/// Re-evaluated on every navigation; this is a UX affordance only, never a
/// security boundary.
pub fn authorize(identity: Option<&Identity>, allowed_roles: &[Role]) -> AccessDecision {
    match identity {
        Some(identity) if allowed_roles.contains(&identity.role) => AccessDecision::Render,
        _ => AccessDecision::RedirectToLogin,
    }
}

const STUDENT_ONLY: &[Role] = &[Role::Student];
const COMPANY_ONLY: &[Role] = &[Role::Company];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Allowed-role set for a navigable path, or `None` when the path is public.
///
/// Gated subtrees follow the portal layout: `/student/*`, `/company/*`,
/// `/admin/*`. Everything else (home, catalog, detail, sign-in, registration,
/// unknown paths) renders without a gate; unknown listing ids resolve to a
/// not-found display state further in, not here.
pub fn gate_for_path(path: &str) -> Option<&'static [Role]> {
    if path == "/student" || path.starts_with("/student/") {
        Some(STUDENT_ONLY)
    } else if path == "/company" || path.starts_with("/company/") {
        Some(COMPANY_ONLY)
    } else if path == "/admin" || path.starts_with("/admin/") {
        Some(ADMIN_ONLY)
    } else {
        None
    }
}

/// Evaluate the guard for a concrete path, treating ungated paths as public.
pub fn authorize_path(identity: Option<&Identity>, path: &str) -> AccessDecision {
    match gate_for_path(path) {
        Some(allowed) => authorize(identity, allowed),
        None => AccessDecision::Render,
    }
}
