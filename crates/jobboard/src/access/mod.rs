//! Role model, route gating, and per-role navigation for the portal.

pub mod domain;
pub mod guard;
pub mod navigation;
pub mod session;

pub use domain::{Identity, Role};
pub use guard::{authorize, authorize_path, gate_for_path, AccessDecision, SIGN_IN_PATH};
pub use navigation::{navigation_for, portal_title, quick_actions_for, NavItem};
pub use session::SessionProvider;
