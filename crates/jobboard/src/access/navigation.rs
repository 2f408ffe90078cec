use serde::Serialize;

use super::domain::Role;

/// One entry in a portal sidebar or quick-action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

const STUDENT_NAV: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        path: "/student/dashboard",
        icon: "layout-dashboard",
    },
    NavItem {
        title: "My Profile",
        path: "/student/profile",
        icon: "user",
    },
    NavItem {
        title: "Browse Jobs",
        path: "/student/jobs",
        icon: "briefcase",
    },
    NavItem {
        title: "My Applications",
        path: "/student/applications",
        icon: "file-text",
    },
];

const COMPANY_NAV: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        path: "/company/dashboard",
        icon: "layout-dashboard",
    },
    NavItem {
        title: "Company Profile",
        path: "/company/profile",
        icon: "building-2",
    },
    NavItem {
        title: "My Jobs",
        path: "/company/jobs",
        icon: "briefcase",
    },
    NavItem {
        title: "Post Job",
        path: "/company/jobs/create",
        icon: "plus",
    },
    NavItem {
        title: "Applications",
        path: "/company/applications",
        icon: "user-check",
    },
];

const ADMIN_NAV: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        path: "/admin/dashboard",
        icon: "layout-dashboard",
    },
    NavItem {
        title: "All Users",
        path: "/admin/users",
        icon: "users",
    },
    NavItem {
        title: "All Jobs",
        path: "/admin/jobs",
        icon: "briefcase",
    },
    NavItem {
        title: "Applications",
        path: "/admin/applications",
        icon: "file-text",
    },
    NavItem {
        title: "Categories",
        path: "/admin/categories",
        icon: "folder-open",
    },
    NavItem {
        title: "Analytics",
        path: "/admin/analytics",
        icon: "bar-chart-3",
    },
];

const STUDENT_ACTIONS: &[NavItem] = &[
    NavItem {
        title: "Browse All Jobs",
        path: "/jobs",
        icon: "eye",
    },
    NavItem {
        title: "Update Profile",
        path: "/student/profile",
        icon: "settings",
    },
];

const COMPANY_ACTIONS: &[NavItem] = &[
    NavItem {
        title: "Post New Job",
        path: "/company/jobs/create",
        icon: "plus",
    },
    NavItem {
        title: "Update Profile",
        path: "/company/profile",
        icon: "settings",
    },
];

const ADMIN_ACTIONS: &[NavItem] = &[
    NavItem {
        title: "Add Category",
        path: "/admin/categories",
        icon: "plus",
    },
    NavItem {
        title: "View Reports",
        path: "/admin/analytics",
        icon: "bar-chart-3",
    },
];

/// Sidebar entries for a role. Single lookup table, no per-view branching.
pub const fn navigation_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Student => STUDENT_NAV,
        Role::Company => COMPANY_NAV,
        Role::Admin => ADMIN_NAV,
    }
}

/// Secondary quick-action entries shown under the main navigation.
pub const fn quick_actions_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Student => STUDENT_ACTIONS,
        Role::Company => COMPANY_ACTIONS,
        Role::Admin => ADMIN_ACTIONS,
    }
}

pub const fn portal_title(role: Role) -> &'static str {
    match role {
        Role::Student => "Student Portal",
        Role::Company => "Company Portal",
        Role::Admin => "Admin Panel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::guard::{authorize_path, AccessDecision};
    use crate::access::Identity;

    #[test]
    fn every_role_has_a_dashboard_entry_first() {
        for role in Role::ordered() {
            let nav = navigation_for(role);
            assert!(!nav.is_empty());
            assert_eq!(nav[0].title, "Dashboard");
        }
    }

    #[test]
    fn navigation_targets_are_reachable_by_their_own_role() {
        for role in Role::ordered() {
            let identity = Identity::new(role, "Nav Check", "nav@example.com");
            for item in navigation_for(role) {
                assert_eq!(
                    authorize_path(Some(&identity), item.path),
                    AccessDecision::Render,
                    "{} should reach {}",
                    role.label(),
                    item.path
                );
            }
        }
    }

    #[test]
    fn admin_panel_lists_categories() {
        assert!(navigation_for(Role::Admin)
            .iter()
            .any(|item| item.path == "/admin/categories"));
        assert_eq!(portal_title(Role::Admin), "Admin Panel");
    }
}
