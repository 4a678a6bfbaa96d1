use serde::Serialize;

use super::routes::{resolve_path, Layout, Page};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    pub active: bool,
}

const DASHBOARD_PATH: &str = "/admin-dashboard";

const SEGMENT_LABELS: [(&str, &str); 5] = [
    ("admin-dashboard", "Dashboard"),
    ("beneficiary-detail-view", "Beneficiaries"),
    ("reports", "Reports"),
    ("settings", "Settings"),
    ("export", "Export"),
];

const SIDEBAR: [(&str, &str, &str); 4] = [
    ("Dashboard", "/admin-dashboard", "LayoutDashboard"),
    ("Beneficiaries", "/beneficiary-detail-view", "Users"),
    ("Reports", "/reports", "FileText"),
    ("Settings", "/settings", "Settings"),
];

const PUBLIC_LINKS: [(&str, &str); 2] = [("Home", "/landing-page"), ("Apply Now", "/borrower-portal")];

/// Trail rooted at the dashboard. The first segment of the path is covered by
/// the root crumb; later segments use their known label, or "Details" for the
/// final unknown segment. The dashboard itself has no trail.
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path == DASHBOARD_PATH {
        return Vec::new();
    }

    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    let mut trail = vec![Breadcrumb {
        label: "Dashboard".to_string(),
        path: DASHBOARD_PATH.to_string(),
        icon: Some("Home"),
        current: false,
    }];

    let mut current_path = String::new();
    for (index, segment) in segments.iter().enumerate() {
        current_path.push('/');
        current_path.push_str(segment);
        if index == 0 {
            continue;
        }

        let label = match SEGMENT_LABELS.iter().find(|(key, _)| key == segment) {
            Some((_, label)) => (*label).to_string(),
            None if index == segments.len() - 1 => "Details".to_string(),
            None => capitalize(segment),
        };
        trail.push(Breadcrumb {
            label,
            path: current_path.clone(),
            icon: None,
            current: false,
        });
    }

    if let Some(last) = trail.last_mut() {
        last.current = true;
    }
    trail
}

/// Admin sidebar. An item is active when the path starts with its target.
pub fn sidebar(path: &str) -> Vec<NavItem> {
    SIDEBAR
        .iter()
        .map(|&(label, target, icon)| NavItem {
            label,
            path: target,
            icon: Some(icon),
            active: path.starts_with(target),
        })
        .collect()
}

/// Public header links. Only an exact match is active.
pub fn public_links(path: &str) -> Vec<NavItem> {
    PUBLIC_LINKS
        .iter()
        .map(|&(label, target)| NavItem {
            label,
            path: target,
            icon: None,
            active: path == target,
        })
        .collect()
}

/// Everything the shell needs to render a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub path: String,
    #[serde(flatten)]
    pub page: Page,
    pub title: &'static str,
    pub layout: Layout,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub navigation: Vec<NavItem>,
}

pub fn resolve(path: &str) -> ResolvedPage {
    let page = resolve_path(path);
    let layout = page.layout();
    let (breadcrumbs, navigation) = match layout {
        Layout::Admin => (breadcrumbs(path), sidebar(path)),
        Layout::Public => (Vec::new(), public_links(path)),
        Layout::Bare => (Vec::new(), Vec::new()),
    };
    ResolvedPage {
        path: path.to_string(),
        title: page.title(),
        page,
        layout,
        breadcrumbs,
        navigation,
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(trail: &[Breadcrumb]) -> Vec<&str> {
        trail.iter().map(|crumb| crumb.label.as_str()).collect()
    }

    #[test]
    fn dashboard_has_no_trail() {
        assert!(breadcrumbs("/admin-dashboard").is_empty());
    }

    #[test]
    fn detail_trail_ends_with_details() {
        let trail = breadcrumbs("/beneficiary-detail-view/7");
        assert_eq!(labels(&trail), ["Dashboard", "Details"]);
        assert_eq!(trail[1].path, "/beneficiary-detail-view/7");
        assert!(trail[1].current);
        assert!(!trail[0].current);
        assert_eq!(trail[0].icon, Some("Home"));
    }

    #[test]
    fn known_and_unknown_segments_are_labelled() {
        let trail = breadcrumbs("/admin-dashboard/reports/quarterly/export");
        assert_eq!(labels(&trail), ["Dashboard", "Reports", "Quarterly", "Export"]);
        assert_eq!(trail[2].path, "/admin-dashboard/reports/quarterly");
    }

    #[test]
    fn sidebar_marks_prefix_matches_active() {
        let items = sidebar("/beneficiary-detail-view/4");
        let active: Vec<_> = items.iter().filter(|item| item.active).map(|item| item.label).collect();
        assert_eq!(active, ["Beneficiaries"]);
    }

    #[test]
    fn resolve_picks_navigation_by_layout() {
        let detail = resolve("/beneficiary-detail-view/7");
        assert_eq!(detail.layout, Layout::Admin);
        assert_eq!(detail.navigation.len(), 4);
        assert_eq!(detail.breadcrumbs.len(), 2);

        let landing = resolve("/landing-page");
        assert_eq!(landing.layout, Layout::Public);
        assert!(landing.breadcrumbs.is_empty());
        assert!(landing.navigation.iter().any(|item| item.label == "Home" && item.active));

        let missing = resolve("/nowhere");
        assert_eq!(missing.page, Page::NotFound);
        assert!(missing.navigation.is_empty());
    }

    #[test]
    fn resolved_page_flattens_page_tag() {
        let value = serde_json::to_value(resolve("/beneficiary-detail-view/7")).unwrap();
        assert_eq!(value["page"], "beneficiary_detail");
        assert_eq!(value["id"], "7");
        assert_eq!(value["title"], "Beneficiary Details");
    }
}
