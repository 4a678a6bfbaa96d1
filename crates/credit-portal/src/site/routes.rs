use serde::Serialize;

/// Page shown for a browser path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Landing,
    AdminDashboard,
    BeneficiaryDetail { id: String },
    PartnerLogin,
    BorrowerPortal,
    NotFound,
}

/// Which chrome wraps the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Public,
    Admin,
    Bare,
}

impl Page {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::AdminDashboard => "admin_dashboard",
            Self::BeneficiaryDetail { .. } => "beneficiary_detail",
            Self::PartnerLogin => "partner_login",
            Self::BorrowerPortal => "borrower_portal",
            Self::NotFound => "not_found",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Landing => "CreditLend Pro",
            Self::AdminDashboard => "Admin Dashboard",
            Self::BeneficiaryDetail { .. } => "Beneficiary Details",
            Self::PartnerLogin => "Partner Login",
            Self::BorrowerPortal => "Borrower Portal",
            Self::NotFound => "Page Not Found",
        }
    }

    pub const fn layout(&self) -> Layout {
        match self {
            Self::AdminDashboard | Self::BeneficiaryDetail { .. } => Layout::Admin,
            Self::Landing | Self::BorrowerPortal => Layout::Public,
            Self::PartnerLogin | Self::NotFound => Layout::Bare,
        }
    }
}

/// Map a browser path onto a page. Matching ignores case, a query string,
/// a fragment and one trailing slash. Anything unmatched is `NotFound`.
pub fn resolve_path(path: &str) -> Page {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    // empty segments never match a route
    if path.contains("//") {
        return Page::NotFound;
    }
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

    match segments.as_slice() {
        [] => Page::Landing,
        [single] if single.eq_ignore_ascii_case("landing-page") => Page::Landing,
        [single] if single.eq_ignore_ascii_case("admin-dashboard") => Page::AdminDashboard,
        [single] if single.eq_ignore_ascii_case("admin-partner-login") => Page::PartnerLogin,
        [single] if single.eq_ignore_ascii_case("borrower-portal") => Page::BorrowerPortal,
        [prefix, id] if prefix.eq_ignore_ascii_case("beneficiary-detail-view") => {
            Page::BeneficiaryDetail { id: (*id).to_string() }
        }
        _ => Page::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_landing_alias_resolve_to_landing() {
        assert_eq!(resolve_path("/"), Page::Landing);
        assert_eq!(resolve_path(""), Page::Landing);
        assert_eq!(resolve_path("/landing-page"), Page::Landing);
    }

    #[test]
    fn detail_path_carries_the_id() {
        assert_eq!(
            resolve_path("/beneficiary-detail-view/7"),
            Page::BeneficiaryDetail { id: "7".to_string() }
        );
        assert_eq!(
            resolve_path("/beneficiary-detail-view/7/?tab=documents"),
            Page::BeneficiaryDetail { id: "7".to_string() }
        );
        assert_eq!(resolve_path("/beneficiary-detail-view"), Page::NotFound);
        assert_eq!(resolve_path("/beneficiary-detail-view/7/notes"), Page::NotFound);
    }

    #[test]
    fn static_routes_ignore_case_and_trailing_slash() {
        assert_eq!(resolve_path("/Admin-Dashboard/"), Page::AdminDashboard);
        assert_eq!(resolve_path("/admin-partner-login"), Page::PartnerLogin);
        assert_eq!(resolve_path("/borrower-portal#step-2"), Page::BorrowerPortal);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(resolve_path("/reports"), Page::NotFound);
        assert_eq!(resolve_path("/admin-dashboard/extra"), Page::NotFound);
        assert_eq!(resolve_path("//admin-dashboard"), Page::NotFound);
        assert_eq!(resolve_path("/reports").layout(), Layout::Bare);
    }

    #[test]
    fn page_serializes_with_tag() {
        let value = serde_json::to_value(Page::BeneficiaryDetail { id: "3".into() }).unwrap();
        assert_eq!(value["page"], "beneficiary_detail");
        assert_eq!(value["id"], "3");
    }
}
