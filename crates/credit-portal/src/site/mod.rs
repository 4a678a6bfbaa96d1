//! Routing shell for the portal: which page a browser path shows, the trail
//! and navigation around it, and the landing page copy.

pub mod landing;
pub mod navigation;
pub mod router;
pub mod routes;

pub use landing::{landing_content, LandingContent};
pub use navigation::{breadcrumbs, resolve, sidebar, Breadcrumb, NavItem, ResolvedPage};
pub use router::site_router;
pub use routes::{resolve_path, Layout, Page};
