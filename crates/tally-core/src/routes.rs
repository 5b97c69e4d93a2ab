//! Static route table with per-route metadata
//!
//! Access control (`requires_auth`) and layout chrome (`show_sidebar`) are
//! both declared here, at route-definition time, instead of being derived
//! from path prefixes at render time.

/// Metadata attached to a single route pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    /// Path pattern; `:name` segments match any single segment
    pub path: &'static str,
    /// Whether navigation requires an authenticated session
    pub requires_auth: bool,
    /// Whether the layout renders sidebar chrome for this route
    pub show_sidebar: bool,
}

/// The complete client-side route table, defined once at startup
pub const ROUTES: &[RouteMeta] = &[
    RouteMeta { path: "/", requires_auth: false, show_sidebar: false },
    RouteMeta { path: "/login", requires_auth: false, show_sidebar: false },
    RouteMeta { path: "/register", requires_auth: false, show_sidebar: false },
    RouteMeta { path: "/dashboard", requires_auth: true, show_sidebar: true },
    RouteMeta { path: "/transactions", requires_auth: true, show_sidebar: true },
    RouteMeta { path: "/transactions/:id/edit", requires_auth: true, show_sidebar: true },
    RouteMeta { path: "/budgets", requires_auth: true, show_sidebar: true },
];

/// Find the route matching `path`, tolerating trailing slashes
pub fn resolve(path: &str) -> Option<&'static RouteMeta> {
    ROUTES.iter().find(|route| matches(route.path, path))
}

fn matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = segments(pattern);
    let path_segments: Vec<&str> = segments(path);
    pattern_segments.len() == path_segments.len()
        && pattern_segments
            .iter()
            .zip(&path_segments)
            .all(|(p, s)| p.starts_with(':') || p == s)
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_static_routes() {
        assert_eq!(resolve("/").map(|r| r.path), Some("/"));
        assert_eq!(resolve("/login").map(|r| r.path), Some("/login"));
        assert_eq!(resolve("/budgets").map(|r| r.path), Some("/budgets"));
    }

    #[test]
    fn resolves_parameterized_route() {
        let route = resolve("/transactions/42/edit").expect("route should match");
        assert_eq!(route.path, "/transactions/:id/edit");
        assert!(route.requires_auth);
        assert!(route.show_sidebar);
    }

    #[test]
    fn parameter_matches_a_single_segment_only() {
        assert_eq!(resolve("/transactions/42"), None);
        assert_eq!(resolve("/transactions/42/edit/extra"), None);
    }

    #[test]
    fn tolerates_trailing_slash() {
        assert_eq!(resolve("/dashboard/").map(|r| r.path), Some("/dashboard"));
        assert_eq!(resolve("/transactions/7/edit/").map(|r| r.path), Some("/transactions/:id/edit"));
    }

    #[test]
    fn unknown_path_does_not_resolve() {
        assert_eq!(resolve("/profile"), None);
        assert_eq!(resolve("/budgets/extra"), None);
    }

    #[test]
    fn guarded_subset_carries_auth_flag() {
        for path in ["/dashboard", "/transactions", "/budgets"] {
            assert!(resolve(path).expect("route should match").requires_auth, "{path}");
        }
        for path in ["/", "/login", "/register"] {
            assert!(!resolve(path).expect("route should match").requires_auth, "{path}");
        }
    }
}
