//! Layout chrome decision
//!
//! Chrome visibility is a pure function of the current path and is
//! evaluated independently of the navigation guard: a path can carry
//! sidebar chrome even when the guard would reject it.

use crate::routes;

/// Which chrome the layout renders around the routed content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub navbar: bool,
    pub sidebar: bool,
    pub footer: bool,
}

/// Decide chrome for `path`. Navbar and footer always render; the
/// sidebar follows the resolved route's metadata. Unknown paths get no
/// sidebar.
pub fn chrome_for_path(path: &str) -> Chrome {
    Chrome {
        navbar: true,
        sidebar: routes::resolve(path).map(|r| r.show_sidebar).unwrap_or(false),
        footer: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_routes_show_sidebar() {
        for path in ["/dashboard", "/transactions", "/transactions/3/edit", "/budgets"] {
            assert!(chrome_for_path(path).sidebar, "{path}");
        }
    }

    #[test]
    fn public_routes_hide_sidebar() {
        for path in ["/", "/login", "/register"] {
            assert!(!chrome_for_path(path).sidebar, "{path}");
        }
    }

    #[test]
    fn unknown_path_hides_sidebar() {
        assert!(!chrome_for_path("/no-such-page").sidebar);
    }

    #[test]
    fn navbar_and_footer_always_render() {
        for path in ["/", "/login", "/budgets", "/no-such-page"] {
            let chrome = chrome_for_path(path);
            assert!(chrome.navbar, "{path}");
            assert!(chrome.footer, "{path}");
        }
    }
}
