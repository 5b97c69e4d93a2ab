//! Layout chrome and navigation components

pub mod footer;
pub mod guard;
pub mod layout;
pub mod navbar;
pub mod sidebar;

pub use footer::Footer;
pub use guard::RequireAuth;
pub use layout::Layout;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
