pub mod menu;
pub mod nav_tree;
pub mod sidebar;

pub use sidebar::Sidebar;
