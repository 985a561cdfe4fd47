pub mod navigation;

pub use navigation::{menu_items, MenuItem, NavigationState, Role, ViewId};
