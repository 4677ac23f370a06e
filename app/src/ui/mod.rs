pub mod format;
pub mod sidebar;
pub mod toast;
