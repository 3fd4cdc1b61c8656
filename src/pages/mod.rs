//! Page objects for the booking administration panel.
//!
//! One object per logical screen. Each exposes high-level actions and
//! assertion helpers; the underlying locators and interaction primitives
//! stay private to the object that owns them.

pub mod admin_panel;
pub mod login;
pub mod rooms;

pub use admin_panel::AdminPanelPage;
pub use login::LoginPage;
pub use rooms::RoomsPage;
