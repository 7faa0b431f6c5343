// Interaction shells: both drive a `Session` and differ only in how they talk to the user.

#[cfg(feature = "form")]
pub mod form;
pub mod menu;

pub use menu::Menu;
