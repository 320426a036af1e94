//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod brand_mark;
mod icons;
mod hamburger_button;
mod form_input;
mod password_input;
mod chat_sidebar;
mod transcript;

pub use brand_mark::BrandMark;
pub use icons::{Icon, IconKind};
pub use hamburger_button::HamburgerButton;
pub use form_input::FormInput;
pub use password_input::PasswordInput;
pub use chat_sidebar::ChatSidebar;
pub use transcript::Transcript;
