//! Routed Views
//!
//! One component per route. Each view owns its transient state and drops it
//! on unmount.

mod landing;
mod signup;
mod prompt;

pub use landing::LandingPage;
pub use signup::SignupPage;
pub use prompt::PromptPage;
