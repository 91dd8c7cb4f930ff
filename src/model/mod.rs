//! Domain model types (pure).
//!
//! All types in this module are plain data with no terminal or timer
//! dependencies.

pub mod error;
pub mod key_action;
pub mod profile;
pub mod section;

pub use error::{AppError, ProfileError};
pub use key_action::KeyAction;
pub use profile::{
    Education, Experience, InvalidProfile, Profile, Project, SocialLink, DEFAULT_FOOTER_NOTE,
};
pub use section::Section;
