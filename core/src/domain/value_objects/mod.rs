//! Value objects crossing the service boundary

pub mod outcomes;
pub mod profile;
pub mod registration;

pub use outcomes::{LoginOutcome, RegistrationOutcome};
pub use profile::UserProfile;
pub use registration::RegisterUser;
