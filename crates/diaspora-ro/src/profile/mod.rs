//! Profile construction, persistence and the HTTP surface around it.

pub mod builder;
pub mod repository;
pub mod router;
pub mod service;

pub use builder::{create_profile, derive_destination, Profile, ProfileError, ProfileId};
pub use repository::{
    InMemoryProfileRepository, JsonFileProfileRepository, ProfileRepository, ProfileStoreError,
};
pub use router::profile_router;
pub use service::{ProfileService, ProfileServiceError};
