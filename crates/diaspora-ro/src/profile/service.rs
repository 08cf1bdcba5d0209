use std::sync::Arc;

use tracing::info;

use super::builder::{create_profile, Profile, ProfileError};
use super::repository::{ProfileRepository, ProfileStoreError};
use crate::dashboard::{dashboard_cards, DashboardCard};
use crate::rules::QuizAnswers;

/// Service composing the profile builder with the repository.
pub struct ProfileService<R> {
    repository: Arc<R>,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Build a fresh profile from finished answers, replacing any stored one.
    pub fn submit(&self, answers: QuizAnswers) -> Result<Profile, ProfileServiceError> {
        let profile = create_profile(answers)?;
        self.repository.save(&profile)?;
        Ok(profile)
    }

    /// Stored profile; bundles computed by an older rules release are recomputed.
    pub fn current(&self) -> Result<Profile, ProfileServiceError> {
        let profile = self
            .repository
            .load()?
            .ok_or(ProfileServiceError::NotFound)?;

        if !profile.is_stale() {
            return Ok(profile);
        }

        info!(
            profile_id = %profile.id,
            stored_version = %profile.rules_version,
            "recomputing profile from an older rules release"
        );
        let refreshed = profile.revise(QuizAnswers::default());
        self.repository.save(&refreshed)?;
        Ok(refreshed)
    }

    /// Apply edited answers to the stored profile.
    pub fn revise(&self, changes: QuizAnswers) -> Result<Profile, ProfileServiceError> {
        let current = self.current()?;
        let revised = current.revise(changes);
        self.repository.save(&revised)?;

        info!(profile_id = %revised.id, "profile revised");
        Ok(revised)
    }

    pub fn reset(&self) -> Result<(), ProfileServiceError> {
        self.repository.clear()?;
        Ok(())
    }

    pub fn dashboard(&self) -> Result<Vec<DashboardCard>, ProfileServiceError> {
        let profile = self.current()?;
        Ok(dashboard_cards(&profile))
    }
}

/// Error raised by the profile service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
    #[error("no profile has been saved yet")]
    NotFound,
}
