use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::builder::Profile;

/// Storage abstraction for the single saved profile.
pub trait ProfileRepository: Send + Sync {
    /// `Ok(None)` when nothing is stored or the stored data cannot be read back.
    fn load(&self) -> Result<Option<Profile>, ProfileStoreError>;
    fn save(&self, profile: &Profile) -> Result<(), ProfileStoreError>;
    fn clear(&self) -> Result<(), ProfileStoreError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("profile store i/o failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("profile could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    slot: Mutex<Option<Profile>>,
}

impl InMemoryProfileRepository {
    fn guard(&self) -> Result<std::sync::MutexGuard<'_, Option<Profile>>, ProfileStoreError> {
        self.slot
            .lock()
            .map_err(|_| ProfileStoreError::Unavailable("profile mutex poisoned".to_string()))
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    fn load(&self) -> Result<Option<Profile>, ProfileStoreError> {
        Ok(self.guard()?.clone())
    }

    fn save(&self, profile: &Profile) -> Result<(), ProfileStoreError> {
        *self.guard()? = Some(profile.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ProfileStoreError> {
        *self.guard()? = None;
        Ok(())
    }
}

/// Persists the profile as one JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileProfileRepository {
    path: PathBuf,
}

impl JsonFileProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ProfileStoreError {
        ProfileStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl ProfileRepository for JsonFileProfileRepository {
    fn load(&self) -> Result<Option<Profile>, ProfileStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        match serde_json::from_str::<Profile>(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "discarding unreadable stored profile"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, profile: &Profile) -> Result<(), ProfileStoreError> {
        let directory = self.directory();
        fs::create_dir_all(directory).map_err(|err| self.io_error(err))?;

        let payload = serde_json::to_vec_pretty(profile)?;
        // One staging file per write.
        let mut staging = NamedTempFile::new_in(directory).map_err(|err| self.io_error(err))?;
        staging
            .write_all(&payload)
            .and_then(|()| staging.as_file().sync_all())
            .map_err(|err| self.io_error(err))?;
        staging
            .persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;

        debug!(path = %self.path.display(), profile_id = %profile.id, "profile saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), ProfileStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

impl<R: ProfileRepository + ?Sized> ProfileRepository for Box<R> {
    fn load(&self) -> Result<Option<Profile>, ProfileStoreError> {
        (**self).load()
    }

    fn save(&self, profile: &Profile) -> Result<(), ProfileStoreError> {
        (**self).save(profile)
    }

    fn clear(&self) -> Result<(), ProfileStoreError> {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use tempfile::TempDir;

    use super::*;
    use crate::profile::create_profile;
    use crate::rules::{CountryCode, Duration, FamilySelection, QuizAnswers, WorkSituation};

    fn profile() -> Profile {
        create_profile(QuizAnswers {
            residence_country: Some(CountryCode::Fr),
            work_situation: Some(WorkSituation::LocalEmployee),
            duration: Some(Duration::OneToTwoYears),
            family_status: Some(FamilySelection::single()),
        })
        .expect("complete answers")
    }

    fn file_repository() -> (TempDir, JsonFileProfileRepository) {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let repository = JsonFileProfileRepository::new(tmp.path().join("store/profile.json"));
        (tmp, repository)
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (_tmp, repository) = file_repository();
        assert!(repository.load().expect("load succeeds").is_none());
    }

    #[test]
    fn saved_profile_loads_back() {
        let (_tmp, repository) = file_repository();
        let profile = profile();

        repository.save(&profile).expect("save succeeds");
        let loaded = repository.load().expect("load succeeds");

        assert_eq!(loaded, Some(profile));
    }

    #[test]
    fn corrupted_file_is_treated_as_empty() {
        let (_tmp, repository) = file_repository();
        fs::create_dir_all(repository.path().parent().expect("has parent")).expect("mkdir");
        fs::write(repository.path(), "{\"id\": \"half-written").expect("write");

        assert!(repository.load().expect("load succeeds").is_none());
    }

    #[test]
    fn clear_removes_the_profile_and_tolerates_repeats() {
        let (_tmp, repository) = file_repository();
        repository.save(&profile()).expect("save succeeds");

        repository.clear().expect("clear succeeds");
        repository.clear().expect("second clear succeeds");

        assert!(!repository.path().exists());
        assert!(repository.load().expect("load succeeds").is_none());
    }

    #[test]
    fn concurrent_saves_all_succeed_and_leave_a_readable_profile() {
        let (tmp, repository) = file_repository();
        let repository = Arc::new(repository);
        let profile = profile();

        for _ in 0..50 {
            let writers: Vec<_> = (0..4)
                .map(|_| {
                    let repository = Arc::clone(&repository);
                    let profile = profile.clone();
                    thread::spawn(move || repository.save(&profile))
                })
                .collect();

            for writer in writers {
                writer
                    .join()
                    .expect("writer thread finishes")
                    .expect("save succeeds");
            }
            assert_eq!(repository.load().expect("load succeeds"), Some(profile.clone()));
        }

        let leftovers = fs::read_dir(tmp.path().join("store"))
            .expect("store dir readable")
            .count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn in_memory_repository_replaces_and_clears() {
        let repository = InMemoryProfileRepository::default();
        let first = profile();
        let second = profile();

        repository.save(&first).expect("save");
        repository.save(&second).expect("save");
        assert_eq!(repository.load().expect("load"), Some(second));

        repository.clear().expect("clear");
        assert!(repository.load().expect("load").is_none());
    }
}
