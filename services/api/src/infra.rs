use diaspora_ro::config::StorageConfig;
use diaspora_ro::profile::{
    InMemoryProfileRepository, JsonFileProfileRepository, ProfileRepository,
};
use diaspora_ro::rules::{CountryCode, Duration, FamilyStatus, WorkSituation};
use metrics_exporter_prometheus::PrometheusHandle;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type SharedRepository = Box<dyn ProfileRepository>;

/// File-backed store when a path is configured, otherwise process memory.
pub(crate) fn profile_repository(storage: &StorageConfig) -> SharedRepository {
    match &storage.profile_store {
        Some(path) => {
            info!(path = %path.display(), "persisting profile to json file");
            Box::new(JsonFileProfileRepository::new(path.clone()))
        }
        None => {
            info!("keeping profile in memory");
            Box::new(InMemoryProfileRepository::default())
        }
    }
}

fn parse_answer<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    T::from_str(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_country(raw: &str) -> Result<CountryCode, String> {
    parse_answer(raw)
}

pub(crate) fn parse_situation(raw: &str) -> Result<WorkSituation, String> {
    parse_answer(raw)
}

pub(crate) fn parse_duration(raw: &str) -> Result<Duration, String> {
    parse_answer(raw)
}

pub(crate) fn parse_family(raw: &str) -> Result<FamilyStatus, String> {
    parse_answer(raw)
}
