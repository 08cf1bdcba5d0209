use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::rules::tables::{self, RULES_VERSION};
use crate::rules::{
    evaluate, ApplicableRules, CountryCode, Duration, FamilySelection, QuizAnswers, RulesInput,
    WorkSituation,
};

/// Opaque identifier for a stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_profile_id(now: DateTime<Utc>) -> ProfileId {
    let sequence = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("{}-{sequence:06}", now.timestamp_millis()))
}

/// A complete answer set together with the rules computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub residence_country: CountryCode,
    pub work_situation: WorkSituation,
    pub duration: Duration,
    pub family_status: FamilySelection,
    pub destination_country: CountryCode,
    pub applicable_rules: ApplicableRules,
    pub rules_version: String,
    pub rules_last_updated: NaiveDate,
}

impl Profile {
    pub fn answers(&self) -> QuizAnswers {
        QuizAnswers {
            residence_country: Some(self.residence_country),
            work_situation: Some(self.work_situation),
            duration: Some(self.duration),
            family_status: Some(self.family_status.clone()),
        }
    }

    /// Apply edited answers and recompute the whole rule bundle.
    pub fn revise(&self, changes: QuizAnswers) -> Profile {
        let answers = CompleteAnswers {
            residence_country: changes.residence_country.unwrap_or(self.residence_country),
            work_situation: changes.work_situation.unwrap_or(self.work_situation),
            duration: changes.duration.unwrap_or(self.duration),
            family_status: changes
                .family_status
                .unwrap_or_else(|| self.family_status.clone()),
        };

        assemble(answers, self.id.clone(), self.created_at, Utc::now())
    }

    /// Whether the stored bundle was computed by an older rules release.
    pub fn is_stale(&self) -> bool {
        self.rules_version != RULES_VERSION
    }
}

/// Raised when the quiz is evaluated before every question was answered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("incomplete quiz answers: missing {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
}

/// Build a profile from finished quiz answers.
pub fn create_profile(answers: QuizAnswers) -> Result<Profile, ProfileError> {
    let answers = CompleteAnswers::try_from(answers)?;
    let now = Utc::now();
    let profile = assemble(answers, next_profile_id(now), now, now);

    info!(
        profile_id = %profile.id,
        residence = %profile.residence_country,
        destination = %profile.destination_country,
        situation = %profile.work_situation,
        "profile created"
    );
    Ok(profile)
}

/// Where cross-border obligations are anchored.
///
/// Residents of Romania who are posted or work remotely fall back to RO because the
/// host country is not asked for.
pub fn derive_destination(residence: CountryCode, situation: WorkSituation) -> CountryCode {
    match situation {
        WorkSituation::Returning => CountryCode::Ro,
        _ if residence != CountryCode::Ro => residence,
        _ => CountryCode::Ro,
    }
}

struct CompleteAnswers {
    residence_country: CountryCode,
    work_situation: WorkSituation,
    duration: Duration,
    family_status: FamilySelection,
}

impl TryFrom<QuizAnswers> for CompleteAnswers {
    type Error = ProfileError;

    fn try_from(answers: QuizAnswers) -> Result<Self, Self::Error> {
        let missing = answers.missing_fields();
        match answers {
            QuizAnswers {
                residence_country: Some(residence_country),
                work_situation: Some(work_situation),
                duration: Some(duration),
                family_status: Some(family_status),
            } => Ok(Self {
                residence_country,
                work_situation,
                duration,
                family_status,
            }),
            _ => Err(ProfileError::Incomplete { missing }),
        }
    }
}

fn assemble(
    answers: CompleteAnswers,
    id: ProfileId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Profile {
    let destination_country =
        derive_destination(answers.residence_country, answers.work_situation);
    let input = RulesInput {
        residence_country: answers.residence_country,
        work_situation: answers.work_situation,
        duration: answers.duration,
        family_status: answers.family_status,
        destination_country,
    };
    let applicable_rules = evaluate(&input);

    Profile {
        id,
        created_at,
        updated_at,
        residence_country: input.residence_country,
        work_situation: input.work_situation,
        duration: input.duration,
        family_status: input.family_status,
        destination_country,
        applicable_rules,
        rules_version: RULES_VERSION.to_string(),
        rules_last_updated: tables::rules_last_updated(),
    }
}
