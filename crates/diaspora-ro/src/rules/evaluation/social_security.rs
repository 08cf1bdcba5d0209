use serde::{Deserialize, Serialize};

use super::super::domain::{
    ActionableStep, CountryCode, CoverageStatus, DocumentId, Duration, StepKind, StepPriority,
    WorkSituation,
};
use super::super::warnings::Warning;
use super::RulesInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityRules {
    pub pay_in: CountryCode,
    pub status: CoverageStatus,
    pub covers_pension: bool,
    pub covers_unemployment: bool,
    pub covers_healthcare: bool,
    pub covers_accidents: bool,
    pub required_forms: Vec<DocumentId>,
    pub warnings: Vec<Warning>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<ActionableStep>,
}

impl SocialSecurityRules {
    /// Every branch covers all four risks; only the paying country and status differ.
    fn covered(pay_in: CountryCode, status: CoverageStatus) -> Self {
        Self {
            pay_in,
            status,
            covers_pension: true,
            covers_unemployment: true,
            covers_healthcare: true,
            covers_accidents: true,
            required_forms: Vec::new(),
            warnings: Vec::new(),
            next_steps: Vec::new(),
        }
    }
}

pub fn evaluate_social_security(input: &RulesInput) -> SocialSecurityRules {
    let residence = input.residence_country;

    match input.work_situation {
        WorkSituation::LocalEmployee => {
            SocialSecurityRules::covered(residence, CoverageStatus::FullCoverage)
        }
        WorkSituation::PostedWorker => posted_worker(input.duration),
        WorkSituation::RemoteWorker => {
            // Working more than a quarter of the time in the residence country usually
            // makes that country competent.
            let mut rules =
                SocialSecurityRules::covered(residence, CoverageStatus::NeedsVerification);
            rules.required_forms.push(DocumentId::A1Form);
            rules.warnings = vec![
                Warning::QuarterOfWorkingTimeRule,
                Warning::SocialSecurityAuthority { country: residence },
                Warning::RequestA1ForClarification,
            ];
            rules
        }
        WorkSituation::Returning => {
            let mut rules =
                SocialSecurityRules::covered(CountryCode::Ro, CoverageStatus::Transitioning);
            rules.required_forms.push(DocumentId::U1Form);
            rules.warnings.push(Warning::ObtainU1BeforeDeparture);
            rules
        }
    }
}

fn posted_worker(duration: Duration) -> SocialSecurityRules {
    let over_limit = duration == Duration::OverTwoYears;
    let status = if over_limit {
        CoverageStatus::Transitioning
    } else {
        CoverageStatus::PostedCoverage
    };

    let mut rules = SocialSecurityRules::covered(CountryCode::Ro, status);
    rules.required_forms.push(DocumentId::A1Form);

    if over_limit {
        rules.warnings.push(Warning::PostingBeyondLimit);
        rules.warnings.push(Warning::A1ExpiresAtLimit);
        rules.next_steps.push(ActionableStep::new(
            StepKind::TransitionToLocalSystem,
            StepPriority::Urgent,
        ));
    } else if duration == Duration::OneToTwoYears {
        rules.warnings.push(Warning::PostingApproachingLimit);
        rules.next_steps.push(ActionableStep::new(
            StepKind::MonitorPostingDuration,
            StepPriority::Medium,
        ));
    }

    // Short postings need the A1 before departure.
    let a1_priority = if duration.is_short_stay() {
        StepPriority::Urgent
    } else if over_limit {
        StepPriority::Medium
    } else {
        StepPriority::High
    };
    rules
        .next_steps
        .push(ActionableStep::new(StepKind::ObtainA1Form, a1_priority));

    rules
}
