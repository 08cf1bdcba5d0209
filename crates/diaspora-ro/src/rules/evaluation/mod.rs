mod aggregate;
mod healthcare;
mod pension;
mod social_security;
mod tax;

pub use aggregate::{consolidate_next_steps, recommended_documents, required_documents};
pub use healthcare::{evaluate_healthcare, HealthcareRules};
pub use pension::{evaluate_pension, PensionRules};
pub use social_security::{evaluate_social_security, SocialSecurityRules};
pub use tax::{evaluate_taxes, TaxDeadline, TaxRules};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{
    ActionableStep, CountryCode, DocumentId, Duration, FamilySelection, WorkSituation,
};

/// Complete, validated situation handed to the evaluators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesInput {
    pub residence_country: CountryCode,
    pub work_situation: WorkSituation,
    pub duration: Duration,
    pub family_status: FamilySelection,
    pub destination_country: CountryCode,
}

/// Everything the engine concludes for one profile. Rebuilt whole on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicableRules {
    pub social_security: SocialSecurityRules,
    pub healthcare: HealthcareRules,
    pub taxes: TaxRules,
    pub pension: PensionRules,
    pub required_documents: Vec<DocumentId>,
    pub recommended_documents: Vec<DocumentId>,
    pub consolidated_next_steps: Vec<ActionableStep>,
}

/// Run the four evaluators and merge their documents and steps.
pub fn evaluate(input: &RulesInput) -> ApplicableRules {
    let social_security = evaluate_social_security(input);
    let healthcare = evaluate_healthcare(input);
    let taxes = evaluate_taxes(input);
    let pension = evaluate_pension(input);

    let required_documents = required_documents(&social_security, &healthcare);
    let recommended_documents = recommended_documents(input);
    let consolidated_next_steps = consolidate_next_steps(&social_security, &taxes);

    debug!(
        residence = %input.residence_country,
        situation = %input.work_situation,
        duration = %input.duration,
        required = required_documents.len(),
        recommended = recommended_documents.len(),
        steps = consolidated_next_steps.len(),
        "evaluated applicable rules"
    );

    ApplicableRules {
        social_security,
        healthcare,
        taxes,
        pension,
        required_documents,
        recommended_documents,
        consolidated_next_steps,
    }
}
