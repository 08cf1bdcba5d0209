//! Cross-border rules engine.
//!
//! A pure, synchronous mapping from a complete quiz answer set to the social-security,
//! healthcare, tax and pension rules that apply, plus the documents and next steps that
//! follow from them.

pub mod domain;
pub mod evaluation;
pub mod tables;
pub mod warnings;

#[cfg(test)]
mod tests;

pub use domain::{
    ActionableStep, CountryCode, CoverageStatus, DocumentId, Duration, FamilySelection,
    FamilySelectionError, FamilyStatus, QuizAnswers, StepCategory, StepKind, StepPriority,
    UnknownValue, WorkSituation,
};
pub use evaluation::{
    consolidate_next_steps, evaluate, evaluate_healthcare, evaluate_pension,
    evaluate_social_security, evaluate_taxes, recommended_documents, required_documents,
    ApplicableRules, HealthcareRules, PensionRules, RulesInput, SocialSecurityRules,
    TaxDeadline, TaxRules,
};
pub use warnings::Warning;
