use super::super::domain::{ActionableStep, DocumentId, WorkSituation};
use super::healthcare::HealthcareRules;
use super::social_security::SocialSecurityRules;
use super::tax::TaxRules;
use super::RulesInput;

/// Social-security forms plus the S1 when healthcare asks for it, without duplicates.
pub fn required_documents(
    social_security: &SocialSecurityRules,
    healthcare: &HealthcareRules,
) -> Vec<DocumentId> {
    let mut documents = Vec::new();
    let s1 = healthcare.needs_s1.then_some(DocumentId::S1Form);

    for document in social_security.required_forms.iter().copied().chain(s1) {
        push_unique(&mut documents, document);
    }
    documents
}

/// Recommendations come straight from the answers, not from the rule records.
pub fn recommended_documents(input: &RulesInput) -> Vec<DocumentId> {
    let mut documents = Vec::new();
    let duration = input.duration;

    match input.work_situation {
        WorkSituation::LocalEmployee | WorkSituation::PostedWorker => {
            push_unique(&mut documents, DocumentId::EhicCard);
            if duration.is_extended_stay() {
                push_unique(&mut documents, DocumentId::TaxCertificate);
            }
        }
        WorkSituation::RemoteWorker => {
            push_unique(&mut documents, DocumentId::EhicCard);
            push_unique(&mut documents, DocumentId::TaxCertificate);
        }
        WorkSituation::Returning => {
            if input.family_status.has_family_with() {
                push_unique(&mut documents, DocumentId::S1Form);
            }
        }
    }

    documents
}

/// Social-security steps then tax steps, stably sorted by priority.
pub fn consolidate_next_steps(
    social_security: &SocialSecurityRules,
    taxes: &TaxRules,
) -> Vec<ActionableStep> {
    let mut steps: Vec<ActionableStep> = social_security
        .next_steps
        .iter()
        .chain(taxes.next_steps.iter())
        .cloned()
        .collect();

    steps.sort_by_key(|step| step.priority.rank());
    steps
}

fn push_unique(documents: &mut Vec<DocumentId>, document: DocumentId) {
    if !documents.contains(&document) {
        documents.push(document);
    }
}
