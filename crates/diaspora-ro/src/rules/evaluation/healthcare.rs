use serde::{Deserialize, Serialize};

use super::super::domain::{CountryCode, WorkSituation};
use super::super::warnings::Warning;
use super::RulesInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthcareRules {
    pub primary_country: CountryCode,
    pub has_ehic: bool,
    pub can_use_in_romania: bool,
    pub needs_s1: bool,
    pub family_covered: bool,
    pub warnings: Vec<Warning>,
}

pub fn evaluate_healthcare(input: &RulesInput) -> HealthcareRules {
    let residence = input.residence_country;
    let family = &input.family_status;
    let has_family = family.has_family_with();
    let family_in_romania = family.has_family_in_romania();

    let mut warnings = Vec::new();
    let mut needs_s1 = false;

    let primary_country = match input.work_situation {
        WorkSituation::LocalEmployee if residence != CountryCode::Ro => {
            warnings.push(Warning::EhicEmergencyOnlyInRomania);
            warnings.push(Warning::PlannedTreatmentNeedsAuthorization);
            if has_family {
                warnings.push(Warning::FamilyCoveredAsDependants);
            }
            if family_in_romania {
                warnings.push(Warning::FamilyInRomaniaEligibility);
            }
            residence
        }
        WorkSituation::LocalEmployee => CountryCode::Ro,
        WorkSituation::PostedWorker => {
            warnings.push(Warning::EhicInHostCountry);
            warnings.push(Warning::EhicExclusions);
            warnings.push(Warning::RoutineCareAccess);
            if has_family {
                warnings.push(Warning::FamilyNeedsOwnEhic);
            }
            if family_in_romania {
                warnings.push(Warning::FamilyInRomaniaStaysInsured);
            }
            CountryCode::Ro
        }
        WorkSituation::RemoteWorker => {
            warnings.push(Warning::VerifyInsuringCountry);
            if has_family {
                warnings.push(Warning::RegisterFamilyInResidence);
            }
            residence
        }
        WorkSituation::Returning => {
            warnings.push(Warning::RegisterWithCnas);
            warnings.push(Warning::HealthcareTransitionWindow);
            if has_family {
                // Family insured abroad carries its entitlement home on an S1.
                needs_s1 = true;
                warnings.push(Warning::RegisterFamilyWithCnas);
                warnings.push(Warning::FamilyS1Registration);
            }
            CountryCode::Ro
        }
    };

    if !primary_country.is_eu() {
        warnings.push(Warning::PostBrexitRules);
    }

    HealthcareRules {
        primary_country,
        has_ehic: true,
        can_use_in_romania: true,
        needs_s1,
        family_covered: has_family,
        warnings,
    }
}
