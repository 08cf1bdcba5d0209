use serde::{Deserialize, Serialize};

use super::super::domain::{CountryCode, WorkSituation};
use super::super::warnings::Warning;
use super::RulesInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionRules {
    pub contributing_to: CountryCode,
    pub will_cumulate: bool,
    pub years_count: bool,
    pub warnings: Vec<Warning>,
}

pub fn evaluate_pension(input: &RulesInput) -> PensionRules {
    let residence = input.residence_country;

    let (contributing_to, warnings) = match input.work_situation {
        WorkSituation::LocalEmployee if residence != CountryCode::Ro => (
            residence,
            vec![
                Warning::PeriodsCumulateWith { country: residence },
                Warning::PensionVesting { country: residence },
                Warning::ApplySeparatelyInEachCountry,
                Warning::ProportionalPension,
            ],
        ),
        WorkSituation::LocalEmployee => (
            CountryCode::Ro,
            vec![Warning::PensionVesting {
                country: CountryCode::Ro,
            }],
        ),
        WorkSituation::PostedWorker => (
            CountryCode::Ro,
            vec![
                Warning::ContinueRomanianContributions,
                Warning::PostingCountsTowardsRomanianRecord,
                Warning::PensionVesting {
                    country: CountryCode::Ro,
                },
            ],
        ),
        WorkSituation::RemoteWorker => (
            residence,
            vec![
                Warning::VerifyPensionContributions,
                Warning::PeriodsCumulateAnywhere,
                Warning::ApplySeparatelyInEachCountry,
            ],
        ),
        WorkSituation::Returning => (
            CountryCode::Ro,
            vec![
                Warning::ConfirmForeignPeriods,
                Warning::RequestU1P1Consolidation,
                Warning::PensionVesting {
                    country: CountryCode::Ro,
                },
                Warning::ForeignPeriodsCumulate,
            ],
        ),
    };

    // EU coordination always aggregates insurance periods.
    PensionRules {
        contributing_to,
        will_cumulate: true,
        years_count: true,
        warnings,
    }
}
