use serde::{Deserialize, Serialize};

use super::super::domain::{
    ActionableStep, CountryCode, Duration, StepKind, StepPriority, WorkSituation,
};
use super::super::tables::{self, FilingDeadline};
use super::super::warnings::Warning;
use super::RulesInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRules {
    pub resident_country: CountryCode,
    pub has_dual_obligations: bool,
    pub must_file_in: Vec<CountryCode>,
    pub warnings: Vec<Warning>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deadlines: Vec<TaxDeadline>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<ActionableStep>,
}

/// Annual filing obligation in one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDeadline {
    pub country: CountryCode,
    pub description: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_name: Option<String>,
}

impl TaxDeadline {
    fn from_filing(country: CountryCode, description: &str, filing: FilingDeadline) -> Self {
        Self {
            country,
            description: description.to_string(),
            date: filing.date.to_string(),
            form_name: Some(filing.form.to_string()),
        }
    }
}

impl TaxRules {
    fn single_jurisdiction(country: CountryCode, warnings: Vec<Warning>) -> Self {
        Self {
            resident_country: country,
            has_dual_obligations: false,
            must_file_in: vec![country],
            warnings,
            deadlines: Vec::new(),
            next_steps: Vec::new(),
        }
    }
}

pub fn evaluate_taxes(input: &RulesInput) -> TaxRules {
    let residence = input.residence_country;

    match input.work_situation {
        WorkSituation::LocalEmployee if residence != CountryCode::Ro => {
            TaxRules::single_jurisdiction(residence, vec![Warning::DeclareRomanianIncome])
        }
        WorkSituation::LocalEmployee => TaxRules::single_jurisdiction(residence, Vec::new()),
        WorkSituation::PostedWorker => posted_worker(input),
        WorkSituation::RemoteWorker => TaxRules {
            resident_country: residence,
            has_dual_obligations: true,
            must_file_in: jurisdictions(CountryCode::Ro, residence),
            warnings: vec![
                Warning::RemoteWorkDualTax,
                Warning::TaxRegistration { country: residence },
                Warning::ConsultCrossBorderTaxSpecialist,
            ],
            deadlines: Vec::new(),
            next_steps: Vec::new(),
        },
        WorkSituation::Returning => TaxRules::single_jurisdiction(
            CountryCode::Ro,
            vec![Warning::FileFinalReturnAbroad, Warning::ReturnYearDualFiling],
        ),
    }
}

fn posted_worker(input: &RulesInput) -> TaxRules {
    let long_posting = input.duration.is_long_posting();
    let host = input.destination_country;

    let mut deadlines = vec![TaxDeadline::from_filing(
        CountryCode::Ro,
        "Declarația unică pentru venituri din România",
        tables::ROMANIAN_FILING,
    )];

    if input.duration == Duration::OverTwoYears && host != CountryCode::Ro {
        if let Some(filing) = tables::host_filing_deadline(host) {
            deadlines.push(TaxDeadline::from_filing(
                host,
                "Declarație fiscală în țara gazdă",
                filing,
            ));
        }
    }

    let mut next_steps = vec![
        ActionableStep::new(StepKind::FileRoTaxReturn, StepPriority::High)
            .with_deadline(tables::ROMANIAN_FILING.date),
    ];
    let mut warnings = Vec::new();

    if long_posting {
        warnings.push(Warning::LongPostingDualTax);
        next_steps.push(ActionableStep::new(
            StepKind::VerifyTaxResidence,
            StepPriority::High,
        ));
        next_steps.push(ActionableStep::new(
            StepKind::FileHostTaxReturn,
            StepPriority::Medium,
        ));
    }

    TaxRules {
        resident_country: CountryCode::Ro,
        has_dual_obligations: long_posting,
        must_file_in: if long_posting {
            jurisdictions(CountryCode::Ro, input.residence_country)
        } else {
            vec![CountryCode::Ro]
        },
        warnings,
        deadlines,
        next_steps,
    }
}

fn jurisdictions(first: CountryCode, second: CountryCode) -> Vec<CountryCode> {
    if first == second {
        vec![first]
    } else {
        vec![first, second]
    }
}
