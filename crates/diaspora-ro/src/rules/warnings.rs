//! Structured warnings emitted by the evaluators.
//!
//! The engine only ever produces codes and parameters; `Warning::message` renders the
//! Romanian text shown to users.

use serde::{Deserialize, Serialize};

use super::domain::CountryCode;
use super::tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Warning {
    // social security
    PostingBeyondLimit,
    A1ExpiresAtLimit,
    PostingApproachingLimit,
    QuarterOfWorkingTimeRule,
    SocialSecurityAuthority { country: CountryCode },
    RequestA1ForClarification,
    ObtainU1BeforeDeparture,

    // healthcare
    EhicEmergencyOnlyInRomania,
    PlannedTreatmentNeedsAuthorization,
    FamilyCoveredAsDependants,
    FamilyInRomaniaEligibility,
    EhicInHostCountry,
    EhicExclusions,
    RoutineCareAccess,
    FamilyNeedsOwnEhic,
    FamilyInRomaniaStaysInsured,
    VerifyInsuringCountry,
    RegisterFamilyInResidence,
    RegisterWithCnas,
    HealthcareTransitionWindow,
    RegisterFamilyWithCnas,
    FamilyS1Registration,
    PostBrexitRules,

    // tax
    DeclareRomanianIncome,
    LongPostingDualTax,
    RemoteWorkDualTax,
    TaxRegistration { country: CountryCode },
    ConsultCrossBorderTaxSpecialist,
    FileFinalReturnAbroad,
    ReturnYearDualFiling,

    // pension
    PeriodsCumulateWith { country: CountryCode },
    PensionVesting { country: CountryCode },
    ApplySeparatelyInEachCountry,
    ProportionalPension,
    ContinueRomanianContributions,
    PostingCountsTowardsRomanianRecord,
    VerifyPensionContributions,
    PeriodsCumulateAnywhere,
    ConfirmForeignPeriods,
    RequestU1P1Consolidation,
    ForeignPeriodsCumulate,
}

impl Warning {
    pub fn message(&self) -> String {
        match *self {
            Warning::PostingBeyondLimit => {
                "Detașarea peste 24 luni necesită tranziție la sistemul local".to_string()
            }
            Warning::A1ExpiresAtLimit => "Formularul A1 expiră după 24 luni".to_string(),
            Warning::PostingApproachingLimit => {
                "Dacă detașarea depășește 24 luni, vei trece la sistemul local".to_string()
            }
            Warning::QuarterOfWorkingTimeRule => "Regula 25%: dacă lucrezi >25% din timp în țara de reședință, de obicei plătești contribuții acolo".to_string(),
            Warning::SocialSecurityAuthority { country } => {
                tables::social_security_guidance(country).to_string()
            }
            Warning::RequestA1ForClarification => {
                "Solicită formularul A1 pentru a clarifica unde plătești contribuții".to_string()
            }
            Warning::ObtainU1BeforeDeparture => {
                "Obține formularul U1 înainte de plecare pentru transfer șomaj".to_string()
            }
            Warning::EhicEmergencyOnlyInRomania => "Cardul EHIC acoperă doar urgențe medicale și tratamente necesare în vizite temporare în România".to_string(),
            Warning::PlannedTreatmentNeedsAuthorization => {
                "Pentru tratamente planificate în România, solicită autorizare prealabilă".to_string()
            }
            Warning::FamilyCoveredAsDependants => "Familia ta (soț/soție și copii) ar trebui să fie acoperită ca dependenți în sistemul local".to_string(),
            Warning::FamilyInRomaniaEligibility => "Familie rămasă în România: verifică eligibilitatea lor pentru asigurare medicală în România".to_string(),
            Warning::EhicInHostCountry => "Folosește cardul EHIC pentru urgențe și tratamente necesare în țara de detașare".to_string(),
            Warning::EhicExclusions => "Cardul EHIC NU acoperă: tratamente planificate, repatriere medicală, servicii private".to_string(),
            Warning::RoutineCareAccess => "Pentru consultații de rutină, verifică dacă poți accesa sistemul local cu EHIC".to_string(),
            Warning::FamilyNeedsOwnEhic => {
                "Familie cu tine: solicită și pentru ei carduri EHIC din România".to_string()
            }
            Warning::FamilyInRomaniaStaysInsured => {
                "Familie rămasă în România: ei rămân asigurați în sistemul românesc (CNAS)".to_string()
            }
            Warning::VerifyInsuringCountry => {
                "Verifică unde ești asigurat pentru a ști ce card să folosești".to_string()
            }
            Warning::RegisterFamilyInResidence => "Asigură-te că familia ta este înregistrată corect în sistemul de asigurări din țara de reședință".to_string(),
            Warning::RegisterWithCnas => "Înregistrează-te la CNAS după întoarcere".to_string(),
            Warning::HealthcareTransitionWindow => "Perioada de tranziție: max 3 luni".to_string(),
            Warning::RegisterFamilyWithCnas => {
                "Înregistrează și familia ta la CNAS pentru asigurare medicală în România".to_string()
            }
            Warning::FamilyS1Registration => "Pentru familia care a fost asigurată în străinătate, solicită formularul S1 pentru înscrierea în sistemul românesc".to_string(),
            Warning::PostBrexitRules => {
                "Marea Britanie: reguli diferite din 2021 (după Brexit), verifică acordul UE-UK".to_string()
            }
            Warning::DeclareRomanianIncome => {
                "Dacă ai venituri din România (chirii, dividende), declară-le".to_string()
            }
            Warning::LongPostingDualTax => {
                "Detașare lungă poate crea obligații fiscale duale".to_string()
            }
            Warning::RemoteWorkDualTax => {
                "Munca remote creează aproape întotdeauna obligații fiscale duale".to_string()
            }
            Warning::TaxRegistration { country } => {
                tables::tax_registration_guidance(country).to_string()
            }
            Warning::ConsultCrossBorderTaxSpecialist => "Consultă un specialist în fiscalitate internațională pentru tratatul de evitare a dublei impuneri".to_string(),
            Warning::FileFinalReturnAbroad => {
                "Depune declarație finală în țara de unde pleci".to_string()
            }
            Warning::ReturnYearDualFiling => {
                "Anul întoarcerii: poate fi necesar să declari în ambele țări".to_string()
            }
            Warning::PeriodsCumulateWith { country } => format!(
                "Perioadele lucrate în {} și România se cumulează pentru stagiu",
                country.name()
            ),
            Warning::PensionVesting { country } => format!(
                "{}: {}",
                country.name(),
                tables::pension_vesting(country).note
            ),
            Warning::ApplySeparatelyInEachCountry => {
                "La pensionare, trebuie să aplici separat în fiecare țară unde ai lucrat".to_string()
            }
            Warning::ProportionalPension => "Vei primi pensie proporțională din fiecare țară, bazată pe anii lucrați acolo".to_string(),
            Warning::ContinueRomanianContributions => {
                "Contribui în continuare la pensia românească".to_string()
            }
            Warning::PostingCountsTowardsRomanianRecord => {
                "Perioada de detașare contează pentru stagiu în România".to_string()
            }
            Warning::VerifyPensionContributions => {
                "Verifică unde contribui efectiv la pensie".to_string()
            }
            Warning::PeriodsCumulateAnywhere => {
                "Perioadele lucrate se cumulează indiferent de țară".to_string()
            }
            Warning::ConfirmForeignPeriods => "Obține confirmarea perioadelor lucrate în străinătate de la autoritatea de pensii".to_string(),
            Warning::RequestU1P1Consolidation => {
                "Cere formularul U1/P1 pentru consolidarea perioadelor de muncă".to_string()
            }
            Warning::ForeignPeriodsCumulate => "Perioadele din străinătate se cumulează cu cele din România pentru eligibilitate".to_string(),
        }
    }
}

/// Render a list of warnings in order.
pub fn render(warnings: &[Warning]) -> Vec<String> {
    warnings.iter().map(Warning::message).collect()
}
