//! Static reference data consulted by the evaluators.

use chrono::NaiveDate;

use super::domain::CountryCode;

pub const RULES_VERSION: &str = "1.0.0";

pub fn rules_last_updated() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 30).unwrap_or_default()
}

/// Minimum contribution periods for a pension in a given country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PensionVesting {
    pub minimum_years: u8,
    pub full_pension_years: u8,
    pub note: &'static str,
}

pub const fn pension_vesting(country: CountryCode) -> PensionVesting {
    match country {
        CountryCode::Ro => PensionVesting {
            minimum_years: 15,
            full_pension_years: 35,
            note: "Minim 15 ani stagiu pentru pensie, 35 ani pentru pensie completă",
        },
        CountryCode::De => PensionVesting {
            minimum_years: 5,
            full_pension_years: 45,
            note: "Minim 5 ani pentru pensie de bază, 45 ani pentru pensie completă fără penalizare",
        },
        CountryCode::Es => PensionVesting {
            minimum_years: 15,
            full_pension_years: 37,
            note: "Minim 15 ani cotizare (2 ani în ultimii 15), 37 ani pentru 100% pensie",
        },
        CountryCode::It => PensionVesting {
            minimum_years: 20,
            full_pension_years: 42,
            note: "Minim 20 ani contributii, 42 ani pentru pensie anticipată",
        },
        CountryCode::Fr => PensionVesting {
            minimum_years: 10,
            full_pension_years: 43,
            note: "Minim 10 trimestre pentru pensie, 172 trimestre (43 ani) pentru pensie completă",
        },
        CountryCode::Uk => PensionVesting {
            minimum_years: 10,
            full_pension_years: 35,
            note: "Minim 10 ani NI pentru pensie de stat, 35 ani pentru pensie completă",
        },
    }
}

/// Who to contact about the applicable social-security legislation.
pub const fn social_security_guidance(country: CountryCode) -> &'static str {
    match country {
        CountryCode::Ro => "Contactează CNPP (Casa Națională de Pensii) pentru determinarea legislației aplicabile",
        CountryCode::De => "Contactează Deutsche Rentenversicherung pentru A1/aplicabilitate",
        CountryCode::Es => "Contactează Seguridad Social pentru determinarea cotizațiilor",
        CountryCode::It => "Contactează INPS (Istituto Nazionale della Previdenza Sociale)",
        CountryCode::Fr => "Contactează CLEISS pentru legislația de securitate socială aplicabilă",
        CountryCode::Uk => "Contactează HMRC National Insurance pentru determinarea contribuțiilor",
    }
}

/// Where a remote worker registers for tax in their country of residence.
pub const fn tax_registration_guidance(country: CountryCode) -> &'static str {
    match country {
        CountryCode::Ro => "Înregistrează-te la ANAF cu Declarația unică (formular 212)",
        CountryCode::De => "Înregistrează-te la Finanzamt (oficiul fiscal local) în Germania",
        CountryCode::Es => "Obține NIE și înregistrează-te la Agencia Tributaria",
        CountryCode::It => "Obține Codice Fiscale și înregistrează-te la Agenzia delle Entrate",
        CountryCode::Fr => "Înregistrează-te la Service des Impôts des Particuliers",
        CountryCode::Uk => "Înregistrează-te pentru Self Assessment la HMRC",
    }
}

/// Annual filing date and form for a tax jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilingDeadline {
    pub date: &'static str,
    pub form: &'static str,
}

pub const ROMANIAN_FILING: FilingDeadline = FilingDeadline {
    date: "25 mai",
    form: "Declarația unică (formular 212)",
};

/// Host-country filing deadlines; Romania is never a host country.
pub const fn host_filing_deadline(country: CountryCode) -> Option<FilingDeadline> {
    match country {
        CountryCode::Ro => None,
        CountryCode::De => Some(FilingDeadline {
            date: "31 iulie",
            form: "Einkommensteuererklärung",
        }),
        CountryCode::Es => Some(FilingDeadline {
            date: "30 iunie",
            form: "Declaración de la Renta",
        }),
        CountryCode::It => Some(FilingDeadline {
            date: "30 noiembrie",
            form: "Dichiarazione dei Redditi",
        }),
        CountryCode::Fr => Some(FilingDeadline {
            date: "mai-iunie (variabil)",
            form: "Déclaration de revenus",
        }),
        CountryCode::Uk => Some(FilingDeadline {
            date: "31 ianuarie",
            form: "Self Assessment",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_foreign_country_has_a_host_deadline() {
        for country in CountryCode::ALL {
            assert_eq!(
                host_filing_deadline(country).is_some(),
                country != CountryCode::Ro,
                "{country}"
            );
        }
    }

    #[test]
    fn vesting_thresholds_are_ordered() {
        for country in CountryCode::ALL {
            let vesting = pension_vesting(country);
            assert!(vesting.minimum_years < vesting.full_pension_years);
        }
    }
}
