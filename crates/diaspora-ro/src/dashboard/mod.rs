//! Presentation cards derived from a computed profile.

pub mod views;

pub use views::{CardContext, CardStatus, DashboardCard, TopicId};

use crate::profile::Profile;
use crate::rules::warnings::Warning;
use crate::rules::{CountryCode, CoverageStatus};

const MAX_DETAILS: usize = 3;

/// Four topic cards (social security, healthcare, taxes, pension) for the dashboard.
pub fn dashboard_cards(profile: &Profile) -> Vec<DashboardCard> {
    let rules = &profile.applicable_rules;
    let destination = profile.destination_country;

    let social = &rules.social_security;
    let social_status = match social.status {
        CoverageStatus::FullCoverage => CardStatus::Ok,
        CoverageStatus::NeedsVerification => CardStatus::Warning,
        _ => CardStatus::ActionNeeded,
    };
    let social_card = card(
        profile,
        TopicId::SocialSecurity,
        format!("Plătești în {}", country_label(social.pay_in, destination)),
        social_status,
        vec![
            check(social.covers_pension, "Pensie"),
            check(social.covers_unemployment, "Șomaj"),
            check(social.covers_healthcare, "Contribuții medicale"),
        ],
    );

    let health = &rules.healthcare;
    let health_card = card(
        profile,
        TopicId::Healthcare,
        format!(
            "Asigurat în {}",
            country_label(health.primary_country, destination)
        ),
        CardStatus::Ok,
        vec![
            if health.has_ehic {
                "✓ Card EHIC pentru urgențe".to_string()
            } else {
                "✗ Fără card EHIC".to_string()
            },
            if health.can_use_in_romania {
                "✓ Acces în RO pentru vizite temporare (cu EHIC)".to_string()
            } else {
                "✗ Acces limitat în RO".to_string()
            },
            if health.family_covered {
                "✓ Familia este acoperită".to_string()
            } else {
                "Familie: verifică eligibilitatea".to_string()
            },
        ],
    );

    let taxes = &rules.taxes;
    let tax_card = card(
        profile,
        TopicId::Taxes,
        format!(
            "Rezident fiscal în {}",
            country_label(taxes.resident_country, destination)
        ),
        if taxes.has_dual_obligations {
            CardStatus::Warning
        } else {
            CardStatus::Ok
        },
        leading_warnings(&taxes.warnings)
            .unwrap_or_else(|| vec!["Fără obligații suplimentare".to_string()]),
    );

    let pension = &rules.pension;
    let pension_card = card(
        profile,
        TopicId::Pension,
        if pension.will_cumulate {
            "Perioadele de muncă se cumulează".to_string()
        } else {
            "Verifică situația".to_string()
        },
        CardStatus::Ok,
        leading_warnings(&pension.warnings).unwrap_or_else(|| {
            vec![
                "Perioadele lucrate din toate țările UE contează pentru stagiu".to_string(),
                "Vei primi pensie proporțională din fiecare țară".to_string(),
            ]
        }),
    );

    vec![social_card, health_card, tax_card, pension_card]
}

fn card(
    profile: &Profile,
    topic: TopicId,
    summary: String,
    status: CardStatus,
    mut details: Vec<String>,
) -> DashboardCard {
    details.truncate(MAX_DETAILS);

    DashboardCard {
        topic,
        title: topic.title().to_string(),
        summary,
        status,
        country_flag: profile.destination_country.flag().to_string(),
        details,
        link: format!(
            "/topic/{}-{}-{}",
            topic.slug(),
            profile.destination_country.as_str().to_ascii_lowercase(),
            profile.work_situation.as_str().replace('_', "-")
        ),
        user_context: CardContext {
            work_situation: profile.work_situation.label().to_string(),
            duration: profile.duration.label().to_string(),
        },
    }
}

/// Romania is always named; any other country is shown as the destination.
fn country_label(country: CountryCode, destination: CountryCode) -> &'static str {
    if country == CountryCode::Ro {
        CountryCode::Ro.name()
    } else {
        destination.name()
    }
}

fn check(covered: bool, label: &str) -> String {
    if covered {
        format!("✓ {label}")
    } else {
        format!("✗ {label}")
    }
}

fn leading_warnings(warnings: &[Warning]) -> Option<Vec<String>> {
    if warnings.is_empty() {
        return None;
    }
    Some(warnings.iter().take(2).map(Warning::message).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::create_profile;
    use crate::rules::{Duration, FamilySelection, FamilyStatus, QuizAnswers, WorkSituation};

    fn profile(
        residence: CountryCode,
        situation: WorkSituation,
        duration: Duration,
        family: &[FamilyStatus],
    ) -> Profile {
        create_profile(QuizAnswers {
            residence_country: Some(residence),
            work_situation: Some(situation),
            duration: Some(duration),
            family_status: Some(
                FamilySelection::from_statuses(family.iter().copied()).expect("non-empty"),
            ),
        })
        .expect("complete answers")
    }

    fn card_for(cards: &[DashboardCard], topic: TopicId) -> &DashboardCard {
        cards
            .iter()
            .find(|card| card.topic == topic)
            .expect("card present")
    }

    #[test]
    fn produces_four_cards_in_topic_order() {
        let cards = dashboard_cards(&profile(
            CountryCode::De,
            WorkSituation::LocalEmployee,
            Duration::OverTwoYears,
            &[FamilyStatus::Single],
        ));

        let topics: Vec<_> = cards.iter().map(|card| card.topic).collect();
        assert_eq!(
            topics,
            vec![
                TopicId::SocialSecurity,
                TopicId::Healthcare,
                TopicId::Taxes,
                TopicId::Pension
            ]
        );
        assert!(cards.iter().all(|card| card.details.len() <= MAX_DETAILS));
        assert!(cards.iter().all(|card| card.country_flag == "🇩🇪"));
    }

    #[test]
    fn local_employee_is_fully_covered() {
        let cards = dashboard_cards(&profile(
            CountryCode::De,
            WorkSituation::LocalEmployee,
            Duration::OverTwoYears,
            &[FamilyStatus::Single],
        ));

        let social = card_for(&cards, TopicId::SocialSecurity);
        assert_eq!(social.status, CardStatus::Ok);
        assert_eq!(social.summary, "Plătești în Germania");
        assert_eq!(social.link, "/topic/social-security-de-local-employee");
        assert_eq!(
            social.details,
            vec!["✓ Pensie", "✓ Șomaj", "✓ Contribuții medicale"]
        );
        assert_eq!(card_for(&cards, TopicId::Taxes).status, CardStatus::Ok);
    }

    #[test]
    fn remote_worker_cards_warn() {
        let cards = dashboard_cards(&profile(
            CountryCode::Es,
            WorkSituation::RemoteWorker,
            Duration::SixMonthsToOneYear,
            &[FamilyStatus::SpouseWith],
        ));

        assert_eq!(
            card_for(&cards, TopicId::SocialSecurity).status,
            CardStatus::Warning
        );
        let taxes = card_for(&cards, TopicId::Taxes);
        assert_eq!(taxes.status, CardStatus::Warning);
        assert_eq!(taxes.details.len(), 2);
        assert_eq!(taxes.summary, "Rezident fiscal în Spania");
        assert_eq!(
            card_for(&cards, TopicId::Healthcare).details[2],
            "✓ Familia este acoperită"
        );
    }

    #[test]
    fn posted_and_returning_need_action() {
        let posted = dashboard_cards(&profile(
            CountryCode::It,
            WorkSituation::PostedWorker,
            Duration::Under3Months,
            &[FamilyStatus::Single],
        ));
        let social = card_for(&posted, TopicId::SocialSecurity);
        assert_eq!(social.status, CardStatus::ActionNeeded);
        assert_eq!(social.summary, "Plătești în România");
        assert_eq!(
            card_for(&posted, TopicId::Taxes).details,
            vec!["Fără obligații suplimentare"]
        );

        let returning = dashboard_cards(&profile(
            CountryCode::Fr,
            WorkSituation::Returning,
            Duration::OverTwoYears,
            &[FamilyStatus::Other],
        ));
        let social = card_for(&returning, TopicId::SocialSecurity);
        assert_eq!(social.status, CardStatus::ActionNeeded);
        assert_eq!(social.country_flag, "🇷🇴");
        assert_eq!(social.link, "/topic/social-security-ro-returning");
    }

    #[test]
    fn pension_card_summarises_cumulation() {
        let cards = dashboard_cards(&profile(
            CountryCode::Uk,
            WorkSituation::PostedWorker,
            Duration::OneToTwoYears,
            &[FamilyStatus::FamilyInRomania],
        ));
        let pension = card_for(&cards, TopicId::Pension);
        assert_eq!(pension.status, CardStatus::Ok);
        assert_eq!(pension.summary, "Perioadele de muncă se cumulează");
        assert_eq!(
            pension.details[0],
            "Contribui în continuare la pensia românească"
        );
        assert_eq!(pension.user_context.duration, "1 - 2 ani");
    }
}
