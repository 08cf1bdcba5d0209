use super::common::{all_inputs, single};
use crate::rules::{
    evaluate_social_security, CountryCode, CoverageStatus, DocumentId, Duration, StepKind,
    StepPriority, Warning, WorkSituation,
};

fn a1_priority(duration: Duration) -> StepPriority {
    let rules = evaluate_social_security(&single(
        CountryCode::De,
        WorkSituation::PostedWorker,
        duration,
    ));
    rules
        .next_steps
        .iter()
        .find(|step| step.id == StepKind::ObtainA1Form)
        .map(|step| step.priority)
        .expect("posted workers always get an A1 step")
}

#[test]
fn local_employee_is_fully_covered_where_they_live() {
    let rules = evaluate_social_security(&single(
        CountryCode::Es,
        WorkSituation::LocalEmployee,
        Duration::OverTwoYears,
    ));

    assert_eq!(rules.pay_in, CountryCode::Es);
    assert_eq!(rules.status, CoverageStatus::FullCoverage);
    assert!(rules.required_forms.is_empty());
    assert!(rules.next_steps.is_empty());
    assert!(rules.covers_pension && rules.covers_unemployment);
    assert!(rules.covers_healthcare && rules.covers_accidents);
}

#[test]
fn short_postings_need_the_a1_urgently() {
    assert_eq!(a1_priority(Duration::Under3Months), StepPriority::Urgent);
    assert_eq!(a1_priority(Duration::ThreeToSixMonths), StepPriority::Urgent);
}

#[test]
fn other_postings_rank_the_a1_high() {
    assert_eq!(a1_priority(Duration::SixMonthsToOneYear), StepPriority::High);
    assert_eq!(a1_priority(Duration::OneToTwoYears), StepPriority::High);
    assert_eq!(a1_priority(Duration::NotYet), StepPriority::High);
}

#[test]
fn posting_beyond_limit_requires_transition() {
    let rules = evaluate_social_security(&single(
        CountryCode::Fr,
        WorkSituation::PostedWorker,
        Duration::OverTwoYears,
    ));

    assert_eq!(rules.pay_in, CountryCode::Ro);
    assert_eq!(rules.status, CoverageStatus::Transitioning);
    assert_eq!(rules.warnings[0], Warning::PostingBeyondLimit);
    assert_eq!(a1_priority(Duration::OverTwoYears), StepPriority::Medium);

    let transition = rules
        .next_steps
        .iter()
        .find(|step| step.id == StepKind::TransitionToLocalSystem)
        .expect("transition step present");
    assert_eq!(transition.priority, StepPriority::Urgent);
}

#[test]
fn posting_near_limit_is_monitored() {
    let rules = evaluate_social_security(&single(
        CountryCode::It,
        WorkSituation::PostedWorker,
        Duration::OneToTwoYears,
    ));

    assert_eq!(rules.status, CoverageStatus::PostedCoverage);
    assert_eq!(rules.warnings, vec![Warning::PostingApproachingLimit]);
    let kinds: Vec<_> = rules.next_steps.iter().map(|step| step.id).collect();
    assert_eq!(
        kinds,
        vec![StepKind::MonitorPostingDuration, StepKind::ObtainA1Form]
    );
    assert_eq!(rules.next_steps[0].priority, StepPriority::Medium);
}

#[test]
fn posted_workers_always_pay_in_romania_with_an_a1() {
    for input in all_inputs()
        .into_iter()
        .filter(|input| input.work_situation == WorkSituation::PostedWorker)
    {
        let rules = evaluate_social_security(&input);
        assert_eq!(rules.pay_in, CountryCode::Ro);
        assert_eq!(rules.required_forms, vec![DocumentId::A1Form]);
    }
}

#[test]
fn remote_worker_needs_verification_with_country_guidance() {
    let rules = evaluate_social_security(&single(
        CountryCode::Uk,
        WorkSituation::RemoteWorker,
        Duration::SixMonthsToOneYear,
    ));

    assert_eq!(rules.pay_in, CountryCode::Uk);
    assert_eq!(rules.status, CoverageStatus::NeedsVerification);
    assert_eq!(rules.required_forms, vec![DocumentId::A1Form]);
    assert!(rules.warnings.contains(&Warning::QuarterOfWorkingTimeRule));
    assert!(rules.warnings.contains(&Warning::SocialSecurityAuthority {
        country: CountryCode::Uk
    }));
    assert!(rules.warnings.contains(&Warning::RequestA1ForClarification));
    assert!(rules.next_steps.is_empty());
}

#[test]
fn returning_worker_transitions_back_with_u1() {
    let rules = evaluate_social_security(&single(
        CountryCode::De,
        WorkSituation::Returning,
        Duration::NotYet,
    ));

    assert_eq!(rules.pay_in, CountryCode::Ro);
    assert_eq!(rules.status, CoverageStatus::Transitioning);
    assert_eq!(rules.required_forms, vec![DocumentId::U1Form]);
    assert_eq!(rules.warnings, vec![Warning::ObtainU1BeforeDeparture]);
}
