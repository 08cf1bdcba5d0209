use crate::profile::derive_destination;
use crate::rules::{
    CountryCode, Duration, FamilySelection, FamilyStatus, RulesInput, WorkSituation,
};

pub(super) fn input(
    residence: CountryCode,
    situation: WorkSituation,
    duration: Duration,
    family: &[FamilyStatus],
) -> RulesInput {
    RulesInput {
        residence_country: residence,
        work_situation: situation,
        duration,
        family_status: FamilySelection::from_statuses(family.iter().copied())
            .expect("non-empty family selection"),
        destination_country: derive_destination(residence, situation),
    }
}

pub(super) fn single(
    residence: CountryCode,
    situation: WorkSituation,
    duration: Duration,
) -> RulesInput {
    input(residence, situation, duration, &[FamilyStatus::Single])
}

/// Every distinct normalized selection reachable from a non-empty subset of statuses.
pub(super) fn family_selections() -> Vec<FamilySelection> {
    let statuses = FamilyStatus::ALL;
    let mut selections: Vec<FamilySelection> = Vec::new();

    for mask in 1u32..(1 << statuses.len()) {
        let subset = statuses
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, status)| *status);
        let selection = FamilySelection::from_statuses(subset).expect("non-empty subset");
        if !selections.contains(&selection) {
            selections.push(selection);
        }
    }
    selections
}

/// The full cartesian product of answers.
pub(super) fn all_inputs() -> Vec<RulesInput> {
    let families = family_selections();
    let mut inputs = Vec::new();

    for residence in CountryCode::ALL {
        for situation in WorkSituation::ALL {
            for duration in Duration::ALL {
                for family in &families {
                    inputs.push(RulesInput {
                        residence_country: residence,
                        work_situation: situation,
                        duration,
                        family_status: family.clone(),
                        destination_country: derive_destination(residence, situation),
                    });
                }
            }
        }
    }
    inputs
}
