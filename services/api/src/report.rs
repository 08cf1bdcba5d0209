use clap::Args;
use diaspora_ro::dashboard::dashboard_cards;
use diaspora_ro::error::AppError;
use diaspora_ro::profile::{create_profile, Profile};
use diaspora_ro::rules::warnings::render;
use diaspora_ro::rules::{
    CountryCode, DocumentId, Duration, FamilySelection, FamilyStatus, QuizAnswers,
    WorkSituation,
};
use std::fmt;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Country of residence (RO, DE, ES, IT, FR, UK)
    #[arg(long, value_parser = crate::infra::parse_country)]
    pub(crate) residence: CountryCode,
    /// Work situation (local_employee, posted_worker, remote_worker, returning)
    #[arg(long, value_parser = crate::infra::parse_situation)]
    pub(crate) situation: WorkSituation,
    /// Time abroad (under_3m, 3m_to_6m, 6m_to_1y, 1y_to_2y, over_2y, not_yet)
    #[arg(long, value_parser = crate::infra::parse_duration)]
    pub(crate) duration: Duration,
    /// Family status, repeatable (spouse_with, children_with, family_in_romania, single, other)
    #[arg(long, required = true, value_parser = crate::infra::parse_family)]
    pub(crate) family: Vec<FamilyStatus>,
    /// Print the computed profile as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        residence,
        situation,
        duration,
        family,
        json,
    } = args;

    let profile = create_profile(QuizAnswers {
        residence_country: Some(residence),
        work_situation: Some(situation),
        duration: Some(duration),
        family_status: Some(FamilySelection::from_statuses(family)?),
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", ProfileReport(&profile));
    }
    Ok(())
}

/// Plain-text rendering of a computed profile.
pub(crate) struct ProfileReport<'a>(pub(crate) &'a Profile);

impl fmt::Display for ProfileReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.0;
        let rules = &profile.applicable_rules;

        writeln!(
            f,
            "Reguli aplicabile: {} {} | {} | {}",
            profile.destination_country.flag(),
            profile.destination_country.name(),
            profile.work_situation.label(),
            profile.duration.label()
        )?;
        writeln!(
            f,
            "Versiune reguli {} (actualizat {})",
            profile.rules_version, profile.rules_last_updated
        )?;

        for card in dashboard_cards(profile) {
            writeln!(f, "\n{} [{}]", card.title, card.status.label())?;
            writeln!(f, "  {}", card.summary)?;
            for detail in &card.details {
                writeln!(f, "  - {detail}")?;
            }
        }

        let warnings = [
            ("Asigurări sociale", &rules.social_security.warnings),
            ("Sănătate", &rules.healthcare.warnings),
            ("Taxe", &rules.taxes.warnings),
            ("Pensie", &rules.pension.warnings),
        ];
        writeln!(f, "\nAtenționări")?;
        for (topic, list) in warnings {
            for message in render(list) {
                writeln!(f, "- {topic}: {message}")?;
            }
        }

        if !rules.taxes.deadlines.is_empty() {
            writeln!(f, "\nTermene fiscale")?;
            for deadline in &rules.taxes.deadlines {
                write!(f, "- {}: {}", deadline.country, deadline.date)?;
                if let Some(form) = &deadline.form_name {
                    write!(f, " ({form})")?;
                }
                writeln!(f, " | {}", deadline.description)?;
            }
        }

        write_documents(f, "Documente necesare", &rules.required_documents)?;
        write_documents(f, "Documente recomandate", &rules.recommended_documents)?;

        if rules.consolidated_next_steps.is_empty() {
            return writeln!(f, "\nPași următori: niciunul");
        }

        writeln!(f, "\nPași următori")?;
        for step in &rules.consolidated_next_steps {
            write!(f, "- [{}] {}", step.priority.label(), step.title)?;
            if let Some(deadline) = &step.deadline {
                write!(f, ", termen {deadline}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_documents(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    documents: &[DocumentId],
) -> fmt::Result {
    if documents.is_empty() {
        return writeln!(f, "\n{heading}: niciunul");
    }

    writeln!(f, "\n{heading}")?;
    for document in documents {
        writeln!(f, "- {}: {}", document.title(), document.explanation())?;
    }
    Ok(())
}
