use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Countries covered by the quiz. Romania is the home system for every profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    Ro,
    De,
    Es,
    It,
    Fr,
    Uk,
}

impl CountryCode {
    pub const ALL: [CountryCode; 6] = [
        CountryCode::Ro,
        CountryCode::De,
        CountryCode::Es,
        CountryCode::It,
        CountryCode::Fr,
        CountryCode::Uk,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CountryCode::Ro => "RO",
            CountryCode::De => "DE",
            CountryCode::Es => "ES",
            CountryCode::It => "IT",
            CountryCode::Fr => "FR",
            CountryCode::Uk => "UK",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CountryCode::Ro => "România",
            CountryCode::De => "Germania",
            CountryCode::Es => "Spania",
            CountryCode::It => "Italia",
            CountryCode::Fr => "Franța",
            CountryCode::Uk => "Marea Britanie",
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            CountryCode::Ro => "🇷🇴",
            CountryCode::De => "🇩🇪",
            CountryCode::Es => "🇪🇸",
            CountryCode::It => "🇮🇹",
            CountryCode::Fr => "🇫🇷",
            CountryCode::Uk => "🇬🇧",
        }
    }

    /// The UK left the coordination regulations in 2021.
    pub const fn is_eu(self) -> bool {
        !matches!(self, CountryCode::Uk)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        CountryCode::ALL
            .into_iter()
            .find(|code| code.as_str() == normalized)
            .ok_or_else(|| UnknownValue::new("country", s))
    }
}

/// How the person is employed relative to Romania.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkSituation {
    LocalEmployee,
    PostedWorker,
    RemoteWorker,
    Returning,
}

impl WorkSituation {
    pub const ALL: [WorkSituation; 4] = [
        WorkSituation::LocalEmployee,
        WorkSituation::PostedWorker,
        WorkSituation::RemoteWorker,
        WorkSituation::Returning,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            WorkSituation::LocalEmployee => "local_employee",
            WorkSituation::PostedWorker => "posted_worker",
            WorkSituation::RemoteWorker => "remote_worker",
            WorkSituation::Returning => "returning",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WorkSituation::LocalEmployee => "Angajat cu contract local",
            WorkSituation::PostedWorker => "Detașat de firmă românească",
            WorkSituation::RemoteWorker => "Lucrez remote din străinătate",
            WorkSituation::Returning => "Mă întorc în România",
        }
    }
}

impl fmt::Display for WorkSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkSituation {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        WorkSituation::ALL
            .into_iter()
            .find(|situation| situation.as_str() == normalized)
            .ok_or_else(|| UnknownValue::new("work situation", s))
    }
}

/// Time spent (or planned) abroad. This is the only duration bucketing in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duration {
    #[serde(rename = "under_3m")]
    Under3Months,
    #[serde(rename = "3m_to_6m")]
    ThreeToSixMonths,
    #[serde(rename = "6m_to_1y")]
    SixMonthsToOneYear,
    #[serde(rename = "1y_to_2y")]
    OneToTwoYears,
    #[serde(rename = "over_2y")]
    OverTwoYears,
    #[serde(rename = "not_yet")]
    NotYet,
}

impl Duration {
    pub const ALL: [Duration; 6] = [
        Duration::Under3Months,
        Duration::ThreeToSixMonths,
        Duration::SixMonthsToOneYear,
        Duration::OneToTwoYears,
        Duration::OverTwoYears,
        Duration::NotYet,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Duration::Under3Months => "under_3m",
            Duration::ThreeToSixMonths => "3m_to_6m",
            Duration::SixMonthsToOneYear => "6m_to_1y",
            Duration::OneToTwoYears => "1y_to_2y",
            Duration::OverTwoYears => "over_2y",
            Duration::NotYet => "not_yet",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Duration::Under3Months => "Sub 3 luni",
            Duration::ThreeToSixMonths => "3 - 6 luni",
            Duration::SixMonthsToOneYear => "6 luni - 1 an",
            Duration::OneToTwoYears => "1 - 2 ani",
            Duration::OverTwoYears => "Peste 2 ani",
            Duration::NotYet => "Nu m-am mutat încă",
        }
    }

    /// Postings of a year or more can create obligations in the host country.
    pub const fn is_long_posting(self) -> bool {
        matches!(self, Duration::OneToTwoYears | Duration::OverTwoYears)
    }

    /// Stays of six months or more, the threshold for recommending a tax certificate.
    pub const fn is_extended_stay(self) -> bool {
        matches!(
            self,
            Duration::SixMonthsToOneYear | Duration::OneToTwoYears | Duration::OverTwoYears
        )
    }

    pub const fn is_short_stay(self) -> bool {
        matches!(self, Duration::Under3Months | Duration::ThreeToSixMonths)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Duration {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Duration::ALL
            .into_iter()
            .find(|duration| duration.as_str() == normalized)
            .ok_or_else(|| UnknownValue::new("duration", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyStatus {
    SpouseWith,
    ChildrenWith,
    FamilyInRomania,
    Single,
    Other,
}

impl FamilyStatus {
    pub const ALL: [FamilyStatus; 5] = [
        FamilyStatus::SpouseWith,
        FamilyStatus::ChildrenWith,
        FamilyStatus::FamilyInRomania,
        FamilyStatus::Single,
        FamilyStatus::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FamilyStatus::SpouseWith => "spouse_with",
            FamilyStatus::ChildrenWith => "children_with",
            FamilyStatus::FamilyInRomania => "family_in_romania",
            FamilyStatus::Single => "single",
            FamilyStatus::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FamilyStatus::SpouseWith => "Soț/soție (vine cu mine)",
            FamilyStatus::ChildrenWith => "Copii (vin cu mine)",
            FamilyStatus::FamilyInRomania => "Familie rămasă în România",
            FamilyStatus::Single => "Sunt singur/ă",
            FamilyStatus::Other => "Altele",
        }
    }
}

impl fmt::Display for FamilyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FamilyStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        FamilyStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| UnknownValue::new("family status", s))
    }
}

/// Non-empty family answer where `single` never coexists with another status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FamilyStatus>", into = "Vec<FamilyStatus>")]
pub struct FamilySelection(Vec<FamilyStatus>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FamilySelectionError {
    #[error("at least one family status must be selected")]
    Empty,
}

impl FamilySelection {
    pub fn single() -> Self {
        Self(vec![FamilyStatus::Single])
    }

    /// Replays the statuses as quiz selections, so the later choice wins on conflicts.
    pub fn from_statuses<I>(statuses: I) -> Result<Self, FamilySelectionError>
    where
        I: IntoIterator<Item = FamilyStatus>,
    {
        let mut selection = Self(Vec::new());
        for status in statuses {
            selection.select(status);
        }

        if selection.0.is_empty() {
            return Err(FamilySelectionError::Empty);
        }
        Ok(selection)
    }

    pub fn select(&mut self, status: FamilyStatus) {
        if status == FamilyStatus::Single {
            self.0.clear();
        } else {
            self.0.retain(|existing| *existing != FamilyStatus::Single);
        }

        if !self.0.contains(&status) {
            self.0.push(status);
        }
    }

    /// Removing the last status is refused so the selection stays non-empty.
    pub fn deselect(&mut self, status: FamilyStatus) -> bool {
        if self.0.len() == 1 && self.0[0] == status {
            return false;
        }
        let before = self.0.len();
        self.0.retain(|existing| *existing != status);
        before != self.0.len()
    }

    pub fn contains(&self, status: FamilyStatus) -> bool {
        self.0.contains(&status)
    }

    /// Spouse or children live abroad with the worker.
    pub fn has_family_with(&self) -> bool {
        self.contains(FamilyStatus::SpouseWith) || self.contains(FamilyStatus::ChildrenWith)
    }

    pub fn has_family_in_romania(&self) -> bool {
        self.contains(FamilyStatus::FamilyInRomania)
    }

    pub fn statuses(&self) -> &[FamilyStatus] {
        &self.0
    }
}

impl TryFrom<Vec<FamilyStatus>> for FamilySelection {
    type Error = FamilySelectionError;

    fn try_from(value: Vec<FamilyStatus>) -> Result<Self, Self::Error> {
        Self::from_statuses(value)
    }
}

impl From<FamilySelection> for Vec<FamilyStatus> {
    fn from(value: FamilySelection) -> Self {
        value.0
    }
}

/// Official documents the engine can require or recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentId {
    #[serde(rename = "a1-form")]
    A1Form,
    #[serde(rename = "s1-form")]
    S1Form,
    #[serde(rename = "u1-form")]
    U1Form,
    #[serde(rename = "ehic-card")]
    EhicCard,
    #[serde(rename = "tax-certificate")]
    TaxCertificate,
}

impl DocumentId {
    pub const fn as_str(self) -> &'static str {
        match self {
            DocumentId::A1Form => "a1-form",
            DocumentId::S1Form => "s1-form",
            DocumentId::U1Form => "u1-form",
            DocumentId::EhicCard => "ehic-card",
            DocumentId::TaxCertificate => "tax-certificate",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            DocumentId::A1Form => "Formular A1",
            DocumentId::S1Form => "Formular S1",
            DocumentId::U1Form => "Formular U1",
            DocumentId::EhicCard => "Card European de Sănătate (EHIC)",
            DocumentId::TaxCertificate => "Certificat Fiscal",
        }
    }

    pub const fn explanation(self) -> &'static str {
        match self {
            DocumentId::A1Form => "Certificatul A1 dovedește că plătești contribuții de asigurări sociale într-o anumită țară UE și te scutește de plata dublă.",
            DocumentId::S1Form => "Formularul S1 oferă dreptul de a te înscrie în sistemul de sănătate al unei țări UE când locuiești acolo, dar ești asigurat în altă țară.",
            DocumentId::U1Form => "Formularul U1 confirmă perioadele de asigurare pentru șomaj în alte țări UE, pentru cumularea lor la indemnizația de șomaj.",
            DocumentId::EhicCard => "Cardul European de Asigurări de Sănătate îți permite accesul la servicii medicale necesare în timpul șederii temporare în alt stat UE.",
            DocumentId::TaxCertificate => "Certificatul de rezidență fiscală dovedește în ce țară ești rezident fiscal, pentru aplicarea convențiilor de evitare a dublei impuneri.",
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    FullCoverage,
    PostedCoverage,
    Transitioning,
    NeedsVerification,
    NotCovered,
}

impl CoverageStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CoverageStatus::FullCoverage => "full_coverage",
            CoverageStatus::PostedCoverage => "posted_coverage",
            CoverageStatus::Transitioning => "transitioning",
            CoverageStatus::NeedsVerification => "needs_verification",
            CoverageStatus::NotCovered => "not_covered",
        }
    }
}

/// Declaration order is the consolidation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl StepPriority {
    pub const fn rank(self) -> u8 {
        match self {
            StepPriority::Urgent => 0,
            StepPriority::High => 1,
            StepPriority::Medium => 2,
            StepPriority::Low => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StepPriority::Urgent => "urgent",
            StepPriority::High => "high",
            StepPriority::Medium => "medium",
            StepPriority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepCategory {
    Tax,
    SocialSecurity,
    Healthcare,
    Documents,
    Registration,
}

/// Every action the evaluators know how to recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    ObtainA1Form,
    TransitionToLocalSystem,
    MonitorPostingDuration,
    FileRoTaxReturn,
    VerifyTaxResidence,
    FileHostTaxReturn,
}

impl StepKind {
    pub const fn id(self) -> &'static str {
        match self {
            StepKind::ObtainA1Form => "obtain-a1-form",
            StepKind::TransitionToLocalSystem => "transition-to-local-system",
            StepKind::MonitorPostingDuration => "monitor-posting-duration",
            StepKind::FileRoTaxReturn => "file-ro-tax-return",
            StepKind::VerifyTaxResidence => "verify-tax-residence",
            StepKind::FileHostTaxReturn => "file-host-tax-return",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            StepKind::ObtainA1Form => "Obține formularul A1",
            StepKind::TransitionToLocalSystem => "Tranzițiază la sistemul de asigurări locale",
            StepKind::MonitorPostingDuration => "Monitorizează durata detașării",
            StepKind::FileRoTaxReturn => "Depune declarația unică în România",
            StepKind::VerifyTaxResidence => "Verifică rezidența fiscală",
            StepKind::FileHostTaxReturn => "Verifică obligațiile fiscale în țara gazdă",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            StepKind::ObtainA1Form => "Solicită formularul A1 de la CNPP înainte de plecare sau imediat după sosire. Acest document dovedește că plătești contribuții în România și previne dublarea contribuțiilor.",
            StepKind::TransitionToLocalSystem => "Detașarea ta a depășit 24 luni. Trebuie să începi să plătești contribuții în țara gazdă.",
            StepKind::MonitorPostingDuration => "Dacă detașarea va depăși 24 luni, va trebui să aplici pentru prelungirea A1 sau să tranzițiezi la sistemul local.",
            StepKind::FileRoTaxReturn => "Declară toate veniturile din România până la 25 mai.",
            StepKind::VerifyTaxResidence => "Detașarea lungă poate schimba rezidența fiscală. Verifică tratatul de evitare a dublei impuneri.",
            StepKind::FileHostTaxReturn => "Este posibil să ai obligații fiscale și în țara unde lucrezi.",
        }
    }

    pub const fn category(self) -> StepCategory {
        match self {
            StepKind::ObtainA1Form => StepCategory::Documents,
            StepKind::TransitionToLocalSystem | StepKind::MonitorPostingDuration => {
                StepCategory::SocialSecurity
            }
            StepKind::FileRoTaxReturn
            | StepKind::VerifyTaxResidence
            | StepKind::FileHostTaxReturn => StepCategory::Tax,
        }
    }

    pub const fn link(self) -> Option<&'static str> {
        match self {
            StepKind::ObtainA1Form => Some("/guides/obtain-a1-form"),
            StepKind::TransitionToLocalSystem => Some("/document/a1-form"),
            StepKind::FileRoTaxReturn => Some("/guides/file-ro-tax-return"),
            StepKind::MonitorPostingDuration
            | StepKind::VerifyTaxResidence
            | StepKind::FileHostTaxReturn => None,
        }
    }
}

/// Concrete next step surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableStep {
    pub id: StepKind,
    pub title: String,
    pub description: String,
    pub priority: StepPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub category: StepCategory,
}

impl ActionableStep {
    pub fn new(kind: StepKind, priority: StepPriority) -> Self {
        Self {
            id: kind,
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            priority,
            deadline: None,
            link: kind.link().map(str::to_string),
            category: kind.category(),
        }
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}

/// Answers collected by the multi-step quiz. Never evaluated until complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(default)]
    pub residence_country: Option<CountryCode>,
    #[serde(default)]
    pub work_situation: Option<WorkSituation>,
    #[serde(default)]
    pub duration: Option<Duration>,
    #[serde(default)]
    pub family_status: Option<FamilySelection>,
}

impl QuizAnswers {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.residence_country.is_none() {
            missing.push("residence_country");
        }
        if self.work_situation.is_none() {
            missing.push("work_situation");
        }
        if self.duration.is_none() {
            missing.push("duration");
        }
        if self.family_status.is_none() {
            missing.push("family_status");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Answers present in `changes` replace the current ones.
    pub fn merge(self, changes: QuizAnswers) -> QuizAnswers {
        QuizAnswers {
            residence_country: changes.residence_country.or(self.residence_country),
            work_situation: changes.work_situation.or(self.work_situation),
            duration: changes.duration.or(self.duration),
            family_status: changes.family_status.or(self.family_status),
        }
    }
}

/// Error returned when parsing an enumerated answer from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} '{value}'")]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
}

impl UnknownValue {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}
