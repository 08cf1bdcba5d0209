use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicId {
    SocialSecurity,
    Healthcare,
    Taxes,
    Pension,
}

impl TopicId {
    pub const fn slug(self) -> &'static str {
        match self {
            TopicId::SocialSecurity => "social-security",
            TopicId::Healthcare => "healthcare",
            TopicId::Taxes => "taxes",
            TopicId::Pension => "pension",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            TopicId::SocialSecurity => "Asigurări Sociale",
            TopicId::Healthcare => "Acces la Servicii Medicale",
            TopicId::Taxes => "Taxe",
            TopicId::Pension => "Pensie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Ok,
    Warning,
    ActionNeeded,
}

impl CardStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CardStatus::Ok => "OK",
            CardStatus::Warning => "Atenție",
            CardStatus::ActionNeeded => "Acțiune necesară",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContext {
    pub work_situation: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCard {
    pub topic: TopicId,
    pub title: String,
    pub summary: String,
    pub status: CardStatus,
    pub country_flag: String,
    pub details: Vec<String>,
    pub link: String,
    pub user_context: CardContext,
}
