//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/Cohere types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

/// A person at a target account. Owned by exactly one [`Account`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub job_title: String,
    /// A/B test group. Reassigned randomly when a campaign is generated.
    #[serde(default)]
    pub group: AbGroup,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbGroup {
    #[default]
    A,
    B,
}

/// A business account to generate a drip campaign for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub account_name: String,
    pub industry: String,
    pub pain_points: Vec<String>,
    pub contacts: Vec<Contact>,
    pub campaign_objective: CampaignObjective,
    #[serde(default)]
    pub interest: InterestLevel,
    /// Account-level tone preference. Distinct from the per-variant tone
    /// used during generation.
    #[serde(default)]
    pub tone: EmailTone,
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignObjective {
    Awareness,
    Nurturing,
    Upselling,
}

impl CampaignObjective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awareness => "awareness",
            Self::Nurturing => "nurturing",
            Self::Upselling => "upselling",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl InterestLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailTone {
    Formal,
    Casual,
    Enthusiastic,
    #[default]
    Neutral,
}

/// The two fixed tones every email step is drafted in. One variant each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantTone {
    Formal,
    Casual,
}

impl VariantTone {
    pub const ALL: [VariantTone; 2] = [VariantTone::Formal, VariantTone::Casual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
        }
    }
}

/// One candidate subject/body/CTA combination, produced by the copywriter
/// service and trusted as-is once parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailVariant {
    pub subject: String,
    pub body: String,
    pub call_to_action: String,
}

/// One A/B-tested send in the drip sequence: exactly two variants, in
/// [`VariantTone::ALL`] order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    pub variants: Vec<EmailVariant>,
}

/// The full drip sequence generated for one account, in step order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub account_name: String,
    pub emails: Vec<Email>,
}

/// Incoming request: accounts plus a shared drip length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRequest {
    pub accounts: Vec<Account>,
    pub number_of_emails: u32,
}

/// One campaign per requested account, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignResponse {
    pub campaigns: Vec<Campaign>,
}
