//! Campaign service. Orchestrates drip campaign generation.
//!
//! Coordinates validation, A/B group assignment, prompt construction and
//! sequential copywriter calls, then aggregates the results.

use crate::adapters::export::campaigns_to_csv;
use crate::domain::{
    AbGroup, Account, Campaign, CampaignRequest, CampaignResponse, DomainError, Email,
    Validate, VariantTone,
};
use crate::ports::CopywriterPort;
use rand::{Rng, rng};
use std::sync::Arc;
use tracing::info;

/// Service for drip campaign generation.
///
/// Orchestrates the flow:
/// 1. Validate the request at the boundary
/// 2. Randomly assign A/B groups to each account's contacts
/// 3. For each email step, draft one variant per tone via the copywriter port
/// 4. Aggregate variants into emails, emails into campaigns
///
/// All copywriter calls are sequential. A drip of N emails over A accounts
/// costs exactly `A x N x 2` outbound calls; any single failure aborts the
/// whole request with no partial results.
pub struct CampaignService {
    copywriter: Arc<dyn CopywriterPort>,
}

impl CampaignService {
    /// Create a new campaign service.
    ///
    /// # Arguments
    /// * `copywriter` - Copywriter port implementation (Cohere, Mock, etc.)
    pub fn new(copywriter: Arc<dyn CopywriterPort>) -> Self {
        Self { copywriter }
    }

    /// Generate campaigns for every account in the request, in input order.
    pub async fn generate_campaigns(
        &self,
        mut request: CampaignRequest,
    ) -> Result<CampaignResponse, DomainError> {
        request.validate()?;

        let number_of_emails = request.number_of_emails;
        info!(
            accounts = request.accounts.len(),
            number_of_emails, "generating campaigns"
        );

        let mut campaigns = Vec::with_capacity(request.accounts.len());
        for account in &mut request.accounts {
            let campaign = self.generate_campaign(account, number_of_emails).await?;
            campaigns.push(campaign);
        }

        info!(campaigns = campaigns.len(), "campaign generation complete");

        Ok(CampaignResponse { campaigns })
    }

    /// Generate campaigns and flatten them into a CSV document.
    ///
    /// Runs the full generation again on every call; nothing is reused from
    /// prior requests, so exporting costs the same set of outbound calls as
    /// generating.
    pub async fn export_campaigns_csv(
        &self,
        request: CampaignRequest,
    ) -> Result<String, DomainError> {
        let response = self.generate_campaigns(request).await?;

        let csv = campaigns_to_csv(&response).map_err(|e| DomainError::Csv(e.to_string()))?;
        info!(bytes = csv.len(), "campaigns exported to CSV");

        Ok(csv)
    }

    /// Generate the full drip sequence for one account.
    async fn generate_campaign(
        &self,
        account: &mut Account,
        number_of_emails: u32,
    ) -> Result<Campaign, DomainError> {
        assign_ab_groups(account);

        let mut emails = Vec::with_capacity(number_of_emails as usize);
        for step in 1..=number_of_emails {
            let email = self.draft_email(account, step, number_of_emails).await?;
            emails.push(email);
        }

        info!(
            account = %account.account_name,
            emails = emails.len(),
            "campaign generated"
        );

        Ok(Campaign {
            account_name: account.account_name.clone(),
            emails,
        })
    }

    /// Draft one email step: one variant per tone, in [`VariantTone::ALL`]
    /// order.
    async fn draft_email(
        &self,
        account: &Account,
        step: u32,
        total: u32,
    ) -> Result<Email, DomainError> {
        let mut variants = Vec::with_capacity(VariantTone::ALL.len());
        for tone in VariantTone::ALL {
            let prompt = build_variant_prompt(account, step, total, tone)?;

            let variant = match self.copywriter.draft_variant(&prompt).await {
                Ok(variant) => variant,
                Err(DomainError::Generation(msg)) => {
                    return Err(DomainError::Generation(format!(
                        "account '{}', email {} of {} ({} variant): {}",
                        account.account_name,
                        step,
                        total,
                        tone.as_str(),
                        msg
                    )));
                }
                Err(other) => return Err(other),
            };
            variants.push(variant);
        }

        Ok(Email { variants })
    }
}

/// Randomly assign each contact to group A or B.
///
/// Side effect on the account's contact records only; the assignment is not
/// consumed anywhere else in the generation or export flow.
fn assign_ab_groups(account: &mut Account) {
    let mut rng = rng();
    for contact in &mut account.contacts {
        contact.group = if rng.random_bool(0.5) {
            AbGroup::A
        } else {
            AbGroup::B
        };
    }
}

/// Build the generation prompt for one variant.
///
/// Embeds the account attributes, the step position in the drip sequence and
/// the variant tone, and pins the completion to a JSON object with the three
/// required keys.
fn build_variant_prompt(
    account: &Account,
    step: u32,
    total: u32,
    tone: VariantTone,
) -> Result<String, DomainError> {
    let first_contact = account
        .contacts
        .first()
        .ok_or_else(|| DomainError::validation("contacts", "must have at least 1 item"))?;

    Ok(format!(
        "Create a personalized email for the following business account:\n\
         Company: {}\n\
         Industry: {}\n\
         Pain Points: {}\n\
         Campaign Stage: Email {} of {}\n\
         Campaign Objective: {}\n\
         Recipient Job Title: {}\n\
         \n\
         Interest: {}\n\
         Tone: {}\n\
         Language: {}\n\
         \n\
         Generate a JSON response with:\n\
         1. An engaging and catchy subject line\n\
         2. Personalized email body\n\
         3. Clear call-to-action\n\
         \n\
         Format the response as valid JSON with keys: \"subject\", \"body\", \"call_to_action\"",
        account.account_name,
        account.industry,
        account.pain_points.join(", "),
        step,
        total,
        account.campaign_objective.as_str(),
        first_contact.job_title,
        account.interest.as_str(),
        tone.as_str(),
        account.language,
    ))
}
