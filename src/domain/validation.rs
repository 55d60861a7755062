//! Request validation. Structural per-field checks, run once at the boundary
//! before any generation work starts.

use crate::domain::{Account, CampaignRequest, Contact, DomainError};

/// Field cardinality bounds from the request contract.
pub const MAX_ACCOUNTS: usize = 10;
pub const MAX_PAIN_POINTS: usize = 5;
pub const MAX_EMAILS: u32 = 10;

pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    if value.chars().count() > max_len {
        return Err(DomainError::validation(
            field,
            format!("must be at most {max_len} characters"),
        ));
    }
    Ok(())
}

/// Structural email syntax check: one `@`, non-empty local part, dotted
/// domain, no whitespace. Deliverability is not our concern.
fn require_email(field: &str, value: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::validation(field, "must be a valid email address");

    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    Ok(())
}

impl Validate for Contact {
    fn validate(&self) -> Result<(), DomainError> {
        require_text("contacts.name", &self.name, 100)?;
        require_email("contacts.email", &self.email)?;
        require_text("contacts.job_title", &self.job_title, 100)?;
        Ok(())
    }
}

impl Validate for Account {
    fn validate(&self) -> Result<(), DomainError> {
        require_text("account_name", &self.account_name, 200)?;
        require_text("industry", &self.industry, 100)?;

        if self.pain_points.is_empty() || self.pain_points.len() > MAX_PAIN_POINTS {
            return Err(DomainError::validation(
                "pain_points",
                format!("must have 1-{MAX_PAIN_POINTS} items"),
            ));
        }
        for point in &self.pain_points {
            if point.trim().is_empty() {
                return Err(DomainError::validation(
                    "pain_points",
                    "items must not be empty",
                ));
            }
        }

        if self.contacts.is_empty() {
            return Err(DomainError::validation(
                "contacts",
                "must have at least 1 item",
            ));
        }
        for contact in &self.contacts {
            contact.validate()?;
        }

        require_text("language", &self.language, 200)?;
        Ok(())
    }
}

impl Validate for CampaignRequest {
    fn validate(&self) -> Result<(), DomainError> {
        if self.accounts.is_empty() || self.accounts.len() > MAX_ACCOUNTS {
            return Err(DomainError::validation(
                "accounts",
                format!("must have 1-{MAX_ACCOUNTS} items"),
            ));
        }
        for account in &self.accounts {
            account.validate()?;
        }

        if self.number_of_emails == 0 || self.number_of_emails > MAX_EMAILS {
            return Err(DomainError::validation(
                "number_of_emails",
                format!("must be between 1 and {MAX_EMAILS}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AbGroup, CampaignObjective, EmailTone, InterestLevel};

    fn contact() -> Contact {
        Contact {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            job_title: "CTO".to_string(),
            group: AbGroup::A,
        }
    }

    fn account() -> Account {
        Account {
            account_name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
            pain_points: vec!["slow onboarding".to_string(), "high churn".to_string()],
            contacts: vec![contact()],
            campaign_objective: CampaignObjective::Awareness,
            interest: InterestLevel::Medium,
            tone: EmailTone::Neutral,
            language: "English".to_string(),
        }
    }

    fn request() -> CampaignRequest {
        CampaignRequest {
            accounts: vec![account()],
            number_of_emails: 2,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_accounts() {
        let mut req = request();
        req.accounts.clear();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("accounts"));
    }

    #[test]
    fn test_rejects_too_many_accounts() {
        let mut req = request();
        req.accounts = std::iter::repeat_with(account).take(11).collect();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_email_count_out_of_bounds() {
        for n in [0, 11] {
            let mut req = request();
            req.number_of_emails = n;
            let err = req.validate().unwrap_err();
            assert!(err.to_string().contains("number_of_emails"));
        }
    }

    #[test]
    fn test_rejects_empty_pain_points() {
        let mut req = request();
        req.accounts[0].pain_points.clear();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("pain_points"));
    }

    #[test]
    fn test_rejects_too_many_pain_points() {
        let mut req = request();
        req.accounts[0].pain_points = vec!["p".to_string(); 6];
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_no_contacts() {
        let mut req = request();
        req.accounts[0].contacts.clear();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("contacts"));
    }

    #[test]
    fn test_rejects_malformed_email() {
        for bad in ["", "plainaddress", "a@b", "a b@example.com", "@example.com", "a@.com"] {
            let mut req = request();
            req.accounts[0].contacts[0].email = bad.to_string();
            assert!(req.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_rejects_over_length_fields() {
        let mut req = request();
        req.accounts[0].account_name = "x".repeat(201);
        assert!(req.validate().is_err());

        let mut req = request();
        req.accounts[0].industry = "x".repeat(101);
        assert!(req.validate().is_err());

        let mut req = request();
        req.accounts[0].contacts[0].name = "x".repeat(101);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut req = request();
        req.accounts[0].contacts[0].name = "   ".to_string();
        assert!(req.validate().is_err());
    }
}
