//! CSV export. Uses the `csv` crate for safe serialization.
//!
//! Flattens a nested campaign response into rows suitable for email
//! automation tools.

use crate::domain::CampaignResponse;

/// Header row. Fixed, always first.
const HEADER: [&str; 6] = [
    "Account Name",
    "Email Number",
    "Variant",
    "Subject",
    "Body",
    "Call to Action",
];

/// Flatten a campaign response into a CSV document.
///
/// One data row per (campaign, email step, variant) triple, in response
/// nesting order: account order, then step order labeled `Email N`, then
/// variant order labeled `Variant N`. The csv crate handles quoting of
/// embedded commas, quotes and newlines.
pub fn campaigns_to_csv(response: &CampaignResponse) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new().from_writer(Vec::new());

    wtr.write_record(HEADER)?;

    for campaign in &response.campaigns {
        for (step, email) in campaign.emails.iter().enumerate() {
            for (variant_idx, variant) in email.variants.iter().enumerate() {
                let email_label = format!("Email {}", step + 1);
                let variant_label = format!("Variant {}", variant_idx + 1);
                wtr.write_record([
                    campaign.account_name.as_str(),
                    email_label.as_str(),
                    variant_label.as_str(),
                    variant.subject.as_str(),
                    variant.body.as_str(),
                    variant.call_to_action.as_str(),
                ])?;
            }
        }
    }

    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Campaign, Email, EmailVariant};

    fn variant(subject: &str) -> EmailVariant {
        EmailVariant {
            subject: subject.to_string(),
            body: "Body text".to_string(),
            call_to_action: "Reply now".to_string(),
        }
    }

    fn response() -> CampaignResponse {
        CampaignResponse {
            campaigns: vec![Campaign {
                account_name: "Acme Corp".to_string(),
                emails: vec![
                    Email {
                        variants: vec![variant("A1"), variant("A2")],
                    },
                    Email {
                        variants: vec![variant("B1"), variant("B2")],
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_header_first() {
        let csv = campaigns_to_csv(&response()).unwrap();
        let first_line = csv.lines().next().unwrap();
        assert_eq!(
            first_line,
            "Account Name,Email Number,Variant,Subject,Body,Call to Action"
        );
    }

    #[test]
    fn test_row_count_and_labels() {
        let csv = campaigns_to_csv(&response()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        // header + 2 emails x 2 variants
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Email 1"));
        assert!(lines[1].contains("Variant 1"));
        assert!(lines[2].contains("Email 1"));
        assert!(lines[2].contains("Variant 2"));
        assert!(lines[3].contains("Email 2"));
        assert!(lines[4].contains("Variant 2"));
    }

    #[test]
    fn test_nesting_order() {
        let mut resp = response();
        resp.campaigns.push(Campaign {
            account_name: "Beta Inc".to_string(),
            emails: vec![Email {
                variants: vec![variant("C1"), variant("C2")],
            }],
        });

        let csv = campaigns_to_csv(&resp).unwrap();
        let acme_pos = csv.find("Acme Corp").unwrap();
        let beta_pos = csv.find("Beta Inc").unwrap();
        assert!(acme_pos < beta_pos);
    }

    #[test]
    fn test_quoting_special_chars() {
        let mut resp = response();
        resp.campaigns[0].emails[0].variants[0].subject =
            "Hello, \"world\"\nnew line".to_string();

        let csv = campaigns_to_csv(&resp).unwrap();
        // Embedded commas, quotes and newlines must stay inside one field
        assert!(csv.contains("\"Hello, \"\"world\"\"\nnew line\""));
    }

    #[test]
    fn test_empty_response() {
        let csv = campaigns_to_csv(&CampaignResponse { campaigns: vec![] }).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
