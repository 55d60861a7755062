//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod validation;

pub use entities::{
    AbGroup, Account, Campaign, CampaignObjective, CampaignRequest, CampaignResponse, Contact,
    Email, EmailTone, EmailVariant, InterestLevel, VariantTone,
};
pub use errors::DomainError;
pub use validation::Validate;
