//! Document field patterns and entity extractors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document types recognised by the classifier
///
/// Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Policy,
    Claim,
    Invoice,
    Receipt,
    Unknown,
}

impl DocumentType {
    /// Types that can win classification, in tie-break order
    pub const CLASSIFIABLE: [DocumentType; 4] = [
        DocumentType::Policy,
        DocumentType::Claim,
        DocumentType::Invoice,
        DocumentType::Receipt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Policy => "policy",
            DocumentType::Claim => "claim",
            DocumentType::Invoice => "invoice",
            DocumentType::Receipt => "receipt",
            DocumentType::Unknown => "unknown",
        }
    }

    /// Case-insensitive field patterns; each one found counts once
    pub fn field_patterns(&self) -> &'static [&'static str] {
        match self {
            DocumentType::Policy => &[
                r"policy\s+number",
                r"coverage\s+amount",
                r"premium",
                r"effective\s+date",
                r"expiration\s+date",
            ],
            DocumentType::Claim => &[
                r"claim\s+number",
                r"incident\s+date",
                r"damage\s+description",
                r"estimated\s+loss",
            ],
            DocumentType::Invoice => &[
                r"invoice\s+number",
                r"amount\s+due",
                r"payment\s+date",
                r"service\s+description",
            ],
            DocumentType::Receipt => &[
                r"receipt\s+number",
                r"purchase\s+date",
                r"item\s+description",
                r"amount\s+paid",
            ],
            DocumentType::Unknown => &[],
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named entities pulled out of document text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityField {
    PolicyNumber,
    ClaimNumber,
    Date,
    Amount,
    Name,
    Address,
    Phone,
    Email,
}

impl EntityField {
    pub const ALL: [EntityField; 8] = [
        EntityField::PolicyNumber,
        EntityField::ClaimNumber,
        EntityField::Date,
        EntityField::Amount,
        EntityField::Name,
        EntityField::Address,
        EntityField::Phone,
        EntityField::Email,
    ];

    /// Key under which the entity is reported
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityField::PolicyNumber => "policy_number",
            EntityField::ClaimNumber => "claim_number",
            EntityField::Date => "date",
            EntityField::Amount => "amount",
            EntityField::Name => "name",
            EntityField::Address => "address",
            EntityField::Phone => "phone",
            EntityField::Email => "email",
        }
    }

    /// Case-insensitive pattern; the first capture group is the value
    pub fn pattern(&self) -> &'static str {
        match self {
            EntityField::PolicyNumber => r"policy\s+(?:number|#)[:.\s]*([A-Z0-9-]+)",
            EntityField::ClaimNumber => r"claim\s+(?:number|#)[:.\s]*([A-Z0-9-]+)",
            EntityField::Date => {
                r"(?:date|effective|expiration)[:.\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}[/-]\d{1,2}[/-]\d{1,2})"
            }
            EntityField::Amount => {
                r"(?:amount|coverage|premium|paid|due)[:.\s]*\$?(\d+(?:,\d+)*(?:\.\d+)?)"
            }
            EntityField::Name => r"(?:name|insured|policyholder)[:.\s]*([A-Za-z\s]+)(?:\n|,|\.|$)",
            EntityField::Address => r"(?:address|location)[:.\s]*([A-Za-z0-9\s,]+)(?:\n|,|\.|$)",
            EntityField::Phone => r"(?:phone|tel|telephone)[:.\s]*(\+?[\d\s()-]{10,})",
            EntityField::Email => {
                r"(?:email|e-mail)[:.\s]*([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})"
            }
        }
    }
}

/// Generic `label: value` or `label - value` line
pub const KEY_VALUE_PATTERN: &str =
    r"^\s*([A-Za-z][A-Za-z ]{0,48}?)\s*(?::|\s-\s)\s*(.+?)\s*$";

/// Free keys already covered by entity fields, left out of summaries
pub const RESERVED_SUMMARY_KEYS: &[&str] =
    &["policy number", "claim number", "date", "amount", "name"];
