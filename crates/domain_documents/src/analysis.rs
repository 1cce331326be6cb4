//! Document classification and field extraction

use once_cell::sync::Lazy;
use pattern_library::documents::{KEY_VALUE_PATTERN, RESERVED_SUMMARY_KEYS};
use pattern_library::{DocumentType, EntityField};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;
use tracing::{debug, error};

/// A free `label: value` pair found in the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    /// Lower-cased, trimmed label
    pub key: String,
    pub value: String,
}

/// Result of classifying and extracting one text blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document_type: DocumentType,
    /// Entity name to first captured value
    pub entities: BTreeMap<String, String>,
    /// Free key-values in scan order, first value per key
    pub free_key_values: Vec<KeyValuePair>,
    pub summary: String,
    /// Set when extraction could not run; the other fields are then empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentAnalysis {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            document_type: DocumentType::Unknown,
            entities: BTreeMap::new(),
            free_key_values: Vec::new(),
            summary: String::new(),
            error: Some(message.into()),
        }
    }

    pub fn entity(&self, field: EntityField) -> Option<&str> {
        self.entities.get(field.as_str()).map(String::as_str)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.free_key_values
            .iter()
            .find(|pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

struct CompiledPatterns {
    document_types: Vec<(DocumentType, Vec<Regex>)>,
    entities: Vec<(EntityField, Regex)>,
    key_value: Regex,
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

fn compile_patterns() -> Result<CompiledPatterns, String> {
    let document_types = DocumentType::CLASSIFIABLE
        .into_iter()
        .map(|doc_type| {
            let regexes = doc_type
                .field_patterns()
                .iter()
                .map(|pattern| case_insensitive(pattern))
                .collect::<Result<Vec<_>, _>>()?;
            Ok((doc_type, regexes))
        })
        .collect::<Result<Vec<_>, regex::Error>>()
        .map_err(|e| format!("invalid document pattern: {e}"))?;

    let entities = EntityField::ALL
        .into_iter()
        .map(|field| case_insensitive(field.pattern()).map(|re| (field, re)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid entity pattern: {e}"))?;

    let key_value =
        Regex::new(KEY_VALUE_PATTERN).map_err(|e| format!("invalid key-value pattern: {e}"))?;

    Ok(CompiledPatterns {
        document_types,
        entities,
        key_value,
    })
}

static PATTERNS: Lazy<Result<CompiledPatterns, String>> = Lazy::new(compile_patterns);

/// Classifies a text blob and extracts its entities and free key-values
///
/// Never fails: if the pattern tables cannot be compiled the analysis comes
/// back empty with `error` set.
pub fn classify_and_extract(text: &str) -> DocumentAnalysis {
    let patterns = match PATTERNS.as_ref() {
        Ok(patterns) => patterns,
        Err(message) => {
            error!(error = %message, "Document patterns unavailable");
            return DocumentAnalysis::failed(message.clone());
        }
    };

    let document_type = classify(patterns, text);
    let entities = extract_entities(patterns, text);
    let free_key_values = extract_key_values(patterns, text);
    let summary = summarize(document_type, &entities, &free_key_values);

    debug!(
        document_type = %document_type,
        entities = entities.len(),
        key_values = free_key_values.len(),
        "Document analyzed"
    );

    DocumentAnalysis {
        document_type,
        entities,
        free_key_values,
        summary,
        error: None,
    }
}

fn classify(patterns: &CompiledPatterns, text: &str) -> DocumentType {
    let mut best = DocumentType::Unknown;
    let mut best_score = 0;
    for (doc_type, regexes) in &patterns.document_types {
        let score = regexes.iter().filter(|re| re.is_match(text)).count();
        // Strictly greater keeps the earlier declaration on ties
        if score > best_score {
            best = *doc_type;
            best_score = score;
        }
    }
    best
}

fn extract_entities(patterns: &CompiledPatterns, text: &str) -> BTreeMap<String, String> {
    patterns
        .entities
        .iter()
        .filter_map(|(field, re)| {
            let value = re.captures(text)?.get(1)?.as_str().trim();
            (!value.is_empty()).then(|| (field.as_str().to_string(), value.to_string()))
        })
        .collect()
}

fn extract_key_values(patterns: &CompiledPatterns, text: &str) -> Vec<KeyValuePair> {
    let mut pairs: Vec<KeyValuePair> = Vec::new();
    for line in text.lines() {
        let Some(caps) = patterns.key_value.captures(line) else {
            continue;
        };
        let key = caps[1].trim().to_lowercase();
        let value = caps[2].trim();
        if key.is_empty() || value.is_empty() || pairs.iter().any(|p| p.key == key) {
            continue;
        }
        pairs.push(KeyValuePair {
            key,
            value: value.to_string(),
        });
    }
    pairs
}

fn summarize(
    document_type: DocumentType,
    entities: &BTreeMap<String, String>,
    key_values: &[KeyValuePair],
) -> String {
    let mut summary = format!(
        "This appears to be a {} document.",
        document_type.as_str().to_uppercase()
    );

    let fields: &[(EntityField, &str, &str)] = match document_type {
        DocumentType::Policy => &[
            (EntityField::PolicyNumber, "Policy number", ""),
            (EntityField::Name, "Policyholder", ""),
            (EntityField::Amount, "Coverage amount", "$"),
            (EntityField::Date, "Effective date", ""),
        ],
        DocumentType::Claim => &[
            (EntityField::ClaimNumber, "Claim number", ""),
            (EntityField::Date, "Incident date", ""),
            (EntityField::Amount, "Estimated loss", "$"),
        ],
        DocumentType::Invoice | DocumentType::Receipt => &[
            (EntityField::Amount, "Amount", "$"),
            (EntityField::Date, "Date", ""),
        ],
        DocumentType::Unknown => &[],
    };
    for (field, label, prefix) in fields {
        if let Some(value) = entities.get(field.as_str()) {
            let _ = write!(summary, " {label}: {prefix}{value}.");
        }
    }

    let extra: Vec<String> = key_values
        .iter()
        .filter(|pair| !RESERVED_SUMMARY_KEYS.contains(&pair.key.as_str()))
        .map(|pair| format!("{}: {}", pair.key, pair.value))
        .collect();
    if !extra.is_empty() {
        let _ = write!(summary, " Additional information: {}.", extra.join(", "));
    }

    summary
}
