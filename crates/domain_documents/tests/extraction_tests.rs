//! Integration tests for the Text Feature Extractor

use domain_documents::{classify_and_extract, DocumentType};
use pattern_library::EntityField;
use proptest::prelude::*;

mod classification_tests {
    use super::*;

    #[test]
    fn test_claim_form() {
        let text = "CLAIM FORM\n\
            Claim Number: CLM-20250310-7F3A\n\
            Incident Date: 03/08/2025\n\
            Damage Description: burst pipe in upstairs bathroom\n\
            Estimated Loss: $4,250.00\n";
        let analysis = classify_and_extract(text);

        assert_eq!(analysis.document_type, DocumentType::Claim);
        assert_eq!(analysis.entity(EntityField::ClaimNumber), Some("CLM-20250310-7F3A"));
        assert_eq!(analysis.entity(EntityField::Date), Some("03/08/2025"));
        assert!(analysis.summary.contains("Claim number: CLM-20250310-7F3A."));
        assert!(analysis.summary.contains("Incident date: 03/08/2025."));
    }

    #[test]
    fn test_invoice() {
        let text = "Invoice Number: INV-881\nAmount Due: 320.50\nPayment Date: 2025-04-30\n";
        let analysis = classify_and_extract(text);

        assert_eq!(analysis.document_type, DocumentType::Invoice);
        assert_eq!(analysis.entity(EntityField::Amount), Some("320.50"));
        assert!(analysis.summary.contains("Amount: $320.50."));
    }

    #[test]
    fn test_receipt_with_contact_details() {
        let text = "Receipt Number: 5531\n\
            Purchase Date: 2024-11-02\n\
            Amount Paid: 1,099.99\n\
            Email: store@example.com\n\
            Phone: (555) 123-4567\n";
        let analysis = classify_and_extract(text);

        assert_eq!(analysis.document_type, DocumentType::Receipt);
        assert_eq!(analysis.entity(EntityField::Email), Some("store@example.com"));
        assert_eq!(analysis.entity(EntityField::Phone), Some("(555) 123-4567"));
    }

    #[test]
    fn test_unrelated_text_is_unknown() {
        let analysis = classify_and_extract("The quick brown fox jumps over the lazy dog");
        assert_eq!(analysis.document_type, DocumentType::Unknown);
        assert!(analysis.entities.is_empty());
    }

    #[test]
    fn test_analysis_serializes_without_error_field() {
        let json = serde_json::to_value(classify_and_extract("premium")).unwrap();
        assert_eq!(json["document_type"], "policy");
        assert!(json.get("error").is_none());
    }
}

proptest! {
    #[test]
    fn classification_is_idempotent(text in "[A-Za-z0-9:$ \\n.-]{0,200}") {
        prop_assert_eq!(classify_and_extract(&text), classify_and_extract(&text));
    }

    #[test]
    fn extraction_never_reports_an_error(text in ".{0,300}") {
        let analysis = classify_and_extract(&text);
        prop_assert!(analysis.is_ok());
        prop_assert!(analysis.summary.starts_with("This appears to be a "));
    }
}
