//! Templated replies to customer queries

use core_kernel::{EscalationPriority, PolicyRecord};
use pattern_library::IntentCategory;

use crate::sentiment::Sentiment;

const COMPANY_NAME: &str = "AGENTIC InsurTech";

pub fn greeting(sentiment: Sentiment) -> String {
    match sentiment {
        Sentiment::Positive => "Hello! It's great to hear from you today.".to_string(),
        Sentiment::Negative => {
            "Hello. I'm sorry to hear you're experiencing difficulties.".to_string()
        }
        Sentiment::Neutral => {
            format!("Hello! Thank you for contacting {COMPANY_NAME} customer support.")
        }
    }
}

pub fn closing(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => {
            "Is there anything else I can help you with today? I'm here to assist with any other questions you might have."
        }
        Sentiment::Negative => {
            "I want to ensure your concern is fully addressed. If you need further assistance, please let me know, or I can connect you with a human agent."
        }
        Sentiment::Neutral => {
            "If you have any other questions, please don't hesitate to ask. I'm here to help."
        }
    }
}

fn policy_summary(policy: &PolicyRecord) -> String {
    [
        format!("- Policy Number: {}", policy.policy_number),
        format!("- Policy Type: {}", policy.policy_type),
        format!("- Status: {:?}", policy.status),
        format!("- Policyholder: {}", policy.policyholder.name),
        format!("- Coverage Amount: ${}", policy.coverage_amount),
        format!("- Annual Premium: ${}", policy.annual_premium),
        format!("- Start Date: {}", policy.start_date),
        format!("- End Date: {}", policy.end_date),
    ]
    .join("\n")
}

fn coverage_summary(policy: &PolicyRecord) -> String {
    format!(
        "- Coverage Amount: ${}\n- Deductible: ${}",
        policy.coverage_amount, policy.deductible
    )
}

fn body(intent: IntentCategory, policy: Option<&PolicyRecord>) -> String {
    match (intent, policy) {
        (IntentCategory::PolicyInfo, Some(policy)) => {
            format!("Here are your policy details:\n\n{}", policy_summary(policy))
        }
        (IntentCategory::PolicyInfo, None) => {
            "I'd be happy to provide information about your policy. Could you please provide your policy number or policyholder details?".to_string()
        }
        (IntentCategory::ClaimStatus, _) => {
            "To check the status of your claim, please provide your claim number. If you don't have it, I can look it up using your policy number.".to_string()
        }
        (IntentCategory::Billing, _) => {
            "For billing inquiries, I can help you understand your premium, payment options, and due dates. If you have a specific billing question, please provide more details.".to_string()
        }
        (IntentCategory::TechnicalSupport, _) => {
            "I'm sorry to hear you're experiencing technical issues. Could you please describe the problem in more detail? This will help me provide the most relevant assistance.".to_string()
        }
        (IntentCategory::CoverageQuestion, Some(policy)) => format!(
            "Based on your policy, here's what's covered:\n\n{}\n\nIf you have a specific coverage question, please provide more details.",
            coverage_summary(policy)
        ),
        (IntentCategory::CoverageQuestion, None) => {
            "I'd be happy to explain what's covered under your policy. Could you please provide your policy number so I can give you accurate information?".to_string()
        }
        (IntentCategory::Complaint, _) => {
            "I'm sorry to hear that you're experiencing an issue. Your satisfaction is important to us. Could you please provide more details about your concern so we can address it properly?".to_string()
        }
        (IntentCategory::GeneralInquiry, _) => {
            "Thank you for your inquiry. I'm here to help with any insurance-related questions you may have. Could you please provide more details about what you're looking for?".to_string()
        }
    }
}

/// Greeting and closing follow the sentiment, the body follows the intent
pub fn compose_response(
    intent: IntentCategory,
    sentiment: Sentiment,
    policy: Option<&PolicyRecord>,
) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        greeting(sentiment),
        body(intent, policy),
        closing(sentiment)
    )
}

/// Confirmation shown after a query is handed to a person
pub fn escalation_notice(escalation_id: &str, priority: EscalationPriority) -> String {
    format!(
        "Your query has been escalated to a human agent. A customer service representative will contact you shortly.\n\n\
         Escalation ID: {escalation_id}\n\
         Priority: {priority:?}\n\n\
         Thank you for your patience."
    )
}
