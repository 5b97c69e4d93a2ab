//! Wire types mirroring the backend JSON structures
//!
//! Record fields are passed through unchanged between the gateway and the
//! view screens; the core does not interpret them. Monetary amounts on
//! records stay strings exactly as the backend serializes them; the
//! aggregate endpoints return computed numbers.

use serde::{Deserialize, Serialize};

/// Login form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub password: String,
}

/// A transaction as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub amount: String,
    pub category: String,
    #[serde(default)]
    pub category_display: String,
    pub description: String,
    pub date: String,
}

/// Payload for creating or updating a transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

/// A monthly budget as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: u64,
    pub amount: String,
    pub month: u32,
    pub year: i32,
}

/// Payload for creating a budget
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBudget {
    pub amount: String,
    pub month: u32,
    pub year: i32,
}

/// Payload for updating a budget's amount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAmount {
    pub amount: String,
}

/// A selectable transaction category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub value: String,
    pub label: String,
}

/// Aggregated budget summary for the current month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub budget_amount: f64,
    pub spent_amount: f64,
    pub remaining_amount: f64,
}

/// Aggregated spending for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
}

/// Total spending for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyExpense {
    pub month: String,
    pub total_spent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_deserializes_without_category_display() {
        let json = r#"{
            "id": 7,
            "amount": "120.50",
            "category": "FOOD",
            "description": "groceries",
            "date": "2026-08-01"
        }"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.id, 7);
        assert_eq!(transaction.amount, "120.50");
        assert_eq!(transaction.category_display, "");
    }

    #[test]
    fn token_fields_round_trip_through_requests() {
        let request = NewTransaction {
            amount: "45".to_string(),
            category: "RENT".to_string(),
            description: "august".to_string(),
            date: "2026-08-05".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""amount":"45""#));
        assert!(json.contains(r#""category":"RENT""#));
    }

    #[test]
    fn budget_summary_parses_numbers() {
        let json = r#"{"budget_amount": 1000.0, "spent_amount": 250.5, "remaining_amount": 749.5}"#;
        let summary: BudgetSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.remaining_amount, 749.5);
    }
}
