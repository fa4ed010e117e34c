use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::utils::date::serializer;

// LoanEntity is a stored loan, naming the catalogue item by id only.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanEntity {
    pub item_id: i64,
    #[serde(with = "serializer")]
    pub due_date: NaiveDate,
}

// PatronEntity abstracts the stored library member record.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronEntity {
    pub patron_id: i64,
    pub name: String,
    pub age: i64,
    pub outstanding_fees: f64,
    pub gardening_tool_training: bool,
    pub carpentry_tool_training: bool,
    pub makerspace_training: bool,
    #[serde(default)]
    pub loans: Vec<LoanEntity>,
}

impl PatronEntity {
    pub fn new(patron_id: i64, name: &str, age: i64) -> Self {
        Self {
            patron_id,
            name: name.to_string(),
            age,
            outstanding_fees: 0.0,
            gardening_tool_training: false,
            carpentry_tool_training: false,
            makerspace_training: false,
            loans: vec![],
        }
    }
}
