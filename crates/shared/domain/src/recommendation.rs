//! Stored recommendation entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted advisory line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i32,
    pub user_id: i32,
    pub text: String,
    pub date: NaiveDate,
}
