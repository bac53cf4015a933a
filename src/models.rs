use serde::{Deserialize, Serialize};

// Invoice lifecycle states. `list_invoices` moves Open → Overdue once the
// due date has passed; `pay_invoice` stamps Paid.
pub const STATUS_OPEN: &str = "Open";
pub const STATUS_PAID: &str = "Paid";
pub const STATUS_OVERDUE: &str = "Overdue";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Option<i64>,
    pub creditor: String,
    pub concern: String,
    pub category: String,
    pub amount: f64,
    pub due_date: String,
    pub path: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub payment_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    pub id: Option<i64>,
    pub source: String,
    pub revenue_type: String,
    pub amount: f64,
    pub receipt_date: String,
    pub description: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDocument {
    pub id: Option<i64>,
    pub concern: String,
    pub category: String,
    pub description: String,
    pub status: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub due_date: String,
    pub creation_date: String,
    pub category: String,
    pub attachments: Option<String>,
}
