use crate::models::{AdminDocument, Invoice, Revenue, Task};

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

// An empty pattern is "no constraint". Non-empty patterns are literal
// case-sensitive substrings (no trimming, no regex).
fn contains(value: &str, pattern: &str) -> bool {
    pattern.is_empty() || value.contains(pattern)
}

// A missing field never matches a non-empty pattern.
fn contains_opt(value: Option<&str>, pattern: &str) -> bool {
    pattern.is_empty() || value.is_some_and(|v| v.contains(pattern))
}

// Month patterns match as a prefix of the date field (typically YYYY-MM),
// unlike the substring semantics of the text fields.
fn month_matches(date: &str, pattern: &str) -> bool {
    pattern.is_empty() || date.starts_with(pattern)
}

// ---------------------------------------------------------------------------
// Per-kind filter configurations — one String pattern per filterable field,
// combined with logical AND
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub creditor: String,
    pub concern: String,
    pub category: String,
    pub month: String,
    pub status: String,
}

impl InvoiceFilter {
    pub fn matches(&self, inv: &Invoice) -> bool {
        contains(&inv.creditor, &self.creditor)
            && contains(&inv.concern, &self.concern)
            && contains(&inv.category, &self.category)
            && month_matches(&inv.due_date, &self.month)
            && contains_opt(inv.status.as_deref(), &self.status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevenueFilter {
    pub source: String,
    pub revenue_type: String,
    pub month: String,
}

impl RevenueFilter {
    pub fn matches(&self, rev: &Revenue) -> bool {
        contains(&rev.source, &self.source)
            && contains(&rev.revenue_type, &self.revenue_type)
            && month_matches(&rev.receipt_date, &self.month)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub concern: String,
    pub category: String,
    pub status: String,
}

impl DocumentFilter {
    pub fn matches(&self, doc: &AdminDocument) -> bool {
        contains(&doc.concern, &self.concern)
            && contains(&doc.category, &self.category)
            && contains(&doc.status, &self.status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub category: String,
    pub priority: String,
    pub status: String,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        contains(&task.category, &self.category)
            && contains(&task.priority, &self.priority)
            && contains(&task.status, &self.status)
    }
}

// ---------------------------------------------------------------------------
// Stable filters — input order preserved, source snapshot untouched
// ---------------------------------------------------------------------------

pub fn filter_invoices(records: &[Invoice], filter: &InvoiceFilter) -> Vec<Invoice> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}

pub fn filter_revenues(records: &[Revenue], filter: &RevenueFilter) -> Vec<Revenue> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}

pub fn filter_documents(records: &[AdminDocument], filter: &DocumentFilter) -> Vec<AdminDocument> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}

pub fn filter_tasks(records: &[Task], filter: &TaskFilter) -> Vec<Task> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}
