use std::collections::HashMap;
use std::str::FromStr;

use crate::error::BureauError;
use crate::models::{Invoice, Revenue};

// ---------------------------------------------------------------------------
// Dimension aggregation
// ---------------------------------------------------------------------------

/// One chart group: the sum of the amount field over every record that
/// shares `key`. Emission order is first occurrence in the input, not
/// sorted; consumers wanting a canonical order sort on their side.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
}

// The month key is the YYYY-MM prefix of a date field. Dates shorter than
// seven characters (including empty ones) group under what is there.
fn month_of(date: &str) -> &str {
    date.get(..7).unwrap_or(date)
}

fn accumulate<T>(
    records: &[T],
    key_of: impl Fn(&T) -> String,
    amount_of: impl Fn(&T) -> f64,
) -> Vec<GroupTotal> {
    let mut groups: Vec<GroupTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in records {
        let key = key_of(record);
        match index.get(&key) {
            Some(&i) => groups[i].total += amount_of(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(GroupTotal {
                    key,
                    total: amount_of(record),
                });
            }
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceDimension {
    Creditor,
    Category,
    Month,
    Status,
}

impl InvoiceDimension {
    fn key(&self, inv: &Invoice) -> String {
        match self {
            Self::Creditor => inv.creditor.clone(),
            Self::Category => inv.category.clone(),
            Self::Month => month_of(&inv.due_date).to_string(),
            Self::Status => inv.status.clone().unwrap_or_default(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Creditor => "Creditor",
            Self::Category => "Category",
            Self::Month => "Month",
            Self::Status => "Status",
        }
    }
}

impl FromStr for InvoiceDimension {
    type Err = BureauError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creditor" => Ok(Self::Creditor),
            "category" => Ok(Self::Category),
            "month" => Ok(Self::Month),
            "status" => Ok(Self::Status),
            other => Err(BureauError::UnknownDimension(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueDimension {
    Source,
    RevenueType,
    Month,
}

impl RevenueDimension {
    fn key(&self, rev: &Revenue) -> String {
        match self {
            Self::Source => rev.source.clone(),
            Self::RevenueType => rev.revenue_type.clone(),
            Self::Month => month_of(&rev.receipt_date).to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::RevenueType => "Type",
            Self::Month => "Month",
        }
    }
}

impl FromStr for RevenueDimension {
    type Err = BureauError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(Self::Source),
            "type" => Ok(Self::RevenueType),
            "month" => Ok(Self::Month),
            other => Err(BureauError::UnknownDimension(other.to_string())),
        }
    }
}

pub fn aggregate_invoices(records: &[Invoice], dimension: InvoiceDimension) -> Vec<GroupTotal> {
    accumulate(records, |inv| dimension.key(inv), |inv| inv.amount)
}

pub fn aggregate_revenues(records: &[Revenue], dimension: RevenueDimension) -> Vec<GroupTotal> {
    accumulate(records, |rev| dimension.key(rev), |rev| rev.amount)
}

// ---------------------------------------------------------------------------
// KPI summary
// ---------------------------------------------------------------------------

/// The amount field shared by the monetary record kinds. `summarize` is
/// generic over it; callers supply same-kind collections.
pub trait Monetary {
    fn amount(&self) -> f64;
}

impl Monetary for Invoice {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Monetary for Revenue {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
}

pub fn summarize<T: Monetary>(records: &[T]) -> Summary {
    Summary {
        count: records.len(),
        total: records.iter().map(Monetary::amount).sum(),
    }
}

/// Signed receivables-minus-payables figure for the dashboard card.
pub fn difference(invoice_total: f64, revenue_total: f64) -> f64 {
    revenue_total - invoice_total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(creditor: &str, category: &str, amount: f64, due_date: &str) -> Invoice {
        Invoice {
            id: None,
            creditor: creditor.to_string(),
            concern: "Office".to_string(),
            category: category.to_string(),
            amount,
            due_date: due_date.to_string(),
            path: None,
            description: None,
            status: Some("Open".to_string()),
            payment_date: None,
        }
    }

    fn sample() -> Vec<Invoice> {
        vec![
            invoice("A", "Rent", 100.0, "2024-01-05"),
            invoice("B", "Rent", 50.0, "2024-02-10"),
        ]
    }

    #[test]
    fn test_aggregate_by_month_takes_yyyy_mm_prefix() {
        let groups = aggregate_invoices(&sample(), InvoiceDimension::Month);
        assert_eq!(
            groups,
            vec![
                GroupTotal { key: "2024-01".to_string(), total: 100.0 },
                GroupTotal { key: "2024-02".to_string(), total: 50.0 },
            ]
        );
    }

    #[test]
    fn test_aggregate_by_creditor_sums_per_key() {
        let mut records = sample();
        records.push(invoice("A", "Power", 25.0, "2024-03-01"));
        let groups = aggregate_invoices(&records, InvoiceDimension::Creditor);
        assert_eq!(
            groups,
            vec![
                GroupTotal { key: "A".to_string(), total: 125.0 },
                GroupTotal { key: "B".to_string(), total: 50.0 },
            ]
        );
    }

    #[test]
    fn test_aggregate_emits_groups_in_first_occurrence_order() {
        let records = vec![
            invoice("B", "Rent", 1.0, "2024-02-10"),
            invoice("A", "Rent", 2.0, "2024-01-05"),
            invoice("B", "Power", 4.0, "2024-02-20"),
        ];
        let groups = aggregate_invoices(&records, InvoiceDimension::Creditor);
        assert_eq!(groups[0].key, "B");
        assert_eq!(groups[0].total, 5.0);
        assert_eq!(groups[1].key, "A");
    }

    #[test]
    fn test_aggregate_empty_input_yields_no_groups() {
        assert!(aggregate_invoices(&[], InvoiceDimension::Month).is_empty());
    }

    #[test]
    fn test_missing_status_groups_under_empty_key() {
        let mut records = sample();
        records[1].status = None;
        let groups = aggregate_invoices(&records, InvoiceDimension::Status);
        assert_eq!(
            groups,
            vec![
                GroupTotal { key: "Open".to_string(), total: 100.0 },
                GroupTotal { key: String::new(), total: 50.0 },
            ]
        );
    }

    #[test]
    fn test_aggregation_conserves_the_summary_total() {
        let mut records = sample();
        records.push(invoice("A", "Power", -25.5, "2024-03-01"));
        records.push(invoice("C", "Rent", 0.25, ""));
        let total = summarize(&records).total;
        for dimension in [
            InvoiceDimension::Creditor,
            InvoiceDimension::Category,
            InvoiceDimension::Month,
            InvoiceDimension::Status,
        ] {
            let grouped: f64 = aggregate_invoices(&records, dimension)
                .iter()
                .map(|g| g.total)
                .sum();
            assert_eq!(grouped, total);
        }
    }

    #[test]
    fn test_short_due_date_groups_as_is() {
        let records = vec![invoice("A", "Rent", 10.0, "2024")];
        let groups = aggregate_invoices(&records, InvoiceDimension::Month);
        assert_eq!(groups[0].key, "2024");
    }

    #[test]
    fn test_summarize_counts_and_totals() {
        let summary = summarize(&sample());
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, 150.0);
    }

    #[test]
    fn test_summarize_empty_is_zero() {
        let summary = summarize::<Invoice>(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn test_summarize_treats_negative_amounts_literally() {
        let records = vec![
            invoice("A", "Rent", 100.0, "2024-01-05"),
            invoice("A", "Credit note", -40.0, "2024-01-08"),
        ];
        assert_eq!(summarize(&records).total, 60.0);
    }

    #[test]
    fn test_difference_is_revenues_minus_invoices() {
        assert_eq!(difference(150.0, 200.0), 50.0);
        assert_eq!(difference(200.0, 150.0), -50.0);
        assert_eq!(difference(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_dimension_parsing() {
        assert_eq!("month".parse::<InvoiceDimension>().unwrap(), InvoiceDimension::Month);
        assert_eq!("type".parse::<RevenueDimension>().unwrap(), RevenueDimension::RevenueType);
        let err = "vendor".parse::<InvoiceDimension>().unwrap_err();
        assert!(err.to_string().contains("vendor"), "got: {err}");
    }

    #[test]
    fn test_revenue_aggregation_by_source() {
        let revenues = vec![
            Revenue {
                id: None,
                source: "Client X".to_string(),
                revenue_type: "Fees".to_string(),
                amount: 300.0,
                receipt_date: "2024-01-15".to_string(),
                description: None,
                path: None,
            },
            Revenue {
                id: None,
                source: "Client X".to_string(),
                revenue_type: "Fees".to_string(),
                amount: 200.0,
                receipt_date: "2024-02-15".to_string(),
                description: None,
                path: None,
            },
        ];
        let groups = aggregate_revenues(&revenues, RevenueDimension::Source);
        assert_eq!(groups, vec![GroupTotal { key: "Client X".to_string(), total: 500.0 }]);
        let months = aggregate_revenues(&revenues, RevenueDimension::Month);
        assert_eq!(months.len(), 2);
    }
}
