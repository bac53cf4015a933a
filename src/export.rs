use std::path::Path;

use serde::Serialize;

use crate::error::{BureauError, Result};

// ---------------------------------------------------------------------------
// CSV export of a (filtered) record snapshot
// ---------------------------------------------------------------------------

/// Serialize records to CSV text: UTF-8, comma-separated, LF-terminated,
/// header row from the struct field names, standard double-quote quoting.
/// Rows come out in input order; amounts use Rust's shortest-round-trip
/// float formatting, so a re-parse reproduces the exact values.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for record in records {
        wtr.serialize(record)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| BureauError::Other(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| BureauError::Other(format!("CSV not UTF-8: {e}")))
}

pub fn write_csv<T: Serialize>(records: &[T], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_csv(records)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Invoice, Revenue, Task};

    fn invoice(creditor: &str, amount: f64) -> Invoice {
        Invoice {
            id: Some(1),
            creditor: creditor.to_string(),
            concern: "Office".to_string(),
            category: "Rent".to_string(),
            amount,
            due_date: "2024-01-05".to_string(),
            path: None,
            description: None,
            status: Some("Open".to_string()),
            payment_date: None,
        }
    }

    fn parse_invoices(csv_text: &str) -> Vec<Invoice> {
        csv::Reader::from_reader(csv_text.as_bytes())
            .deserialize()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_header_row_uses_field_names() {
        let out = to_csv(&[invoice("A", 100.0)]).unwrap();
        let header = out.lines().next().unwrap();
        assert_eq!(
            header,
            "id,creditor,concern,category,amount,due_date,path,description,status,payment_date"
        );
    }

    #[test]
    fn test_round_trip_plain_records() {
        let records = vec![invoice("A", 100.0), invoice("B", 50.0)];
        let parsed = parse_invoices(&to_csv(&records).unwrap());
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_round_trip_embedded_commas_quotes_and_newlines() {
        let mut inv = invoice("Meier, Huber & Co.", 1234.5);
        inv.description = Some("He said \"next month\",\nthen paid".to_string());
        inv.path = Some("/docs/a,b.pdf".to_string());
        let records = vec![inv];
        let out = to_csv(&records).unwrap();
        assert!(out.contains("\"Meier, Huber & Co.\""));
        assert!(out.contains("\"\"next month\"\""));
        assert_eq!(parse_invoices(&out), records);
    }

    #[test]
    fn test_round_trip_preserves_fractional_amounts_exactly() {
        // 0.1 + 0.2 is the classic non-representable sum; shortest-round-trip
        // formatting must bring the bit pattern back unchanged.
        let records = vec![invoice("A", 0.1 + 0.2), invoice("B", -9007.199254740993)];
        let parsed = parse_invoices(&to_csv(&records).unwrap());
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_rows_in_input_order_and_deterministic() {
        let records = vec![invoice("B", 50.0), invoice("A", 100.0)];
        let out = to_csv(&records).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("1,B,"));
        assert!(lines[2].starts_with("1,A,"));
        assert_eq!(out, to_csv(&records).unwrap());
    }

    #[test]
    fn test_lines_are_lf_terminated() {
        let out = to_csv(&[invoice("A", 100.0)]).unwrap();
        assert!(out.ends_with('\n'));
        assert!(!out.contains('\r'));
    }

    #[test]
    fn test_empty_snapshot_exports_empty_text() {
        let out = to_csv::<Invoice>(&[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_revenue_and_task_exports_carry_their_own_fields() {
        let revenues = vec![Revenue {
            id: Some(3),
            source: "Client X".to_string(),
            revenue_type: "Fees".to_string(),
            amount: 200.0,
            receipt_date: "2024-03-01".to_string(),
            description: None,
            path: None,
        }];
        let out = to_csv(&revenues).unwrap();
        assert!(out.starts_with("id,source,revenue_type,amount,receipt_date,description,path\n"));

        let tasks = vec![Task {
            id: Some(4),
            title: "File VAT return".to_string(),
            description: String::new(),
            status: "Pending".to_string(),
            priority: "High".to_string(),
            due_date: "2024-05-31".to_string(),
            creation_date: "2024-05-01".to_string(),
            category: "Taxes".to_string(),
            attachments: None,
        }];
        let out = to_csv(&tasks).unwrap();
        assert!(out
            .starts_with("id,title,description,status,priority,due_date,creation_date,category,attachments\n"));
    }

    #[test]
    fn test_write_csv_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports").join("invoices.csv");
        write_csv(&[invoice("A", 100.0)], &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_invoices(&content), vec![invoice("A", 100.0)]);
    }
}
