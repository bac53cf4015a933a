use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use log::info;
use rusqlite::Connection;

use crate::error::{BureauError, Result};
use crate::models::{AdminDocument, Invoice, Revenue, Task, STATUS_OPEN, STATUS_OVERDUE, STATUS_PAID};

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS invoices (
    id INTEGER PRIMARY KEY,
    creditor TEXT NOT NULL,
    concern TEXT NOT NULL,
    category TEXT NOT NULL,
    amount REAL NOT NULL,
    due_date TEXT NOT NULL,
    path TEXT,
    description TEXT,
    status TEXT,
    payment_date TEXT
);

CREATE TABLE IF NOT EXISTS revenues (
    id INTEGER PRIMARY KEY,
    source TEXT NOT NULL,
    revenue_type TEXT NOT NULL,
    amount REAL NOT NULL,
    receipt_date TEXT NOT NULL,
    description TEXT,
    path TEXT
);

CREATE TABLE IF NOT EXISTS admin_documents (
    id INTEGER PRIMARY KEY,
    concern TEXT NOT NULL,
    category TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL,
    path TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL,
    priority TEXT NOT NULL,
    due_date TEXT NOT NULL,
    creation_date TEXT NOT NULL,
    category TEXT NOT NULL,
    attachments TEXT
);

CREATE TABLE IF NOT EXISTS creditors (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE IF NOT EXISTS concerns (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE IF NOT EXISTS categories (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE IF NOT EXISTS sources (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE IF NOT EXISTS revenue_types (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE IF NOT EXISTS doc_concerns (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE IF NOT EXISTS doc_categories (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE IF NOT EXISTS task_categories (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE IF NOT EXISTS task_priorities (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE IF NOT EXISTS task_statuses (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

pub fn add_invoice(conn: &Connection, inv: &Invoice) -> Result<i64> {
    conn.execute(
        "INSERT INTO invoices (creditor, concern, category, amount, due_date, path, description, status, payment_date) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        rusqlite::params![
            inv.creditor,
            inv.concern,
            inv.category,
            inv.amount,
            inv.due_date,
            inv.path,
            inv.description,
            inv.status,
            inv.payment_date
        ],
    )?;
    let id = conn.last_insert_rowid();
    info!("added invoice {id}: {} / {}", inv.creditor, inv.category);
    Ok(id)
}

/// Read the invoice snapshot in insertion order. Open invoices past their
/// due date are flipped to Overdue and the change is written back before
/// the snapshot is returned; rows with unparseable due dates are left as
/// they are.
pub fn list_invoices(conn: &Connection) -> Result<Vec<Invoice>> {
    let mut stmt = conn.prepare(
        "SELECT id, creditor, concern, category, amount, due_date, path, description, status, payment_date \
         FROM invoices ORDER BY id",
    )?;
    let mut invoices: Vec<Invoice> = stmt
        .query_map([], |row| {
            Ok(Invoice {
                id: row.get(0)?,
                creditor: row.get(1)?,
                concern: row.get(2)?,
                category: row.get(3)?,
                amount: row.get(4)?,
                due_date: row.get(5)?,
                path: row.get(6)?,
                description: row.get(7)?,
                status: row.get(8)?,
                payment_date: row.get(9)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let today = chrono::Local::now().date_naive();
    for inv in &mut invoices {
        if inv.status.as_deref() != Some(STATUS_OPEN) {
            continue;
        }
        let Ok(due) = NaiveDate::parse_from_str(&inv.due_date, "%Y-%m-%d") else {
            continue;
        };
        if due < today {
            inv.status = Some(STATUS_OVERDUE.to_string());
            conn.execute(
                "UPDATE invoices SET status = ?1 WHERE id = ?2",
                rusqlite::params![STATUS_OVERDUE, inv.id],
            )?;
        }
    }
    Ok(invoices)
}

pub fn delete_invoice(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM invoices WHERE id = ?1", [id])?;
    info!("deleted invoice {id}");
    Ok(())
}

pub fn pay_invoice(conn: &Connection, id: i64) -> Result<()> {
    conn.execute(
        "UPDATE invoices SET payment_date = ?1, status = ?2 WHERE id = ?3",
        rusqlite::params![today(), STATUS_PAID, id],
    )?;
    info!("paid invoice {id}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Revenues
// ---------------------------------------------------------------------------

pub fn add_revenue(conn: &Connection, rev: &Revenue) -> Result<i64> {
    conn.execute(
        "INSERT INTO revenues (source, revenue_type, amount, receipt_date, description, path) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
            rev.source,
            rev.revenue_type,
            rev.amount,
            rev.receipt_date,
            rev.description,
            rev.path
        ],
    )?;
    let id = conn.last_insert_rowid();
    info!("added revenue {id}: {}", rev.source);
    Ok(id)
}

pub fn list_revenues(conn: &Connection) -> Result<Vec<Revenue>> {
    let mut stmt = conn.prepare(
        "SELECT id, source, revenue_type, amount, receipt_date, description, path \
         FROM revenues ORDER BY id",
    )?;
    let revenues = stmt
        .query_map([], |row| {
            Ok(Revenue {
                id: row.get(0)?,
                source: row.get(1)?,
                revenue_type: row.get(2)?,
                amount: row.get(3)?,
                receipt_date: row.get(4)?,
                description: row.get(5)?,
                path: row.get(6)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(revenues)
}

pub fn delete_revenue(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM revenues WHERE id = ?1", [id])?;
    info!("deleted revenue {id}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Admin documents
// ---------------------------------------------------------------------------

pub fn add_document(conn: &Connection, doc: &AdminDocument) -> Result<i64> {
    conn.execute(
        "INSERT INTO admin_documents (concern, category, description, status, path) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![doc.concern, doc.category, doc.description, doc.status, doc.path],
    )?;
    let id = conn.last_insert_rowid();
    info!("added document {id}: {}", doc.concern);
    Ok(id)
}

pub fn list_documents(conn: &Connection) -> Result<Vec<AdminDocument>> {
    let mut stmt = conn.prepare(
        "SELECT id, concern, category, description, status, path FROM admin_documents ORDER BY id",
    )?;
    let docs = stmt
        .query_map([], |row| {
            Ok(AdminDocument {
                id: row.get(0)?,
                concern: row.get(1)?,
                category: row.get(2)?,
                description: row.get(3)?,
                status: row.get(4)?,
                path: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(docs)
}

pub fn delete_document(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM admin_documents WHERE id = ?1", [id])?;
    info!("deleted document {id}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Inserts the task with today's creation_date; the value on the way in is
/// ignored, matching how ids are assigned.
pub fn add_task(conn: &Connection, task: &Task) -> Result<i64> {
    conn.execute(
        "INSERT INTO tasks (title, description, status, priority, due_date, creation_date, category, attachments) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![
            task.title,
            task.description,
            task.status,
            task.priority,
            task.due_date,
            today(),
            task.category,
            task.attachments
        ],
    )?;
    let id = conn.last_insert_rowid();
    info!("added task {id}: {}", task.title);
    Ok(id)
}

pub fn list_tasks(conn: &Connection) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, status, priority, due_date, creation_date, category, attachments \
         FROM tasks ORDER BY id",
    )?;
    let tasks = stmt
        .query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                status: row.get(3)?,
                priority: row.get(4)?,
                due_date: row.get(5)?,
                creation_date: row.get(6)?,
                category: row.get(7)?,
                attachments: row.get(8)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(tasks)
}

/// Full rewrite of the mutable fields; creation_date is re-stamped to
/// today, the behavior the original task editor had.
pub fn update_task(conn: &Connection, id: i64, task: &Task) -> Result<()> {
    conn.execute(
        "UPDATE tasks SET title = ?1, description = ?2, status = ?3, priority = ?4, due_date = ?5, \
         creation_date = ?6, category = ?7, attachments = ?8 WHERE id = ?9",
        rusqlite::params![
            task.title,
            task.description,
            task.status,
            task.priority,
            task.due_date,
            today(),
            task.category,
            task.attachments,
            id
        ],
    )?;
    info!("updated task {id}");
    Ok(())
}

pub fn delete_task(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    info!("deleted task {id}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Vocabularies — the choice lists behind the filter/add UIs. The engine
// never reads these; they exist for the CLI and for parity with the
// record fields they feed.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    Creditors,
    Concerns,
    Categories,
    Sources,
    RevenueTypes,
    DocConcerns,
    DocCategories,
    TaskCategories,
    TaskPriorities,
    TaskStatuses,
}

pub const ALL_VOCABULARIES: &[Vocabulary] = &[
    Vocabulary::Creditors,
    Vocabulary::Concerns,
    Vocabulary::Categories,
    Vocabulary::Sources,
    Vocabulary::RevenueTypes,
    Vocabulary::DocConcerns,
    Vocabulary::DocCategories,
    Vocabulary::TaskCategories,
    Vocabulary::TaskPriorities,
    Vocabulary::TaskStatuses,
];

impl Vocabulary {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Creditors => "creditors",
            Self::Concerns => "concerns",
            Self::Categories => "categories",
            Self::Sources => "sources",
            Self::RevenueTypes => "revenue-types",
            Self::DocConcerns => "doc-concerns",
            Self::DocCategories => "doc-categories",
            Self::TaskCategories => "task-categories",
            Self::TaskPriorities => "task-priorities",
            Self::TaskStatuses => "task-statuses",
        }
    }

    // Closed set, so splicing the table name into SQL is safe.
    fn table(&self) -> &'static str {
        match self {
            Self::Creditors => "creditors",
            Self::Concerns => "concerns",
            Self::Categories => "categories",
            Self::Sources => "sources",
            Self::RevenueTypes => "revenue_types",
            Self::DocConcerns => "doc_concerns",
            Self::DocCategories => "doc_categories",
            Self::TaskCategories => "task_categories",
            Self::TaskPriorities => "task_priorities",
            Self::TaskStatuses => "task_statuses",
        }
    }
}

impl FromStr for Vocabulary {
    type Err = BureauError;

    fn from_str(s: &str) -> Result<Self> {
        ALL_VOCABULARIES
            .iter()
            .find(|v| v.key() == s)
            .copied()
            .ok_or_else(|| BureauError::UnknownVocabulary(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VocabEntry {
    pub id: i64,
    pub name: String,
}

pub fn add_term(conn: &Connection, vocab: Vocabulary, name: &str) -> Result<i64> {
    conn.execute(
        &format!("INSERT INTO {} (name) VALUES (?1)", vocab.table()),
        [name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_terms(conn: &Connection, vocab: Vocabulary) -> Result<Vec<VocabEntry>> {
    let mut stmt = conn.prepare(&format!("SELECT id, name FROM {} ORDER BY id", vocab.table()))?;
    let terms = stmt
        .query_map([], |row| {
            Ok(VocabEntry {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(terms)
}

pub fn delete_term(conn: &Connection, vocab: Vocabulary, id: i64) -> Result<()> {
    conn.execute(&format!("DELETE FROM {} WHERE id = ?1", vocab.table()), [id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    fn invoice(due_date: &str, status: Option<&str>) -> Invoice {
        Invoice {
            id: None,
            creditor: "Alpha Property AG".to_string(),
            concern: "Office".to_string(),
            category: "Rent".to_string(),
            amount: 1200.0,
            due_date: due_date.to_string(),
            path: None,
            description: None,
            status: status.map(str::to_string),
            payment_date: None,
        }
    }

    #[test]
    fn test_init_db_creates_tables() {
        let (_dir, conn) = test_db();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();
        for expected in &["invoices", "revenues", "admin_documents", "tasks", "creditors", "task_statuses"] {
            assert!(tables.contains(&expected.to_string()), "missing table: {expected}");
        }
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let (_dir, conn) = test_db();
        init_db(&conn).unwrap();
    }

    #[test]
    fn test_add_and_list_invoice_round_trip() {
        let (_dir, conn) = test_db();
        let id = add_invoice(&conn, &invoice("2999-01-05", Some(STATUS_OPEN))).unwrap();
        let invoices = list_invoices(&conn).unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].id, Some(id));
        assert_eq!(invoices[0].creditor, "Alpha Property AG");
        assert_eq!(invoices[0].amount, 1200.0);
        assert_eq!(invoices[0].status.as_deref(), Some(STATUS_OPEN));
    }

    #[test]
    fn test_list_invoices_marks_past_due_open_as_overdue() {
        let (_dir, conn) = test_db();
        add_invoice(&conn, &invoice("2020-01-05", Some(STATUS_OPEN))).unwrap();
        let invoices = list_invoices(&conn).unwrap();
        assert_eq!(invoices[0].status.as_deref(), Some(STATUS_OVERDUE));

        // The flip is persisted, not just reported
        let stored: String = conn
            .query_row("SELECT status FROM invoices", [], |r| r.get(0))
            .unwrap();
        assert_eq!(stored, STATUS_OVERDUE);
    }

    #[test]
    fn test_list_invoices_leaves_future_and_paid_alone() {
        let (_dir, conn) = test_db();
        add_invoice(&conn, &invoice("2999-01-05", Some(STATUS_OPEN))).unwrap();
        add_invoice(&conn, &invoice("2020-01-05", Some(STATUS_PAID))).unwrap();
        let invoices = list_invoices(&conn).unwrap();
        assert_eq!(invoices[0].status.as_deref(), Some(STATUS_OPEN));
        assert_eq!(invoices[1].status.as_deref(), Some(STATUS_PAID));
    }

    #[test]
    fn test_list_invoices_skips_unparseable_due_dates() {
        let (_dir, conn) = test_db();
        add_invoice(&conn, &invoice("soon", Some(STATUS_OPEN))).unwrap();
        let invoices = list_invoices(&conn).unwrap();
        assert_eq!(invoices[0].status.as_deref(), Some(STATUS_OPEN));
    }

    #[test]
    fn test_pay_invoice_stamps_status_and_date() {
        let (_dir, conn) = test_db();
        let id = add_invoice(&conn, &invoice("2020-01-05", Some(STATUS_OPEN))).unwrap();
        pay_invoice(&conn, id).unwrap();
        let invoices = list_invoices(&conn).unwrap();
        assert_eq!(invoices[0].status.as_deref(), Some(STATUS_PAID));
        assert!(invoices[0].payment_date.is_some());
    }

    #[test]
    fn test_delete_invoice() {
        let (_dir, conn) = test_db();
        let id = add_invoice(&conn, &invoice("2999-01-05", Some(STATUS_OPEN))).unwrap();
        delete_invoice(&conn, id).unwrap();
        assert!(list_invoices(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_revenue_round_trip() {
        let (_dir, conn) = test_db();
        let rev = Revenue {
            id: None,
            source: "Client X".to_string(),
            revenue_type: "Fees".to_string(),
            amount: 500.0,
            receipt_date: "2024-03-01".to_string(),
            description: Some("Retainer".to_string()),
            path: None,
        };
        let id = add_revenue(&conn, &rev).unwrap();
        let revenues = list_revenues(&conn).unwrap();
        assert_eq!(revenues.len(), 1);
        assert_eq!(revenues[0].id, Some(id));
        assert_eq!(revenues[0].description.as_deref(), Some("Retainer"));
        delete_revenue(&conn, id).unwrap();
        assert!(list_revenues(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_document_round_trip() {
        let (_dir, conn) = test_db();
        let doc = AdminDocument {
            id: None,
            concern: "Insurance".to_string(),
            category: "Contract".to_string(),
            description: "Liability policy".to_string(),
            status: "Archived".to_string(),
            path: "/docs/policy.pdf".to_string(),
        };
        let id = add_document(&conn, &doc).unwrap();
        let docs = list_documents(&conn).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].path, "/docs/policy.pdf");
        delete_document(&conn, id).unwrap();
        assert!(list_documents(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_task_add_update_delete() {
        let (_dir, conn) = test_db();
        let mut task = Task {
            id: None,
            title: "File VAT return".to_string(),
            description: String::new(),
            status: "Pending".to_string(),
            priority: "Normal".to_string(),
            due_date: "2024-05-31".to_string(),
            creation_date: String::new(),
            category: "Taxes".to_string(),
            attachments: None,
        };
        let id = add_task(&conn, &task).unwrap();
        let listed = list_tasks(&conn).unwrap();
        assert_eq!(listed[0].title, "File VAT return");
        assert!(!listed[0].creation_date.is_empty());

        task.status = "Done".to_string();
        update_task(&conn, id, &task).unwrap();
        assert_eq!(list_tasks(&conn).unwrap()[0].status, "Done");

        delete_task(&conn, id).unwrap();
        assert!(list_tasks(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_vocabulary_add_list_delete() {
        let (_dir, conn) = test_db();
        let id = add_term(&conn, Vocabulary::Creditors, "Alpha Property AG").unwrap();
        add_term(&conn, Vocabulary::Creditors, "Beta Utilities").unwrap();
        let terms = list_terms(&conn, Vocabulary::Creditors).unwrap();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].name, "Alpha Property AG");

        delete_term(&conn, Vocabulary::Creditors, id).unwrap();
        assert_eq!(list_terms(&conn, Vocabulary::Creditors).unwrap().len(), 1);

        // Vocabularies are independent tables
        assert!(list_terms(&conn, Vocabulary::Sources).unwrap().is_empty());
    }

    #[test]
    fn test_vocabulary_parses_from_cli_key() {
        assert_eq!("revenue-types".parse::<Vocabulary>().unwrap(), Vocabulary::RevenueTypes);
        assert!("colors".parse::<Vocabulary>().is_err());
    }
}
