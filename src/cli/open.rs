use crate::db;
use crate::db::get_connection;
use crate::error::{BureauError, Result};
use crate::opener::open_attachment;
use crate::settings::db_path;

/// Look up the record's attachment path and hand it to the platform opener.
pub fn run(kind: &str, id: i64) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let path = match kind {
        "invoice" => db::list_invoices(&conn)?
            .into_iter()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| BureauError::Other(format!("No invoice with id {id}")))?
            .path,
        "revenue" => db::list_revenues(&conn)?
            .into_iter()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| BureauError::Other(format!("No revenue with id {id}")))?
            .path,
        "doc" => Some(
            db::list_documents(&conn)?
                .into_iter()
                .find(|r| r.id == Some(id))
                .ok_or_else(|| BureauError::Other(format!("No document with id {id}")))?
                .path,
        ),
        "task" => db::list_tasks(&conn)?
            .into_iter()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| BureauError::Other(format!("No task with id {id}")))?
            .attachments,
        other => {
            return Err(BureauError::Other(format!(
                "Unknown record kind: {other} (expected invoice, revenue, doc or task)"
            )))
        }
    };

    match path {
        Some(p) if !p.is_empty() => {
            open_attachment(&p)?;
            println!("Opening {p}");
            Ok(())
        }
        _ => {
            println!("No attached document.");
            Ok(())
        }
    }
}
