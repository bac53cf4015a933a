use comfy_table::{Cell, Table};

use crate::db;
use crate::db::get_connection;
use crate::error::Result;
use crate::filter::{filter_documents, DocumentFilter};
use crate::models::AdminDocument;
use crate::settings::db_path;

pub fn add(concern: &str, category: &str, path: &str, description: &str, status: &str) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let id = db::add_document(
        &conn,
        &AdminDocument {
            id: None,
            concern: concern.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            path: path.to_string(),
        },
    )?;
    println!("Added document {id}: {concern} / {category}");
    Ok(())
}

pub fn list(filter: &DocumentFilter) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let snapshot = db::list_documents(&conn)?;
    let docs = filter_documents(&snapshot, filter);
    if docs.is_empty() {
        println!("No documents found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Concern", "Category", "Description", "Status", "Path"]);
    for doc in &docs {
        table.add_row(vec![
            Cell::new(doc.id.unwrap_or_default()),
            Cell::new(&doc.concern),
            Cell::new(&doc.category),
            Cell::new(&doc.description),
            Cell::new(&doc.status),
            Cell::new(&doc.path),
        ]);
    }
    println!("Documents ({} of {})\n{table}", docs.len(), snapshot.len());
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let conn = get_connection(&db_path())?;
    db::delete_document(&conn, id)?;
    println!("Deleted document {id}.");
    Ok(())
}
