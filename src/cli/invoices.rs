use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::db;
use crate::db::get_connection;
use crate::error::Result;
use crate::filter::{filter_invoices, InvoiceFilter};
use crate::fmt::money;
use crate::models::{Invoice, STATUS_OVERDUE, STATUS_PAID};
use crate::reports;
use crate::settings::db_path;

#[allow(clippy::too_many_arguments)]
pub fn add(
    creditor: &str,
    concern: &str,
    category: &str,
    amount: f64,
    due_date: &str,
    path: Option<String>,
    description: Option<String>,
    status: &str,
) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let id = db::add_invoice(
        &conn,
        &Invoice {
            id: None,
            creditor: creditor.to_string(),
            concern: concern.to_string(),
            category: category.to_string(),
            amount,
            due_date: due_date.to_string(),
            path,
            description,
            status: Some(status.to_string()),
            payment_date: None,
        },
    )?;
    println!("Added invoice {id}: {creditor}, {}", money(amount));
    Ok(())
}

pub fn list(filter: &InvoiceFilter) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let snapshot = db::list_invoices(&conn)?;
    let invoices = filter_invoices(&snapshot, filter);
    if invoices.is_empty() {
        println!("No invoices found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "ID", "Creditor", "Concern", "Category", "Amount", "Due date", "Status", "Paid on",
    ]);
    for inv in &invoices {
        let status = inv.status.as_deref().unwrap_or("\u{2014}");
        let status_cell = match status {
            STATUS_PAID => status.green().to_string(),
            STATUS_OVERDUE => status.red().to_string(),
            _ => status.to_string(),
        };
        table.add_row(vec![
            Cell::new(inv.id.unwrap_or_default()),
            Cell::new(&inv.creditor),
            Cell::new(&inv.concern),
            Cell::new(&inv.category),
            Cell::new(money(inv.amount)),
            Cell::new(&inv.due_date),
            Cell::new(status_cell),
            Cell::new(inv.payment_date.as_deref().unwrap_or("")),
        ]);
    }

    let summary = reports::summarize(&invoices);
    println!(
        "Invoices ({} of {}, total: {})\n{table}",
        summary.count,
        snapshot.len(),
        money(summary.total)
    );
    Ok(())
}

pub fn pay(id: i64) -> Result<()> {
    let conn = get_connection(&db_path())?;
    db::pay_invoice(&conn, id)?;
    println!("Invoice {id} marked as paid.");
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let conn = get_connection(&db_path())?;
    db::delete_invoice(&conn, id)?;
    println!("Deleted invoice {id}.");
    Ok(())
}
