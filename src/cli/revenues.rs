use comfy_table::{Cell, Table};

use crate::db;
use crate::db::get_connection;
use crate::error::Result;
use crate::filter::{filter_revenues, RevenueFilter};
use crate::fmt::money;
use crate::models::Revenue;
use crate::reports;
use crate::settings::db_path;

pub fn add(
    source: &str,
    revenue_type: &str,
    amount: f64,
    receipt_date: &str,
    description: Option<String>,
    path: Option<String>,
) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let id = db::add_revenue(
        &conn,
        &Revenue {
            id: None,
            source: source.to_string(),
            revenue_type: revenue_type.to_string(),
            amount,
            receipt_date: receipt_date.to_string(),
            description,
            path,
        },
    )?;
    println!("Added revenue {id}: {source}, {}", money(amount));
    Ok(())
}

pub fn list(filter: &RevenueFilter) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let snapshot = db::list_revenues(&conn)?;
    let revenues = filter_revenues(&snapshot, filter);
    if revenues.is_empty() {
        println!("No revenues found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Source", "Type", "Amount", "Date", "Description"]);
    for rev in &revenues {
        table.add_row(vec![
            Cell::new(rev.id.unwrap_or_default()),
            Cell::new(&rev.source),
            Cell::new(&rev.revenue_type),
            Cell::new(money(rev.amount)),
            Cell::new(&rev.receipt_date),
            Cell::new(rev.description.as_deref().unwrap_or("")),
        ]);
    }

    let summary = reports::summarize(&revenues);
    println!(
        "Revenues ({} of {}, total: {})\n{table}",
        summary.count,
        snapshot.len(),
        money(summary.total)
    );
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let conn = get_connection(&db_path())?;
    db::delete_revenue(&conn, id)?;
    println!("Deleted revenue {id}.");
    Ok(())
}
