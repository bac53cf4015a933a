use std::path::PathBuf;

use log::info;

use crate::db;
use crate::db::get_connection;
use crate::error::Result;
use crate::export::write_csv;
use crate::filter::{
    filter_documents, filter_invoices, filter_revenues, filter_tasks, DocumentFilter,
    InvoiceFilter, RevenueFilter, TaskFilter,
};
use crate::settings::{db_path, get_data_dir};

fn default_path(kind: &str) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    get_data_dir().join("exports").join(format!("{kind}-{date}.csv"))
}

fn report_written(path: &PathBuf, rows: usize) {
    info!("exported {rows} rows to {}", path.display());
    println!("Wrote {} ({rows} rows)", path.display());
}

pub fn invoices(filter: &InvoiceFilter, output: Option<String>) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let records = filter_invoices(&db::list_invoices(&conn)?, filter);
    let path = output.map(PathBuf::from).unwrap_or_else(|| default_path("invoices"));
    write_csv(&records, &path)?;
    report_written(&path, records.len());
    Ok(())
}

pub fn revenues(filter: &RevenueFilter, output: Option<String>) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let records = filter_revenues(&db::list_revenues(&conn)?, filter);
    let path = output.map(PathBuf::from).unwrap_or_else(|| default_path("revenues"));
    write_csv(&records, &path)?;
    report_written(&path, records.len());
    Ok(())
}

pub fn docs(filter: &DocumentFilter, output: Option<String>) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let records = filter_documents(&db::list_documents(&conn)?, filter);
    let path = output.map(PathBuf::from).unwrap_or_else(|| default_path("documents"));
    write_csv(&records, &path)?;
    report_written(&path, records.len());
    Ok(())
}

pub fn tasks(filter: &TaskFilter, output: Option<String>) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let records = filter_tasks(&db::list_tasks(&conn)?, filter);
    let path = output.map(PathBuf::from).unwrap_or_else(|| default_path("tasks"));
    write_csv(&records, &path)?;
    report_written(&path, records.len());
    Ok(())
}
