use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::DashboardArgs;
use crate::db;
use crate::db::get_connection;
use crate::error::Result;
use crate::filter::{filter_invoices, filter_revenues};
use crate::fmt::money;
use crate::reports;
use crate::reports::{GroupTotal, InvoiceDimension, RevenueDimension};
use crate::settings::db_path;

fn breakdown_table(title: &str, dimension_label: &str, groups: &[GroupTotal]) -> String {
    if groups.is_empty() {
        return format!("{title}\nNo matching records.");
    }
    let mut table = Table::new();
    table.set_header(vec![dimension_label, "Total"]);
    for group in groups {
        let key: &str = if group.key.is_empty() { "\u{2014}" } else { &group.key };
        table.add_row(vec![Cell::new(key), Cell::new(money(group.total))]);
    }
    format!("{title}\n{table}")
}

pub fn run(args: &DashboardArgs) -> Result<()> {
    let invoice_dim: InvoiceDimension = args.by.parse()?;
    let revenue_dim: RevenueDimension = args.revenues_by.parse()?;

    let conn = get_connection(&db_path())?;
    let invoices = filter_invoices(&db::list_invoices(&conn)?, &args.invoice_filter());
    let revenues = filter_revenues(&db::list_revenues(&conn)?, &args.revenue_filter());

    let invoice_summary = reports::summarize(&invoices);
    let revenue_summary = reports::summarize(&revenues);
    let difference = reports::difference(invoice_summary.total, revenue_summary.total);
    let difference_str = if difference < 0.0 {
        money(difference).red().to_string()
    } else {
        money(difference).green().to_string()
    };

    let mut kpis = Table::new();
    kpis.set_header(vec!["", "Count", "Total"]);
    kpis.add_row(vec![
        Cell::new("Invoices"),
        Cell::new(invoice_summary.count),
        Cell::new(money(invoice_summary.total)),
    ]);
    kpis.add_row(vec![
        Cell::new("Revenues"),
        Cell::new(revenue_summary.count),
        Cell::new(money(revenue_summary.total)),
    ]);
    kpis.add_row(vec![
        Cell::new("Difference"),
        Cell::new(""),
        Cell::new(difference_str),
    ]);
    println!("Dashboard\n{kpis}");

    println!(
        "\n{}",
        breakdown_table(
            &format!("Invoices by {}", invoice_dim.label().to_lowercase()),
            invoice_dim.label(),
            &reports::aggregate_invoices(&invoices, invoice_dim),
        )
    );
    println!(
        "\n{}",
        breakdown_table(
            &format!("Revenues by {}", revenue_dim.label().to_lowercase()),
            revenue_dim.label(),
            &reports::aggregate_revenues(&revenues, revenue_dim),
        )
    );
    Ok(())
}
