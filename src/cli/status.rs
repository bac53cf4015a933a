use crate::db::get_connection;
use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join("bureau.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let size = std::fs::metadata(&db_path)?.len();
        println!("DB size:    {}", format_bytes(size));

        let conn = get_connection(&db_path)?;
        let invoices: i64 = conn.query_row("SELECT count(*) FROM invoices", [], |r| r.get(0))?;
        let revenues: i64 = conn.query_row("SELECT count(*) FROM revenues", [], |r| r.get(0))?;
        let documents: i64 =
            conn.query_row("SELECT count(*) FROM admin_documents", [], |r| r.get(0))?;
        let tasks: i64 = conn.query_row("SELECT count(*) FROM tasks", [], |r| r.get(0))?;

        println!();
        println!("Invoices:   {invoices}");
        println!("Revenues:   {revenues}");
        println!("Documents:  {documents}");
        println!("Tasks:      {tasks}");
    } else {
        println!();
        println!("Database not found. Run `bureau init` to set up.");
    }

    Ok(())
}
