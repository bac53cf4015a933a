use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::settings::{load_settings, save_settings};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = dir;
    }

    let dir = std::path::PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&dir)?;
    std::fs::create_dir_all(dir.join("exports"))?;

    let conn = get_connection(&dir.join("bureau.db"))?;
    init_db(&conn)?;
    save_settings(&settings)?;

    println!("Initialized bureau in {}", dir.display());
    Ok(())
}
