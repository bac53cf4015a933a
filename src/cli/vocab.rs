use comfy_table::{Cell, Table};

use crate::db;
use crate::db::{get_connection, Vocabulary, ALL_VOCABULARIES};
use crate::error::Result;
use crate::settings::db_path;

pub fn add(vocabulary: &str, name: &str) -> Result<()> {
    let vocab: Vocabulary = vocabulary.parse()?;
    let conn = get_connection(&db_path())?;
    let id = db::add_term(&conn, vocab, name)?;
    println!("Added {name} to {} (id {id})", vocab.key());
    Ok(())
}

pub fn list(vocabulary: Option<String>) -> Result<()> {
    let Some(vocabulary) = vocabulary else {
        println!("Available vocabularies:");
        for vocab in ALL_VOCABULARIES {
            println!("  {}", vocab.key());
        }
        return Ok(());
    };

    let vocab: Vocabulary = vocabulary.parse()?;
    let conn = get_connection(&db_path())?;
    let terms = db::list_terms(&conn, vocab)?;
    if terms.is_empty() {
        println!("No terms in {}.", vocab.key());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name"]);
    for term in terms {
        table.add_row(vec![Cell::new(term.id), Cell::new(term.name)]);
    }
    println!("{}\n{table}", vocab.key());
    Ok(())
}

pub fn delete(vocabulary: &str, id: i64) -> Result<()> {
    let vocab: Vocabulary = vocabulary.parse()?;
    let conn = get_connection(&db_path())?;
    db::delete_term(&conn, vocab, id)?;
    println!("Deleted term {id} from {}.", vocab.key());
    Ok(())
}
