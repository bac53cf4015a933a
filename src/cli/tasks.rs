use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::db;
use crate::db::get_connection;
use crate::error::{BureauError, Result};
use crate::filter::{filter_tasks, TaskFilter};
use crate::models::Task;
use crate::settings::db_path;

#[allow(clippy::too_many_arguments)]
pub fn add(
    title: &str,
    description: &str,
    status: &str,
    priority: &str,
    due_date: &str,
    category: &str,
    attachments: Option<String>,
) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let id = db::add_task(
        &conn,
        &Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            priority: priority.to_string(),
            due_date: due_date.to_string(),
            creation_date: String::new(),
            category: category.to_string(),
            attachments,
        },
    )?;
    println!("Added task {id}: {title}");
    Ok(())
}

pub fn list(filter: &TaskFilter) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let snapshot = db::list_tasks(&conn)?;
    let tasks = filter_tasks(&snapshot, filter);
    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Category", "Priority", "Status", "Due date", "Created"]);
    for task in &tasks {
        let priority = if task.priority == "High" {
            task.priority.red().to_string()
        } else {
            task.priority.clone()
        };
        table.add_row(vec![
            Cell::new(task.id.unwrap_or_default()),
            Cell::new(&task.title),
            Cell::new(&task.category),
            Cell::new(priority),
            Cell::new(&task.status),
            Cell::new(&task.due_date),
            Cell::new(&task.creation_date),
        ]);
    }
    println!("Tasks ({} of {})\n{table}", tasks.len(), snapshot.len());
    Ok(())
}

/// Merge the given fields over the stored task and rewrite it.
#[allow(clippy::too_many_arguments)]
pub fn update(
    id: i64,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    due_date: Option<String>,
    category: Option<String>,
    attachments: Option<String>,
) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let mut task = db::list_tasks(&conn)?
        .into_iter()
        .find(|t| t.id == Some(id))
        .ok_or_else(|| BureauError::Other(format!("No task with id {id}")))?;

    if let Some(v) = title {
        task.title = v;
    }
    if let Some(v) = description {
        task.description = v;
    }
    if let Some(v) = status {
        task.status = v;
    }
    if let Some(v) = priority {
        task.priority = v;
    }
    if let Some(v) = due_date {
        task.due_date = v;
    }
    if let Some(v) = category {
        task.category = v;
    }
    if attachments.is_some() {
        task.attachments = attachments;
    }

    db::update_task(&conn, id, &task)?;
    println!("Updated task {id}.");
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let conn = get_connection(&db_path())?;
    db::delete_task(&conn, id)?;
    println!("Deleted task {id}.");
    Ok(())
}
