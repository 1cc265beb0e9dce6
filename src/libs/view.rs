use super::task::Task;
use crate::libs::messages::Message;
use crate::msg_print;
use prettytable::{row, Table};

/// Console rendering for task data.
pub struct View {}

impl View {
    /// Renders a list of tasks as a table, newest work first as provided
    /// by the store's visible ordering.
    pub fn tasks(tasks: &[&Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "STATUS", "TITLE", "DESCRIPTION", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                if task.completed { "done" } else { "open" },
                task.title,
                task.description.as_deref().unwrap_or(""),
                task.created_at
            ]);
        }
        table.printstd();
    }

    /// Renders a single task in detail, one field per row.
    pub fn task(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description.as_deref().unwrap_or("")]);
        table.add_row(row!["Status", if task.completed { "done" } else { "open" }]);
        table.add_row(row!["Created", task.created_at]);
        table.add_row(row!["Updated", task.updated_at]);
        table.printstd();
    }

    /// Prints the summary counts line shown under every listing.
    pub fn summary(total: usize, active: usize, completed: usize) {
        msg_print!(Message::TaskCounts { total, active, completed });
    }
}
