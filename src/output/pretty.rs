use colored::Colorize;

use crate::features::kanban::{Column, TaskChange};
use crate::tasks::{Priority, Status, Task};

/// Format board columns one under another.
pub fn format_columns_pretty(columns: &[Column<'_>]) -> String {
    let mut output = Vec::new();

    for column in columns {
        let header = format!("{} ({})", column.status.label(), column.tasks.len());
        output.push(status_colored(column.status, &header).bold().to_string());
        output.push("─".repeat(50));

        if column.tasks.is_empty() {
            output.push(format!("  {}", "No tasks".dimmed()));
        }
        for task in &column.tasks {
            output.push(format_task_line(task));
        }
        output.push(String::new());
    }

    output.join("\n").trim_end().to_string()
}

/// Format a single task as one line: position, title, priority, due date.
pub fn format_task_line(task: &Task) -> String {
    let mut line = format!("  {:>2}. {}", task.position + 1, task.title.bold());

    if let Some(priority) = task.priority {
        line.push_str(&format!("  {}", priority_colored(priority)));
    }

    if let Some(due) = task.due_date {
        line.push_str(&format!("  {}", due.to_string().yellow()));
    }

    line.push_str(&format!("  {}", task.id.dimmed()));
    line
}

/// Format the changes a move produced.
pub fn format_changes_pretty(changes: &[TaskChange]) -> String {
    if changes.is_empty() {
        return "No changes".dimmed().to_string();
    }

    let mut output = vec![format!("Changes ({})", changes.len()).bold().to_string()];
    for change in changes {
        let mut line = format!("  {}", change.id);
        if let Some(status) = &change.status {
            line.push_str(&format!(
                "  {} → {}",
                status_colored(status.from, status.from.as_str()),
                status_colored(status.to, status.to.as_str())
            ));
        }
        if let Some(position) = &change.position {
            line.push_str(&format!("  #{} → #{}", position.from + 1, position.to + 1));
        }
        output.push(line);
    }
    output.join("\n")
}

fn status_colored(status: Status, text: &str) -> colored::ColoredString {
    match status {
        Status::Todo => text.white(),
        Status::InProgress => text.cyan(),
        Status::Done => text.green(),
    }
}

fn priority_colored(priority: Priority) -> colored::ColoredString {
    let text = format!("!{}", priority.as_str());
    match priority {
        Priority::High => text.red(),
        Priority::Medium => text.yellow(),
        Priority::Low => text.blue(),
    }
}
