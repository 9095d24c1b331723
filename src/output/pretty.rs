use colored::Colorize;

use crate::model::{
    StatusCount, TaskTitle, TaskWithContact, TaskWithOwner, User, UserContact, UserTask,
    UserTaskCount, UserTaskDetail,
};
use crate::seed::SeedReport;

/// A row that renders as one line of a pretty listing.
pub trait PrettyRow {
    fn pretty_line(&self) -> String;
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// First line of a description, shortened for listings.
fn snippet(description: Option<&str>) -> String {
    let text = description.unwrap_or("").lines().next().unwrap_or("");
    if text.chars().count() > 48 {
        format!("{}…", text.chars().take(47).collect::<String>())
    } else {
        text.to_string()
    }
}

fn task_id(id: i64) -> String {
    format!("#{id:<5}").dimmed().to_string()
}

impl PrettyRow for UserTask {
    fn pretty_line(&self) -> String {
        format!(
            "{} {}  [{}]  {}",
            task_id(self.id),
            or_dash(self.title.as_deref()).bold(),
            self.status.cyan(),
            snippet(self.description.as_deref()).dimmed()
        )
    }
}

impl PrettyRow for TaskWithOwner {
    fn pretty_line(&self) -> String {
        format!(
            "{} {}  {}  {}",
            task_id(self.id),
            or_dash(self.title.as_deref()).bold(),
            or_dash(self.owner.as_deref()).yellow(),
            snippet(self.description.as_deref()).dimmed()
        )
    }
}

impl PrettyRow for TaskWithContact {
    fn pretty_line(&self) -> String {
        format!(
            "{} {}  {} <{}>  {}",
            task_id(self.id),
            or_dash(self.title.as_deref()).bold(),
            or_dash(self.fullname.as_deref()).yellow(),
            or_dash(self.email.as_deref()),
            snippet(self.description.as_deref()).dimmed()
        )
    }
}

impl PrettyRow for TaskTitle {
    fn pretty_line(&self) -> String {
        format!("{} {}", task_id(self.id), or_dash(self.title.as_deref()).bold())
    }
}

impl PrettyRow for User {
    fn pretty_line(&self) -> String {
        format!(
            "{} {}  <{}>",
            format!("@{:<5}", self.id).dimmed(),
            or_dash(self.fullname.as_deref()).bold(),
            or_dash(self.email.as_deref())
        )
    }
}

impl PrettyRow for UserContact {
    fn pretty_line(&self) -> String {
        format!(
            "  {}  <{}>",
            or_dash(self.fullname.as_deref()).bold(),
            or_dash(self.email.as_deref())
        )
    }
}

impl PrettyRow for UserTaskDetail {
    fn pretty_line(&self) -> String {
        format!(
            "  {}  {}  {}",
            or_dash(self.fullname.as_deref()).yellow(),
            or_dash(self.title.as_deref()).bold(),
            snippet(self.description.as_deref()).dimmed()
        )
    }
}

impl PrettyRow for StatusCount {
    fn pretty_line(&self) -> String {
        format!("  {:<14} {}", self.status.cyan(), self.count.to_string().bold())
    }
}

impl PrettyRow for UserTaskCount {
    fn pretty_line(&self) -> String {
        format!(
            "  {:<32} {}",
            or_dash(self.fullname.as_deref()),
            self.task_count.to_string().bold()
        )
    }
}

/// Format a list of rows under a title
pub fn format_rows_pretty<T: PrettyRow>(rows: &[T], title: &str) -> String {
    if rows.is_empty() {
        return format!("{} (0 items)\n  No items", title);
    }

    let mut output = format!("{} ({} items)\n", title, rows.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for row in rows {
        output.push_str(&row.pretty_line());
        output.push('\n');
    }

    output
}

/// Format the outcome of an update or delete
pub fn format_change_pretty(action: &str, affected: usize) -> String {
    if affected == 0 {
        format!("{} {} (no matching row)", "-".yellow(), action)
    } else {
        format!("{} {} ({} row(s))", "✓".green(), action, affected)
    }
}

/// Format the id of a newly created row
pub fn format_created_pretty(what: &str, id: i64) -> String {
    format!("{} Created {} #{}", "✓".green(), what, id)
}

/// Format a seeding summary
pub fn format_seed_pretty(report: &SeedReport) -> String {
    format!(
        "{} Seeded {} statuses, {} users, {} tasks",
        "✓".green(),
        report.statuses.to_string().bold(),
        report.users.to_string().bold(),
        report.tasks.to_string().bold()
    )
}

/// Format the table list after schema initialization
pub fn format_tables_pretty(path: &str, tables: &[String]) -> String {
    let mut output = format!("{} Schema ready in {}\n", "✓".green(), path.bold());
    for table in tables {
        output.push_str(&format!("  {}\n", table.cyan()));
    }
    output
}
