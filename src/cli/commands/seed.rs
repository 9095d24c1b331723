//! Seed and demo commands.
//!
//! Both run as a single unit of work: any failure rolls back every row
//! written by the command.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::catalog::Catalog;
use crate::cli::args::{OutputFormat, SeedArgs};
use crate::config::SeedConfig;
use crate::error::TaskmanError;
use crate::output::{format_change_pretty, format_rows_pretty, format_seed, to_json, PrettyRow};
use crate::seed::{seed_statuses, SeedReport, Seeder};
use crate::storage::Database;

/// Seed sizes after applying CLI overrides to the configured defaults.
fn resolve(args: &SeedArgs, defaults: &SeedConfig) -> SeedConfig {
    SeedConfig {
        users: args.users.unwrap_or(defaults.users),
        tasks_per_user: args.tasks_per_user.unwrap_or(defaults.tasks_per_user),
        rng_seed: args.rng_seed.or(defaults.rng_seed),
    }
}

fn seed_all(conn: &rusqlite::Connection, plan: &SeedConfig) -> Result<SeedReport, TaskmanError> {
    let statuses = seed_statuses(conn)?;
    let mut report = Seeder::new(plan.rng_seed).seed_users_and_tasks(
        conn,
        plan.users,
        plan.tasks_per_user,
    )?;
    report.statuses = statuses;
    Ok(report)
}

/// Execute the seed command.
///
/// # Errors
///
/// Returns an error if seeding fails; nothing is written in that case.
pub fn seed(
    db: &mut Database,
    args: &SeedArgs,
    defaults: &SeedConfig,
    format: OutputFormat,
) -> Result<String, TaskmanError> {
    let plan = resolve(args, defaults);
    let report = db.transaction(|tx| seed_all(tx, &plan))?;
    format_seed(&report, format)
}

/// Collected output of the demo steps.
struct DemoLog {
    format: OutputFormat,
    pretty: Vec<String>,
    json: Vec<Value>,
}

impl DemoLog {
    const fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: Vec::new(),
            json: Vec::new(),
        }
    }

    fn rows<T: PrettyRow + Serialize>(&mut self, title: &str, rows: &[T]) {
        match self.format {
            OutputFormat::Pretty => self.pretty.push(format_rows_pretty(rows, title)),
            OutputFormat::Json => self.json.push(json!({
                "list": title,
                "count": rows.len(),
                "items": rows
            })),
        }
    }

    fn change(&mut self, action: &str, affected: usize) {
        match self.format {
            OutputFormat::Pretty => self.pretty.push(format_change_pretty(action, affected)),
            OutputFormat::Json => self.json.push(json!({
                "action": action,
                "affected": affected
            })),
        }
    }

    fn finish(self, report: &SeedReport) -> Result<String, TaskmanError> {
        match self.format {
            OutputFormat::Pretty => {
                let mut sections = vec![format_seed(report, self.format)?];
                sections.extend(self.pretty);
                Ok(sections.join("\n\n"))
            }
            OutputFormat::Json => to_json(&json!({
                "seed": report,
                "steps": self.json
            })),
        }
    }
}

/// Execute the demo command.
///
/// Seeds the database, then runs each catalog operation once against the
/// first user and their first task.
///
/// # Errors
///
/// Returns an error if any step fails; the whole run is rolled back.
pub fn demo(
    db: &mut Database,
    args: &SeedArgs,
    defaults: &SeedConfig,
    format: OutputFormat,
) -> Result<String, TaskmanError> {
    let plan = resolve(args, defaults);

    db.transaction(|tx| {
        let report = seed_all(tx, &plan)?;
        let catalog = Catalog::new(tx);
        let mut log = DemoLog::new(format);

        let Some(user_id) = catalog.users_and_task_count()?.first().map(|u| u.user_id) else {
            info!("No users to demonstrate with");
            return log.finish(&report);
        };

        let tasks = catalog.tasks_by_user(user_id)?;
        log.rows(&format!("Tasks of user {user_id}"), &tasks);
        log.rows("Tasks in 'new'", &catalog.tasks_by_status("new")?);

        if let Some(task) = tasks.first() {
            let affected = catalog.update_task_status(task.id, "in progress")?;
            log.change(&format!("Moved task {} to 'in progress'", task.id), affected);
        }

        log.rows("Users without tasks", &catalog.users_without_tasks()?);

        let new_id = catalog.add_task(user_id, "New Task", "This is a new task", "new")?;
        log.change(&format!("Added task {new_id} for user {user_id}"), 1);

        log.rows("Uncompleted tasks", &catalog.uncompleted_tasks()?);

        if let Some(task) = tasks.first() {
            let affected = catalog.delete_task(task.id)?;
            log.change(&format!("Deleted task {}", task.id), affected);
        }

        log.rows(
            "Users matching '%@gmail.com'",
            &catalog.find_users_by_email("%@gmail.com")?,
        );

        let affected = catalog.update_user_name(user_id, "Updated User Name")?;
        log.change(&format!("Renamed user {user_id}"), affected);

        log.rows("Tasks by status", &catalog.task_count_by_status()?);
        log.rows(
            "Tasks of users at example.com",
            &catalog.tasks_by_email_domain("example.com")?,
        );
        log.rows("Tasks without description", &catalog.tasks_without_description()?);
        log.rows("Tasks in progress", &catalog.users_and_tasks_in_progress()?);
        log.rows("Tasks per user", &catalog.users_and_task_count()?);

        log.finish(&report)
    })
}
