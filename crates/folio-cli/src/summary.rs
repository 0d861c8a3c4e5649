use std::time::Instant;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use tracing::debug;

use folio_model::Project;
use folio_studio::{
    CommitOutcome, IgnoreReason, Notification, NotificationCenter, NotificationKind, SubmitOutcome,
};
use folio_validate::ValidationResult;

/// Print per-field outcomes. Returns whether the draft is valid.
pub fn print_validation(result: &ValidationResult) -> bool {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Status"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for outcome in result.outcomes() {
        let message = result.helper_text(outcome.field).unwrap_or_default();
        table.add_row(vec![
            Cell::new(outcome.field).add_attribute(Attribute::Bold),
            status_cell(outcome.valid),
            Cell::new(message),
        ]);
    }
    println!("{table}");
    if result.is_valid() {
        println!("Draft is valid.");
    } else {
        println!("Draft has {} issue(s).", result.issues().len());
    }
    result.is_valid()
}

/// Print the result of a submit. Returns whether it was committed.
pub fn print_submit(outcome: &SubmitOutcome, notifications: &mut NotificationCenter) -> bool {
    match outcome {
        SubmitOutcome::Committed {
            entity,
            notification,
        } => {
            print_notification(notifications, notification);
            println!(
                "{} '{}' saved with id {}",
                capitalize(entity.kind().label()),
                entity.title(),
                entity.id()
            );
            true
        }
        SubmitOutcome::Invalid(result) => {
            print_validation(result);
            false
        }
        SubmitOutcome::Failed { notification, error } => {
            print_notification(notifications, notification);
            eprintln!("  {error}");
            false
        }
        SubmitOutcome::Ignored(reason) => {
            eprintln!("Nothing submitted: {}", ignore_reason(*reason));
            false
        }
        SubmitOutcome::Stale => false,
    }
}

/// Print the result of a profile commit. Returns whether it was committed.
pub fn print_commit(outcome: &CommitOutcome, notifications: &mut NotificationCenter) -> bool {
    match outcome {
        CommitOutcome::Committed {
            profile,
            notification,
        } => {
            print_notification(notifications, notification);
            println!("Title: {}", profile.title);
            println!("Tags: {}", profile.tags.join(", "));
            true
        }
        CommitOutcome::Invalid(result) => {
            print_validation(result);
            false
        }
        CommitOutcome::Failed { notification, error } => {
            print_notification(notifications, notification);
            eprintln!("  {error}");
            false
        }
        CommitOutcome::Ignored(reason) => {
            eprintln!("Nothing committed: {}", ignore_reason(*reason));
            false
        }
        CommitOutcome::Stale => false,
    }
}

pub fn print_projects(owner: &str, projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects have been created.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Title"),
        header_cell("Tags"),
        header_cell("Link"),
    ]);
    apply_table_style(&mut table);
    for project in projects {
        let link = if project.url.is_empty() {
            &project.github
        } else {
            &project.url
        };
        table.add_row(vec![
            Cell::new(&project.id).fg(Color::DarkGrey),
            Cell::new(&project.title).add_attribute(Attribute::Bold),
            Cell::new(project.tags.join(", ")),
            Cell::new(link),
        ]);
    }
    println!("Projects of {owner}:");
    println!("{table}");
}

fn print_notification(notifications: &mut NotificationCenter, notification: &Notification) {
    notifications.show(notification.clone(), Instant::now());
    debug!(hide_at = ?notifications.hide_at(), "notification shown");
    let Some(shown) = notifications.current() else {
        return;
    };
    match shown.kind {
        NotificationKind::Success => println!("{}", shown.message),
        NotificationKind::Error => eprintln!("{}", shown.message),
    }
}

fn ignore_reason(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::Closed => "the editor is closed",
        IgnoreReason::InFlight => "a submission is already in progress",
        IgnoreReason::NotOnFinalStep => "the editor is not on its last step",
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("invalid")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}
