//! Terminal output for the todz binary. Everything here is presentation;
//! no business logic.

use colored::Colorize;
use todz::model::Task;
use unicode_width::UnicodeWidthChar;

const LINE_WIDTH: usize = 100;

pub(crate) fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No todos found.");
        return;
    }

    let id_width = tasks
        .iter()
        .map(|task| task.id.to_string().len())
        .max()
        .unwrap_or(1);

    for task in tasks {
        let id_str = format!("{:>width$}", task.id, width = id_width);
        let line = truncate_to_width(&task.to_string(), LINE_WIDTH);

        if task.complete {
            println!("{}  {}", id_str.dimmed(), line.dimmed());
        } else {
            println!("{}  {}", id_str.dimmed(), line);
        }
    }
}

pub(crate) fn print_names(names: &[String]) {
    if names.is_empty() {
        println!("Nothing found.");
        return;
    }
    for name in names {
        println!("{}", name);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
