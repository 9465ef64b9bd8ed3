//! Output formatting for the CLI.

use console::{style, Term};
use storefront_catalog::prelude::*;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stderr(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad(col, *width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Clear the terminal between interactive steps.
    pub fn clear(&self) {
        if self.json || !self.term.is_term() {
            return;
        }
        let _ = self.term.clear_screen();
    }
}

/// Pad to `width` visible columns, ignoring ANSI styling.
fn pad(col: &str, width: usize) -> String {
    let visible = console::measure_text_width(col);
    if visible >= width {
        col.to_string()
    } else {
        format!("{}{}", col, " ".repeat(width - visible))
    }
}

/// Price column: effective price, with the list price struck when
/// discounted.
pub fn price_cell(product: &Product, show_effective: bool) -> String {
    if !show_effective || !product.is_discounted() {
        return product.price.display();
    }
    format!(
        "{} {} {}",
        style(product.effective_price().display()).green().bold(),
        style(product.price.display()).dim().strikethrough(),
        style(format!("-{}%", product.discount)).red()
    )
}

/// Stock column.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("in stock").green().to_string()
    } else {
        style("out of stock").red().to_string()
    }
}

/// One-line rating, e.g. "★★★★☆ 4.7".
pub fn rating_cell(rating: f64) -> String {
    let full = rating.clamp(0.0, 5.0).floor() as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}

/// Active-filter chips joined for a single line.
pub fn chips_line(active: &[ActiveFilter]) -> String {
    active
        .iter()
        .map(|f| format!("[{}]", f.label()))
        .collect::<Vec<_>>()
        .join(" ")
}
