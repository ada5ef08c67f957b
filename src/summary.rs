use crate::types::{CatalogEntry, Category};
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Classic => "Classic",
        Category::Current => "2026",
    }
}

#[must_use]
pub fn build_table(entries: &[CatalogEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["APK", "Title", "Category", "Size"]);

    for entry in entries {
        let category = entry.category();
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(entry.display_name()),
            Cell::new(category_label(category)).fg(match category {
                Category::Classic => Color::Yellow,
                Category::Current => Color::Green,
            }),
            Cell::new(human_bytes::human_bytes(entry.size_bytes as f64)),
        ]);
    }

    let total_bytes: u64 = entries.iter().map(|e| e.size_bytes).sum();
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(format!("{} APKs", entries.len())).add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(human_bytes::human_bytes(total_bytes as f64)).add_attribute(Attribute::Bold),
    ]);

    table
}

pub fn print_catalog(entries: &[CatalogEntry]) {
    println!("\n{}", "=== Catalog ===".cyan());

    if entries.is_empty() {
        println!("No APKs matched the naming rules.");
        return;
    }

    println!("{}", build_table(entries));
}
