/// Terminal rendering of catalog lists
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};

use crate::models::{product_rows, CatalogCounts, Category, Organization, Product, NOT_AVAILABLE};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

pub fn products_table(products: &[Product]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Organization", "Category", "Description"]);
    for row in product_rows(products) {
        table.add_row(vec![
            row.id,
            row.name,
            row.organization,
            row.category,
            row.description.unwrap_or_default(),
        ]);
    }
    table
}

pub fn organizations_table(organizations: &[Organization]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name"]);
    for org in organizations {
        table.add_row(vec![format!("#{}", org.id), org.name.clone()]);
    }
    table
}

pub fn categories_table(categories: &[Category]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Description"]);
    for cat in categories {
        table.add_row(vec![
            format!("#{}", cat.id),
            cat.name.clone(),
            cat.description.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ]);
    }
    table
}

pub fn counts_table(counts: &CatalogCounts) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Resource", "Count"]);
    table.add_row(vec!["Products".to_string(), counts.products.to_string()]);
    table.add_row(vec!["Organizations".to_string(), counts.organizations.to_string()]);
    table.add_row(vec!["Categories".to_string(), counts.categories.to_string()]);
    table
}

/// Print a table, or a placeholder line when `empty`.
pub fn print_list(table: Table, empty: bool, what: &str) {
    if empty {
        println!("(no {})", what);
        return;
    }
    println!("\n{table}\n");
}
