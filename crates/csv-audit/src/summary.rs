use comfy_table::{Cell, CellAlignment, Color, Table};

use csv_audit::report::format_top_values;
use csv_audit::{AuditResult, ColumnStat};
use tools_common::table::{align_column, count_cell, dim_cell, styled_table};
use tools_common::truncate_display;

const COLUMN_NAME_WIDTH: usize = 30;

pub fn print_summary(result: &AuditResult) {
    println!();
    println!("CSV Audit Report");
    println!("File: {}", result.path);
    println!("Rows: {}", result.rows);
    println!("Columns: {}", result.columns);
    println!("Duplicate rows (exact): {}", result.duplicate_rows());

    let examples = result.duplicate_examples();
    if !examples.is_empty() {
        println!("Duplicate examples (first_row -> duplicate_row):");
        for pair in examples {
            println!("  {} -> {}", pair.first, pair.duplicate);
        }
    }

    println!();
    println!("Per-column results:");
    println!("{}", column_table(result));
    for line in top_value_lines(result) {
        println!("{line}");
    }
}

/// One `Top values` line per column that has any, below the table.
fn top_value_lines(result: &AuditResult) -> Vec<String> {
    result
        .per_column
        .iter()
        .filter(|stat| !stat.top_values.is_empty())
        .map(|stat| {
            format!(
                "    Top values ({}): {}",
                truncate_display(&stat.column, COLUMN_NAME_WIDTH),
                format_top_values(&stat.top_values, ", ")
            )
        })
        .collect()
}

fn column_table(result: &AuditResult) -> Table {
    let mut table = styled_table(&["Column", "Missing", "Unique", "Num#", "Min", "Max", "Mean"]);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stat in &result.per_column {
        table.add_row(column_row(stat));
    }
    table
}

fn column_row(stat: &ColumnStat) -> Vec<Cell> {
    vec![
        Cell::new(truncate_display(&stat.column, COLUMN_NAME_WIDTH)),
        count_cell(stat.missing, Color::Yellow),
        Cell::new(stat.unique_count),
        Cell::new(stat.numeric_count),
        number_cell(stat.numeric_min),
        number_cell(stat.numeric_max),
        number_cell(stat.numeric_mean),
    ]
}

/// Three-decimal display; `-` when the column has no numeric values.
fn format_number(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |number| format!("{number:.3}"))
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(_) => Cell::new(format_number(value)),
        None => dim_cell(format_number(value)),
    }
}
