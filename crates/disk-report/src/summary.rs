use comfy_table::{Cell, CellAlignment, Color, Table};

use disk_report::{DiskConfig, DiskRow};
use tools_common::table::{align_column, styled_table};
use tools_common::{human_bytes, truncate_display};

/// Targets longer than this are shortened in the console table.
const TARGET_WIDTH: usize = 80;

/// Below this free share the FREE% cell is highlighted.
const LOW_FREE_PERCENT: f64 = 10.0;

pub fn print_header(config: &DiskConfig) {
    println!();
    println!("Disk Report for: {}", config.path.display());
    if config.recursive {
        println!(
            "Recursive: true (max depth = {}, include hidden = {})",
            config.max_depth, config.include_hidden
        );
    } else {
        println!("Recursive: false");
    }
    println!();
}

pub fn print_rows(rows: &[DiskRow]) {
    if rows.is_empty() {
        println!("No results.");
        return;
    }
    println!("{}", rows_table(rows));
}

fn rows_table(rows: &[DiskRow]) -> Table {
    let mut table = styled_table(&["Target", "Total", "Used", "Free", "Free%"]);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(truncate_display(&row.target, TARGET_WIDTH)),
            Cell::new(human_bytes(row.total_bytes)),
            Cell::new(human_bytes(row.used_bytes)),
            Cell::new(human_bytes(row.free_bytes)),
            percent_cell(row.free_percent()),
        ]);
    }
    table
}

fn percent_cell(percent: f64) -> Cell {
    let cell = Cell::new(format!("{percent:.1}"));
    if percent < LOW_FREE_PERCENT {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shows_human_sizes_and_truncated_targets() {
        let long_target = format!("/{}", "x".repeat(120));
        let rows = vec![
            DiskRow {
                target: "/".to_string(),
                total_bytes: 1_048_576,
                used_bytes: 1023,
                free_bytes: 1_047_553,
            },
            DiskRow {
                target: long_target.clone(),
                total_bytes: 0,
                used_bytes: 0,
                free_bytes: 0,
            },
        ];
        let rendered = rows_table(&rows).to_string();
        assert!(rendered.contains("1.0 MB"));
        assert!(rendered.contains("1023.0 B"));
        assert!(rendered.contains("0.0"));
        assert!(!rendered.contains(&long_target));
    }
}
