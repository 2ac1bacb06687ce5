//! CLI tool for gridview - computes a grid window and outputs JSON
//!
//! Usage:
//!   gridview_cli --generate 1000                  # Demo rows, window at the top
//!   gridview_cli rows.json --offset 700           # Rows from a JSON array
//!   gridview_cli rows.json --sort age --sort age  # Toggle sort (asc, then desc)
//!   gridview_cli rows.json -o out.json            # Output JSON to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use gridview::sample::{sample_columns, sample_rows};
use gridview::types::{Column, Row};
use gridview::{DataGrid, GridConfig};

fn usage() -> ! {
    eprintln!(
        "Usage: gridview_cli [rows.json | --generate N] [--sort COL]... \
         [--offset PX] [--height PX] [-o output.json]"
    );
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let mut input_path: Option<String> = None;
    let mut generate: Option<usize> = None;
    let mut sorts: Vec<String> = Vec::new();
    let mut offset: f32 = 0.0;
    let mut height: f32 = 600.0;
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--generate" => {
                i += 1;
                let n = args.get(i).and_then(|s| s.parse().ok());
                generate = Some(n.unwrap_or_else(|| usage()));
            }
            "--sort" => {
                i += 1;
                sorts.push(args.get(i).cloned().unwrap_or_else(|| usage()));
            }
            "--offset" => {
                i += 1;
                offset = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| usage());
            }
            "--height" => {
                i += 1;
                height = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| usage());
            }
            "-o" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| usage()));
            }
            path if !path.starts_with('-') => input_path = Some(path.to_string()),
            _ => usage(),
        }
        i += 1;
    }

    // Load rows
    let (columns, rows) = match (generate, input_path) {
        (Some(n), None) => (sample_columns(), sample_rows(n)),
        (None, Some(path)) => {
            let data = match fs::read_to_string(&path) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Error reading {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            let rows: Vec<Row> = match serde_json::from_str(&data) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error parsing rows JSON: {}", e);
                    std::process::exit(1);
                }
            };
            (infer_columns(&rows), rows)
        }
        _ => usage(),
    };

    let mut grid = match DataGrid::new(columns, rows, GridConfig::default()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error building grid: {}", e);
            std::process::exit(1);
        }
    };

    grid.set_container_height(height);
    for column_id in &sorts {
        if !grid.toggle_sort(column_id, true) {
            eprintln!("Warning: column {} is not sortable, ignoring", column_id);
        }
    }
    grid.set_scroll_offset(offset);

    // Serialize the window. Scalars are read before `visible_rows`
    // because the views borrow the grid.
    let row_count = grid.row_count();
    let total_size = grid.total_size();
    let scroll_offset = grid.scroll_offset();
    let sort_keys = grid.sort_keys().to_vec();
    let views = grid.visible_rows();
    let report = serde_json::json!({
        "rowCount": row_count,
        "totalSize": total_size,
        "scrollOffset": scroll_offset,
        "sortKeys": sort_keys,
        "rows": views,
    });
    let json = match serde_json::to_string_pretty(&report) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}

/// Derive sortable columns from the field keys of the loaded rows.
fn infer_columns(rows: &[Row]) -> Vec<Column> {
    let mut ids: Vec<&String> = Vec::new();
    for row in rows {
        for key in row.fields.keys() {
            if !ids.contains(&key) {
                ids.push(key);
            }
        }
    }
    ids.into_iter()
        .map(|id| Column::new(id.clone(), id.clone(), 120.0).sortable())
        .collect()
}
