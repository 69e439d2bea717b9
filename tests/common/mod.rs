//! Shared fixtures: small workbooks written with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// A fixture cell
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Blank,
}

pub fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

/// Write a workbook with one worksheet per `(name, rows)` pair, in order
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) {
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();

        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let (r, c) = (row_idx as u32, col_idx as u16);
                match cell {
                    Cell::Text(s) => {
                        worksheet.write_string(r, c, s.as_str()).unwrap();
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    Cell::Bool(b) => {
                        worksheet.write_boolean(r, c, *b).unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

/// `name,idx` header followed by `count` rows `row0,0` .. `row{n},n`
pub fn numbered_rows(count: usize) -> Vec<Vec<Cell>> {
    let mut rows = vec![vec![text("name"), text("idx")]];
    for i in 0..count {
        rows.push(vec![Cell::Text(format!("row{i}")), Cell::Number(i as f64)]);
    }
    rows
}

/// Workbook with one numbered sheet per `(name, row count)` pair
pub fn numbered_workbook(dir: &Path, file: &str, sheets: &[(&str, usize)]) -> PathBuf {
    let path = dir.join(file);
    let sheets: Vec<(&str, Vec<Vec<Cell>>)> = sheets
        .iter()
        .map(|(name, count)| (*name, numbered_rows(*count)))
        .collect();
    write_workbook(&path, &sheets);
    path
}
