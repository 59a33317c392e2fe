use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::error::Result;
use crate::io::excel_write;
use crate::model::{Cell, Table};

/// Header shared by the sample workbooks.
pub const SAMPLE_COLUMNS: [&str; 4] = ["No", "Name", "Age", "Score"];

/// Writes three small student-roster workbooks into `dir` for trying out
/// the merge command. Returns the created paths in order.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub fn write_sample_workbooks(dir: &Path) -> Result<Vec<PathBuf>> {
    let rosters: [(&str, &[(&str, f64, f64)]); 3] = [
        (
            "example1.xlsx",
            &[("Alice", 20.0, 85.0), ("Bob", 21.0, 90.0), ("Carol", 19.0, 88.0)],
        ),
        ("example2.xlsx", &[("Dave", 22.0, 92.0), ("Erin", 20.0, 87.0)]),
        (
            "example3.xlsx",
            &[
                ("Frank", 21.0, 89.0),
                ("Grace", 19.0, 91.0),
                ("Heidi", 20.0, 86.0),
                ("Ivan", 22.0, 93.0),
            ],
        ),
    ];

    let mut paths = Vec::with_capacity(rosters.len());
    for (file_name, students) in rosters {
        let path = dir.join(file_name);
        excel_write::write_table(&path, &roster_table(students))?;
        info!(path = %path.display(), rows = students.len(), "sample workbook written");
        paths.push(path);
    }

    Ok(paths)
}

fn roster_table(students: &[(&str, f64, f64)]) -> Table {
    Table {
        columns: SAMPLE_COLUMNS.iter().map(|name| (*name).to_string()).collect(),
        rows: students
            .iter()
            .enumerate()
            .map(|(index, (name, age, score))| {
                vec![
                    Cell::Number((index + 1) as f64),
                    Cell::Text((*name).to_string()),
                    Cell::Number(*age),
                    Cell::Number(*score),
                ]
            })
            .collect(),
    }
}
