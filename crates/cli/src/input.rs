//! Polygon loading: JSON point lists or tabular files with `x`/`y` columns.

use anyhow::{bail, Context, Result};
use convex_intersect::Vec2;
use polars::prelude::*;
use std::path::Path;

/// Load a vertex loop from `.json` (`[[x, y], ...]`), `.csv` or `.parquet`
/// (columns `x` and `y`). Rejects null and non-finite coordinates.
pub fn load_polygon(path: &Path) -> Result<Vec<Vec2>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let points = match ext.as_deref() {
        Some("json") => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            parse_json(&bytes).with_context(|| format!("parsing {}", path.display()))?
        }
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("scanning {}", path.display()))?;
            from_frame(lf).with_context(|| format!("loading {}", path.display()))?
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("scanning {}", path.display()))?;
            from_frame(lf).with_context(|| format!("loading {}", path.display()))?
        }
        _ => bail!(
            "unsupported polygon file {} (expected .json, .csv or .parquet)",
            path.display()
        ),
    };
    tracing::info!(path = %path.display(), vertices = points.len(), "polygon_loaded");
    Ok(points)
}

/// `[[x, y], ...]`.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<Vec2>> {
    let rows: Vec<[f64; 2]> = serde_json::from_slice(bytes)?;
    rows.into_iter()
        .enumerate()
        .map(|(i, [x, y])| finite_point(i, x, y))
        .collect()
}

fn from_frame(lf: LazyFrame) -> Result<Vec<Vec2>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(i, (x, y))| match (x, y) {
            (Some(x), Some(y)) => finite_point(i, x, y),
            _ => bail!("row {i}: missing coordinate"),
        })
        .collect()
}

fn finite_point(row: usize, x: f64, y: f64) -> Result<Vec2> {
    if !(x.is_finite() && y.is_finite()) {
        bail!("row {row}: non-finite coordinate ({x}, {y})");
    }
    Ok(Vec2::new(x, y))
}
