use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use convex_intersect::cfg::{AREA_EPS, CONTAINMENT_EPS, DEDUP_EPS};
use convex_intersect::rand::{draw_pair, RadialCfg};
use convex_intersect::{intersect_with_cfg, IntersectCfg, Vec2};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "convex-intersect")]
#[command(about = "Intersect convex polygons and emit the overlap as JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect two polygons loaded from .json, .csv or .parquet files
    Intersect {
        #[arg(long)]
        a: PathBuf,
        #[arg(long)]
        b: PathBuf,
        #[command(flatten)]
        tol: TolArgs,
        /// Output file; stdout if omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a random overlapping pair and emit closed loops for plotting
    Demo {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 3)]
        vertices_min: usize,
        #[arg(long, default_value_t = 6)]
        vertices_max: usize,
        #[command(flatten)]
        tol: TolArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Clone, Copy, Debug)]
struct TolArgs {
    /// Slack of the vertex-in-polygon test
    #[arg(long, default_value_t = CONTAINMENT_EPS)]
    containment_eps: f64,
    /// Max per-coordinate distance under which neighbouring vertices merge
    #[arg(long, default_value_t = DEDUP_EPS)]
    dedup_eps: f64,
    /// Shoelace threshold for degenerate polygons
    #[arg(long, default_value_t = AREA_EPS)]
    area_eps: f64,
}

impl From<TolArgs> for IntersectCfg {
    fn from(t: TolArgs) -> Self {
        IntersectCfg {
            containment_eps: t.containment_eps,
            dedup_eps: t.dedup_eps,
            area_eps: t.area_eps,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
struct IntersectOutput {
    intersection: Vec<[f64; 2]>,
    candidates: usize,
    near_degenerate: bool,
}

#[derive(Serialize, Debug)]
struct DemoOutput {
    seed: u64,
    index: u64,
    polygon1: Vec<[f64; 2]>,
    polygon2: Vec<[f64; 2]>,
    intersection: Vec<[f64; 2]>,
    near_degenerate: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Intersect { a, b, tol, out } => intersect(&a, &b, tol, out.as_deref()),
        Action::Demo {
            seed,
            index,
            vertices_min,
            vertices_max,
            tol,
            out,
        } => demo(seed, index, vertices_min, vertices_max, tol, out.as_deref()),
        Action::Report => report(),
    }
}

fn intersect(a: &Path, b: &Path, tol: TolArgs, out: Option<&Path>) -> Result<()> {
    tracing::info!(a = %a.display(), b = %b.display(), ?tol, "intersect");
    let p1 = input::load_polygon(a)?;
    let p2 = input::load_polygon(b)?;
    let output = run_intersect(&p1, &p2, tol.into());
    let params = json!({
        "a": a.to_string_lossy(),
        "b": b.to_string_lossy(),
        "containment_eps": tol.containment_eps,
        "dedup_eps": tol.dedup_eps,
        "area_eps": tol.area_eps
    });
    emit(&output, out, provenance::Payload::new("intersect", params))
}

fn run_intersect(p1: &[Vec2], p2: &[Vec2], cfg: IntersectCfg) -> IntersectOutput {
    let res = intersect_with_cfg(p1, p2, cfg);
    IntersectOutput {
        intersection: to_rows(&res.vertices),
        candidates: res.candidates,
        near_degenerate: res.near_degenerate,
    }
}

fn demo(
    seed: u64,
    index: u64,
    vertices_min: usize,
    vertices_max: usize,
    tol: TolArgs,
    out: Option<&Path>,
) -> Result<()> {
    tracing::info!(seed, index, vertices_min, vertices_max, "demo");
    let output = run_demo(seed, index, vertices_min, vertices_max, tol.into())?;
    let params = json!({
        "seed": seed,
        "index": index,
        "vertices_min": vertices_min,
        "vertices_max": vertices_max
    });
    emit(&output, out, provenance::Payload::new("demo", params))
}

fn run_demo(
    seed: u64,
    index: u64,
    vertices_min: usize,
    vertices_max: usize,
    cfg: IntersectCfg,
) -> Result<DemoOutput> {
    let radial = RadialCfg {
        min_vertices: vertices_min,
        max_vertices: vertices_max,
        ..RadialCfg::default()
    };
    let (p1, p2) = draw_pair(radial, radial, seed, index).context("degenerate random draw")?;
    let res = intersect_with_cfg(&p1, &p2, cfg);
    tracing::info!(
        vertices1 = p1.len(),
        vertices2 = p2.len(),
        vertices = res.vertices.len(),
        "demo_intersection"
    );
    Ok(DemoOutput {
        seed,
        index,
        polygon1: closed_loop(&p1),
        polygon2: closed_loop(&p2),
        intersection: closed_loop(&res.vertices),
        near_degenerate: res.near_degenerate,
    })
}

fn report() -> Result<()> {
    let obj = provenance::block("report", json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Write JSON to `out` (plus provenance sidecar) or to stdout.
fn emit<T: Serialize>(
    value: &T,
    out: Option<&Path>,
    payload: provenance::Payload,
) -> Result<()> {
    let body = serde_json::to_vec_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            let prov = provenance::write_sidecar(path, payload)?;
            tracing::info!(out = %path.display(), provenance = %prov.display(), "written");
        }
        None => println!("{}", String::from_utf8(body)?),
    }
    Ok(())
}

fn to_rows(points: &[Vec2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

/// Vertex rows with the first point repeated at the end, as plotting expects.
fn closed_loop(points: &[Vec2]) -> Vec<[f64; 2]> {
    let mut rows = to_rows(points);
    if let Some(first) = rows.first().copied() {
        rows.push(first);
    }
    rows
}
