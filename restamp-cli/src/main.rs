//! Batch driver: one output image per row of replacement texts.
//!
//! Reads a source photograph and a JSON job description (regions drawn by an
//! external UI, plus rows of texts exported from a spreadsheet), then for
//! each row erases the regions and stamps the row's texts, writing
//! sequentially numbered outputs into a timestamped subdirectory.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use restamp::{erase_regions, FontCatalog, FontResolver, Region, RegionRenderer};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "restamp",
    about = "Erase photo regions and stamp in replacement text, one output per text row",
    version
)]
struct Cli {
    /// Source image
    #[arg(short, long)]
    image: PathBuf,

    /// Job description JSON: {"regions": [...], "rows": [[...], ...]}
    #[arg(short, long)]
    job: PathBuf,

    /// Output directory; each run writes into a timestamped subdirectory
    #[arg(short, long, default_value = "result")]
    out: PathBuf,

    /// Extra directory to search for font files (repeatable)
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Stamp over the original content instead of erasing it first
    #[arg(long)]
    no_erase: bool,
}

/// Regions paired with rows of replacement texts, as exported by the UI and
/// spreadsheet collaborators. Each row produces one output artifact; row
/// length must equal the region count.
#[derive(Debug, Deserialize)]
struct Job {
    regions: Vec<Region>,
    rows: Vec<Vec<String>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let job: Job = serde_json::from_str(
        &fs::read_to_string(&cli.job)
            .with_context(|| format!("reading job file {}", cli.job.display()))?,
    )
    .with_context(|| format!("parsing job file {}", cli.job.display()))?;

    for (idx, region) in job.regions.iter().enumerate() {
        region.validate().with_context(|| format!("region {}", idx + 1))?;
    }

    let mut catalog = FontCatalog::new();
    for dir in &cli.font_dirs {
        catalog.add_search_dir(dir.clone());
    }
    let resolver = FontResolver::new(catalog);
    let renderer = RegionRenderer::new(&resolver);

    let source = image::open(&cli.image)
        .with_context(|| format!("opening image {}", cli.image.display()))?
        .to_rgb8();

    let run_dir = cli
        .out
        .join(Local::now().format("%Y-%m-%d_%H-%M-%S").to_string());
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("creating output directory {}", run_dir.display()))?;

    for (row_idx, row) in job.rows.iter().enumerate() {
        let mut canvas = source.clone();
        if !cli.no_erase {
            erase_regions(&mut canvas, &job.regions);
        }
        renderer
            .render_pass(&mut canvas, &job.regions, row)
            .with_context(|| format!("rendering row {}", row_idx + 1))?;

        let number = next_photo_number(&run_dir)?;
        let path = run_dir.join(format!("photo_{number}.png"));
        canvas
            .save(&path)
            .with_context(|| format!("saving {}", path.display()))?;
        info!(row = row_idx + 1, path = %path.display(), "wrote output");
    }

    Ok(())
}

/// Next sequential number for `photo_<N>.png` in a directory: one past the
/// highest existing number, starting at 1.
fn next_photo_number(dir: &Path) -> Result<u32> {
    let mut highest = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(rest) = name.strip_prefix("photo_") {
            if let Some(number) = rest.split('.').next().and_then(|n| n.parse::<u32>().ok()) {
                highest = highest.max(number);
            }
        }
    }
    Ok(highest + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_photo_number_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(next_photo_number(dir.path()).unwrap(), 1);
    }

    #[test]
    fn test_next_photo_number_continues_sequence() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("photo_1.png"), b"").unwrap();
        fs::write(dir.path().join("photo_7.png"), b"").unwrap();
        fs::write(dir.path().join("photo_3.png"), b"").unwrap();
        fs::write(dir.path().join("unrelated.txt"), b"").unwrap();
        assert_eq!(next_photo_number(dir.path()).unwrap(), 8);
    }

    #[test]
    fn test_next_photo_number_ignores_malformed_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("photo_.png"), b"").unwrap();
        fs::write(dir.path().join("photo_abc.png"), b"").unwrap();
        fs::write(dir.path().join("photo_2.png"), b"").unwrap();
        assert_eq!(next_photo_number(dir.path()).unwrap(), 3);
    }

    #[test]
    fn test_job_deserializes() {
        let json = r#"{
            "regions": [
                {"x1": 0, "y1": 0, "x2": 200, "y2": 100, "width": 200, "height": 100}
            ],
            "rows": [["Mihir"], ["मिहिर"]]
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.regions.len(), 1);
        assert_eq!(job.rows.len(), 2);
        job.regions[0].validate().unwrap();
    }
}
