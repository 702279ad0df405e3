//! Static Figure Renderer
//! Writes the dataset-derived figures as PNG bar charts so the overview
//! pages have something to show before the notebook has been run.
//!
//! Only figures that are plain counts are produced here. Clustering,
//! association and timeline figures remain notebook output.

use crate::stats::{month_name, EdaSummary};
use anyhow::{anyhow, Context, Result};
use log::info;
use plotters::prelude::*;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 700;
const BAR: RGBColor = RGBColor(52, 152, 219);
const BAR_ALT: RGBColor = RGBColor(231, 76, 60);

/// One bar chart to be written to `file`.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureJob {
    pub file: &'static str,
    pub title: &'static str,
    pub x_desc: &'static str,
    pub bars: Vec<(String, usize)>,
    /// Rotate category labels (long vendor/product names).
    pub rotate_labels: bool,
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Charts derivable from the summary, in catalog order.
    pub fn jobs(summary: &EdaSummary) -> Vec<FigureJob> {
        let years = |counts: &[(i32, usize)]| -> Vec<(String, usize)> {
            counts.iter().map(|(y, c)| (y.to_string(), *c)).collect()
        };

        vec![
            FigureJob {
                file: "cve_year_distribution.png",
                title: "Distribution of CVEs by Year",
                x_desc: "CVE year",
                bars: years(&summary.by_cve_year),
                rotate_labels: false,
            },
            FigureJob {
                file: "monthly_distribution.png",
                title: "Monthly Distribution of CVEs",
                x_desc: "Month added",
                bars: summary
                    .by_month_added
                    .iter()
                    .map(|(m, c)| (month_name(*m).to_string(), *c))
                    .collect(),
                rotate_labels: false,
            },
            FigureJob {
                file: "ransomware_flag.png",
                title: "Ransomware-Linked Vulnerabilities",
                x_desc: "Known ransomware campaign use",
                bars: summary.ransomware_use.clone(),
                rotate_labels: false,
            },
            FigureJob {
                file: "top_vendors.png",
                title: "Most Affected Vendors",
                x_desc: "Vendor",
                bars: summary.top_vendors.clone(),
                rotate_labels: true,
            },
            FigureJob {
                file: "top_products.png",
                title: "Most Affected Products",
                x_desc: "Product",
                bars: summary.top_products.clone(),
                rotate_labels: true,
            },
            FigureJob {
                file: "trend_by_year.png",
                title: "Yearly Trend of CVEs",
                x_desc: "Year added",
                bars: years(&summary.by_year_added),
                rotate_labels: false,
            },
        ]
    }

    /// Render every job with data into `out_dir`, in parallel.
    /// Returns the paths written.
    pub fn render_all(summary: &EdaSummary, out_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;

        let jobs: Vec<FigureJob> = Self::jobs(summary)
            .into_iter()
            .filter(|job| !job.bars.is_empty())
            .collect();

        jobs.par_iter()
            .map(|job| -> Result<PathBuf> {
                let path = out_dir.join(job.file);
                Self::render_bar_chart(job, &path)
                    .map_err(|e| anyhow!("Failed to render {}: {}", job.file, e))?;
                info!("Wrote {}", path.display());
                Ok(path)
            })
            .collect()
    }

    fn render_bar_chart(job: &FigureJob, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let n = job.bars.len();
        let y_max = Self::axis_max(&job.bars);
        let labels: Vec<String> = job.bars.iter().map(|(label, _)| label.clone()).collect();

        let mut chart = ChartBuilder::on(&root)
            .caption(job.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(if job.rotate_labels { 140 } else { 50 })
            .y_label_area_size(60)
            .build_cartesian_2d((0..n).into_segmented(), 0..y_max)?;

        let label_style: TextStyle = if job.rotate_labels {
            ("sans-serif", 13)
                .into_font()
                .transform(FontTransform::Rotate90)
                .into()
        } else {
            ("sans-serif", 14).into_font().into()
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_style(label_style)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .x_desc(job.x_desc)
            .y_desc("CVEs")
            .draw()?;

        chart.draw_series(job.bars.iter().enumerate().map(|(i, (_, count))| {
            let color = if i % 2 == 0 { BAR } else { BAR_ALT };
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), *count)],
                color.filled(),
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        }))?;

        root.present()?;
        Ok(())
    }

    /// Upper bound of the count axis: the tallest bar plus 10% headroom.
    fn axis_max(bars: &[(String, usize)]) -> usize {
        let max = bars.iter().map(|(_, c)| *c).max().unwrap_or(0);
        max + max / 10 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> EdaSummary {
        EdaSummary {
            total_cves: 3,
            unique_cve_ids: 3,
            unique_vendors: 2,
            unique_products: 2,
            by_year_added: vec![(2021, 2), (2022, 1)],
            by_cve_year: vec![(2017, 1), (2021, 2)],
            by_month_added: vec![(2, 1), (12, 2)],
            top_vendors: vec![("Apache".into(), 2), ("Microsoft".into(), 1)],
            top_products: vec![("Log4j2".into(), 2)],
            ransomware_use: Vec::new(),
        }
    }

    #[test]
    fn jobs_follow_catalog_names() {
        let files: Vec<&str> = StaticChartRenderer::jobs(&summary())
            .iter()
            .map(|j| j.file)
            .collect();
        assert_eq!(
            files,
            [
                "cve_year_distribution.png",
                "monthly_distribution.png",
                "ransomware_flag.png",
                "top_vendors.png",
                "top_products.png",
                "trend_by_year.png"
            ]
        );
    }

    #[test]
    fn month_labels_are_names() {
        let jobs = StaticChartRenderer::jobs(&summary());
        assert_eq!(
            jobs[1].bars,
            vec![("Feb".to_string(), 1), ("Dec".to_string(), 2)]
        );
    }

    #[test]
    fn render_all_writes_readable_pngs() {
        let td = tempfile::tempdir().unwrap();
        let out = td.path().join("figures");

        let written = StaticChartRenderer::render_all(&summary(), &out).unwrap();
        let mut files: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        files.sort();
        assert_eq!(
            files,
            [
                "cve_year_distribution.png",
                "monthly_distribution.png",
                "top_products.png",
                "top_vendors.png",
                "trend_by_year.png"
            ]
        );

        // No ransomware column, no chart
        assert!(!out.join("ransomware_flag.png").exists());
        for path in &written {
            let img = image::open(path).unwrap();
            assert_eq!((img.width(), img.height()), (WIDTH, HEIGHT));
        }
    }

    #[test]
    fn axis_has_headroom() {
        assert_eq!(StaticChartRenderer::axis_max(&[]), 1);
        assert_eq!(StaticChartRenderer::axis_max(&[("a".into(), 100)]), 111);
    }
}
