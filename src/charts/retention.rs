//! Retention/Churn Renderer
//! Stacked bar chart of churned vs active customers per cohort year,
//! written to disk at print resolution.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use plotters::chart::SeriesLabelPosition;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;

use crate::charts::ChartError;
use crate::data::Retention;

/// File name of the saved chart inside the output directory.
pub const RETENTION_FILE_NAME: &str = "cohort_retention_churn.png";

// 10x6 inches at 300 DPI.
const WIDTH: u32 = 3000;
const HEIGHT: u32 = 1800;

const CHURNED_COLOR: RGBColor = RGBColor(0x0B, 0x8D, 0x99);
const ACTIVE_COLOR: RGBColor = RGBColor(0x7E, 0xE8, 0x82);
const GRID_COLOR: RGBColor = RGBColor(180, 180, 180);

const Y_TICKS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Renders and saves the retention vs churn stacked bar chart.
pub struct RetentionChart;

impl RetentionChart {
    /// Render the chart into `out_dir` (created if absent) and print a
    /// confirmation line to stdout. Any existing file is overwritten.
    pub fn save(records: &[Retention], out_dir: &Path) -> Result<PathBuf, ChartError> {
        Self::save_with_log(records, out_dir, &mut io::stdout())
    }

    /// Like [`save`](Self::save), with the confirmation line routed to `log`.
    pub fn save_with_log(
        records: &[Retention],
        out_dir: &Path,
        log: &mut impl Write,
    ) -> Result<PathBuf, ChartError> {
        std::fs::create_dir_all(out_dir)?;
        let path = out_dir.join(RETENTION_FILE_NAME);
        Self::render(records, &path)?;
        writeln!(log, "Chart saved successfully to {}", path.display())?;
        Ok(path)
    }

    /// Render the chart as a PNG at `path`.
    pub fn render(records: &[Retention], path: &Path) -> Result<(), ChartError> {
        let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            root.present()?;
            return Ok(());
        };

        let x_min = first.year as f64 - 0.6;
        let x_max = last.year as f64 + 0.6;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Customer Retention vs Churn by Cohort Year",
                ("sans-serif", 48).into_font().style(FontStyle::Bold),
            )
            .margin(45)
            .x_label_area_size(110)
            .y_label_area_size(140)
            .build_cartesian_2d(x_min..x_max, 0.0..1.0)?;

        // The percentage ticks are drawn by hand below, pinned to the
        // quarter marks instead of plotters' own label placement.
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(records.len().max(2))
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|_| String::new())
            .x_desc("Cohort Year")
            .y_desc("Customer Percentage")
            .label_style(("sans-serif", 36))
            .axis_desc_style(("sans-serif", 42))
            .draw()?;

        let tick_style = TextStyle::from(("sans-serif", 36).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Center));
        for tick in Y_TICKS {
            let (bx, by) = chart.backend_coord(&(x_min, tick));
            root.draw(&Text::new(
                format!("{:.0}%", tick * 100.0),
                (bx - 15, by),
                tick_style.clone(),
            ))?;

            chart.draw_series(DashedLineSeries::new(
                [(x_min, tick), (x_max, tick)],
                12,
                9,
                GRID_COLOR.stroke_width(2),
            ))?;
        }

        let spans = Self::stack_spans(records);

        // Churned fraction forms the base of each bar, active stacks on top.
        chart
            .draw_series(spans.iter().map(|&(year, churned_top, _)| {
                Rectangle::new(
                    [(year - 0.4, 0.0), (year + 0.4, churned_top)],
                    CHURNED_COLOR.filled(),
                )
            }))?
            .label("Churned")
            .legend(|(x, y)| Rectangle::new([(x, y - 12), (x + 30, y + 12)], CHURNED_COLOR.filled()));

        chart
            .draw_series(spans.iter().map(|&(year, churned_top, total_top)| {
                Rectangle::new(
                    [(year - 0.4, churned_top), (year + 0.4, total_top)],
                    ACTIVE_COLOR.filled(),
                )
            }))?
            .label("Active")
            .legend(|(x, y)| Rectangle::new([(x, y - 12), (x + 30, y + 12)], ACTIVE_COLOR.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(&BLACK)
            .label_font(("sans-serif", 36))
            .draw()?;

        root.present()?;
        Ok(())
    }

    /// Per-year stacked geometry: (year, churned top, stacked total top).
    ///
    /// The fractions come pre-rounded from upstream, so the total is
    /// whatever they sum to rather than a normalized 1.0.
    pub fn stack_spans(records: &[Retention]) -> Vec<(f64, f64, f64)> {
        records
            .iter()
            .map(|r| {
                (
                    r.year as f64,
                    r.churned_pct,
                    r.churned_pct + r.active_pct,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RETENTION;

    #[test]
    fn bar_height_is_sum_of_fractions() {
        let spans = RetentionChart::stack_spans(&RETENTION);
        assert_eq!(spans.len(), RETENTION.len());
        for (span, record) in spans.iter().zip(&RETENTION) {
            assert_eq!(span.0, record.year as f64);
            assert_eq!(span.1, record.churned_pct);
            assert_eq!(span.2, record.churned_pct + record.active_pct);
        }
    }

    #[test]
    fn churned_fraction_drawn_first() {
        let spans = RetentionChart::stack_spans(&RETENTION);
        for &(_, churned_top, total_top) in &spans {
            assert!(churned_top <= total_top);
        }
    }
}
