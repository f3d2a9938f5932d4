//! Cohort Revenue Renderer
//! Dual-axis combo chart: total revenue bars on the left axis, per-customer
//! revenue line on the right axis, sharing the cohort-year axis.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontStyle, FontTransform};

use crate::charts::ChartError;
use crate::data::CohortRevenue;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235); // sky blue
const LINE_COLOR: RGBColor = RGBColor(255, 140, 0); // dark orange
const LEFT_AXIS_COLOR: RGBColor = RGBColor(0, 0, 255);

/// Renders the cohort revenue combo chart.
pub struct RevenueChart;

impl RevenueChart {
    /// Render the chart and hand it to the platform image viewer.
    ///
    /// The figure only exists to be looked at, so it goes to the system temp
    /// directory rather than the working tree. A missing viewer (headless
    /// run) is reported but not fatal.
    pub fn show(records: &[CohortRevenue]) -> Result<(), ChartError> {
        let path = std::env::temp_dir().join("cohort_revenue.png");
        Self::render(records, &path)?;
        if let Err(err) = open::that(&path) {
            eprintln!("Could not open chart viewer: {err}");
        }
        Ok(())
    }

    /// Render the chart as a PNG at `path`.
    pub fn render(records: &[CohortRevenue], path: &Path) -> Result<(), ChartError> {
        let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            root.present()?;
            return Ok(());
        };

        let x_min = first.year as f64 - 0.6;
        let x_max = last.year as f64 + 0.6;
        let revenue_max = records.iter().fold(0.0_f64, |m, r| m.max(r.total_revenue));
        let per_customer_max = records
            .iter()
            .fold(0.0_f64, |m, r| m.max(r.revenue_per_customer));

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Contoso Cohort Revenue and Total Revenue by Year",
                ("sans-serif", 22).into_font().style(FontStyle::Bold),
            )
            .margin(15)
            .x_label_area_size(55)
            .y_label_area_size(70)
            .right_y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, 0.0..revenue_max * 1.08)?
            .set_secondary_coord(x_min..x_max, 0.0..per_customer_max * 1.15);

        // The left tick labels are drawn by hand below so they can carry the
        // bar series color without restyling the shared x labels.
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(records.len())
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|_| String::new())
            .x_desc("Cohort Year")
            .draw()?;

        let tick_style = TextStyle::from(("sans-serif", 13).into_font())
            .color(&LEFT_AXIS_COLOR)
            .pos(Pos::new(HPos::Right, VPos::Center));
        for tick in Self::primary_axis_ticks(records) {
            let (bx, by) = chart.backend_coord(&(x_min, tick));
            root.draw(&Text::new(
                format!("{:.0}M", tick / 1_000_000.0),
                (bx - 8, by),
                tick_style.clone(),
            ))?;
        }

        chart
            .configure_secondary_axes()
            .y_desc("Cohort Revenue per Customer")
            .label_style(TextStyle::from(("sans-serif", 13).into_font()).color(&LINE_COLOR))
            .axis_desc_style(TextStyle::from(("sans-serif", 15).into_font()).color(&LINE_COLOR))
            .draw()?;

        // The left axis description is rotated by hand so it can carry the
        // bar series color without restyling the shared x axis.
        let left_desc = TextStyle::from(
            ("sans-serif", 15)
                .into_font()
                .transform(FontTransform::Rotate270),
        )
        .color(&LEFT_AXIS_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(
            "Total Revenue (in Millions)",
            (18, HEIGHT as i32 / 2),
            left_desc,
        ))?;

        let (bars, line) = Self::series_points(records);

        chart.draw_series(bars.iter().map(|&(year, revenue)| {
            Rectangle::new([(year - 0.4, 0.0), (year + 0.4, revenue)], BAR_COLOR.filled())
        }))?;

        chart.draw_secondary_series(LineSeries::new(
            line.iter().copied(),
            LINE_COLOR.stroke_width(2),
        ))?;
        chart.draw_secondary_series(
            line.iter()
                .map(|&(x, y)| Circle::new((x, y), 4, LINE_COLOR.filled())),
        )?;

        root.present()?;
        Ok(())
    }

    /// Left-axis tick values: even steps from zero up through the bar peak.
    pub fn primary_axis_ticks(records: &[CohortRevenue]) -> Vec<f64> {
        let y_max = records.iter().fold(0.0_f64, |m, r| m.max(r.total_revenue)) * 1.08;
        if y_max <= 0.0 {
            return vec![0.0];
        }

        let step = Self::nice_step(y_max, 8);
        let mut ticks = Vec::new();
        let mut value = 0.0;
        while value <= y_max {
            ticks.push(value);
            value += step;
        }
        ticks
    }

    fn nice_step(range: f64, target_steps: usize) -> f64 {
        let raw_step = range / target_steps as f64;
        let magnitude = 10f64.powf(raw_step.log10().floor());
        let normalized = raw_step / magnitude;

        let nice = if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };

        nice * magnitude
    }

    /// The two plotted series, in input order: bar tops on the primary axis
    /// and line points on the secondary axis.
    pub fn series_points(records: &[CohortRevenue]) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        let bars = records
            .iter()
            .map(|r| (r.year as f64, r.total_revenue))
            .collect();
        let line = records
            .iter()
            .map(|r| (r.year as f64, r.revenue_per_customer))
            .collect();
        (bars, line)
    }
}
