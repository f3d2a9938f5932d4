//! Segment Share Renderer
//! Pie chart of revenue contribution per customer segment.
//!
//! The figure is produced into an in-memory PNG buffer only; nothing is
//! shown on screen or written to disk.

use std::f64::consts::TAU;

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;

use crate::charts::ChartError;
use crate::data::Segment;

const WIDTH: u32 = 700;
const HEIGHT: u32 = 700;

/// Slice colors, mapped 1:1 onto the segment order.
const PALETTE: [RGBColor; 3] = [
    RGBColor(0xF8, 0xD7, 0xDA), // 1-LOW, light rose
    RGBColor(0xFF, 0xE5, 0x99), // 2-MID, light amber
    RGBColor(0xA8, 0xD0, 0x8D), // 3-HIGH, light green
];

/// Renders the segment share pie chart.
pub struct SegmentShareChart;

impl SegmentShareChart {
    /// Render the pie chart into an in-memory PNG.
    pub fn render_png_bytes(segments: &[Segment]) -> Result<Vec<u8>, ChartError> {
        let mut buf = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (WIDTH, HEIGHT)).into_drawing_area();
            Self::draw(&root, segments)?;
            root.present()?;
        }

        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(&buf, WIDTH, HEIGHT, ExtendedColorType::Rgb8)?;
        Ok(png)
    }

    /// Draw the chart onto an arbitrary drawing area.
    pub fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        segments: &[Segment],
    ) -> Result<(), ChartError> {
        root.fill(&WHITE)?;

        let title_style = TextStyle::from(("sans-serif", 20).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(
            "Revenue Contribution by Customer Segment",
            (WIDTH as i32 / 2, 20),
            title_style,
        ))?;

        let center = (WIDTH as i32 / 2, HEIGHT as i32 / 2 + 25);
        let radius = 235.0_f64;
        let shares = Self::percent_shares(segments);

        // Slices start at the top and sweep counter-clockwise on screen
        // (decreasing angle in image coordinates).
        let mut cursor = (-90.0_f64).to_radians();

        for (i, (seg, share)) in segments.iter().zip(&shares).enumerate() {
            let sweep = share / 100.0 * TAU;
            let color = PALETTE[i % PALETTE.len()];

            // Sample the arc finely enough that the slice edge looks round.
            let steps = (sweep.to_degrees().ceil() as usize).max(2);
            let mut points = Vec::with_capacity(steps + 2);
            points.push(center);
            for j in 0..=steps {
                let theta = cursor - sweep * j as f64 / steps as f64;
                points.push((
                    center.0 + (radius * theta.cos()).round() as i32,
                    center.1 + (radius * theta.sin()).round() as i32,
                ));
            }
            root.draw(&Polygon::new(points, color.filled()))?;

            let mid = cursor - sweep / 2.0;
            let anchor = Pos::new(HPos::Center, VPos::Center);

            // Percentage annotation inside the slice.
            let pct_pos = (
                center.0 + (radius * 0.62 * mid.cos()).round() as i32,
                center.1 + (radius * 0.62 * mid.sin()).round() as i32,
            );
            let label_style = TextStyle::from(("sans-serif", 16).into_font())
                .color(&BLACK)
                .pos(anchor);
            root.draw(&Text::new(format!("{:.1}%", share), pct_pos, label_style.clone()))?;

            // Segment name just outside the rim.
            let name_pos = (
                center.0 + (radius * 1.14 * mid.cos()).round() as i32,
                center.1 + (radius * 1.14 * mid.sin()).round() as i32,
            );
            root.draw(&Text::new(seg.name, name_pos, label_style))?;

            cursor -= sweep;
        }

        Ok(())
    }

    /// Percentage share of each segment relative to the combined total.
    pub fn percent_shares(segments: &[Segment]) -> Vec<f64> {
        let total: f64 = segments.iter().map(|s| s.total_ltv).sum();
        segments
            .iter()
            .map(|s| {
                if total > 0.0 {
                    s.total_ltv / total * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SEGMENTS;

    #[test]
    fn shares_sum_to_one_hundred() {
        let shares = SegmentShareChart::percent_shares(&SEGMENTS);
        assert_eq!(shares.len(), SEGMENTS.len());
        let sum: f64 = shares.iter().sum();
        assert!((sum - 100.0).abs() < 0.1, "shares sum to {sum}");
    }

    #[test]
    fn known_segment_split() {
        let shares = SegmentShareChart::percent_shares(&SEGMENTS);
        let expected = [2.1, 32.1, 65.8];
        for (share, want) in shares.iter().zip(expected) {
            assert!((share - want).abs() < 0.15, "got {share}, want ~{want}");
        }
    }

    #[test]
    fn empty_total_yields_zero_shares() {
        let segments = [
            Segment { name: "A", total_ltv: 0.0 },
            Segment { name: "B", total_ltv: 0.0 },
        ];
        assert_eq!(SegmentShareChart::percent_shares(&segments), vec![0.0, 0.0]);
    }
}
