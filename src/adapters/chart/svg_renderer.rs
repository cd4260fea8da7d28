//! SVG chart renderer.
//!
//! Draws the predicted AM and PM series as two labeled lines over
//! Monday..Saturday using `plotters`' SVG backend. Every call builds its own
//! backend over a fresh in-memory buffer, so concurrent renders never share
//! drawing state.

use plotters::prelude::*;

use crate::domain::ledger::{MarketDay, PredictionPattern};
use crate::ports::{ChartError, ChartImage, ChartRenderer};

const CHART_SIZE: (u32, u32) = (640, 480);

/// Chart renderer producing an in-memory SVG per call.
#[derive(Debug, Clone, Default)]
pub struct SvgChartRenderer;

impl SvgChartRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, pattern: &PredictionPattern) -> Result<ChartImage, ChartError> {
        let (am, pm) = pattern.am_pm_series();

        let y_max = pattern
            .values()
            .iter()
            .copied()
            .fold(0.0f64, f64::max)
            .max(1.0)
            * 1.1;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| ChartError::render(e.to_string()))?;

            let mut chart = ChartBuilder::on(&root)
                .caption("Predicted averages", ("sans-serif", 20))
                .margin(10)
                .x_label_area_size(35)
                .y_label_area_size(45)
                .build_cartesian_2d(0f64..5f64, 0f64..y_max)
                .map_err(|e| ChartError::render(e.to_string()))?;

            chart
                .configure_mesh()
                .x_labels(6)
                .x_label_formatter(&|x| {
                    MarketDay::from_index(x.round() as usize)
                        .map(|day| day.name().to_string())
                        .unwrap_or_default()
                })
                .draw()
                .map_err(|e| ChartError::render(e.to_string()))?;

            chart
                .draw_series(LineSeries::new(
                    am.iter().enumerate().map(|(i, v)| (i as f64, *v)),
                    &BLUE,
                ))
                .map_err(|e| ChartError::render(e.to_string()))?
                .label("AM Averages")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

            chart
                .draw_series(LineSeries::new(
                    pm.iter().enumerate().map(|(i, v)| (i as f64, *v)),
                    &RED,
                ))
                .map_err(|e| ChartError::render(e.to_string()))?
                .label("PM Averages")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

            chart
                .configure_series_labels()
                .border_style(&BLACK)
                .draw()
                .map_err(|e| ChartError::render(e.to_string()))?;

            root.present()
                .map_err(|e| ChartError::render(e.to_string()))?;
        }

        Ok(ChartImage::new(svg.into_bytes(), "image/svg+xml"))
    }
}
