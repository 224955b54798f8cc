use crate::model::ExportError;
use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1200, 600);

fn chart_err<E: std::fmt::Display>(e: E) -> ExportError {
    ExportError::Chart(e.to_string())
}

/// Bar chart of brand scores: categorical x-axis, one orange bar per brand,
/// value label above each bar. Empty input renders nothing.
pub fn render_bar_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    rows: &[(String, f64)],
) -> Result<(), ExportError> {
    if rows.is_empty() {
        return Ok(());
    }

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let max = rows
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let count = rows.len();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..count as f64, 0f64..max * 1.15)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(count)
        .x_label_formatter(&|x| {
            let idx = x.floor() as usize;
            rows.get(idx).map(|(name, _)| name.clone()).unwrap_or_default()
        })
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, (_, value))| {
            Rectangle::new([(i as f64 + 0.2, 0.0), (i as f64 + 0.8, *value)], ORANGE.filled())
        }))
        .map_err(chart_err)?;

    let label_style =
        TextStyle::from(("sans-serif", 16).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(rows.iter().enumerate().map(|(i, (_, value))| {
            Text::new(
                format!("{value:.1}"),
                (i as f64 + 0.5, *value + max * 0.02),
                label_style.clone(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
