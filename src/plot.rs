//! PNG charts for a finished design run.

use std::fs;
use std::path::Path;

use lander_design::{DesignResult, DesignState};
use plotters::prelude::*;
use thiserror::Error;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 700;

const BAR_COLORS: [RGBColor; 7] = [
    RGBColor(40, 160, 70),
    RGBColor(200, 60, 40),
    RGBColor(40, 90, 200),
    RGBColor(120, 120, 120),
    RGBColor(150, 100, 40),
    RGBColor(210, 100, 20),
    RGBColor(120, 60, 160),
];

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("nothing to plot: {0}")]
    Empty(&'static str),
    #[error("failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("drawing failed: {0}")]
    Drawing(String),
}

fn drawing<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Drawing(err.to_string())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn prepare_output(path: &Path) -> Result<(), PlotError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Mass components per pass (top) and the pass-to-pass change (bottom).
pub fn plot_convergence(history: &[DesignState], path: &Path) -> Result<(), PlotError> {
    if history.is_empty() {
        return Err(PlotError::Empty("iteration history"));
    }
    prepare_output(path)?;

    let font = select_font_family();
    let caption_font = FontDesc::new(font, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font, 16.0, FontStyle::Normal);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;
    let (upper, lower) = root.split_vertically((HEIGHT * 3 / 5) as i32);

    let last = history.len() as f64;
    let x_range = 0.5..last + 0.5;
    let mass_max = history
        .iter()
        .map(|s| s.total_mass_kg)
        .fold(0.0_f64, f64::max)
        * 1.05;

    {
        let mut chart = ChartBuilder::on(&upper)
            .margin(20)
            .caption("Mass convergence", caption_font)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range.clone(), 0.0..mass_max)
            .map_err(drawing)?;
        chart
            .configure_mesh()
            .x_desc("Iteration")
            .y_desc("Mass (kg)")
            .label_style(label_font.clone())
            .x_label_formatter(&|x| format!("{x:.0}"))
            .draw()
            .map_err(drawing)?;

        let series: [(&str, RGBColor, fn(&DesignState) -> f64); 4] = [
            ("Total", BLACK, |s| s.total_mass_kg),
            ("Propellant", RGBColor(200, 60, 40), |s| s.propellant_kg),
            ("Dry", RGBColor(40, 90, 200), |s| s.dry_mass_kg),
            ("Payload", RGBColor(40, 160, 70), |s| s.payload_kg),
        ];
        for (name, color, value) in series {
            let points: Vec<(f64, f64)> = history
                .iter()
                .map(|s| (s.iteration as f64, value(s)))
                .collect();
            chart
                .draw_series(std::iter::once(PathElement::new(
                    points.clone(),
                    color.stroke_width(2),
                )))
                .map_err(drawing)?
                .label(name)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
            chart
                .draw_series(points.into_iter().map(|p| Circle::new(p, 3, color.filled())))
                .map_err(drawing)?;
        }
        chart
            .configure_series_labels()
            .label_font(label_font.clone())
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(drawing)?;
    }

    {
        let delta_max = history.iter().map(|s| s.delta_kg).fold(0.0_f64, f64::max) * 1.1;
        let mut chart = ChartBuilder::on(&lower)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, 0.0..delta_max.max(1.0))
            .map_err(drawing)?;
        chart
            .configure_mesh()
            .x_desc("Iteration")
            .y_desc("Change (kg)")
            .label_style(label_font)
            .x_label_formatter(&|x| format!("{x:.0}"))
            .draw()
            .map_err(drawing)?;
        chart
            .draw_series(std::iter::once(PathElement::new(
                history
                    .iter()
                    .map(|s| (s.iteration as f64, s.delta_kg))
                    .collect::<Vec<_>>(),
                RGBColor(120, 60, 160).stroke_width(2),
            )))
            .map_err(drawing)?;
    }

    root.present().map_err(drawing)?;
    Ok(())
}

/// Bar chart of the final mass budget.
pub fn plot_mass_breakdown(result: &DesignResult, path: &Path) -> Result<(), PlotError> {
    let s = &result.final_state;
    let bars = [
        ("Payload", s.payload_kg),
        ("Propellant", s.propellant_kg),
        ("Subsystems", s.subsystems_kg),
        ("Structure", s.structure_kg),
        ("Landing gear", s.landing_gear_kg),
        ("Engines", s.engines_kg),
        ("Tanks", s.tanks_kg),
    ];
    let top = bars.iter().map(|(_, m)| *m).fold(0.0_f64, f64::max);
    if top <= 0.0 {
        return Err(PlotError::Empty("mass breakdown"));
    }
    prepare_output(path)?;

    let font = select_font_family();
    let caption_font = FontDesc::new(font, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font, 16.0, FontStyle::Normal);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let caption = format!("Mass breakdown ({:.0} kg total)", s.total_mass_kg);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, caption_font)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..bars.len() as f64, 0.0..top * 1.15)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Mass (kg)")
        .label_style(label_font.clone())
        .draw()
        .map_err(drawing)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, (_, mass))| {
            let x = i as f64;
            let color = BAR_COLORS[i % BAR_COLORS.len()];
            Rectangle::new([(x + 0.15, 0.0), (x + 0.85, *mass)], color.filled())
        }))
        .map_err(drawing)?;
    for (i, (name, mass)) in bars.iter().enumerate() {
        let x = i as f64 + 0.15;
        chart
            .draw_series([
                Text::new(name.to_string(), (x, *mass + top * 0.08), label_font.clone()),
                Text::new(format!("{mass:.0} kg"), (x, *mass + top * 0.04), label_font.clone()),
            ])
            .map_err(drawing)?;
    }

    root.present().map_err(drawing)?;
    Ok(())
}
