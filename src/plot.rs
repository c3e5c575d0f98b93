//! Figure rendering with plotters, shared by the study binaries.
//!
//! Four figures: the aerodynamic efficiency polar, the mass-budget donut, the
//! off-design market-coverage chart, and the tank gravimetric-efficiency
//! sensitivity chart.

use std::path::Path;

use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

use lh2_aero::{AeroBuildup, OperatingPoint, PolarSet};
use lh2_config::FuelType;
use lh2_core::spacing::linspace;
use lh2_core::units;
use lh2_design::{CoveragePoint, DesignPoint};
use lh2_mass::Subsystem;

/// X11 deep sky blue, the hydrogen accent color.
const LH2_COLOR: RGBColor = RGBColor(0, 191, 255);
/// X11 dark orange, the kerosene accent color.
const KEROSENE_COLOR: RGBColor = RGBColor(255, 140, 0);
const GRAY: RGBColor = RGBColor(128, 128, 128);

/// One off-design coverage curve plus where its design point sits on it.
#[derive(Debug, Clone)]
pub struct CoverageCurve {
    pub fuel: FuelType,
    pub design_range_nmi: f64,
    /// Airliner-class annotation drawn under the design marker, if any.
    pub class_label: Option<String>,
    pub points: Vec<CoveragePoint>,
}

/// One sample of the tank-fraction sweep, feasible or not.
#[derive(Debug, Clone, Copy)]
pub struct TankSensitivityPoint {
    pub fraction: f64,
    pub transport_energy_mj_per_pax_km: f64,
    pub feasible: bool,
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("drawing error: {0}")]
    Draw(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Draw(error.to_string())
    }
}

type Chart2d<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Lift-to-drag ratio against angle of attack at the cruise condition.
pub fn render_efficiency_polar(
    point: &DesignPoint,
    polars: &PolarSet,
    output: &Path,
) -> Result<(), PlotError> {
    ensure_parent(output)?;

    let alphas = linspace(-15.0, 15.0, 50);
    let mut curve = Vec::with_capacity(alphas.len());
    for &alpha_deg in &alphas {
        let op_point = OperatingPoint {
            alpha_deg,
            ..point.op_point
        };
        let forces = AeroBuildup {
            airplane: &point.airplane,
            op_point: &op_point,
            polars,
        }
        .run();
        curve.push((alpha_deg, forces.lift_to_drag()));
    }

    let mut ld_min = f64::INFINITY;
    let mut ld_max = f64::NEG_INFINITY;
    for &(_, ld) in &curve {
        ld_min = ld_min.min(ld);
        ld_max = ld_max.max(ld);
    }
    let pad = 0.05 * (ld_max - ld_min).max(1.0);

    let root = BitMapBackend::new(output, (1280, 960)).into_drawing_area();
    root.fill(&WHITE)?;
    let font_family = select_font_family();

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            "Aerodynamic Efficiency Polar",
            FontDesc::new(font_family, 32.0, FontStyle::Bold),
        )
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(-15.0f64..15.0, (ld_min - pad)..(ld_max + pad))?;

    chart
        .configure_mesh()
        .x_desc("Angle of Attack α [deg]")
        .y_desc("Lift / Drag [-]")
        .label_style(FontDesc::new(font_family, 18.0, FontStyle::Normal))
        .axis_desc_style(FontDesc::new(font_family, 22.0, FontStyle::Normal))
        .x_labels(7)
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        curve,
        ShapeStyle::from(&RGBColor(31, 119, 180)).stroke_width(3),
    )))?;

    root.present()?;
    Ok(())
}

/// Donut chart of the subsystem mass budget with leader-line labels.
pub fn render_mass_budget(point: &DesignPoint, output: &Path) -> Result<(), PlotError> {
    ensure_parent(output)?;

    let total_kg = point.computed_togw_kg();
    let empty_kg = point.empty_mass_kg();

    let root = BitMapBackend::new(output, (1500, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let font_family = select_font_family();

    // Equal-aspect data frame so the donut stays round.
    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(-2.9f64..2.9, -1.74f64..1.74)?;

    struct Wedge {
        label: String,
        x_pie: f64,
        y_pie: f64,
        y_text: f64,
    }

    let palette = husl_wheel(Subsystem::ALL.len());
    let mut wedges: Vec<Wedge> = Vec::with_capacity(Subsystem::ALL.len());
    let mut start_deg = 90.0;
    for (index, subsystem) in Subsystem::ALL.into_iter().enumerate() {
        let mass_kg = point.breakdown.get(subsystem).mass_kg;
        let end_deg = start_deg + 360.0 * mass_kg / total_kg;
        chart.draw_series(std::iter::once(Polygon::new(
            annular_sector(start_deg, end_deg, 0.5, 1.0),
            palette[index].filled(),
        )))?;
        let mid = 0.5 * (start_deg + end_deg);
        wedges.push(Wedge {
            label: wedge_label(subsystem, mass_kg, total_kg),
            x_pie: mid.to_radians().cos(),
            y_pie: mid.to_radians().sin(),
            y_text: 0.0,
        });
        start_deg = end_deg;
    }

    // Each hemisphere gets an evenly spaced column of labels, matched to its
    // wedges in vertical order.
    let mut right: Vec<usize> = (0..wedges.len()).filter(|&i| wedges[i].x_pie > 0.0).collect();
    let mut left: Vec<usize> = (0..wedges.len()).filter(|&i| wedges[i].x_pie <= 0.0).collect();
    for bucket in [&mut right, &mut left] {
        bucket.sort_by(|&a, &b| {
            wedges[a]
                .y_pie
                .partial_cmp(&wedges[b].y_pie)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let y_texts: Vec<f64> = linspace(-1.0, 1.0, bucket.len()).iter().map(|t| 1.4 * t).collect();
        for (slot, &index) in bucket.iter().enumerate() {
            wedges[index].y_text = y_texts[slot];
        }
    }

    let leader_style = ShapeStyle::from(&BLACK).stroke_width(1);
    let label_font = FontDesc::new(font_family, 20.0, FontStyle::Normal);
    for wedge in &wedges {
        let sign = if wedge.x_pie > 0.0 { 1.0 } else { -1.0 };
        let x_text = 1.2 * sign;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![
                (wedge.x_pie, wedge.y_pie),
                (1.05 * sign, wedge.y_text),
                (x_text - 0.02 * sign, wedge.y_text),
            ],
            leader_style,
        )))?;
        let h_pos = if sign > 0.0 { HPos::Left } else { HPos::Right };
        let style = label_font.color(&BLACK).pos(Pos::new(h_pos, VPos::Center));
        draw_multiline(&mut chart, &wedge.label, (x_text, wedge.y_text), &style, 0.09)?;
    }

    let center_bold = FontDesc::new(font_family, 34.0, FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let center_norm = FontDesc::new(font_family, 34.0, FontStyle::Normal)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(std::iter::once(Text::new(
        "Mass Budget".to_string(),
        (0.0, 0.16),
        center_bold,
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        format!("TOGW: {total_kg:.0} kg"),
        (0.0, 0.0),
        center_norm.clone(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        format!("OEW: {empty_kg:.0} kg"),
        (0.0, -0.16),
        center_norm,
    )))?;

    root.present()?;
    Ok(())
}

/// Transport energy against mission range for a family of designs, with the
/// reachable region shaded above each curve.
pub fn render_market_coverage(curves: &[CoverageCurve], output: &Path) -> Result<(), PlotError> {
    ensure_parent(output)?;

    let root = BitMapBackend::new(output, (1440, 1290)).into_drawing_area();
    root.fill(&WHITE)?;
    let font_family = select_font_family();

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            "Off-Design Transport Efficiency and Market Coverage",
            FontDesc::new(font_family, 30.0, FontStyle::Bold),
        )
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0f64..10_000.0, 0.0f64..1.25)?;

    chart
        .configure_mesh()
        .x_desc("Mission Range [nmi]")
        .y_desc("Transport Energy [MJ / passenger-km]")
        .label_style(FontDesc::new(font_family, 18.0, FontStyle::Normal))
        .axis_desc_style(FontDesc::new(font_family, 22.0, FontStyle::Normal))
        .x_labels(5)
        .y_labels(6)
        .draw()?;

    for curve in curves {
        let base = fuel_base_color(curve.fuel);
        // Longer design ranges draw in darker shades of the fuel color.
        let shade = (curve.design_range_nmi / 5000.0).powf(-0.5) - 0.2;
        let color = adjust_lightness(base, shade);

        let series: Vec<(f64, f64)> = curve
            .points
            .iter()
            .map(|p| (p.range_m / units::NAUTICAL_MILE, p.transport_energy_mj_per_pax_km))
            .collect();

        chart.draw_series(AreaSeries::new(series.iter().copied(), 1.25, color.mix(0.1)))?;
        chart.draw_series(std::iter::once(PathElement::new(
            series.clone(),
            ShapeStyle::from(&color.mix(0.8)).stroke_width(2),
        )))?;

        let design = series.iter().copied().min_by(|a, b| {
            let da = (a.0 - curve.design_range_nmi).abs();
            let db = (b.0 - curve.design_range_nmi).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(design) = design {
            chart.draw_series(std::iter::once(Circle::new(design, 6, color.filled())))?;
            if let Some(label) = &curve.class_label {
                let style = FontDesc::new(font_family, 18.0, FontStyle::Normal)
                    .color(&adjust_lightness(color, 0.5))
                    .pos(Pos::new(HPos::Center, VPos::Top));
                chart.draw_series(std::iter::once(Text::new(
                    label.clone(),
                    (design.0, design.1 - 0.015),
                    style,
                )))?;
            }
        }
    }

    let gray_note = FontDesc::new(font_family, 18.0, FontStyle::Normal)
        .color(&GRAY)
        .pos(Pos::new(HPos::Center, VPos::Center));
    draw_vertical_arrow(&mut chart, 1500.0, 1.065, 1.175, 0.035, 75.0, GRAY)?;
    chart.draw_series(std::iter::once(Text::new(
        "Less Efficient".to_string(),
        (1500.0, 1.035),
        gray_note.clone(),
    )))?;
    draw_vertical_arrow(&mut chart, 1500.0, 0.185, 0.075, 0.035, 75.0, GRAY)?;
    chart.draw_series(std::iter::once(Text::new(
        "More Efficient".to_string(),
        (1500.0, 0.215),
        gray_note,
    )))?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            Vec::<(f64, f64)>::new(),
            GRAY.stroke_width(2),
        )))?
        .label("Each line is a unique airplane")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], GRAY.stroke_width(2)));
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(FontDesc::new(font_family, 18.0, FontStyle::Normal))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Transport energy against tank gravimetric efficiency, with the kerosene
/// comparison band and the point design marked.
pub fn render_tank_sensitivity(
    points: &[TankSensitivityPoint],
    output: &Path,
) -> Result<(), PlotError> {
    ensure_parent(output)?;

    let root = BitMapBackend::new(output, (1450, 1125)).into_drawing_area();
    root.fill(&WHITE)?;
    let font_family = select_font_family();

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            "LH2 Tank Fuel Fraction vs. Required Transport Energy",
            FontDesc::new(font_family, 28.0, FontStyle::Bold),
        )
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0f64..1.0, 0.0f64..2.0)?;

    chart
        .configure_mesh()
        .x_desc("Fuel Tank Gravimetric Efficiency η_tank = m_fuel / (m_fuel + m_tank)")
        .y_desc("Transport Energy [MJ / passenger-km]")
        .x_label_formatter(&|x| format!("{:.0}%", 100.0 * x))
        .label_style(FontDesc::new(font_family, 18.0, FontStyle::Normal))
        .axis_desc_style(FontDesc::new(font_family, 20.0, FontStyle::Normal))
        .x_labels(5)
        .y_labels(5)
        .draw()?;

    let subtitle = FontDesc::new(font_family, 20.0, FontStyle::Normal)
        .color(&GRAY)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(std::iter::once(Text::new(
        "400 pax, 7,500 nmi mission".to_string(),
        (0.5, 1.93),
        subtitle,
    )))?;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.0, 0.84), (1.0, 1.13)],
        KEROSENE_COLOR.mix(0.25).filled(),
    )))?;
    let band_note = FontDesc::new(font_family, 17.0, FontStyle::Normal)
        .color(&adjust_lightness(KEROSENE_COLOR, 0.5))
        .pos(Pos::new(HPos::Left, VPos::Bottom));
    chart.draw_series(std::iter::once(Text::new(
        "Typical range for kerosene aircraft".to_string(),
        (0.02, 0.905),
        band_note.clone(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        "(B777-300ER: 0.84 - 1.13 MJ / pax-km)".to_string(),
        (0.02, 0.86),
        band_note,
    )))?;

    // Infeasible samples break the curve instead of being bridged over.
    let curve_style = ShapeStyle::from(&LH2_COLOR).stroke_width(3);
    let mut segment: Vec<(f64, f64)> = Vec::new();
    for point in points {
        if point.feasible && point.transport_energy_mj_per_pax_km.is_finite() {
            segment.push((point.fraction, point.transport_energy_mj_per_pax_km));
        } else if !segment.is_empty() {
            chart.draw_series(std::iter::once(PathElement::new(
                std::mem::take(&mut segment),
                curve_style,
            )))?;
        }
    }
    if !segment.is_empty() {
        chart.draw_series(std::iter::once(PathElement::new(segment, curve_style)))?;
    }

    let marker_color = adjust_lightness(LH2_COLOR, 0.5);
    let point_design = (1.0 / (1.0 + 0.356), 0.904179);
    chart.draw_series(std::iter::once(Circle::new(point_design, 6, marker_color.filled())))?;
    let leader_style = ShapeStyle::from(&marker_color.mix(0.5)).stroke_width(1);
    let text_anchor = (point_design.0 + 0.07, point_design.1 + 0.17);
    chart.draw_series(std::iter::once(PathElement::new(
        vec![
            (text_anchor.0, text_anchor.1 - 0.01),
            (text_anchor.0, point_design.1),
            (point_design.0 + 0.015, point_design.1),
        ],
        leader_style,
    )))?;
    let marker_note = FontDesc::new(font_family, 18.0, FontStyle::Normal)
        .color(&marker_color)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(std::iter::once(Text::new(
        "LH2 Point Design".to_string(),
        (text_anchor.0, text_anchor.1 + 0.046),
        marker_note.clone(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        "\"Best Guess\"".to_string(),
        (text_anchor.0, text_anchor.1),
        marker_note,
    )))?;

    let gray_note = FontDesc::new(font_family, 18.0, FontStyle::Normal)
        .color(&GRAY)
        .pos(Pos::new(HPos::Center, VPos::Center));
    draw_vertical_arrow(&mut chart, 0.125, 1.74, 1.9, 0.05, 0.008, GRAY)?;
    chart.draw_series(std::iter::once(Text::new(
        "Less Efficient".to_string(),
        (0.125, 1.70),
        gray_note.clone(),
    )))?;
    draw_vertical_arrow(&mut chart, 0.125, 0.26, 0.1, 0.05, 0.008, GRAY)?;
    chart.draw_series(std::iter::once(Text::new(
        "More Efficient".to_string(),
        (0.125, 0.30),
        gray_note,
    )))?;

    root.present()?;
    Ok(())
}

fn fuel_base_color(fuel: FuelType) -> RGBColor {
    match fuel {
        FuelType::Hydrogen => LH2_COLOR,
        FuelType::JetA => KEROSENE_COLOR,
    }
}

/// Matches the platform font fallbacks used across the study figures.
fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn ensure_parent(path: &Path) -> Result<(), PlotError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Closed polygon tracing an annular sector, outer arc then inner arc back.
fn annular_sector(start_deg: f64, end_deg: f64, r_inner: f64, r_outer: f64) -> Vec<(f64, f64)> {
    let steps = ((end_deg - start_deg).abs().ceil() as usize).max(2);
    let mut points = Vec::with_capacity(2 * (steps + 1));
    for i in 0..=steps {
        let theta = (start_deg + (end_deg - start_deg) * i as f64 / steps as f64).to_radians();
        points.push((r_outer * theta.cos(), r_outer * theta.sin()));
    }
    for i in (0..=steps).rev() {
        let theta = (start_deg + (end_deg - start_deg) * i as f64 / steps as f64).to_radians();
        points.push((r_inner * theta.cos(), r_inner * theta.sin()));
    }
    points
}

fn wedge_label(subsystem: Subsystem, mass_kg: f64, total_kg: f64) -> String {
    let name = subsystem.label();
    let pct = 100.0 * mass_kg / total_kg;
    let joiner = if name.len() < 20 { ", " } else { "\n" };
    if pct > 0.5 {
        format!("{name}{joiner}{mass_kg:.0} kg, {pct:.0}%")
    } else {
        format!("{name}{joiner}{mass_kg:.0} kg")
    }
}

/// Draws `\n`-separated text centered vertically on `(x, y)`.
fn draw_multiline(
    chart: &mut Chart2d<'_, '_>,
    text: &str,
    (x, y): (f64, f64),
    style: &TextStyle<'_>,
    line_height: f64,
) -> Result<(), PlotError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let top = y + 0.5 * line_height * (lines.len() as f64 - 1.0);
    for (row, line) in lines.iter().enumerate() {
        chart.draw_series(std::iter::once(Text::new(
            line.to_string(),
            (x, top - line_height * row as f64),
            style.clone(),
        )))?;
    }
    Ok(())
}

/// Straight vertical annotation arrow with a filled triangular head at the tip.
fn draw_vertical_arrow(
    chart: &mut Chart2d<'_, '_>,
    x: f64,
    tail_y: f64,
    tip_y: f64,
    head_length: f64,
    head_half_width: f64,
    color: RGBColor,
) -> Result<(), PlotError> {
    let direction = (tip_y - tail_y).signum();
    let base_y = tip_y - direction * head_length;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x, tail_y), (x, base_y)],
        ShapeStyle::from(&color).stroke_width(2),
    )))?;
    chart.draw_series(std::iter::once(Polygon::new(
        vec![(x - head_half_width, base_y), (x + head_half_width, base_y), (x, tip_y)],
        color.filled(),
    )))?;
    Ok(())
}

/// Evenly spaced hues at fixed saturation and lightness, one per wedge.
fn husl_wheel(n: usize) -> Vec<RGBColor> {
    (0..n)
        .map(|i| hsl_to_rgb((i as f64 / n as f64 + 0.01) % 1.0, 0.9, 0.65))
        .collect()
}

/// Scales a color's lightness in HSL space, clamped to [0, 1].
fn adjust_lightness(color: RGBColor, amount: f64) -> RGBColor {
    let (h, s, l) = rgb_to_hsl(color);
    hsl_to_rgb(h, s, (amount * l).clamp(0.0, 1.0))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RGBColor {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(1.0)) * 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    RGBColor(
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

fn rgb_to_hsl(color: RGBColor) -> (f64, f64, f64) {
    let r = color.0 as f64 / 255.0;
    let g = color.1 as f64 / 255.0;
    let b = color.2 as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = 0.5 * (max + min);
    if max == min {
        return (0.0, 0.0, l);
    }
    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } / 6.0;
    (h, s, l)
}
