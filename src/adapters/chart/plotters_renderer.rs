//! Plotters adapter for the chart renderer port.
//!
//! PNG goes through the bitmap backend and SVG through the vector backend;
//! both share the same drawing code. Sizes are given in inches and points
//! and converted with the configured dpi.

use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::chart::{
    AxisRange, FrontierChart, LineStyle, Polyline, SeriesColor, TradespaceChart,
};
use crate::ports::{ChartRenderer, RenderError};

type Plane = Cartesian2d<RangedCoordf64, RangedCoordf64>;

/// Output image format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }
}

/// Physical size and typography of rendered images.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub format: ImageFormat,
    pub dpi: u32,
    pub width_in: f64,
    pub height_in: f64,
    pub font_family: String,
    /// Font size in points.
    pub font_size: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            dpi: 300,
            width_in: 6.5,
            height_in: 3.5,
            font_family: "serif".to_string(),
            font_size: 8.0,
        }
    }
}

impl RenderSettings {
    /// Image size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        ((self.width_in * dpi).round() as u32, (self.height_in * dpi).round() as u32)
    }

    /// Converts points to pixels.
    fn px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }

    fn font_px(&self) -> f64 {
        self.px(self.font_size)
    }

    fn line_px(&self) -> u32 {
        self.px(0.75).round().max(1.0) as u32
    }
}

/// Draws chart models with the plotters crate.
pub struct PlottersRenderer {
    settings: RenderSettings,
}

impl PlottersRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render_tradespace(&self, chart: &TradespaceChart, path: &Path) -> Result<(), RenderError> {
        if chart.is_empty() {
            return Err(RenderError::empty_chart(chart.title.clone()));
        }
        check_axes(&chart.title, chart.x_range(), chart.y_range())?;
        prepare_parent(path)?;
        let size = self.settings.pixel_size();
        match self.settings.format {
            ImageFormat::Png => draw_tradespace(
                BitMapBackend::new(path, size).into_drawing_area(),
                chart,
                &self.settings,
            )?,
            ImageFormat::Svg => draw_tradespace(
                SVGBackend::new(path, size).into_drawing_area(),
                chart,
                &self.settings,
            )?,
        }
        tracing::debug!("Rendered {} points to {}", chart.point_count(), path.display());
        Ok(())
    }

    fn render_frontier(&self, chart: &FrontierChart, path: &Path) -> Result<(), RenderError> {
        check_axes(&chart.title, chart.x_range(), chart.y_range())?;
        prepare_parent(path)?;
        let size = self.settings.pixel_size();
        match self.settings.format {
            ImageFormat::Png => draw_frontier(
                BitMapBackend::new(path, size).into_drawing_area(),
                chart,
                &self.settings,
            )?,
            ImageFormat::Svg => draw_frontier(
                SVGBackend::new(path, size).into_drawing_area(),
                chart,
                &self.settings,
            )?,
        }
        tracing::debug!("Rendered frontier comparison to {}", path.display());
        Ok(())
    }

    fn extension(&self) -> &str {
        self.settings.format.extension()
    }
}

fn check_axes(title: &str, x: AxisRange, y: AxisRange) -> Result<(), RenderError> {
    x.validate("x")
        .and_then(|_| y.validate("y"))
        .map_err(|e| RenderError::invalid_axis(title, e))
}

fn prepare_parent(path: &Path) -> Result<(), RenderError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|e| RenderError::io(path, e))
        }
        _ => Ok(()),
    }
}

fn rgb(color: SeriesColor) -> RGBColor {
    match color {
        SeriesColor::Black => RGBColor(0, 0, 0),
        SeriesColor::Blue => RGBColor(0, 0, 255),
        SeriesColor::Green => RGBColor(0, 128, 0),
        SeriesColor::Red => RGBColor(255, 0, 0),
        SeriesColor::Magenta => RGBColor(191, 0, 191),
        SeriesColor::Yellow => RGBColor(191, 191, 0),
        SeriesColor::Grey => RGBColor(77, 77, 77),
    }
}

fn build_plane<'a, DB>(
    root: &'a DrawingArea<DB, plotters::coord::Shift>,
    x: AxisRange,
    y: AxisRange,
    x_label: &str,
    y_label: &str,
    settings: &RenderSettings,
) -> Result<ChartContext<'a, DB, Plane>, RenderError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let font = settings.font_px();
    let mut ctx = ChartBuilder::on(root)
        .margin((font * 0.8) as u32)
        .x_label_area_size((font * 3.0) as u32)
        .y_label_area_size((font * 5.0) as u32)
        .build_cartesian_2d(x.min..x.max, y.min..y.max)
        .map_err(RenderError::backend)?;

    ctx.configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style((settings.font_family.as_str(), font))
        .axis_desc_style((settings.font_family.as_str(), font))
        .draw()
        .map_err(RenderError::backend)?;
    Ok(ctx)
}

fn draw_polyline<'a, DB>(
    ctx: &mut ChartContext<'a, DB, Plane>,
    line: &Polyline,
    settings: &RenderSettings,
    label: Option<&str>,
) -> Result<(), RenderError>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
{
    let width = settings.line_px();
    let style = rgb(line.color).stroke_width(width);
    let points = line.points.iter().copied();
    let dash = (width * 6) as i32;
    let anno = match line.style {
        LineStyle::Solid => ctx.draw_series(LineSeries::new(points, style)),
        LineStyle::Dashed => ctx.draw_series(DashedLineSeries::new(points, dash, dash / 2, style)),
    }
    .map_err(RenderError::backend)?;

    if let Some(label) = label {
        let legend_len = (settings.font_px() * 2.0) as i32;
        anno.label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], style));
    }
    Ok(())
}

fn draw_legend<'a, DB>(ctx: &mut ChartContext<'a, DB, Plane>, settings: &RenderSettings) -> Result<(), RenderError>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
{
    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((settings.font_family.as_str(), settings.font_px()))
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(RenderError::backend)
}

fn draw_tradespace<DB>(
    root: DrawingArea<DB, plotters::coord::Shift>,
    chart: &TradespaceChart,
    settings: &RenderSettings,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(RenderError::backend)?;
    let mut ctx = build_plane(
        &root,
        chart.x_range(),
        chart.y_range(),
        &chart.axes.x_label,
        &chart.axes.y_label,
        settings,
    )?;

    let alpha = chart.marker_alpha.unwrap_or(1.0);
    let marker = (settings.px(1.5).round() as i32).max(1);
    let cap = (marker * 2) as u32;
    let line = settings.line_px();

    for series in &chart.series {
        let color = rgb(series.group.color);
        ctx.draw_series(series.points.iter().map(|p| {
            ErrorBar::new_vertical(
                p.cost,
                p.value - p.error,
                p.value,
                p.value + p.error,
                color.mix(0.3).stroke_width(line),
                cap,
            )
        }))
        .map_err(RenderError::backend)?;

        let anno = ctx
            .draw_series(
                series
                    .points
                    .iter()
                    .map(|p| Circle::new((p.cost, p.value), marker, color.mix(alpha).filled())),
            )
            .map_err(RenderError::backend)?;
        if chart.legend {
            anno.label(series.group.label.as_str())
                .legend(move |(x, y)| Circle::new((x, y), marker, color.filled()));
        }
    }

    if let Some(front) = &chart.overall_front {
        draw_polyline(&mut ctx, front, settings, None)?;
    }
    if let Some(trend) = &chart.trend {
        draw_polyline(&mut ctx, &trend.line, settings, None)?;
    }

    let font = settings.font_px();
    let family = settings.font_family.as_str();
    let offset = ((font * -0.6) as i32, (font * -1.1) as i32);
    ctx.draw_series(chart.labels.iter().map(|l| {
        EmptyElement::at((l.cost, l.value))
            + Text::new(l.id.to_string(), offset, (family, font).into_font().color(&rgb(l.color)))
    }))
    .map_err(RenderError::backend)?;

    if chart.legend {
        draw_legend(&mut ctx, settings)?;
    }
    root.present().map_err(RenderError::backend)
}

fn draw_frontier<DB>(
    root: DrawingArea<DB, plotters::coord::Shift>,
    chart: &FrontierChart,
    settings: &RenderSettings,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(RenderError::backend)?;
    let mut ctx = build_plane(
        &root,
        chart.x_range(),
        chart.y_range(),
        &chart.axes.x_label,
        &chart.axes.y_label,
        settings,
    )?;

    for band in &chart.bands {
        let upper = band.samples.iter().map(|(x, _, hi)| (*x, *hi));
        let lower = band.samples.iter().rev().map(|(x, lo, _)| (*x, *lo));
        let outline: Vec<(f64, f64)> = upper.chain(lower).collect();
        ctx.draw_series(std::iter::once(Polygon::new(outline, rgb(band.color).mix(0.15).filled())))
            .map_err(RenderError::backend)?;
    }

    for front in &chart.fronts {
        draw_polyline(&mut ctx, &front.line, settings, Some(&front.label))?;
    }

    let font = settings.font_px();
    let family = settings.font_family.as_str();
    for note in &chart.notes {
        let color = rgb(note.color);
        if let Some(target) = note.arrow_to {
            ctx.draw_series(std::iter::once(PathElement::new(
                vec![note.at, target],
                color.stroke_width(settings.line_px()),
            )))
            .map_err(RenderError::backend)?;
        }
        ctx.draw_series(std::iter::once(Text::new(
            note.text.clone(),
            note.at,
            (family, font).into_font().color(&color),
        )))
        .map_err(RenderError::backend)?;
    }

    draw_legend(&mut ctx, settings)?;
    root.present().map_err(RenderError::backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{Axes, FrontLine};

    #[test]
    fn pixel_size_follows_inches_and_dpi() {
        let settings = RenderSettings::default();
        assert_eq!(settings.pixel_size(), (1950, 1050));

        let settings = RenderSettings {
            dpi: 100,
            width_in: 6.0,
            height_in: 3.0,
            ..Default::default()
        };
        assert_eq!(settings.pixel_size(), (600, 300));
    }

    #[test]
    fn image_format_from_extension() {
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("svg"), Some(ImageFormat::Svg));
        assert_eq!(ImageFormat::from_extension("pdf"), None);
        assert_eq!(ImageFormat::Svg.extension(), "svg");
    }

    #[test]
    fn empty_tradespace_is_refused_before_touching_disk() {
        let renderer = PlottersRenderer::new(RenderSettings::default());
        let chart = TradespaceChart::build("empty", &[], &Default::default());
        let path = Path::new("/nonexistent/dir/empty-exp-ts.png");

        let err = renderer.render_tradespace(&chart, path).unwrap_err();
        assert!(matches!(err, RenderError::EmptyChart { .. }));
    }

    fn frontier_chart(axes: Axes) -> FrontierChart {
        let line = |points: Vec<(f64, f64)>, style| Polyline {
            points,
            color: SeriesColor::Black,
            style,
        };
        FrontierChart {
            title: "2-exp".to_string(),
            axes,
            fronts: vec![
                FrontLine {
                    label: "Independent Pareto Front".to_string(),
                    line: line(vec![(1000.0, 2000.0), (2000.0, 3000.0)], LineStyle::Solid),
                },
                FrontLine {
                    label: "Centralized Pareto Front (FSS Success)".to_string(),
                    line: line(vec![(1000.0, 2500.0), (2000.0, 4000.0)], LineStyle::Dashed),
                },
            ],
            bands: Vec::new(),
            notes: Vec::new(),
        }
    }

    #[test]
    fn frontier_with_legend_renders_to_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts").join("2-exp.svg");
        let renderer = PlottersRenderer::new(RenderSettings {
            format: ImageFormat::Svg,
            ..Default::default()
        });

        renderer.render_frontier(&frontier_chart(Axes::default()), &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn empty_axis_range_is_refused_before_touching_disk() {
        let renderer = PlottersRenderer::new(RenderSettings {
            format: ImageFormat::Svg,
            ..Default::default()
        });
        let axes = Axes {
            x: Some(AxisRange { min: 1000.0, max: 1000.0 }),
            ..Default::default()
        };
        let path = Path::new("/nonexistent/dir/2-exp.svg");

        let err = renderer.render_frontier(&frontier_chart(axes), path).unwrap_err();
        assert!(matches!(err, RenderError::InvalidAxis { .. }));
        assert!(err.to_string().contains("2-exp"));
    }
}
