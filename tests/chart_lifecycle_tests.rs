use chart_lite::core::SurfaceSize;
use chart_lite::render::{
    Color, DrawCommand, FillStyle, Path, Rect, RecordingSurface, StrokeStyle, Surface,
    TextPrimitive,
};
use chart_lite::{Chart, ChartConfig, ChartError, ChartKind, ChartResult, Dataset};

fn line_config() -> ChartConfig {
    ChartConfig::line(["Ene", "Feb", "Mar"])
        .with_dataset(Dataset::new("Ingresos", [300.0, 280.0, 310.0]))
        .with_dataset(Dataset::new("Gastos", [100.0, 200.0, 150.0]).with_filled(true))
}

fn bar_config() -> ChartConfig {
    ChartConfig::bar(["Comida", "Ocio", "Casa"])
        .with_dataset(Dataset::new("Gasto", [340.0, 45.0, 800.0]))
}

#[test]
fn destroy_clears_line_chart() {
    let mut surface = RecordingSurface::new(640, 360);
    let mut chart = Chart::create(&mut surface, line_config());
    assert!(!chart.surface().is_blank());

    chart.destroy();
    assert!(chart.is_destroyed());
    assert!(chart.surface().is_blank());
    assert_eq!(
        chart.surface().commands().last(),
        Some(&DrawCommand::Clear(Rect::new(0.0, 0.0, 640.0, 360.0)))
    );
}

#[test]
fn destroy_clears_bar_chart_and_is_idempotent() {
    let mut surface = RecordingSurface::new(500, 260);
    let mut chart = Chart::create(&mut surface, bar_config());
    chart.destroy();
    chart.destroy();

    assert!(chart.is_destroyed());
    assert!(surface.is_blank());
    assert_eq!(surface.clear_count(), 3);
}

#[test]
fn create_uses_client_size_when_pixel_size_is_unset() {
    let mut surface = RecordingSurface::with_client_size(420, 210);
    let chart = Chart::create(&mut surface, line_config());
    assert_eq!(chart.size(), SurfaceSize::new(420, 210));

    assert_eq!(
        surface.commands()[0],
        DrawCommand::Resize(SurfaceSize::new(420, 210))
    );
    assert_eq!(
        surface.commands()[1],
        DrawCommand::Clear(Rect::new(0.0, 0.0, 420.0, 210.0))
    );
    assert_eq!(surface.pixel_size(), SurfaceSize::new(420, 210));
}

#[test]
fn explicit_pixel_size_is_not_rewritten() {
    let mut surface = RecordingSurface::new(300, 150);
    let _chart = Chart::create(&mut surface, line_config());
    assert!(!surface
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Resize(_))));
}

#[test]
fn zero_sized_surface_is_cleared_but_not_drawn() {
    let mut surface = RecordingSurface::default();
    let chart = Chart::create(&mut surface, line_config());
    assert!(chart.render_state().is_none());
    assert_eq!(surface.clear_count(), 1);
    assert_eq!(surface.drawing_count(), 0);
}

#[test]
fn redraw_is_destroy_then_create() {
    let mut surface = RecordingSurface::new(600, 300);
    {
        let mut first = Chart::create(&mut surface, line_config());
        first.destroy();
    }
    let second = Chart::create(&mut surface, bar_config());
    assert_eq!(second.kind(), ChartKind::Bar);

    let visible = surface.visible_commands();
    assert!(visible
        .iter()
        .all(|c| !matches!(c, DrawCommand::StrokePath { .. })));
    assert!(!surface.is_blank());
}

#[test]
fn overlapping_instances_keep_the_latest_render_visible() {
    let mut surface = RecordingSurface::new(600, 300);
    let _first = Chart::create(&mut surface, line_config());
    let _second = Chart::create(&mut surface, bar_config());

    let visible_texts: Vec<&str> = surface
        .visible_commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillText(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect();
    assert!(visible_texts.contains(&"Comida"));
    assert!(!visible_texts.contains(&"Ene"));
}

#[test]
fn owned_surface_is_returned_by_into_surface() {
    let chart = Chart::create(RecordingSurface::new(400, 200), bar_config());
    assert_eq!(chart.config().labels.len(), 3);
    let surface = chart.into_surface();
    assert_eq!(surface.rects().count(), 6);
}

/// Surface that accepts geometry but fails on the first text draw.
#[derive(Default)]
struct FailingTextSurface {
    inner: RecordingSurface,
}

impl Surface for FailingTextSurface {
    fn pixel_size(&self) -> SurfaceSize {
        SurfaceSize::new(400, 200)
    }

    fn client_size(&self) -> SurfaceSize {
        SurfaceSize::default()
    }

    fn set_pixel_size(&mut self, size: SurfaceSize) -> ChartResult<()> {
        self.inner.set_pixel_size(size)
    }

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()> {
        self.inner.clear_rect(rect)
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()> {
        self.inner.stroke_path(path, style)
    }

    fn fill_path(&mut self, path: &Path, style: FillStyle) -> ChartResult<()> {
        self.inner.fill_path(path, style)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> ChartResult<()> {
        self.inner.fill_rect(rect, color)
    }

    fn fill_text(&mut self, _text: &TextPrimitive) -> ChartResult<()> {
        Err(ChartError::Backend("font unavailable".to_owned()))
    }
}

#[test]
fn backend_failure_ends_the_pass_without_panicking() {
    let mut surface = FailingTextSurface::default();
    let mut chart = Chart::create(&mut surface, line_config());
    assert!(chart.render_state().is_none());

    chart.destroy();
    assert!(chart.is_destroyed());
    assert_eq!(surface.inner.strokes().count(), 1);
    assert_eq!(surface.inner.clear_count(), 2);
}
