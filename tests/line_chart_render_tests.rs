use approx::assert_relative_eq;
use chart_lite::api::{
    ChartStyle, DEFAULT_AREA_FILL_COLOR, DEFAULT_AXIS_COLOR, LEGEND_ROW_HEIGHT, X_PADDING,
    Y_PADDING, layout_line_chart,
};
use chart_lite::core::{Domain, SurfaceSize};
use chart_lite::render::{
    Color, DrawCommand, PathCommand, Point, RecordingSurface, TextHAlign, TextVAlign,
};
use chart_lite::{Chart, ChartConfig, ChartOptions, Dataset};

fn monthly_config() -> ChartConfig {
    ChartConfig::line(["Ene", "Feb", "Mar"])
        .with_dataset(Dataset::new("Gastos", [100.0, 200.0, 150.0]).with_filled(true))
}

fn series_strokes(surface: &RecordingSurface) -> Vec<Vec<Point>> {
    surface
        .strokes()
        .filter(|(_, style)| style.width == 2.0)
        .map(|(path, _)| path.points().collect())
        .collect()
}

#[test]
fn monthly_scenario_renders_expected_geometry() {
    let mut surface = RecordingSurface::new(600, 300);
    let chart = Chart::create(&mut surface, monthly_config());
    let state = chart.render_state().expect("line chart renders");

    assert_eq!(state.domain, Domain::new(0.0, 200.0));
    assert_relative_eq!(state.plot.left, 50.0);
    assert_relative_eq!(state.plot.top, 30.0);
    assert_relative_eq!(state.plot.width, 500.0);
    assert_relative_eq!(state.plot.height, 240.0);
    assert_relative_eq!(state.step, 250.0);

    let strokes = series_strokes(&surface);
    assert_eq!(strokes.len(), 1);
    let xs: Vec<f64> = strokes[0].iter().map(|p| p.x - state.plot.left).collect();
    assert_eq!(xs.len(), 3);
    assert_relative_eq!(xs[0], 0.0);
    assert_relative_eq!(xs[1], state.plot.width / 2.0);
    assert_relative_eq!(xs[2], state.plot.width);
    let ys: Vec<f64> = strokes[0].iter().map(|p| p.y).collect();
    assert_relative_eq!(ys[0], 150.0);
    assert_relative_eq!(ys[1], 30.0);
    assert_relative_eq!(ys[2], 90.0);

    let fills: Vec<_> = surface.fills().collect();
    assert_eq!(fills.len(), 1);
    let (area, style) = fills[0];
    assert!(area.is_closed());
    let area_points: Vec<Point> = area.points().collect();
    assert_eq!(area_points.len(), 5);
    assert_eq!(area_points[3], Point::new(550.0, 270.0));
    assert_eq!(area_points[4], Point::new(50.0, 270.0));
    assert_eq!(style.color, DEFAULT_AREA_FILL_COLOR);
    assert_relative_eq!(style.global_alpha, 0.5);

    let legend_swatches: Vec<_> = surface.rects().collect();
    assert_eq!(legend_swatches.len(), 1);
    assert_eq!(legend_swatches[0].0.x, 450.0);
    assert_eq!(legend_swatches[0].0.y, 30.0);
}

#[test]
fn draw_order_is_axes_labels_ticks_series_legend() {
    let mut surface = RecordingSurface::new(600, 300);
    let _chart = Chart::create(&mut surface, monthly_config());

    let commands = surface.commands();
    assert!(matches!(commands[0], DrawCommand::Clear(_)));
    let DrawCommand::StrokePath { path, style } = &commands[1] else {
        panic!("axes expected after clear, got {:?}", commands[1]);
    };
    assert_eq!(style.color, DEFAULT_AXIS_COLOR);
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo(Point::new(50.0, 30.0)),
            PathCommand::LineTo(Point::new(50.0, 270.0)),
            PathCommand::LineTo(Point::new(550.0, 270.0)),
        ]
    );

    let kinds: Vec<&str> = commands
        .iter()
        .map(|command| match command {
            DrawCommand::Resize(_) => "resize",
            DrawCommand::Clear(_) => "clear",
            DrawCommand::StrokePath { .. } => "stroke",
            DrawCommand::FillPath { .. } => "fill",
            DrawCommand::FillRect { .. } => "rect",
            DrawCommand::FillText(_) => "text",
        })
        .collect();
    let mut expected = vec!["clear", "stroke", "text", "text", "text"];
    for _ in 0..6 {
        expected.extend(["stroke", "text"]);
    }
    expected.extend(["stroke", "fill", "rect", "text"]);
    assert_eq!(kinds, expected);
}

#[test]
fn category_and_tick_labels_use_axis_styling() {
    let mut surface = RecordingSurface::new(600, 300);
    let _chart = Chart::create(&mut surface, monthly_config());

    let texts: Vec<_> = surface.texts().collect();
    let categories: Vec<_> = texts
        .iter()
        .filter(|t| t.h_align == TextHAlign::Center)
        .collect();
    assert_eq!(
        categories.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
        ["Ene", "Feb", "Mar"]
    );
    assert!(categories
        .iter()
        .all(|t| t.y == 274.0 && t.v_align == TextVAlign::Top));

    let ticks: Vec<_> = texts
        .iter()
        .filter(|t| t.h_align == TextHAlign::Right)
        .collect();
    assert_eq!(
        ticks.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
        ["0", "40", "80", "120", "160", "200"]
    );
    assert!(ticks.iter().all(|t| t.x == 44.0 && t.color == DEFAULT_AXIS_COLOR));
    assert_relative_eq!(ticks[0].y, 270.0);
    assert_relative_eq!(ticks[5].y, 30.0);
}

#[test]
fn legend_rows_follow_dataset_order() {
    let red = Color::parse_css("red").expect("color");
    let blue = Color::parse_css("#0000ff").expect("color");
    let config = ChartConfig::line(["a", "b"])
        .with_dataset(Dataset::new("first", [1.0, 2.0]).with_line_color(red))
        .with_dataset(Dataset::new("second", [3.0, 4.0]).with_line_color(blue))
        .with_dataset(Dataset::new("third", [5.0, 6.0]));
    let mut surface = RecordingSurface::new(500, 300);
    let _chart = Chart::create(&mut surface, config);

    let swatches: Vec<_> = surface.rects().collect();
    assert_eq!(swatches.len(), 3);
    assert_eq!(*swatches[0].1, red);
    assert_eq!(*swatches[1].1, blue);
    assert_eq!(*swatches[2].1, Color::BLACK);
    for (index, (rect, _)) in swatches.iter().enumerate() {
        assert_eq!(rect.y, Y_PADDING + LEGEND_ROW_HEIGHT * index as f64);
        assert_eq!(rect.width, 12.0);
    }

    let legend_texts: Vec<_> = surface
        .texts()
        .filter(|t| t.h_align == TextHAlign::Left)
        .map(|t| (t.text.as_str(), t.x))
        .collect();
    assert_eq!(
        legend_texts,
        [("first", 366.0), ("second", 366.0), ("third", 366.0)]
    );
}

#[test]
fn options_colors_reach_axes_and_legend() {
    let axis = Color::parse_css("#aaaaaa").expect("color");
    let legend = Color::parse_css("#eeeeee").expect("color");
    let config = monthly_config().with_options(
        ChartOptions::default()
            .with_x_tick_color(axis)
            .with_legend_label_color(legend),
    );
    let mut surface = RecordingSurface::new(600, 300);
    let chart = Chart::create(&mut surface, config);
    assert_eq!(chart.style().axis_color, axis);

    let (_, axes_style) = surface.strokes().next().expect("axes");
    assert_eq!(axes_style.color, axis);
    let legend_text = surface
        .texts()
        .find(|t| t.text == "Gastos")
        .expect("legend label");
    assert_eq!(legend_text.color, legend);
}

#[test]
fn empty_labels_only_clear_the_surface() {
    let config = ChartConfig::line(Vec::<String>::new())
        .with_dataset(Dataset::new("values", [1.0, 2.0, 3.0]));
    let mut surface = RecordingSurface::new(400, 200);
    let chart = Chart::create(&mut surface, config);
    assert!(chart.render_state().is_none());

    assert_eq!(surface.clear_count(), 1);
    assert_eq!(surface.drawing_count(), 0);
}

#[test]
fn empty_datasets_only_clear_the_surface() {
    let mut surface = RecordingSurface::new(400, 200);
    let chart = Chart::create(&mut surface, ChartConfig::line(["a", "b"]));
    assert!(chart.render_state().is_none());
    assert_eq!(surface.commands().len(), 1);
    assert!(surface.is_blank());
}

#[test]
fn single_point_strokes_a_degenerate_line() {
    let config = ChartConfig::line(["only"]).with_dataset(Dataset::new("one", [5.0]));
    let mut surface = RecordingSurface::new(300, 200);
    let chart = Chart::create(&mut surface, config);
    let state = chart.render_state().expect("renders");

    assert_relative_eq!(state.step, state.plot.width);
    let strokes = series_strokes(&surface);
    assert_eq!(strokes, vec![vec![Point::new(X_PADDING, Y_PADDING)]]);
}

#[test]
fn extra_values_are_plotted_past_the_last_label() {
    let config = ChartConfig::line(["a", "b", "c"])
        .with_dataset(Dataset::new("long", [1.0, 2.0, 3.0, 4.0, 5.0]));
    let mut surface = RecordingSurface::new(600, 300);
    let _chart = Chart::create(&mut surface, config);

    let strokes = series_strokes(&surface);
    let xs: Vec<f64> = strokes[0].iter().map(|p| p.x).collect();
    assert_eq!(xs, [50.0, 300.0, 550.0, 800.0, 1050.0]);
    let category_count = surface
        .texts()
        .filter(|t| t.h_align == TextHAlign::Center)
        .count();
    assert_eq!(category_count, 3);
}

#[test]
fn missing_values_leave_trailing_labels_unplotted() {
    let config =
        ChartConfig::line(["a", "b", "c", "d"]).with_dataset(Dataset::new("short", [4.0, 8.0]));
    let layout = layout_line_chart(SurfaceSize::new(650, 300), &config).expect("layout");

    assert_eq!(layout.labels.len(), 4);
    assert_eq!(layout.series[0].points.len(), 2);
    assert_relative_eq!(layout.category_x(3), 600.0);
}

#[test]
fn non_finite_values_are_skipped() {
    let config = ChartConfig::line(["a", "b", "c"])
        .with_dataset(Dataset::new("gappy", [2.0, f64::NAN, 4.0]).with_filled(true));
    let layout = layout_line_chart(SurfaceSize::new(600, 300), &config).expect("layout");

    let xs: Vec<f64> = layout.series[0].points.iter().map(|p| p.x).collect();
    assert_eq!(xs, [50.0, 550.0]);
    assert!(layout.series[0].area.as_ref().is_some_and(|a| a.is_closed()));
}

#[test]
fn all_missing_values_draw_frame_without_ticks_or_series() {
    let config = ChartConfig::line(["a", "b"])
        .with_dataset(Dataset::new("nothing", [f64::NAN, f64::INFINITY]));
    let mut surface = RecordingSurface::new(400, 240);
    let chart = Chart::create(&mut surface, config);
    assert!(chart.render_state().is_some_and(|s| s.domain.is_empty()));

    assert_eq!(surface.strokes().count(), 1);
    assert_eq!(surface.fills().count(), 0);
    assert_eq!(surface.rects().count(), 1);
    assert_eq!(surface.texts().count(), 3);
}

#[test]
fn negative_values_extend_the_axis_below_zero() {
    let config =
        ChartConfig::line(["a", "b"]).with_dataset(Dataset::new("balance", [-50.0, 100.0]));
    let layout = layout_line_chart(SurfaceSize::new(600, 330), &config).expect("layout");

    assert_eq!(layout.state.domain, Domain::new(-50.0, 100.0));
    let tick_values: Vec<f64> = layout.ticks.iter().map(|t| t.value).collect();
    assert_eq!(tick_values, [-50.0, -20.0, 10.0, 40.0, 70.0, 100.0]);
    assert_relative_eq!(layout.value_y(-50.0), 300.0);
    assert_relative_eq!(layout.value_y(100.0), 30.0);
}

#[test]
fn unfilled_datasets_draw_no_area() {
    let config = ChartConfig::line(["a", "b"]).with_dataset(Dataset::new("plain", [1.0, 2.0]));
    let mut surface = RecordingSurface::new(400, 200);
    let _chart = Chart::create(&mut surface, config);
    assert_eq!(surface.fills().count(), 0);
}

#[test]
fn default_style_matches_builtin_palette() {
    let style = ChartStyle::default();
    assert_eq!(style.axis_color, DEFAULT_AXIS_COLOR);
    assert_eq!(style.font_size_px, 12.0);
}

#[test]
fn extreme_magnitudes_render_a_complete_chart() {
    let config = ChartConfig::line(["low", "high"])
        .with_dataset(Dataset::new("extreme", [f64::MAX, -f64::MAX]));
    let mut surface = RecordingSurface::new(600, 300);
    let chart = Chart::create(&mut surface, config);
    let state = chart.render_state().expect("extreme values render");
    assert_eq!(state.domain, Domain::new(-f64::MAX, f64::MAX));

    assert_eq!(surface.strokes().count(), 8);
    assert_eq!(surface.rects().count(), 1);
    assert_eq!(surface.texts().count(), 9);
    let ys: Vec<f64> = series_strokes(&surface)[0].iter().map(|p| p.y).collect();
    assert_relative_eq!(ys[0], 30.0);
    assert_relative_eq!(ys[1], 270.0);
}
