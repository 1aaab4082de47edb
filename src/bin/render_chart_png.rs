#[cfg(feature = "cairo-backend")]
use chart_lite::{Chart, ChartConfig};
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: u32 = 600;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: u32 = 300;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    config_path: PathBuf,
    output_path: PathBuf,
    width: u32,
    height: u32,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use chart_lite::render::CairoSurface;

    let _ = chart_lite::telemetry::init_default_tracing();
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.config_path).map_err(|err| {
        format!(
            "failed to read config `{}`: {err}",
            args.config_path.display()
        )
    })?;
    let config = ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?;

    let mut surface = CairoSurface::new(args.width, args.height).map_err(|err| err.to_string())?;
    let chart = Chart::create(&mut surface, config);
    if chart.render_state().is_none() {
        eprintln!("warning: chart had nothing to draw; writing a blank image");
    }
    drop(chart);

    if let Some(parent) = args.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "failed to create output directory `{}`: {err}",
                    parent.display()
                )
            })?;
        }
    }
    surface
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    let stats = surface.stats();
    println!(
        "wrote {} ({}x{}, {} paths, {} rects, {} texts)",
        args.output_path.display(),
        args.width,
        args.height,
        stats.paths_stroked + stats.paths_filled,
        stats.rects_filled,
        stats.texts_drawn
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
            }
            "--width" => {
                width = parse_dimension("--width", args.next())?;
            }
            "--height" => {
                height = parse_dimension("--height", args.next())?;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        config_path: config_path
            .ok_or_else(|| format!("missing --config\n\n{}", usage_message()))?,
        output_path: output_path
            .ok_or_else(|| format!("missing --output\n\n{}", usage_message()))?,
        width,
        height,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_dimension(flag: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(format!("{flag} must be a positive integer, got `{value}`")),
    }
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!("{}", usage_message());
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_chart_png -- --config <json> --output <png> [options]\n\nOptions:\n  --config <path>    Chart configuration json (compact or Chart.js shape)\n  --output <path>    PNG file to write\n  --width <px>       Surface width (default: {DEFAULT_WIDTH})\n  --height <px>      Surface height (default: {DEFAULT_HEIGHT})\n  -h, --help         Show this message"
    )
}
