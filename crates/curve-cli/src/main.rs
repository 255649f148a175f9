//! curve - Bezier sampling and plotting demo CLI
//!
//! Samples cubic Bezier curves from the command line and renders them as
//! CSV rows or an ASCII plot.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use curve_math::{interpolate, Bezier, Vec2, Vec3};
use curve_plot::{colors, Canvas, CurvePlot, Viewport};
use tracing::debug;

mod ascii;

use ascii::AsciiCanvas;

#[derive(Parser)]
#[command(name = "curve")]
#[command(author, version, about = "Cubic Bezier sampling and plotting demo")]
#[command(long_about = "
Samples and plots cubic Bezier curves.

Examples:
  curve sample                          # CSV samples of the demo curve
  curve sample -n 10 --p1 0,0,0 --p2 1,0,0
  curve plot                            # ASCII plot of the demo curve
  curve plot --segments 400 -W 100 -H 40
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print curve samples as CSV rows (t,x,y,z)
    #[command(visible_alias = "s")]
    Sample(SampleArgs),

    /// Render the curve and its handles as an ASCII grid
    #[command(visible_alias = "p")]
    Plot(PlotArgs),
}

/// Control points shared by every subcommand. Defaults are the demo curve.
#[derive(Args)]
struct CurveArgs {
    /// Start point as x,y,z
    #[arg(long, default_value = "-5,0,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    p1: Vec3,

    /// First control value as x,y,z
    #[arg(long, default_value = "-2,1,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    c1: Vec3,

    /// Second control value as x,y,z
    #[arg(long, default_value = "2,1,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    c2: Vec3,

    /// End point as x,y,z
    #[arg(long, default_value = "5,0,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    p2: Vec3,
}

impl CurveArgs {
    fn curve(&self) -> Bezier<Vec3> {
        Bezier::new(self.p1, self.c1, self.c2, self.p2)
    }
}

#[derive(Args)]
struct SampleArgs {
    #[command(flatten)]
    curve: CurveArgs,

    /// Number of samples
    #[arg(short = 'n', long, default_value = "200")]
    count: u32,
}

#[derive(Args)]
struct PlotArgs {
    #[command(flatten)]
    curve: CurveArgs,

    /// Number of chord segments
    #[arg(short, long, default_value = "200")]
    segments: u32,

    /// Plot window minimum as x,y
    #[arg(long, default_value = "-5,-5", value_parser = parse_vec2, allow_hyphen_values = true)]
    min: Vec2,

    /// Plot window maximum as x,y
    #[arg(long, default_value = "5,5", value_parser = parse_vec2, allow_hyphen_values = true)]
    max: Vec2,

    /// Canvas width in characters
    #[arg(short = 'W', long, default_value = "80")]
    width: usize,

    /// Canvas height in characters
    #[arg(short = 'H', long, default_value = "32")]
    height: usize,
}

fn parse_components(s: &str, n: usize) -> Result<Vec<f32>> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().with_context(|| format!("bad component {p:?}")))
        .collect::<Result<_>>()?;
    if parts.len() != n {
        bail!("expected {n} comma-separated components, got {}", parts.len());
    }
    Ok(parts)
}

fn parse_vec3(s: &str) -> Result<Vec3> {
    let p = parse_components(s, 3)?;
    Ok(Vec3::new(p[0], p[1], p[2]))
}

fn parse_vec2(s: &str) -> Result<Vec2> {
    let p = parse_components(s, 2)?;
    Ok(Vec2::new(p[0], p[1]))
}

fn cmd_sample(args: &SampleArgs) -> Result<()> {
    if args.count == 0 {
        bail!("sample count must be at least 1");
    }
    let curve = args.curve.curve();
    debug!(count = args.count, "sampling curve");
    println!("t,x,y,z");
    for i in 0..=args.count {
        let t = i as f32 / args.count as f32;
        let p = interpolate(&curve, t);
        println!("{t},{},{},{}", p.x, p.y, p.z);
    }
    Ok(())
}

fn cmd_plot(args: &PlotArgs) -> Result<()> {
    let curve = args.curve.curve();
    let viewport = Viewport::new(args.min, args.max).context("invalid plot window")?;
    let canvas = Canvas::new(
        Vec2::ZERO,
        Vec2::new(args.width as f32 - 1.0, args.height as f32 - 1.0),
    );
    let plot = CurvePlot::new(viewport, canvas);

    let mut target = AsciiCanvas::new(args.width, args.height);
    plot.plot_bezier(&mut target, &curve, args.segments, colors::MAGENTA)?;
    plot.draw_handles(&mut target, &curve);
    print!("{}", target.render());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match &cli.command {
        Commands::Sample(args) => cmd_sample(args),
        Commands::Plot(args) => cmd_plot(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        let v = parse_vec3("-5, 0.5 ,2").unwrap();
        assert_eq!(v.to_array(), [-5.0, 0.5, 2.0]);
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,two,3").is_err());
    }

    #[test]
    fn test_parse_vec2() {
        let v = parse_vec2("3,4").unwrap();
        assert_eq!(v.to_array(), [3.0, 4.0]);
    }

    #[test]
    fn test_demo_defaults_plot() {
        let args = PlotArgs {
            curve: CurveArgs {
                p1: Vec3::new(-5.0, 0.0, 0.0),
                c1: Vec3::new(-2.0, 1.0, 0.0),
                c2: Vec3::new(2.0, 1.0, 0.0),
                p2: Vec3::new(5.0, 0.0, 0.0),
            },
            segments: 100,
            min: Vec2::splat(-5.0),
            max: Vec2::splat(5.0),
            width: 40,
            height: 16,
        };
        cmd_plot(&args).unwrap();
    }
}
