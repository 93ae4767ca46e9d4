use clap::{Parser, Subcommand};
use nalgebra::dmatrix;
use plotters::prelude::*;

use splinterp::{
    curve::{
        generation::interpolate,
        parameters::Method,
        points::{DataPoints, Points},
        Curve,
    },
    session::Session,
};

use crate::visualization::Limits;

mod visualization;

const RED_100: RGBAColor = RGBAColor(255, 0, 0, 1.0);
const BLUE_100: RGBAColor = RGBAColor(0, 0, 255, 1.0);
const PURPLE_100: RGBAColor = RGBAColor(200, 0, 200, 1.0);

#[derive(Parser)]
#[command(about = "Renders SVG plots of interpolating B-spline curves")]
struct Cli {
    /// Output directory for the SVG files
    #[arg(short, long, default_value = "plots")]
    out_dir: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interpolating curves of increasing degree through the same points
    Degrees,
    /// One curve per parametrization method
    Parametrizations,
    /// The basis functions of a fitted curve
    Basis {
        /// Spline degree of the fitted curve
        #[arg(short, long, default_value_t = 3)]
        degree: usize,
    },
    /// Replay of an editing session, printing every state transition
    Session,
}

/// Six data points tracing a hook-shaped path through all four quadrants.
fn hook_points() -> DataPoints {
    DataPoints::new(dmatrix![
        0., 3., -1., -4., -4., -3.;
        0., 4.,  4.,  0., -3., -3.;
    ])
}

fn limits() -> Limits {
    Limits { min: vec![-5.0, -4.0], max: vec![4.0, 5.0] }
}

fn degree_plots(out_dir: &str) {
    let dp = hook_points();
    let curves: Vec<Curve> =
        [1, 2, 3].iter().map(|&p| interpolate(&dp, p, Method::ChordLength).unwrap()).collect();

    visualization::generate_2d_plot(
        out_dir,
        "interpolation-degrees.svg",
        vec![(&curves[0], BLUE_100), (&curves[1], PURPLE_100), (&curves[2], RED_100)],
        &limits(),
        Some(&dp),
    );
}

fn parametrization_plots(out_dir: &str) {
    let dp = hook_points();
    let chord = interpolate(&dp, 3, Method::ChordLength).unwrap();
    let centripetal = interpolate(&dp, 3, Method::Centripetal).unwrap();
    let equally_spaced = interpolate(&dp, 3, Method::EquallySpaced).unwrap();

    visualization::generate_2d_plot(
        out_dir,
        "interpolation-parametrizations.svg",
        vec![(&chord, RED_100), (&centripetal, BLUE_100), (&equally_spaced, PURPLE_100)],
        &limits(),
        Some(&dp),
    );
}

fn basis_plot(out_dir: &str, degree: usize) {
    let dp = hook_points();
    let curve = interpolate(&dp, degree, Method::ChordLength).unwrap();

    visualization::generate_basis_plot(out_dir, &format!("basis-degree-{degree}.svg"), &curve.knots);
}

fn session_replay(out_dir: &str) {
    let mut session = Session::new();
    println!("fresh session      -> {:?}", session.state());

    let dp = hook_points();
    for point in dp.matrix().column_iter() {
        let state = session.push(point[0], point[1]).unwrap();
        println!("push ({:4.1}, {:4.1}) -> {:?}", point[0], point[1], state);
    }

    let state = session.set_degree(5).unwrap();
    println!("set degree 5       -> {state:?}");
    let state = session.set_degree(3).unwrap();
    println!("set degree 3       -> {state:?}");
    let state = session.pop().unwrap();
    println!("pop                -> {state:?}");
    let state = session.push(-2.0, -4.0).unwrap();
    println!("push (-2.0, -4.0)  -> {state:?}");

    visualization::generate_2d_plot(
        out_dir,
        "session.svg",
        vec![(session.curve().unwrap(), RED_100)],
        &limits(),
        Some(session.points()),
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    std::fs::create_dir_all(&cli.out_dir)?;

    match cli.command {
        Some(Command::Degrees) => degree_plots(&cli.out_dir),
        Some(Command::Parametrizations) => parametrization_plots(&cli.out_dir),
        Some(Command::Basis { degree }) => basis_plot(&cli.out_dir, degree),
        Some(Command::Session) => session_replay(&cli.out_dir),
        None => {
            degree_plots(&cli.out_dir);
            parametrization_plots(&cli.out_dir);
            basis_plot(&cli.out_dir, 3);
            session_replay(&cli.out_dir);
        }
    }

    Ok(())
}
