use std::path::Path;

use plotters::{backend::SVGBackend, chart::ChartContext, coord::types::RangedCoordf64, prelude::*};

use splinterp::curve::{
    basis,
    knots::Knots,
    points::{ControlPoints, DataPoints, Points},
    Curve,
};

const IMG_SIZE: (u32, u32) = (400, 400);
const NUM_POINTS: usize = 200;

fn linspace(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    assert!(num_points > 1, "Number of points must be greater than 1");

    let step = (end - start) / (num_points - 1) as f64;

    (0..num_points).map(|i| start + i as f64 * step).collect()
}

pub struct Limits {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

pub fn draw_curve_2d(
    chart_context: &mut ChartContext<SVGBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    curve: &Curve,
    color: RGBAColor,
) {
    let point_size = 1;
    let u_values = linspace(0., 1., NUM_POINTS);
    let data = u_values.iter().map(|&u| {
        let v = curve.evaluate(u);
        (v[0], v[1])
    });
    chart_context.draw_series(LineSeries::new(data, color.filled().stroke_width(point_size)).point_size(0)).unwrap();

    // Marks the joints between the polynomial pieces, one per distinct knot.
    let mut knot_values = curve.knots.vector().data.as_vec().clone();
    knot_values.dedup();
    let knot_data = knot_values.iter().map(|&u| {
        let v = curve.evaluate(u);
        (v[0], v[1])
    });

    chart_context.draw_series(knot_data.map(|point| Circle::new(point, point_size * 2, color))).unwrap();
}

pub fn draw_control_polygon_2d(
    chart_context: &mut ChartContext<SVGBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    points: &ControlPoints,
    color: RGBAColor,
) {
    let point_size = 3;
    chart_context
        .draw_series(
            points.matrix().column_iter().map(|point| Circle::new((point[0], point[1]), point_size, color.filled())),
        )
        .unwrap();

    chart_context.draw_series(LineSeries::new(points.matrix().column_iter().map(|v| (v[0], v[1])), color)).unwrap();
}

pub fn draw_data_points_2d(
    chart_context: &mut ChartContext<SVGBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    points: &DataPoints,
    connected: bool,
) {
    let point_size = 3;
    chart_context
        .draw_series(
            points.matrix().column_iter().map(|point| Circle::new((point[0], point[1]), point_size, BLACK.filled())),
        )
        .unwrap();

    if connected {
        chart_context.draw_series(LineSeries::new(points.matrix().column_iter().map(|v| (v[0], v[1])), BLACK)).unwrap();
    }
}

pub fn generate_2d_plot(
    out_dir: &str,
    filename: &str,
    curves: Vec<(&Curve, RGBAColor)>,
    limits: &Limits,
    data: Option<&DataPoints>,
) {
    for (c, _) in &curves {
        assert_eq!(c.dimension(), 2);
    }

    let path = Path::new(out_dir).join(filename);
    let area = SVGBackend::new(&path, IMG_SIZE).into_drawing_area();
    area.fill(&WHITE).unwrap();

    let mut chart_builder = ChartBuilder::on(&area);
    chart_builder.margin(10).set_left_and_bottom_label_area_size(20);

    let mut chart_context =
        chart_builder.build_cartesian_2d(limits.min[0]..limits.max[0], limits.min[1]..limits.max[1]).unwrap();
    chart_context.configure_mesh().draw().unwrap();

    if let Some(dp) = data {
        assert_eq!(dp.dimension(), 2);

        draw_data_points_2d(&mut chart_context, dp, false);
    }

    for (c, color) in curves {
        draw_control_polygon_2d(&mut chart_context, &c.points, color);
        draw_curve_2d(&mut chart_context, c, color);
    }

    area.present().expect("Unable to write the plot, please make sure the output directory exists");
    println!("Result has been saved to {}", path.display());
}

/// Plots every basis function defined by the knot vector over the full parameter range.
pub fn generate_basis_plot(out_dir: &str, filename: &str, knots: &Knots) {
    let path = Path::new(out_dir).join(filename);
    let area = SVGBackend::new(&path, IMG_SIZE).into_drawing_area();
    area.fill(&WHITE).unwrap();

    let mut chart_builder = ChartBuilder::on(&area);
    chart_builder.margin(10).set_left_and_bottom_label_area_size(20);

    let mut chart_context = chart_builder.build_cartesian_2d(0.0..1.0, 0.0..1.05).unwrap();
    chart_context.configure_mesh().draw().unwrap();

    let u_values = linspace(0., 1., NUM_POINTS);
    for i in 0..knots.count() {
        let color = Palette99::pick(i).to_rgba();
        let data = u_values.iter().map(|&u| (u, basis::evaluate(knots.vector(), i, knots.degree(), u)));

        chart_context
            .draw_series(LineSeries::new(data, color.stroke_width(1)))
            .unwrap()
            .label(format!("N_{i}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color));
    }
    chart_context.configure_series_labels().background_style(&WHITE.mix(0.8)).border_style(&BLACK).draw().unwrap();

    area.present().expect("Unable to write the plot, please make sure the output directory exists");
    println!("Result has been saved to {}", path.display());
}
