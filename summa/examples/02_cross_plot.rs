mod common;

use summa::{InterpolationMethod, SummaError, cross_plot_from_readers};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = common::fixture("BASE");
    let pred = common::fixture("PRED");

    let cp = cross_plot_from_readers(
        base.as_ref(),
        &"FOPT".parse()?,
        pred.as_ref(),
        &"FWCT".parse()?,
        InterpolationMethod::Linear,
    )?;
    println!("BASE FOPT vs PRED FWCT: {} points", cp.len());
    for segment in &cp.segments {
        println!("segment {}..={}", segment.start, segment.end);
        for i in segment.start..=segment.end {
            println!(
                "  {} {} {}",
                common::date(cp.time_steps[i]),
                common::value(cp.x[i]),
                common::value(cp.y[i])
            );
        }
    }

    let hist = common::fixture("HIST");
    match cross_plot_from_readers(
        hist.as_ref(),
        &"FOPT".parse()?,
        base.as_ref(),
        &"FOPT".parse()?,
        InterpolationMethod::Linear,
    ) {
        Err(SummaError::NoOverlap { x_range, y_range }) => {
            println!("\nHIST vs BASE do not overlap: {x_range} / {y_range}");
        }
        other => println!("\nunexpected: {other:?}"),
    }
    Ok(())
}
