mod common;

use summa::{
    Curve, InterpolationMethod, StatisticsConfig, SummaryReader, ensemble_statistics,
    stack_curves,
};

fn curves(vector: &str) -> Result<Vec<Curve<i64>>, Box<dyn std::error::Error>> {
    let address = vector.parse()?;
    let mut out = Vec::new();
    for case in ["BASE", "PRED"] {
        let (t, v) = common::fixture(case).series(&address)?;
        out.push(Curve::new(t, v)?);
    }
    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stacked = stack_curves(curves("FOPR")?, InterpolationMethod::Linear);
    println!("Stacked FOPR (BASE, BASE+PRED)");
    for (j, t) in stacked.time_steps.iter().enumerate() {
        println!(
            "  {} {} {}",
            common::date(*t),
            common::value(stacked.layers[0][j]),
            common::value(stacked.layers[1][j])
        );
    }

    let stats = ensemble_statistics(curves("FOPT")?, StatisticsConfig::default());
    println!("\nFOPT statistics (P10 is the high estimate)");
    println!("  {:<10} {:>10} {:>10} {:>10}", "date", "P10", "mean", "P90");
    for (j, t) in stats.time_steps.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            common::date(*t),
            common::value(stats.p10[j]),
            common::value(stats.mean[j]),
            common::value(stats.p90[j])
        );
    }
    Ok(())
}
