mod common;

use summa::{DerivedCase, DerivedOperator, SummaryReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut delta = DerivedCase::builder()
        .first(common::fixture("PRED"))
        .second(common::fixture("BASE"))
        .operator(DerivedOperator::Subtract)
        .build()?;

    println!("Derived case: {}", delta.name());
    for address in delta.all_addresses() {
        println!("  {address}");
    }

    let fopt = "FOPT".parse()?;
    let (time_steps, values) = delta.series(&fopt)?;
    println!("\n{fopt} ({})", delta.name());
    for (t, v) in time_steps.iter().zip(&values) {
        println!("  {} {}", common::date(*t), common::value(*v));
    }

    // Compare every time step against the first sample of BASE.
    delta.set_fixed_time_steps(None, Some(0));
    let held = delta.calculate(&fopt)?;
    println!("\n{fopt} relative to BASE at its first time step");
    for (t, v) in held.time_steps.iter().zip(&held.values) {
        println!("  {} {}", common::date(*t), common::value(*v));
    }
    Ok(())
}
