mod common;

#[cfg(feature = "dataframe")]
use summa::{SummaryReader, TimeHistoryCurveMerger, ToDataFrame};

#[cfg(feature = "dataframe")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let address = "FOPT".parse()?;
    let mut merger = TimeHistoryCurveMerger::new();
    for case in ["BASE", "PRED"] {
        let (t, v) = common::fixture(case).series(&address)?;
        merger.add_curve_data(t, v)?;
    }
    merger.compute();

    let df = merger.to_dataframe()?;
    println!("{df}");
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    eprintln!("This example requires the 'dataframe' feature. Skipping.");
}
