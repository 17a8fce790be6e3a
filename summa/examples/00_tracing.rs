mod common;

use summa::{DerivedCase, InterpolationMethod, cross_plot_from_readers};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=debug,summa=trace,summa_core=trace (build with --features tracing)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let delta = DerivedCase::builder()
        .first(common::fixture("PRED"))
        .second(common::fixture("BASE"))
        .build()?;
    let _ = delta.calculate(&"FOPT".parse()?)?;
    // Served from the cache; no merge span this time.
    let _ = delta.calculate(&"FOPT".parse()?)?;

    // Emits a warning: the two cases share no time range.
    let hist = common::fixture("HIST");
    let base = common::fixture("BASE");
    let res = cross_plot_from_readers(
        hist.as_ref(),
        &"FOPT".parse()?,
        base.as_ref(),
        &"FOPT".parse()?,
        InterpolationMethod::Linear,
    );
    if let Err(e) = res {
        println!("cross plot failed as expected: {e}");
    }
    Ok(())
}
