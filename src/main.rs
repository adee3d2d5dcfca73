mod check;

fn main() -> anyhow::Result<()> {
    // setting up logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::debug!("Checking {} sample vectors", check::SAMPLES.len());
    for (idx, sample) in check::SAMPLES.iter().enumerate() {
        log::trace!("Sample {}: {}", idx, sample);
    }

    let outcomes = check::run(&check::SAMPLES);
    for outcome in &outcomes {
        match &outcome.failure {
            None => log::info!("ok: {}", outcome.name),
            Some(counterexample) => log::error!("FAILED: {}: {}", outcome.name, counterexample),
        }
    }

    let passed = check::verify(&outcomes)?;
    log::info!("All {} checks passed", passed);

    Ok(())
}
