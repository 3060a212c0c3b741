use std::error::Error;

use log::info;

use skridge_experiment::{pipeline, ExperimentConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ExperimentConfig::from_env()?;
    let report = pipeline::run(&config)?;

    info!(
        "done: {} train / {} test, model at {}",
        report.n_train,
        report.n_test,
        report.model_path.display()
    );
    println!("{}", serde_json::to_string(&report.metrics)?);

    Ok(())
}
