use std::env;
use std::error::Error;

use skridge::prelude::{train_test_split, Fit, Predict, Regression};
use skridge_linear::Ridge;

fn main() -> Result<(), Box<dyn Error>> {
    // load a diabetes table given on the command line, or draw a look-alike
    let dataset = match env::args().nth(1) {
        Some(path) => skridge_datasets::from_csv(path, skridge_datasets::DEFAULT_TARGET)?,
        None => skridge_datasets::diabetes_like(0)?,
    };

    let split = train_test_split(&dataset, 0.2, 0)?;
    let model = Ridge::new(0.5).fit(&split.train)?;
    let predictions = model.predict(split.test.records())?;

    println!("Model: {}", model);
    println!("MSE: {}", predictions.mean_squared_error(split.test.targets())?);

    Ok(())
}
