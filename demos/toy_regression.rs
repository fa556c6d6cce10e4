//! Scores prior draws of a Bayesian network and a Bayesian linear model on
//! the toy regression data.
//!
//! Run with `RUST_LOG=debug` to see the evaluator's log output.

use bayesnn::prelude::*;
use ndarray::Axis;

fn main() -> Result<()> {
    env_logger::init();

    println!("Bayesian Neural Network Log-Density Example");
    println!("===========================================");

    let (x, y) = build_toy_dataset(40, 0.1, 42)?;
    let data = ObservationBatch::new(x.view(), y.view())?;
    println!("Toy data: {} observations, {} feature", data.len(), data.n_features());

    let config = BnnConfig::new(vec![1, 10, 10, 1], Nonlinearity::Tanh, 0.1, 1.0)?
        .with_final_layer(FinalLayer::Linear);
    let bnn = BayesianNN::from_config(config)?;
    let linear = BayesianLinearRegression::new(1, 1.0, 1.0)?;

    let models: [&dyn LogDensity; 2] = [&bnn, &linear];
    for model in models {
        let samples = model.sample_prior(1000, 7)?;
        let log_p = model.log_density_batch(&data, &samples.view())?;

        let best = log_p
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap_or(0);

        println!();
        println!("{} ({} parameters)", model.name(), model.n_params());
        println!("  mean log-density over prior draws: {:.3}", log_p.mean().unwrap_or(f64::NAN));
        println!("  best log-density:                  {:.3}", log_p[best]);

        let best_params = samples.index_axis(Axis(0), best);
        println!(
            "  of which log-prior:                {:.3}",
            model.log_prior(&best_params)?
        );
    }

    Ok(())
}
