//! svg2drawable - batch-render SVG files into Android drawable PNGs
//!
//! This library plans and runs one Inkscape invocation per input file and
//! density tier, writing `res/drawable-<tier>/<name>.png` for the five
//! standard Android density buckets.
//!
//! # Example
//!
//! ```rust
//! use svg2drawable::{plan_file, BatchConfig};
//!
//! let config = BatchConfig::new(vec!["icon.svg".into()]).with_width(Some(24));
//! let plans = plan_file(&config, 0);
//!
//! assert_eq!(plans.len(), 5);
//! let widths: Vec<_> = plans.iter().map(|p| p.width.unwrap()).collect();
//! assert_eq!(widths, vec![24, 36, 48, 72, 96]);
//! ```

pub mod config;
pub mod density;
pub mod output;
pub mod renderer;

pub use config::{expand_inputs, BatchConfig, ConfigError, ExportArea};
pub use density::{DensityTier, DENSITY_TIERS};
pub use renderer::{RenderOutcome, RenderPlan, RENDERER_BIN};

use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can abort a batch run
#[derive(Debug, Error)]
pub enum BatchError {
    /// The configuration failed validation
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Output directories could not be created
    #[error("failed to prepare output directories: {0}")]
    Io(#[from] io::Error),
}

/// One failed renderer invocation, kept for the final report
#[derive(Debug)]
pub struct RenderFailure {
    pub plan: RenderPlan,
    pub outcome: RenderOutcome,
}

/// Summary of a completed batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Renderer invocations attempted
    pub attempted: usize,
    /// Invocations that exited non-zero or failed to launch
    pub failures: Vec<RenderFailure>,
}

/// Plan the five tier invocations for the input at `index`
///
/// Resolves the output file name (explicit name if given, input name
/// otherwise) and produces one plan per density tier, in ascending order.
pub fn plan_file(config: &BatchConfig, index: usize) -> Vec<RenderPlan> {
    let input = &config.inputs[index];
    let file_name = output::resolve_output_name(config.output_name(index), input);
    DENSITY_TIERS
        .iter()
        .map(|tier| RenderPlan::for_tier(input, &file_name, *tier, config))
        .collect()
}

/// Run the whole batch: validate, prepare directories, render every tier
///
/// Inputs render strictly in order, five tiers each, one blocking renderer
/// process at a time. A render failure is printed and recorded in the
/// report but never stops the batch; only validation and directory
/// preparation errors abort.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    config.validate()?;
    output::prepare_directories(Path::new("."))?;

    let mut report = BatchReport::default();
    for (index, input) in config.inputs.iter().enumerate() {
        println!("{}", input.display());
        for plan in plan_file(config, index) {
            println!("Rendering {}...", plan.tier.label);
            report.attempted += 1;
            match renderer::render(&plan) {
                RenderOutcome::Success => {}
                RenderOutcome::Failed(status) => {
                    eprintln!(
                        "Warning: {} exited with {} while rendering {}",
                        RENDERER_BIN,
                        status,
                        plan.output.display()
                    );
                    report.failures.push(RenderFailure {
                        plan,
                        outcome: RenderOutcome::Failed(status),
                    });
                }
                RenderOutcome::Launch(err) => {
                    eprintln!("Warning: failed to launch {}: {}", RENDERER_BIN, err);
                    report.failures.push(RenderFailure {
                        plan,
                        outcome: RenderOutcome::Launch(err),
                    });
                }
            }
        }
        println!();
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_file_produces_five_tiers() {
        let config = BatchConfig::new(vec!["icon.svg".into()]).with_width(Some(24));
        let plans = plan_file(&config, 0);
        assert_eq!(plans.len(), 5);
        let labels: Vec<&str> = plans.iter().map(|p| p.tier.label).collect();
        assert_eq!(labels, vec!["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"]);
    }

    #[test]
    fn test_plan_file_uses_explicit_output_name() {
        let config = BatchConfig::new(vec!["raw-export.svg".into()])
            .with_width(Some(24))
            .with_outputs(vec!["ic_launcher".to_string()]);
        let plans = plan_file(&config, 0);
        assert_eq!(
            plans[0].output,
            std::path::PathBuf::from("res/drawable-mdpi/ic_launcher.png")
        );
    }

    #[test]
    fn test_run_batch_rejects_invalid_config() {
        let config = BatchConfig::new(vec!["icon.svg".into()]);
        let err = run_batch(&config).unwrap_err();
        assert!(matches!(
            err,
            BatchError::Config(ConfigError::MissingDimension)
        ));
    }

    #[test]
    fn test_run_batch_rejects_mismatched_outputs() {
        let config = BatchConfig::new(vec!["a.svg".into(), "b.svg".into()])
            .with_width(Some(24))
            .with_outputs(vec!["one.png".to_string()]);
        let err = run_batch(&config).unwrap_err();
        assert!(matches!(err, BatchError::Config(_)));
    }
}
