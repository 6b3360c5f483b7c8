//! Batch configuration
//!
//! All invocation parameters live in a single immutable [`BatchConfig`]
//! value, constructed once from the command line and passed explicitly into
//! every operation. Validation is a separate step returning a `Result` so
//! the caller decides exit code and messaging.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by configuration validation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("need at least --width or --height to run")]
    MissingDimension,
    #[error("expected no output names or exactly {inputs}, got {outputs}")]
    OutputCountMismatch { inputs: usize, outputs: usize },
}

/// Which region of the SVG canvas the renderer exports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportArea {
    /// Keep the full page canvas, whitespace included
    Page,
    /// Crop to the drawing's bounding box
    Drawing,
}

/// Parameters for one batch run
///
/// `width` and `height` are baseline (mdpi) dimensions; at least one must
/// be present for the configuration to validate. `outputs` must be empty
/// or match `inputs` in length.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Input SVG paths, in render order
    pub inputs: Vec<PathBuf>,
    /// Explicit output file names, one per input (or empty)
    pub outputs: Vec<String>,
    /// Baseline width in pixels
    pub width: Option<u32>,
    /// Baseline height in pixels
    pub height: Option<u32>,
    /// Canvas region handed to the renderer
    pub area: ExportArea,
}

impl BatchConfig {
    /// Create a configuration for the given inputs with no dimensions set
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            outputs: Vec::new(),
            width: None,
            height: None,
            area: ExportArea::Page,
        }
    }

    /// Set the explicit output file names
    pub fn with_outputs(mut self, outputs: Vec<String>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Set the baseline width
    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = width;
        self
    }

    /// Set the baseline height
    pub fn with_height(mut self, height: Option<u32>) -> Self {
        self.height = height;
        self
    }

    /// Set the export area
    pub fn with_area(mut self, area: ExportArea) -> Self {
        self.area = area;
        self
    }

    /// Check the configuration invariants
    ///
    /// Fails when neither dimension is set, or when output names were given
    /// but their count differs from the input count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width.is_none() && self.height.is_none() {
            return Err(ConfigError::MissingDimension);
        }
        if !self.outputs.is_empty() && self.outputs.len() != self.inputs.len() {
            return Err(ConfigError::OutputCountMismatch {
                inputs: self.inputs.len(),
                outputs: self.outputs.len(),
            });
        }
        Ok(())
    }

    /// Explicit output name for the input at `index`, if one was given
    pub fn output_name(&self, index: usize) -> Option<&str> {
        self.outputs.get(index).map(String::as_str)
    }
}

/// Expand a lone glob-pattern argument against the filesystem
///
/// Unix shells expand patterns before the program sees them; on Windows a
/// pattern arrives verbatim, so a single argument containing a glob
/// metacharacter is expanded here. Anything else passes through unchanged.
pub fn expand_inputs(raw: &[String]) -> Vec<PathBuf> {
    if raw.len() == 1 && raw[0].contains(['*', '?', '[']) {
        if let Ok(paths) = glob::glob(&raw[0]) {
            return paths.filter_map(Result::ok).collect();
        }
    }
    raw.iter().map(PathBuf::from).collect()
}
