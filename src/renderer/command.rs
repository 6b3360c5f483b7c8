//! Render plans
//!
//! A [`RenderPlan`] is the fully resolved description of one Inkscape
//! invocation: input, output path, export area, and the dimensions scaled
//! to one density tier. Building plans is pure so the exact argument
//! vector can be inspected without spawning a process.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{BatchConfig, ExportArea};
use crate::density::DensityTier;
use crate::output::OUTPUT_ROOT;

/// One planned renderer invocation for a (file, tier) pair
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Input SVG path, as given on the command line
    pub input: PathBuf,
    /// Output PNG path inside the tier's drawable directory
    pub output: PathBuf,
    /// Density tier this plan renders
    pub tier: DensityTier,
    /// Canvas region handed to the renderer
    pub area: ExportArea,
    /// Target width for this tier, when a baseline width was given
    pub width: Option<u32>,
    /// Target height for this tier, when a baseline height was given
    pub height: Option<u32>,
}

impl RenderPlan {
    /// Build the plan for one input at one density tier
    ///
    /// Whichever baseline dimensions are set get scaled by the tier factor;
    /// an unset dimension stays unset and the renderer infers it from the
    /// aspect ratio. When both are set they scale independently, with no
    /// aspect-ratio correction.
    pub fn for_tier(
        input: &Path,
        file_name: &str,
        tier: DensityTier,
        config: &BatchConfig,
    ) -> Self {
        let output = PathBuf::from(OUTPUT_ROOT)
            .join(tier.dir_name())
            .join(file_name);
        Self {
            input: input.to_path_buf(),
            output,
            tier,
            area: config.area,
            width: config.width.map(|w| tier.scale_dimension(w)),
            height: config.height.map(|h| tier.scale_dimension(h)),
        }
    }

    /// The argument vector for the Inkscape invocation
    pub fn command_args(&self) -> Vec<OsString> {
        let area_flag = match self.area {
            ExportArea::Drawing => "--export-area-drawing",
            ExportArea::Page => "--export-area-page",
        };

        let mut args: Vec<OsString> = vec![
            self.input.clone().into(),
            area_flag.into(),
            "-e".into(),
            self.output.clone().into(),
        ];
        if let Some(width) = self.width {
            args.push("-w".into());
            args.push(width.to_string().into());
        }
        if let Some(height) = self.height {
            args.push("-h".into());
            args.push(height.to_string().into());
        }
        args
    }
}
