//! The fixed Android density ladder
//!
//! Android ships drawables in five density buckets, each a fixed multiple
//! of the baseline (mdpi) size. The table is static configuration: it is
//! defined once and never constructed at runtime.

/// One density bucket: a label and its scale factor relative to mdpi
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityTier {
    /// Bucket label, e.g. "mdpi"
    pub label: &'static str,
    /// Scale factor relative to the baseline density
    pub scale: f64,
}

impl DensityTier {
    /// Drawable directory name for this tier, e.g. "drawable-xhdpi"
    pub fn dir_name(&self) -> String {
        format!("drawable-{}", self.label)
    }

    /// Scale a baseline dimension to this tier, truncating toward zero
    pub fn scale_dimension(&self, value: u32) -> u32 {
        (value as f64 * self.scale) as u32
    }
}

/// The five density buckets in ascending scale order
pub const DENSITY_TIERS: [DensityTier; 5] = [
    DensityTier {
        label: "mdpi",
        scale: 1.0,
    },
    DensityTier {
        label: "hdpi",
        scale: 1.5,
    },
    DensityTier {
        label: "xhdpi",
        scale: 2.0,
    },
    DensityTier {
        label: "xxhdpi",
        scale: 3.0,
    },
    DensityTier {
        label: "xxxhdpi",
        scale: 4.0,
    },
];
