//! Argument validation and output-name resolution

use std::path::Path;

use pretty_assertions::assert_eq;

use svg2drawable::output::resolve_output_name;
use svg2drawable::{BatchConfig, ConfigError};

#[test]
fn test_missing_dimension_rejected() {
    let config = BatchConfig::new(vec!["icon.svg".into()]);
    assert_eq!(config.validate(), Err(ConfigError::MissingDimension));
}

#[test]
fn test_single_dimension_accepted() {
    let by_width = BatchConfig::new(vec!["icon.svg".into()]).with_width(Some(24));
    let by_height = BatchConfig::new(vec!["icon.svg".into()]).with_height(Some(24));
    assert!(by_width.validate().is_ok());
    assert!(by_height.validate().is_ok());
}

#[test]
fn test_output_count_must_match_input_count() {
    let config = BatchConfig::new(vec!["a.svg".into(), "b.svg".into(), "c.svg".into()])
        .with_width(Some(16))
        .with_outputs(vec!["x.png".to_string(), "y.png".to_string()]);
    assert_eq!(
        config.validate(),
        Err(ConfigError::OutputCountMismatch {
            inputs: 3,
            outputs: 2,
        })
    );
}

#[test]
fn test_omitted_outputs_accepted() {
    let config =
        BatchConfig::new(vec!["a.svg".into(), "b.svg".into()]).with_width(Some(16));
    assert!(config.validate().is_ok());
}

#[test]
fn test_extension_handling() {
    // .png kept, .svg swapped, anything else appended
    assert_eq!(
        resolve_output_name(Some("done.png"), Path::new("in.svg")),
        "done.png"
    );
    assert_eq!(
        resolve_output_name(Some("vector.svg"), Path::new("in.svg")),
        "vector.png"
    );
    assert_eq!(
        resolve_output_name(Some("bare"), Path::new("in.svg")),
        "bare.png"
    );
}

#[test]
fn test_input_name_used_when_no_output_given() {
    assert_eq!(resolve_output_name(None, Path::new("icon.svg")), "icon.png");
    assert_eq!(
        resolve_output_name(None, Path::new("art/deep/nested.svg")),
        "nested.png"
    );
    assert_eq!(resolve_output_name(None, Path::new("noext")), "noext.png");
}
