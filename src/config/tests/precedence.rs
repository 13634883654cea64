//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;

#[rstest]
#[case::file_overrides_defaults(
    vec![
        ("defaults", json!({"store_path": "default.json"})),
        ("file", json!({"store_path": "file.json"}))
    ],
    "file.json",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![
        ("file", json!({"store_path": "file.json"})),
        ("environment", json!({"store_path": "env.json"}))
    ],
    "env.json",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![
        ("environment", json!({"store_path": "env.json"})),
        ("cli", json!({"store_path": "cli.json"}))
    ],
    "cli.json",
    "CLI should override environment"
)]
fn store_path_follows_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    assert_eq!(config.store_path.as_deref(), Some(expected), "{message}");
}

#[rstest]
fn rating_from_cli_overrides_file() {
    let config = build_config_from_layers(&[
        ("file", json!({"rating": 3})),
        ("cli", json!({"rating": 9})),
    ]);

    assert_eq!(config.rating, Some(9));
}

#[rstest]
fn defaults_leave_everything_unset() {
    let config = build_config_from_layers(&[(
        "defaults",
        json!({"store_path": null, "text": null, "rating": null, "edit_id": null}),
    )]);

    assert!(config.store_path.is_none(), "store_path should be None");
    assert!(config.text.is_none(), "text should be None");
    assert!(config.rating.is_none(), "rating should be None");
    assert!(config.edit_id.is_none(), "edit_id should be None");
    assert!(!config.list, "list should default to false");
    assert!(!config.reverse, "reverse should default to false");
    assert!(!config.telemetry, "telemetry should default to false");
}
