#![cfg(feature = "serde")]

use keytrig::{ConfigError, KeyRelay, KeymapConfig, KeytrigError, Label, RelaySettings};

const KEYMAP: &str = r#"{
    "aliases": {
        "move_left": ["left", "a"],
        "fire": [32]
    },
    "alias_to_code": { "left": 37, "a": 65 },
    "code_to_alias": { "32": "space" }
}"#;

#[test]
fn keymap_seeds_the_relay() {
    let config = KeymapConfig::from_json(KEYMAP).unwrap();
    let relay: KeyRelay<(), &'static str> = RelaySettings::from_config(config)
        .event("keydown", "move_left", |_| "move")
        .event("keydown", "fire", |_| "fire")
        .build()
        .unwrap();

    assert_eq!(relay.convert_key_string_to_alias("a"), Label::Code(65));
    assert_eq!(relay.convert_alias_to_key_string(32), Label::from("space"));
    assert_eq!(
        relay.get_alias_as_key_strings("fire"),
        vec![Label::from("space")]
    );

    assert_eq!(relay.call_label("keydown", 37, None), Ok(Some("move")));
    assert_eq!(relay.call_label("keydown", 65, None), Ok(Some("move")));
    assert_eq!(relay.call_label("keydown", "space", None), Ok(Some("fire")));
}

#[test]
fn keymap_gate_is_applied() {
    let config = KeymapConfig::from_json(r#"{ "can_trigger": false }"#).unwrap();
    let relay: KeyRelay<()> = config
        .into_settings()
        .event("keydown", 37, |_| ())
        .build()
        .unwrap();
    assert_eq!(relay.call_label("keydown", 37, None), Ok(None));
}

#[test]
fn keymap_round_trips_through_json() {
    let config = KeymapConfig::from_json(KEYMAP).unwrap();
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(KeymapConfig::from_json(&text).unwrap(), config);
}

#[test]
fn non_sequence_alias_is_rejected() {
    let err = KeymapConfig::from_json(r#"{ "aliases": { "fire": { "key": "space" } } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Alias(_)));
}

#[test]
fn errors_convert_into_keytrig_error() -> Result<(), KeytrigError> {
    let relay: KeyRelay<()> = KeymapConfig::from_json(KEYMAP)?
        .into_settings()
        .event("keydown", "fire", |_| ())
        .build()?;
    relay.call_label("keydown", 32, None)?;

    let err: KeytrigError = relay.call_label("keyup", 32, None).unwrap_err().into();
    assert!(matches!(err, KeytrigError::Dispatch(_)));
    Ok(())
}
