mod common;

use common::{LEFT, RIGHT, SPACE, arrow_relay};
use keytrig::{AliasEntry, AliasError, KeyRelay, Label};

#[test]
fn added_aliases_round_trip_through_key_strings() {
    let relay: KeyRelay<()> = arrow_relay();
    relay.add_alias_values("move", [Label::from("left"), Label::Code(RIGHT), Label::from("w")]);

    let rendered = relay.get_alias_as_key_strings("move");
    for alias in ["left", "w"] {
        let code = relay.convert_key_string_to_alias(alias);
        let back = relay.convert_alias_to_key_string(code);
        assert!(rendered.contains(&back), "{back} missing from {rendered:?}");
    }
    assert_eq!(relay.convert_key_string_to_alias("left"), Label::Code(LEFT));
    assert_eq!(
        rendered,
        vec![Label::from("left"), Label::from("right"), Label::from("w")]
    );
}

#[test]
fn removing_what_was_added_restores_the_set() {
    let relay: KeyRelay<()> = arrow_relay();
    relay.add_alias_values("fire", ["space"]);
    let before = relay.get_aliases();

    let added = relay.add_alias_values("fire", [Label::from("space"), Label::Code(13), Label::from("f")]);
    assert_eq!(added, vec![Label::Code(13), Label::from("f")]);

    relay.remove_alias_values("fire", added);
    assert_eq!(relay.get_aliases(), before);
}

#[test]
fn round_trip_on_a_new_action_restores_the_map() {
    let relay: KeyRelay<()> = arrow_relay();
    let before = relay.get_aliases();

    let added = relay.add_alias_values("jump", ["w", "space"]);
    relay.remove_alias_values("jump", added);

    assert_eq!(relay.get_aliases(), before);
    assert!(relay.get_aliases_as_key_strings().is_empty());

    relay.add_alias_values("noop", Vec::<Label>::new());
    assert!(relay.get_aliases().is_empty());
}

#[test]
fn removing_absent_values_is_a_noop() {
    let relay: KeyRelay<()> = KeyRelay::new();
    relay.add_alias_values("fire", ["space"]);

    assert!(relay.remove_alias_values("fire", ["x"]).is_empty());
    assert!(relay.remove_alias_values("jump", ["space"]).is_empty());
    assert_eq!(relay.get_aliases()["fire"], vec![Label::from("space")]);
}

#[test]
fn add_keeps_existing_entries() {
    let relay: KeyRelay<()> = KeyRelay::new();
    relay.add_alias_values("fire", ["space"]);
    relay.add_alias_values("fire", ["x"]);
    assert_eq!(
        relay.get_aliases()["fire"],
        vec![Label::from("space"), Label::from("x")]
    );
}

#[test]
fn switch_with_overlap_keeps_the_value() {
    let relay: KeyRelay<()> = KeyRelay::new();
    relay.add_alias_values("fire", ["space", "x"]);
    relay.switch_alias_values("fire", ["space", "x"], ["x", "enter"]);

    assert_eq!(
        relay.get_aliases()["fire"],
        vec![Label::from("x"), Label::from("enter")]
    );
}

#[test]
fn bulk_add_rejects_non_sequences_atomically() {
    let relay: KeyRelay<()> = KeyRelay::new();
    let result = relay.add_aliases([
        ("fire", AliasEntry::from(vec!["space"])),
        ("jump", AliasEntry::Single(Label::from("w"))),
    ]);

    assert!(matches!(result, Err(AliasError::InvalidAlias { ref name, .. }) if name == "jump"));
    assert!(relay.get_aliases().is_empty());
}

#[test]
fn bulk_add_appends_each_action() {
    let relay: KeyRelay<()> = KeyRelay::new();
    relay
        .add_aliases([
            ("fire", AliasEntry::from(vec![SPACE])),
            ("jump", AliasEntry::from(vec!["w", "up"])),
        ])
        .unwrap();

    let aliases = relay.get_aliases();
    assert_eq!(aliases.keys().collect::<Vec<_>>(), ["fire", "jump"]);
    assert_eq!(aliases["jump"], vec![Label::from("w"), Label::from("up")]);
}

#[test]
fn unknown_action_has_no_key_strings() {
    let relay: KeyRelay<()> = KeyRelay::new();
    assert!(relay.get_alias_as_key_strings("nothing").is_empty());
}

#[test]
fn unknown_labels_convert_to_themselves() {
    let relay: KeyRelay<()> = arrow_relay();
    assert_eq!(relay.convert_alias_to_key_string("q"), Label::from("q"));
    assert_eq!(relay.convert_key_string_to_alias(99), Label::Code(99));
}

#[test]
fn key_bindings_stay_bijective() {
    let relay: KeyRelay<()> = arrow_relay();
    relay.bind_key("left", RIGHT);

    assert_eq!(relay.convert_alias_to_key_string(RIGHT), Label::from("left"));
    assert_eq!(relay.convert_alias_to_key_string(LEFT), Label::Code(LEFT));
    assert_eq!(relay.convert_key_string_to_alias("right"), Label::from("right"));
    relay.with_aliases(|table| assert_eq!(table.key_count(), 2));
}

#[test]
fn key_strings_render_every_action() {
    let relay: KeyRelay<()> = arrow_relay();
    relay.add_alias_values("fire", [SPACE]);
    relay.add_alias_values("move", [Label::Code(LEFT), Label::from("d")]);

    let rendered = relay.get_aliases_as_key_strings();
    assert_eq!(rendered["fire"], vec![Label::from("space")]);
    assert_eq!(rendered["move"], vec![Label::from("left"), Label::from("d")]);
}
