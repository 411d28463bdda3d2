//! Pipes feeding raw events into the relay.

mod common;

use common::{KeyEvent, LEFT, RIGHT, arrow_relay, call_log};
use keytrig::{
    DispatchError, KeyRelay, Label, Target,
    testing::{MockEvent, RecordingCallback},
};
use std::{collections::HashMap, rc::Rc};

#[test]
fn left_arrow_scenario() {
    let relay: KeyRelay<HashMap<String, i64>> = KeyRelay::new();
    let recorder = RecordingCallback::new();
    relay.add_callback("left", "37", recorder.callback());
    relay.add_alias_values("left", [Label::Code(LEFT), Label::from("left")]);

    let pipe = relay.make_pipe("left", "keyCode", false);
    let mut raw = HashMap::from([("keyCode".to_string(), LEFT)]);
    pipe.feed(&mut raw).unwrap();

    assert_eq!(recorder.count(), 1);
    assert_eq!(recorder.events(), vec![Some(raw)]);
}

#[test]
fn prevent_defaults_marks_the_event() {
    let relay: KeyRelay<KeyEvent> = KeyRelay::new();
    relay.add_event("keydown", LEFT, |_| ());

    let mut event = KeyEvent::new(LEFT);
    relay.make_pipe("keydown", "keyCode", true).feed(&mut event).unwrap();
    assert!(event.default_prevented);

    let mut event = KeyEvent::new(LEFT);
    relay.make_pipe("keydown", "keyCode", false).feed(&mut event).unwrap();
    assert!(!event.default_prevented);
}

#[test]
fn default_is_prevented_even_when_dispatch_fails() {
    let relay: KeyRelay<MockEvent> = KeyRelay::new();
    relay.add_event("keydown", LEFT, |_| ());

    let mut event = MockEvent::key("keyCode", RIGHT);
    let result = relay.make_pipe("keydown", "keyCode", true).feed(&mut event);
    assert!(matches!(result, Err(DispatchError::UnknownLabel { .. })));
    assert!(event.default_prevented());
}

#[test]
fn pipe_reads_the_configured_field() {
    let relay: KeyRelay<KeyEvent, &'static str> = arrow_relay();
    relay.add_event("keydown", "left", |_| "left");
    relay.add_event("keydown", "right", |_| "right");

    let mut event = KeyEvent {
        key_code: LEFT,
        which: Some(RIGHT),
        default_prevented: false,
    };
    let by_code = relay.make_pipe("keydown", "keyCode", false);
    let by_which = relay.make_pipe("keydown", "which", false);

    assert_eq!(by_code.feed(&mut event), Ok(Some("left")));
    assert_eq!(by_which.feed(&mut event), Ok(Some("right")));
}

#[test]
fn missing_field_falls_back_to_trigger_name() {
    let relay: KeyRelay<MockEvent, u8> = KeyRelay::new();
    relay.add_event("click", "click", |_| 1);

    let pipe = relay.make_pipe("click", "button", false);
    assert_eq!(pipe.feed(&mut MockEvent::new()), Ok(Some(1)));
}

#[test]
fn out_of_range_code_is_not_treated_as_missing() {
    let relay: KeyRelay<HashMap<String, u64>, &'static str> = KeyRelay::new();
    relay.add_event("click", "click", |_| "click");

    let pipe = relay.make_pipe("click", "button", false);
    let mut raw = HashMap::from([("button".to_string(), u64::MAX)]);
    assert_eq!(
        pipe.feed(&mut raw),
        Err(DispatchError::UnknownLabel {
            trigger: "click".into(),
            label: u64::MAX.to_string(),
        })
    );
}

#[test]
fn pipe_can_wrap_a_direct_callback() {
    let relay: KeyRelay<MockEvent, Option<Label>> = KeyRelay::new();
    let pipe = relay.make_pipe(
        Target::func(|event: Option<&MockEvent>| {
            event.and_then(|e| keytrig::RawEvent::code(e, "keyCode"))
        }),
        "keyCode",
        false,
    );

    assert_eq!(
        pipe.feed(&mut MockEvent::key("keyCode", 13)),
        Ok(Some(Some(Label::Code(13))))
    );
}

#[test]
fn independent_pipes_do_not_interfere() {
    let relay: KeyRelay<MockEvent> = KeyRelay::new();
    let log = call_log();
    for trigger in ["keydown", "keyup"] {
        let log = Rc::clone(&log);
        relay.add_event(trigger, LEFT, move |_| log.borrow_mut().push(trigger.to_string()));
    }

    let down = relay.make_pipe("keydown", "keyCode", false).into_handler();
    let up = relay.make_pipe("keyup", "keyCode", true).into_handler();

    let mut event = MockEvent::key("keyCode", LEFT);
    down(&mut event);
    up(&mut event);
    down(&mut event);

    assert_eq!(*log.borrow(), vec!["keydown", "keyup", "keydown"]);
}

#[test]
fn handler_drops_dispatch_errors() {
    let relay: KeyRelay<MockEvent> = KeyRelay::new();
    let handler = relay.make_pipe("keydown", "keyCode", true).into_handler();

    let mut event = MockEvent::key("keyCode", LEFT);
    handler(&mut event);
    assert!(event.default_prevented());
}

#[test]
fn pipe_sees_later_registrations() {
    let relay: KeyRelay<MockEvent, u8> = KeyRelay::new();
    relay.add_event("keydown", LEFT, |_| 1);
    let pipe = relay.make_pipe("keydown", "keyCode", false);

    relay.add_event("keydown", LEFT, |_| 2);
    assert_eq!(pipe.feed(&mut MockEvent::key("keyCode", LEFT)), Ok(Some(2)));
    assert_eq!(pipe.code_field(), "keyCode");
    assert!(!pipe.prevents_defaults());
    assert!(relay.make_pipe("keydown", "keyCode", true).prevents_defaults());
    assert_eq!(pipe.target().trigger_name(), Some("keydown"));
}
