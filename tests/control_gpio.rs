//! End-to-end request handling against the simulated GPIO bank.

use std::sync::Mutex;

use gpio_bridge::{
    action::Action,
    api::{self, Reply},
    controller::PinController,
    pin::{Level, PinId},
    sim::{OutputCall, SimulatedOutputs},
};
use proptest::prelude::*;

const ACK: &str = r#"{"status":"success"}"#;

fn fresh() -> Mutex<PinController<SimulatedOutputs>> {
    Mutex::new(PinController::new(SimulatedOutputs::new()))
}

fn post(ctl: &Mutex<PinController<SimulatedOutputs>>, body: &str) -> Reply {
    api::control_gpio(ctl, body.as_bytes())
}

fn calls(ctl: &Mutex<PinController<SimulatedOutputs>>) -> Vec<OutputCall> {
    ctl.lock().unwrap().outputs().calls().to_vec()
}

#[test]
fn on_then_off_on_fresh_process() {
    let ctl = fresh();

    let reply = post(&ctl, r#"{"pin": 17, "action": "on"}"#);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, ACK);
    assert_eq!(
        calls(&ctl),
        vec![
            OutputCall::Configure(PinId(17)),
            OutputCall::Write(PinId(17), Level::High),
        ]
    );

    let reply = post(&ctl, r#"{"pin": 17, "action": "off"}"#);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, ACK);
    let calls = calls(&ctl);
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2], OutputCall::Write(PinId(17), Level::Low));
    assert_eq!(ctl.lock().unwrap().level(PinId(17)), Some(Level::Low));
}

#[test]
fn unknown_action_is_acknowledged_without_write() {
    let ctl = fresh();
    let reply = post(&ctl, r#"{"pin": 4, "action": "toggle"}"#);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, ACK);
    assert_eq!(calls(&ctl), vec![OutputCall::Configure(PinId(4))]);
    assert_eq!(ctl.lock().unwrap().level(PinId(4)), Some(Level::Low));
}

#[test]
fn missing_pin_fails() {
    let ctl = fresh();
    let reply = post(&ctl, r#"{"action": "on"}"#);
    assert_ne!(reply.status, 200);
    assert_eq!(reply.status, 400);
    assert!(calls(&ctl).is_empty());
}

#[test]
fn hardware_fault_is_server_error_and_retried_next_time() {
    let ctl = Mutex::new(PinController::new(SimulatedOutputs::with_valid_pins(0..=3)));
    let reply = post(&ctl, r#"{"pin": 7, "action": "on"}"#);
    assert_eq!(reply.status, 500);
    assert!(ctl.lock().unwrap().states().is_empty());

    let reply = post(&ctl, r#"{"pin": 3, "action": "on"}"#);
    assert_eq!(reply.status, 200);
    assert_eq!(ctl.lock().unwrap().level(PinId(3)), Some(Level::High));
}

#[test]
fn list_pins_reflects_commands() {
    let ctl = fresh();
    post(&ctl, r#"{"pin": 27, "action": "on"}"#);
    post(&ctl, r#"{"pin": 2, "action": "off"}"#);
    let reply = api::list_pins(&ctl);
    assert_eq!(reply.status, 200);
    assert_eq!(
        reply.body,
        r#"{"status":"success","pins":[{"pin":2,"level":"LOW"},{"pin":27,"level":"HIGH"}]}"#
    );
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::On),
        Just(Action::Off),
        "[a-z]{0,6}".prop_map(|token| Action::of_str(&token)),
    ]
}

proptest! {
    #[test]
    fn configures_each_pin_exactly_once(
        cmds in prop::collection::vec((0i32..=27, action_strategy()), 1..40)
    ) {
        let mut ctl = PinController::new(SimulatedOutputs::new());
        for (pin, action) in &cmds {
            ctl.set_pin(PinId(*pin), action).unwrap();
        }
        for (pin, _) in &cmds {
            prop_assert_eq!(ctl.outputs().configure_count(PinId(*pin)), 1);
        }
    }

    #[test]
    fn recorded_level_follows_last_recognized_action(
        actions in prop::collection::vec(action_strategy(), 1..30)
    ) {
        let pin = PinId(17);
        let mut ctl = PinController::new(SimulatedOutputs::new());
        for action in &actions {
            ctl.set_pin(pin, action).unwrap();
        }
        let expected = actions
            .iter()
            .rev()
            .find_map(Action::target_level)
            .unwrap_or(Level::Low);
        let writes = actions.iter().filter(|a| a.target_level().is_some()).count();

        prop_assert_eq!(ctl.level(pin), Some(expected));
        prop_assert_eq!(ctl.outputs().physical_level(pin), Some(expected));
        prop_assert_eq!(ctl.outputs().write_count(pin), writes);
    }
}
