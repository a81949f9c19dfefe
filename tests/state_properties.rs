//! Property tests: the session must agree with a naive two-map model of the
//! double-buffered state for any interleaving of events and frame
//! boundaries.

use std::collections::HashMap;

use inpoll::{InputSession, PointerButton, SessionOptions};
use proptest::prelude::*;

const CODES: [&str; 4] = ["KeyA", "KeyB", "Space", "ArrowLeft"];

#[derive(Debug, Clone)]
enum Op {
    Key(usize, bool),
    Button(u16, bool),
    Wheel(i8),
    Update,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..CODES.len(), any::<bool>()).prop_map(|(i, down)| Op::Key(i, down)),
        (0u16..4, any::<bool>()).prop_map(|(i, down)| Op::Button(i, down)),
        (-3i8..=3).prop_map(Op::Wheel),
        Just(Op::Update),
    ]
}

/// Naive reference model: two plain maps plus a wheel sign.
#[derive(Default)]
struct Model {
    current: HashMap<String, bool>,
    previous: HashMap<String, bool>,
    wheel: i32,
}

impl Model {
    fn is_down(map: &HashMap<String, bool>, id: &str) -> bool {
        map.get(id).copied().unwrap_or(false)
    }

    fn apply(&mut self, op: &Op) {
        match op {
            Op::Key(i, down) => {
                self.current.insert(CODES[*i].to_owned(), *down);
            }
            Op::Button(i, down) => {
                self.current.insert(format!("button{i}"), *down);
            }
            Op::Wheel(delta) => {
                if *delta != 0 {
                    self.wheel = delta.signum() as i32;
                }
            }
            Op::Update => {
                self.previous = self.current.clone();
                self.wheel = 0;
            }
        }
    }
}

proptest! {
    #[test]
    fn session_matches_reference_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut session = InputSession::new(SessionOptions::default());
        let mut model = Model::default();

        for op in &ops {
            match op {
                Op::Key(i, down) => session.apply_key_event(CODES[*i], *down),
                Op::Button(i, down) => {
                    session.apply_button_event(PointerButton::from_index(*i), *down)
                }
                Op::Wheel(delta) => session.apply_wheel_event(f64::from(*delta)),
                Op::Update => session.update(),
            }
            model.apply(op);

            for code in CODES {
                let now = Model::is_down(&model.current, code);
                let before = Model::is_down(&model.previous, code);
                prop_assert_eq!(session.key_down(code), now);
                prop_assert_eq!(session.key_pressed(code), now && !before);
                prop_assert_eq!(session.key_released(code), !now && before);
                // a rising and falling edge can never coincide
                prop_assert!(!(session.key_pressed(code) && session.key_released(code)));
            }
            for i in 0u16..4 {
                let id = format!("button{i}");
                let button = PointerButton::from_index(i);
                let now = Model::is_down(&model.current, &id);
                let before = Model::is_down(&model.previous, &id);
                prop_assert_eq!(session.button_down(button), now);
                prop_assert_eq!(session.button_pressed(button), now && !before);
                prop_assert_eq!(session.button_released(button), !now && before);
            }
            prop_assert_eq!(session.wheel_up(), model.wheel > 0);
            prop_assert_eq!(session.wheel_down(), model.wheel < 0);
        }
    }

    #[test]
    fn edges_quiet_right_after_a_double_update(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let mut session = InputSession::new(SessionOptions::default());
        for op in &ops {
            match op {
                Op::Key(i, down) => session.apply_key_event(CODES[*i], *down),
                Op::Button(i, down) => {
                    session.apply_button_event(PointerButton::from_index(*i), *down)
                }
                Op::Wheel(delta) => session.apply_wheel_event(f64::from(*delta)),
                Op::Update => session.update(),
            }
        }

        session.update();
        session.update();

        prop_assert!(!session.any_key_pressed());
        prop_assert!(!session.any_key_released());
        prop_assert!(!session.any_button_pressed());
        prop_assert!(!session.any_button_released());
        prop_assert!(!session.wheel_up());
        prop_assert!(!session.wheel_down());
    }
}
