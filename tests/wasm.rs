#![cfg(target_arch = "wasm32")]

use js_sys::{JSON, Reflect};
use othello::bindings::OthelloGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

fn field_f64(value: &JsValue, name: &str) -> f64 {
    Reflect::get(value, &JsValue::from_str(name))
        .unwrap()
        .as_f64()
        .unwrap()
}

#[wasm_bindgen_test]
fn state_round_trips_through_the_js_boundary() {
    let mut game = OthelloGame::new("pve", Some("hard".to_string()), JsValue::UNDEFINED).unwrap();

    let state = game.state().unwrap();
    assert_eq!(field_f64(&state, "black_count"), 2.0);
    assert_eq!(field_f64(&state, "white_count"), 2.0);
    assert_eq!(field_f64(&state, "current_player"), 1.0);
    assert_eq!(game.ai_delay_ms(), 2000);

    game.place(2, 3).unwrap();
    let state = game.state().unwrap();
    assert_eq!(field_f64(&state, "current_player"), 2.0);
    assert_eq!(field_f64(&state, "black_count"), 4.0);

    let report = game.ai_move().unwrap();
    let row = field_f64(&report, "row") as u8;
    let col = field_f64(&report, "col") as u8;
    assert!(row < 8 && col < 8);
    let commentary = Reflect::get(&report, &JsValue::from_str("commentary")).unwrap();
    assert!(!commentary.as_string().unwrap().is_empty());
}

#[wasm_bindgen_test]
fn rejected_moves_surface_as_js_errors() {
    let mut game = OthelloGame::new("pvp", None, JsValue::UNDEFINED).unwrap();

    let err = game.place(0, 0).unwrap_err();
    assert!(err.as_string().unwrap().contains("no discs would flip"));

    assert!(game.result().is_err());
}

#[wasm_bindgen_test]
fn config_override_reaches_the_delay_table() {
    let config = JSON::parse(r#"{"hard":{"depth":1,"delay_ms":5}}"#).unwrap();
    let game = OthelloGame::new("pve", Some("hard".to_string()), config).unwrap();

    assert_eq!(game.ai_delay_ms(), 5);
}

#[wasm_bindgen_test]
fn resignation_reports_the_standing_discs() {
    let mut game = OthelloGame::new("pve", None, JsValue::UNDEFINED).unwrap();

    let result = game.resign(2).unwrap();
    assert_eq!(field_f64(&result, "winner"), 1.0);
    assert_eq!(field_f64(&result, "black_count"), 2.0);
    assert_eq!(field_f64(&result, "white_count"), 2.0);
    let via_resignation = Reflect::get(&result, &JsValue::from_str("via_resignation")).unwrap();
    assert_eq!(via_resignation.as_bool(), Some(true));
}
