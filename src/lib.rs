use wasm_bindgen::prelude::*;

pub mod ai;
pub mod bindings;
pub mod board;
pub mod difficulty;
pub mod game;
pub mod types;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
