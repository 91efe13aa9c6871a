use wasm_bindgen::prelude::*;

pub mod avatar;
pub mod card;
mod client;
pub mod config;
pub mod data;
pub mod loader;

#[wasm_bindgen(start)]
pub fn run() {
    client::launch();
}
