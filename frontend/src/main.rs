//! Entry point for the WASM application

pub fn main() {
    charsheet_frontend::run();
}
