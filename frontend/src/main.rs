//! Entry point for the WASM application

pub fn main() {
    rental_frontend::run_app();
}
