//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! Generates the Swift and Kotlin sources for the mobile shell around
//! `RecipeSession`.
//!
//! ```bash
//! cargo build --release --features uniffi
//! cargo run --features uniffi-cli --bin uniffi-bindgen generate --library target/release/librecipe_box.so --language swift --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
