//! Entry point for the WASM application

pub fn main() {
    compressor_ui::boot();
}
