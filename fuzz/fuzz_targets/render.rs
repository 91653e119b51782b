#![no_main]

use dag::generator::ArrayGenerator;
use dag::template::{Bindings, render_body};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the renderer with the input as a template
        let _ = render_body(s, &Bindings::derive("ints", "int"));

        // Fuzz binding derivation with the input as `ident\0value`
        if let Some((ident, value)) = s.split_once('\0') {
            if let Ok(generator) = ArrayGenerator::new(ident, value) {
                let _ = generator.generate();
            }
        }
    }
});
