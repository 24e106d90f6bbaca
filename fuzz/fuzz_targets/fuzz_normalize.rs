#![no_main]

use keytrie::utils::normalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Folding must be total and settle after one application
    for c in data.chars() {
        let folded = normalize(c);
        assert_eq!(normalize(folded), folded);
    }
});
