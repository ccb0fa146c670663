#![no_main]

use libfuzzer_sys::fuzz_target;
use tracealign::alignment::{align, apply};

fuzz_target!(|data: &[u8]| {
    // Split the input at its first byte value into record and replay halves
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let at = (split as usize).min(rest.len());
    let (record, replay) = rest.split_at(at);

    // Bounded so a single input cannot allocate a huge matrix
    if let Ok(alignment) = align(record, replay, Some(1 << 16)) {
        assert_eq!(alignment.script.len(), alignment.value);
        assert_eq!(apply(&alignment.script, record).unwrap(), replay);
    }
});
