#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    // Use first 4 bytes as expected_len (capped to 16MB to avoid OOM)
    let expected_len =
        u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize % (16 * 1024 * 1024);

    let compressed = &data[4..];
    let _ = mrci2::decompress(compressed, expected_len);
});
