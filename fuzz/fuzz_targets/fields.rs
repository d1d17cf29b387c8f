#![no_main]

use libfuzzer_sys::fuzz_target;
use nmea_wire::{Fields, GgaFix, RmcData};

// Fuzz target: payload splitting and typed sentence parsing.
//
// Catches bugs in:
// - Index arithmetic on short or empty field lists
// - Checksum suffix handling
// - Non-finite numbers leaking into decoded values
fuzz_target!(|data: &[u8]| {
    let Ok(fields) = Fields::from_bytes(data) else {
        return;
    };

    if let Ok(fix) = GgaFix::parse(&fields) {
        assert!(fix.latitude.is_finite() && fix.longitude.is_finite());
    }
    if let Ok(rmc) = RmcData::parse(&fields) {
        assert!(rmc.latitude.is_finite() && rmc.longitude.is_finite());
        assert!(rmc.course_degrees.is_finite());
    }
});
