//! Fuzz target for configuration parsing.
//!
//! This fuzzer feeds arbitrary text to the TOML configuration loader and,
//! when it parses, builds the geometry and header mapper from it, checking
//! for panics, crashes, or hangs.

#![no_main]

use img2segy::config::Config;
use img2segy::geometry::Geometry;
use img2segy::mapper::TraceHeaderMapper;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = Config::from_toml_str(text) {
        if let Ok(geometry) = Geometry::from_config(&config) {
            let _ = geometry.sample_interval_z(2);
            let _ = geometry.interpolate_xy(0.5);
        }
        let mapper = TraceHeaderMapper::from_config(&config);
        let _ = mapper.trace_number(usize::MAX);
    }
});
