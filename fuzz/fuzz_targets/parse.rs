#![no_main]
use libfuzzer_sys::fuzz_target;

use worldclock::SavedZoneList;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = worldclock::city_from_zone_id(text);
        let _ = SavedZoneList::from_json(text);
    }
});
