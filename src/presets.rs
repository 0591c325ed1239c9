use crate::models::{Band, BandPreset};

// Last-write-wins upsert keyed by case-insensitive band name. Presets are
// only ever added or refreshed here, never removed.
pub fn learn_bands(presets: &mut Vec<BandPreset>, bands: &[Band]) {
    for band in bands {
        if band.name.trim().is_empty() {
            continue;
        }
        let wanted = band.name.to_lowercase();
        match presets
            .iter_mut()
            .find(|p| p.name.to_lowercase() == wanted)
        {
            Some(preset) => preset.last_value = band.value,
            None => presets.push(BandPreset {
                name: band.name.clone(),
                last_value: band.value,
            }),
        }
    }
}
