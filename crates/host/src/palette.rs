//! Palette module - one display color per shape-type id
//!
//! Hues are drawn at random. Each draw is retried up to [`HUE_ATTEMPTS`] times
//! while it lies within [`MIN_HUE_GAP`] degrees of a hue already in use; after
//! that the close hue is accepted. Colors are `hsl(hue, 80%, 55%)`.

use rand::Rng;

use crate::types::ShapeId;

/// Draws per shape type before a close hue is accepted
pub const HUE_ATTEMPTS: u32 = 10;

/// Minimum distance in degrees between two hues
pub const MIN_HUE_GAP: u16 = 25;

pub const SATURATION: f32 = 0.80;
pub const LIGHTNESS: f32 = 0.55;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert HSL (hue in degrees, saturation and lightness in `0.0..=1.0`).
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = lightness - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }
}

/// Color used for ids with no palette entry
pub const FALLBACK_COLOR: Rgb = Rgb::new(160, 160, 160);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    entries: Vec<(ShapeId, u16, Rgb)>,
}

impl Palette {
    /// Assign a hue to every id in `kinds`, in order.
    pub fn generate<R, I>(kinds: I, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = ShapeId>,
    {
        let mut entries: Vec<(ShapeId, u16, Rgb)> = Vec::new();
        for kind in kinds {
            let mut hue: u16 = rng.random_range(0..360);
            let mut attempts = 1;
            while attempts < HUE_ATTEMPTS && too_close(&entries, hue) {
                hue = rng.random_range(0..360);
                attempts += 1;
            }
            if too_close(&entries, hue) {
                log::debug!("shape {} accepted hue {} near an existing one", kind, hue);
            }
            let color = Rgb::from_hsl(hue as f32, SATURATION, LIGHTNESS);
            entries.push((kind, hue, color));
        }
        Self { entries }
    }

    /// Display color for a board cell value
    pub fn color(&self, kind: ShapeId) -> Rgb {
        self.entries
            .iter()
            .find(|(k, _, _)| *k == kind)
            .map_or(FALLBACK_COLOR, |(_, _, color)| *color)
    }

    pub fn hue(&self, kind: ShapeId) -> Option<u16> {
        self.entries
            .iter()
            .find(|(k, _, _)| *k == kind)
            .map(|(_, hue, _)| *hue)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn too_close(entries: &[(ShapeId, u16, Rgb)], hue: u16) -> bool {
    entries.iter().any(|(_, used, _)| used.abs_diff(hue) < MIN_HUE_GAP)
}
