/// MINSTD linear congruential generator.
///
/// Only the noise-texture fallback consumes randomness; the text pipeline itself
/// never does, which keeps its output reproducible.
#[derive(Clone, Debug)]
pub struct MinstdRng {
    state: u64,
}

impl MinstdRng {
    const MODULUS: u64 = 2_147_483_647;
    const MULTIPLIER: u64 = 48_271;

    /// Seeded generator; seed 0 is shifted so the state never collapses.
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed % Self::MODULUS).wrapping_add(1),
        }
    }

    /// Next raw value in `1..MODULUS`.
    pub fn next_u32(&mut self) -> u32 {
        self.state = (self.state * Self::MULTIPLIER) % Self::MODULUS;
        self.state as u32
    }

    /// Next uniform byte.
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u32() >> 23) as u8
    }
}

/// HSV (all components in `0..=1`) to RGB8; channels are truncated from `c * 255`.
pub fn hsv_to_rgb8(h: f64, s: f64, v: f64) -> [u8; 3] {
    let to_u8 = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u8;
    if s == 0.0 {
        let c = to_u8(v);
        return [c, c, c];
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [to_u8(r), to_u8(g), to_u8(b)]
}

/// ITU-R 601-2 luma, the weights used for the contrast and color adjustments.
pub fn luma601(r: u8, g: u8, b: u8) -> f32 {
    (f32::from(r) * 299.0 + f32::from(g) * 587.0 + f32::from(b) * 114.0) / 1000.0
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
