//! Body colours and the random draws made at spawn time.

use glam::DVec2;
use rand::Rng;
use std::fmt;

/// Opaque 24-bit RGB fill colour, fixed when a body is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Six uniformly random hex digits
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..=0xFF_FFFF))
    }

    pub fn rgb(&self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    pub fn to_hex(&self) -> String {
        format!("#{:06X}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Random spawn impulse: each component is a whole number drawn uniformly
/// from `[floor(min), floor(max)]`, inclusive on both ends.
pub fn random_impulse<R: Rng + ?Sized>(rng: &mut R, range: (f64, f64)) -> DVec2 {
    let lo = range.0.floor() as i64;
    let hi = range.1.floor() as i64;
    DVec2::new(
        rng.gen_range(lo..=hi) as f64,
        rng.gen_range(lo..=hi) as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::from_rgb(0x12, 0xab, 0x03).to_hex(), "#12AB03");
        assert_eq!(Color::from_rgb(0, 0, 0).to_string(), "#000000");
        assert_eq!(Color::from_rgb(1, 2, 3).rgb(), [1, 2, 3]);
    }

    #[test]
    fn impulse_components_are_whole_and_in_range() {
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..500 {
            let f = random_impulse(&mut rng, (-1000.0, 1000.0));
            for c in [f.x, f.y] {
                assert_eq!(c, c.trunc());
                assert!((-1000.0..=1000.0).contains(&c));
            }
        }
    }

    #[test]
    fn degenerate_range_is_constant() {
        let mut rng = Pcg64::seed_from_u64(1);
        assert_eq!(random_impulse(&mut rng, (3.7, 3.2)), DVec2::new(3.0, 3.0));
    }
}
