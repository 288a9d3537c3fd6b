//! Colours and the sequential colour maps used to grade walk markers.

use core::fmt;
use core::str::FromStr;

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const GREEN: Self = Self::new(0, 128, 0);
    pub const RED: Self = Self::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;

        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

const YL_GN_BU: [u32; 9] = [
    0xffffd9, 0xedf8b1, 0xc7e9b4, 0x7fcdbb, 0x41b6c4, 0x1d91c0, 0x225ea8, 0x253494, 0x081d58,
];

const BLUES: [u32; 9] = [
    0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b,
];

const GREYS: [u32; 9] = [
    0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000,
];

/// A sequential colour map made of evenly spaced stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    YlGnBu,
    Blues,
    Greys,
}

impl Colormap {
    pub const ALL: [Colormap; 3] = [Colormap::YlGnBu, Colormap::Blues, Colormap::Greys];

    pub fn name(&self) -> &'static str {
        match self {
            Colormap::YlGnBu => "YlGnBu",
            Colormap::Blues => "Blues",
            Colormap::Greys => "Greys",
        }
    }

    fn stops(&self) -> &'static [u32] {
        match self {
            Colormap::YlGnBu => &YL_GN_BU,
            Colormap::Blues => &BLUES,
            Colormap::Greys => &GREYS,
        }
    }

    /// Samples the map at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f32) -> Rgb {
        let stops = self.stops();
        let last = stops.len() - 1;
        let scaled = t.clamp(0.0, 1.0) * last as f32;
        let lower = (scaled.floor() as usize).min(last);
        let upper = (lower + 1).min(last);

        Rgb::from_hex(stops[lower]).lerp(Rgb::from_hex(stops[upper]), scaled - lower as f32)
    }

    /// Colour of the `index`-th of `count` ordered points; the first point
    /// gets the low end of the map and the last point the high end.
    pub fn for_index(&self, index: usize, count: usize) -> Rgb {
        if count <= 1 {
            return self.sample(0.0);
        }

        self.sample(index as f32 / (count - 1) as f32)
    }
}

impl FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|map| map.name().eq_ignore_ascii_case(s))
            .ok_or(format!("unknown colormap: {}", s))
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
