//! RGB/HSL conversion and the HSL-space color modifiers.

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` or `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb { r, g, b })
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h * 60.0, s, l }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_byte(l);
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
        g: to_byte(hue_to_channel(p, q, h)),
        b: to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn map_lightness(rgb: Rgb, f: impl Fn(f64) -> f64) -> Rgb {
    let mut hsl = rgb_to_hsl(rgb);
    hsl.l = f(hsl.l);
    hsl_to_rgb(hsl)
}

/// `L' = min(L * v, 1)`
pub fn shade(rgb: Rgb, v: f64) -> Rgb {
    map_lightness(rgb, |l| (l * v).min(1.0))
}

/// `L' = L * v + (1 - v)`
pub fn tint(rgb: Rgb, v: f64) -> Rgb {
    map_lightness(rgb, |l| l * v + (1.0 - v))
}

/// `L' = min(L * v, 1)`
pub fn lum_mod(rgb: Rgb, v: f64) -> Rgb {
    map_lightness(rgb, |l| (l * v).min(1.0))
}

/// `L' = min(v + L, 1)`
pub fn lum_off(rgb: Rgb, v: f64) -> Rgb {
    map_lightness(rgb, |l| (v + l).min(1.0))
}

/// `H' = (H * v) mod 360`
pub fn hue_mod(rgb: Rgb, v: f64) -> Rgb {
    let mut hsl = rgb_to_hsl(rgb);
    hsl.h = (hsl.h * v).rem_euclid(360.0);
    hsl_to_rgb(hsl)
}

/// `S' = S * v`
pub fn sat_mod(rgb: Rgb, v: f64) -> Rgb {
    let mut hsl = rgb_to_hsl(rgb);
    hsl.s = (hsl.s * v).clamp(0.0, 1.0);
    hsl_to_rgb(hsl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let rgb = Rgb::from_hex("4472c4").unwrap();
        assert_eq!(rgb, Rgb::new(0x44, 0x72, 0xC4));
        assert_eq!(rgb.to_hex(), "#4472C4");
        assert!(Rgb::from_hex("#12345").is_none());
        assert!(Rgb::from_hex("GGGGGG").is_none());
    }

    #[test]
    fn test_hsl_conversion_primaries() {
        let red = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 1.0);
        assert_eq!(red.l, 0.5);
        assert_eq!(hsl_to_rgb(red), Rgb::new(255, 0, 0));

        let blue = rgb_to_hsl(Rgb::new(0, 0, 255));
        assert_eq!(blue.h, 240.0);
        assert_eq!(hsl_to_rgb(blue), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_shade_and_tint_on_white() {
        let white = Rgb::new(255, 255, 255);
        assert_eq!(shade(white, 0.5).to_hex(), "#808080");
        assert_eq!(tint(white, 0.5).to_hex(), "#FFFFFF");
        assert_eq!(tint(Rgb::BLACK, 0.5).to_hex(), "#808080");
    }

    #[test]
    fn test_shade_then_tint_is_not_commutative() {
        let white = Rgb::new(255, 255, 255);
        let shade_first = tint(shade(white, 0.5), 0.5);
        let tint_first = shade(tint(white, 0.5), 0.5);
        assert_eq!(shade_first.to_hex(), "#C0C0C0");
        assert_eq!(tint_first.to_hex(), "#808080");
        assert_ne!(shade_first, tint_first);
    }

    #[test]
    fn test_lum_mod_and_off() {
        // accent1 "lighter 40%": lumMod 60000 + lumOff 40000
        let base = Rgb::from_hex("4472C4").unwrap();
        let lighter = lum_off(lum_mod(base, 0.6), 0.4);
        assert_eq!(lighter.to_hex(), "#8FABDB");
    }

    #[test]
    fn test_hue_and_sat_mod() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(hue_mod(red, 2.0), Rgb::new(255, 0, 0));
        assert_eq!(sat_mod(red, 0.0).to_hex(), "#808080");
    }
}
