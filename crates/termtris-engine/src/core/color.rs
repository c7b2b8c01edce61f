/// A display color expressed as an index into the 256-color terminal palette.
///
/// The engine only hands out tokens; mapping them onto an actual terminal
/// style is up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("color({_0})")]
pub struct ColorToken(u8);

impl ColorToken {
    pub const BLACK: Self = Self(0);
    pub const RED: Self = Self(1);
    pub const GREEN: Self = Self(2);
    pub const YELLOW: Self = Self(3);
    pub const BLUE: Self = Self(4);
    pub const MAGENTA: Self = Self(5);
    pub const CYAN: Self = Self(6);
    pub const ORANGE: Self = Self(208);

    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Converts an HSV color (hue in degrees) to the nearest entry of the
    /// 6×6×6 color cube occupying palette indices 16..=231.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let c = value * saturation;
        let h = (hue / 60.0).rem_euclid(6.0);
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = value - c;

        let (r, g, b) = match h {
            h if h < 1.0 => (c, x, 0.0),
            h if h < 2.0 => (x, c, 0.0),
            h if h < 3.0 => (0.0, c, x),
            h if h < 4.0 => (0.0, x, c),
            h if h < 5.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        // 0..=255 per channel, then 0..=5 per cube axis
        let cube = |channel: f64| (((channel + m) * 255.0) as u8) / 51;
        Self(16 + 36 * cube(r) + 6 * cube(g) + cube(b))
    }
}

/// Rainbow gradient along a snake body: red (hue 0°) at the head, fading to
/// violet (hue 300°) at the tail.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn segment_color(index: usize, length: usize) -> ColorToken {
    let hue = if length <= 1 {
        0.0
    } else {
        index as f64 / (length - 1) as f64 * 300.0
    };
    ColorToken::from_hsv(hue, 1.0, 1.0)
}
