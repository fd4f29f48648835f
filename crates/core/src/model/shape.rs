use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Triangle];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
            Shape::Square => "Square",
            Shape::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cosmetic fill color for the shape-match figure. Has no effect on scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentColor(&'static str);

impl AccentColor {
    /// Pastel accents a shape is drawn with.
    pub const PALETTE: [AccentColor; 5] = [
        AccentColor("#60a5fa"),
        AccentColor("#f472b6"),
        AccentColor("#34d399"),
        AccentColor("#fbbf24"),
        AccentColor("#a78bfa"),
    ];

    /// CSS hex value, e.g. `#60a5fa`.
    #[must_use]
    pub fn hex(&self) -> &'static str {
        self.0
    }
}
