use crossterm::style::Color;

/// Colors used when printing a board to a terminal
#[derive(Debug, Clone)]
pub struct Theme {
    /// Grid border
    pub border: Color,
    /// Placed letters
    pub letter: Color,
    /// Summary lines under the grid
    pub info: Color,
    /// Invalid runs reported by `check`
    pub error: Color,
    /// Success messages
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            border: Color::Rgb { r: 130, g: 140, b: 170 },
            letter: Color::Rgb { r: 255, g: 255, b: 255 },
            info: Color::Rgb { r: 140, g: 150, b: 180 },
            error: Color::Rgb { r: 255, g: 100, b: 100 },
            success: Color::Rgb { r: 100, g: 220, b: 120 },
        }
    }
}
