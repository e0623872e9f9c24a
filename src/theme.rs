// Theme module - color scheme and styling
use crossterm::style::Color;

pub struct SheetTheme;

impl SheetTheme {
    pub fn bg_status() -> Color {
        Color::Rgb { r: 40, g: 40, b: 46 }
    }

    pub fn text_status() -> Color {
        Color::Rgb { r: 200, g: 200, b: 200 }
    }

    pub fn text_primary() -> Color {
        Color::Rgb { r: 248, g: 248, b: 242 }
    }

    pub fn text_secondary() -> Color {
        Color::Rgb { r: 180, g: 180, b: 180 }
    }

    pub fn text_dim() -> Color {
        Color::Rgb { r: 120, g: 120, b: 120 }
    }

    pub fn text_header() -> Color {
        Color::Black
    }

    pub fn accent_header() -> Color {
        Color::Rgb { r: 176, g: 196, b: 222 }  // Light steel blue
    }

    pub fn accent_field() -> Color {
        Color::Rgb { r: 60, g: 60, b: 70 }
    }

    pub fn success() -> Color {
        Color::Rgb { r: 152, g: 195, b: 121 }  // Soft green
    }

    pub fn warning() -> Color {
        Color::Rgb { r: 229, g: 192, b: 123 }  // Amber
    }

    pub fn error() -> Color {
        Color::Rgb { r: 224, g: 108, b: 117 }  // Soft red
    }
}
