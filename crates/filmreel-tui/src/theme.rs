use filmreel_core::layout::Column;
use ratatui::style::Color;

/// Colors for the reel host: warm cards on the left, cool cards on the right
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub hint: Color,
    pub left_palette: [Color; 4],
    pub right_palette: [Color; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(0x1d, 0x20, 0x21),
            fg: Color::Rgb(0xf2, 0xf2, 0xf2),
            status_bg: Color::Rgb(0x45, 0x40, 0x3d),
            status_fg: Color::Rgb(0xd4, 0xbe, 0x98),
            hint: Color::Rgb(0xa8, 0x99, 0x84),
            left_palette: [
                Color::Rgb(0xe8, 0x5c, 0x45),
                Color::Rgb(0xf2, 0x8c, 0x40),
                Color::Rgb(0xfa, 0xba, 0x47),
                Color::Rgb(0xe6, 0x6b, 0x75),
            ],
            right_palette: [
                Color::Rgb(0x2e, 0x99, 0xe0),
                Color::Rgb(0x33, 0xbd, 0xab),
                Color::Rgb(0x42, 0xa6, 0x7d),
                Color::Rgb(0x33, 0x85, 0xc2),
            ],
        }
    }
}

impl Theme {
    /// Card color by column, cycling through that column's palette
    pub fn card_color(&self, column: Column, index: usize) -> Color {
        let palette = match column {
            Column::Left => &self.left_palette,
            Column::Right => &self.right_palette,
        };
        palette[index % palette.len()]
    }
}
