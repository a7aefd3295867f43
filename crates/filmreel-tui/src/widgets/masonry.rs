use filmreel_core::Rect as LayoutRect;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::scroll::Clock;
use crate::theme::Theme;

/// A card mapped onto terminal cells, clipped to the list area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCells {
    pub area: Rect,
    /// Top edge is above the list area
    pub clipped_top: bool,
    /// Bottom edge is below the list area
    pub clipped_bottom: bool,
}

/// Convert a layout rectangle (content coordinates) into cells inside `area`.
/// Returns `None` when nothing of the card is on screen.
pub fn card_cells(area: Rect, rect: LayoutRect, scroll: f64, cell_scale: f64) -> Option<CardCells> {
    let to_cells = |v: f64| (v * cell_scale).round() as i64;

    let left = to_cells(rect.x);
    let right = to_cells(rect.max_x());
    let top = to_cells(rect.y - scroll);
    let bottom = to_cells(rect.max_y() - scroll);

    let width = area.width as i64;
    let height = area.height as i64;

    let x0 = left.clamp(0, width);
    let x1 = right.clamp(0, width);
    let y0 = top.clamp(0, height);
    let y1 = bottom.clamp(0, height);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(CardCells {
        area: Rect::new(
            area.x + x0 as u16,
            area.y + y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
        ),
        clipped_top: top < 0,
        clipped_bottom: bottom > height,
    })
}

pub struct MasonryWidget;

impl MasonryWidget {
    pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>, theme: &Theme) {
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

        let reel = &app.reel;
        if !reel.is_visible() {
            return;
        }

        let scroll = reel.scroll_position();
        for (index, rect) in reel.visible_cells(app.viewport_rect()) {
            let Some(cells) = card_cells(area, rect, scroll, app.cell_scale()) else {
                continue;
            };
            let Some(column) = reel.column_of(index) else {
                continue;
            };

            let color = theme.card_color(column, index);
            let mut borders = Borders::LEFT | Borders::RIGHT;
            if !cells.clipped_top {
                borders |= Borders::TOP;
            }
            if !cells.clipped_bottom {
                borders |= Borders::BOTTOM;
            }

            let mut block = Block::default()
                .borders(borders)
                .border_style(Style::default().fg(color))
                .style(Style::default().fg(theme.fg));
            if !cells.clipped_top {
                let title = reel.item(index).map(|item| item.title.as_str()).unwrap_or("");
                let max = cells.area.width.saturating_sub(2) as usize;
                block = block.title(Line::from(truncate(title, max)));
            }
            frame.render_widget(block, cells.area);
        }
    }
}

/// Cut `text` to at most `max` display columns
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ManualClock;
    use filmreel_core::{AppConfig, ReelItem};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_card_cells_inside() {
        let area = Rect::new(0, 1, 40, 20);
        let rect = LayoutRect::new(16.0, 16.0, 90.0, 100.0);
        let cells = card_cells(area, rect, 0.0, 0.1).unwrap();
        assert_eq!(cells.area, Rect::new(2, 3, 9, 10));
        assert!(!cells.clipped_top);
        assert!(!cells.clipped_bottom);
    }

    #[test]
    fn test_card_cells_clipped_at_top() {
        let area = Rect::new(0, 0, 40, 20);
        let rect = LayoutRect::new(16.0, 16.0, 90.0, 100.0);
        let cells = card_cells(area, rect, 60.0, 0.1).unwrap();
        assert_eq!(cells.area, Rect::new(2, 0, 9, 6));
        assert!(cells.clipped_top);
    }

    #[test]
    fn test_card_cells_off_screen() {
        let area = Rect::new(0, 0, 40, 20);
        let rect = LayoutRect::new(16.0, 500.0, 90.0, 100.0);
        assert_eq!(card_cells(area, rect, 0.0, 0.1), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Casablanca", 4), "Casa");
        assert_eq!(truncate("Up", 4), "Up");
        assert_eq!(truncate("映画館", 3), "映");
    }

    #[test]
    fn test_render_draws_cards() {
        let items = (0..12)
            .map(|i| ReelItem::new(80.0, format!("Reel {i}")))
            .collect();
        let mut app = App::with_clock(&AppConfig::default(), items, ManualClock::new());
        app.set_list_area(40, 20);
        app.start();
        app.handle_action(crate::input::Action::JumpToTop);

        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| MasonryWidget::render(frame, frame.area(), &app, &theme))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Reel 0"));
        assert!(text.contains("Reel 1"));
    }

    #[test]
    fn test_render_with_zero_cell_scale_uses_fallback() {
        let mut config = AppConfig::default();
        config.ui.cell_scale = 0.0;
        config.reel.content_insets = filmreel_core::Insets::uniform(1.0);
        config.reel.column_spacing = 2.0;
        config.reel.item_spacing = 1.0;
        let items = (0..12)
            .map(|i| ReelItem::new(8.0, format!("R{i}")))
            .collect();
        let mut app = App::with_clock(&config, items, ManualClock::new());
        app.set_list_area(40, 20);
        assert_eq!(app.reel.viewport().width, 40.0);
        app.start();
        app.handle_action(crate::input::Action::JumpToTop);

        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| MasonryWidget::render(frame, frame.area(), &app, &Theme::default()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("R0"));
    }

    #[test]
    fn test_hidden_until_prepared() {
        let items = vec![ReelItem::new(80.0, "Hidden")];
        let mut app = App::with_clock(&AppConfig::default(), items, ManualClock::new());
        app.set_list_area(40, 20);

        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| MasonryWidget::render(frame, frame.area(), &app, &Theme::default()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(!text.contains("Hidden"));
    }
}
