use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::scroll::{Clock, Mode};
use crate::theme::Theme;

pub struct StatusBarWidget;

impl StatusBarWidget {
    /// Left-hand status text
    pub fn status_text<C: Clock>(app: &App<C>) -> String {
        if let Some(msg) = &app.status_message {
            return format!(" {}", msg);
        }

        let reel = &app.reel;
        let offsets = reel.offsets();
        let mode_str = match reel.mode() {
            Mode::Reel => "REEL",
            Mode::Unified => "UNIFIED",
        };
        let countdown = reel
            .countdown_remaining()
            .map(|left| format!(" | {:.1}s", left.as_secs_f64()))
            .unwrap_or_default();

        format!(
            " {} | L {:.0} R {:.0} skew {:.0} | scroll {:.0}/{:.0} | cells {}{}",
            mode_str,
            offsets.left,
            offsets.right,
            offsets.skew(),
            reel.scroll_position(),
            reel.max_offset(),
            reel.cell_count(),
            countdown
        )
    }

    pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>, theme: &Theme) {
        let status_text = Self::status_text(app);
        let help_hint = " q:quit j/k:scroll space:touch s:stop r:resume ";
        let padding_len = padding_len(area.width, &status_text, help_hint);

        let bar = Style::default().bg(theme.status_bg);
        let line = Line::from(vec![
            Span::styled(status_text, bar.fg(theme.status_fg)),
            Span::styled(" ".repeat(padding_len), bar),
            Span::styled(help_hint, bar.fg(theme.hint)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Blank columns between the status text and the hint
fn padding_len(width: u16, status_text: &str, help_hint: &str) -> usize {
    (width as usize).saturating_sub(status_text.width() + help_hint.width())
}
