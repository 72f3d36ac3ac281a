//! Keymap help bar UI component.

use crate::app::View;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, view: View, colors: &ThemeColors) {
    let keymap_text = if view == View::Animation {
        "q:quit | Tab/1-6:view | space:pause | ./→:step | r:restart | T:theme | ?:help"
    } else {
        "q:quit | Tab/Shift-Tab:view | 1-6:jump | T:theme | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.green).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
