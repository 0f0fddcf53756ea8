use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Calendar",
        &[
            ("h/l \u{2190}/\u{2192}", "Previous/next day"),
            ("j/k \u{2193}/\u{2191}", "Next/previous week"),
            ("[/] PgUp/PgDn", "Previous/next month"),
            ("t", "Jump to today"),
            ("J/K", "Scroll notes"),
            ("Enter/Space", "Select day"),
            ("Tab/i/a", "Write a note"),
        ],
    ),
    (
        "Note input",
        &[
            ("Enter", "Add note to selected day"),
            ("\u{2193}/\u{2191}", "Scroll notes"),
            ("Esc/Tab", "Back to calendar"),
        ],
    ),
    (
        "Mouse",
        &[
            ("Click day", "Select day"),
            ("Click Add", "Add note"),
            ("Wheel", "Change month / scroll notes"),
        ],
    ),
    ("", &[("?", "Toggle this help"), ("q/Ctrl-C", "Quit")]),
];

pub struct Help;

impl Help {
    pub fn render(frame: &mut Frame, area: Rect) {
        let theme = theme::current();

        let popup_w = area.width.clamp(30, 52).min(area.width);
        let popup_h = area.height.clamp(12, 22).min(area.height);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keybindings ")
            .title_style(theme.accent.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(theme.accent);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let key_style = theme.accent.add_modifier(Modifier::BOLD);
        let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let mut lines = Vec::new();
        for (section, bindings) in BINDINGS {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            if !section.is_empty() {
                lines.push(Line::from(Span::styled(*section, section_style)));
            }
            for (keys, desc) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<15}", keys), key_style),
                    Span::raw(*desc),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
