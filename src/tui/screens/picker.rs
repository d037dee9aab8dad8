//! Kind picker: choose what kind of block to add.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::locale::Locale;
use crate::model::BlockKind;

#[derive(Default)]
pub struct KindPicker {
    selected: usize,
}

impl KindPicker {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < BlockKind::ALL.len() {
            self.selected += 1;
        }
    }

    /// The highlighted kind.
    pub fn kind(&self) -> BlockKind {
        BlockKind::ALL[self.selected]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, locale: Locale) {
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let items: Vec<ListItem> = BlockKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let style = if i == self.selected {
                    highlight
                } else {
                    normal
                };
                let pointer = if i == self.selected { "› " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(kind.label(locale), style),
                ]))
            })
            .collect();

        let title = match locale {
            Locale::En => " Add block ",
            Locale::Th => " เพิ่มกล่องข้อความ ",
        };
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(list, area);
    }
}
