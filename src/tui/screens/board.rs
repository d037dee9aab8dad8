//! Board screen: the script as a list of blocks.

use jiff::tz::TimeZone;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, ListState, Padding, Paragraph},
};

use crate::board::{Board, DraftField, Outcome};
use crate::locale::Locale;
use crate::model::{self, BlockId, BlockKind, Content};
use crate::timecode;

use super::KindPicker;

/// What the board screen is doing.
enum Mode {
    /// Moving the selection around.
    Browse,

    /// Choosing the kind of a new block.
    Picking(KindPicker),

    /// Carrying the grabbed block toward a drop target.
    Dragging { target: usize },

    /// Editing the selected block's draft.
    Editing(EditForm),
}

/// Form state for the block being edited.
struct EditForm {
    id: BlockId,
    fields: &'static [DraftField],
    focus: usize,

    /// Digits behind the timecode field, seeded from the draft on focus.
    timecode_digits: String,
}

impl EditForm {
    fn new(id: BlockId, kind: BlockKind) -> Self {
        let fields: &'static [DraftField] = match kind {
            BlockKind::Interview => &DraftField::INTERVIEW,
            _ => &[DraftField::Body],
        };
        Self {
            id,
            fields,
            focus: 0,
            timecode_digits: String::new(),
        }
    }

    fn field(&self) -> DraftField {
        self.fields[self.focus]
    }

    fn next_field(&mut self, board: &Board) {
        self.focus = (self.focus + 1) % self.fields.len();
        self.timecode_digits = if self.field() == DraftField::InterviewTimecode {
            timecode::typed_digits(&current_value(board, &self.id, self.field()))
        } else {
            String::new()
        };
    }
}

pub struct BoardScreen {
    board: Board,
    locale: Locale,
    selected: usize,
    mode: Mode,

    /// Why the last command did nothing, if it did nothing.
    status: Option<String>,
}

impl BoardScreen {
    pub fn new(board: Board, locale: Locale) -> Self {
        Self {
            board,
            locale,
            selected: 0,
            mode: Mode::Browse,
            status: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }

    pub fn is_picking(&self) -> bool {
        matches!(self.mode, Mode::Picking(_))
    }

    fn selected_id(&self) -> Option<BlockId> {
        self.board
            .list_blocks()
            .get(self.selected)
            .map(|b| b.id.clone())
    }

    fn note(&mut self, outcome: Outcome) {
        self.status = match outcome {
            Outcome::Applied => None,
            Outcome::Skipped(reason) => Some(reason.to_string()),
        };
    }

    // ── Navigation ──

    pub fn move_up(&mut self) {
        match &mut self.mode {
            Mode::Browse => self.selected = self.selected.saturating_sub(1),
            Mode::Picking(picker) => picker.move_up(),
            Mode::Dragging { target } => *target = target.saturating_sub(1),
            Mode::Editing(_) => {}
        }
    }

    pub fn move_down(&mut self) {
        let last = self.board.list_blocks().len().saturating_sub(1);
        match &mut self.mode {
            Mode::Browse => self.selected = (self.selected + 1).min(last),
            Mode::Picking(picker) => picker.move_down(),
            Mode::Dragging { target } => *target = (*target + 1).min(last),
            Mode::Editing(_) => {}
        }
    }

    // ── Commands ──

    pub fn open_picker(&mut self) {
        if matches!(self.mode, Mode::Browse) {
            self.mode = Mode::Picking(KindPicker::new());
        }
    }

    /// Adds a block of the picked kind and selects it.
    pub fn pick(&mut self) {
        if let Mode::Picking(picker) = &self.mode {
            let kind = picker.kind();
            self.board.add_block(kind);
            self.selected = self.board.list_blocks().len() - 1;
            self.mode = Mode::Browse;
            self.status = None;
        }
    }

    pub fn begin_edit(&mut self) {
        if !matches!(self.mode, Mode::Browse) {
            return;
        }
        let Some(block) = self.board.list_blocks().get(self.selected) else {
            return;
        };
        let form = EditForm::new(block.id.clone(), block.kind);
        let outcome = self.board.begin_edit(&form.id);
        if outcome.is_applied() {
            self.mode = Mode::Editing(form);
        }
        self.note(outcome);
    }

    pub fn delete_selected(&mut self) {
        if !matches!(self.mode, Mode::Browse) {
            return;
        }
        if let Some(id) = self.selected_id() {
            let outcome = self.board.delete_block(&id);
            self.note(outcome);
            let last = self.board.list_blocks().len().saturating_sub(1);
            self.selected = self.selected.min(last);
        }
    }

    /// Grabs the selected block, or drops the grabbed one at the target.
    pub fn toggle_grab(&mut self) {
        match self.mode {
            Mode::Browse if !self.board.list_blocks().is_empty() => {
                self.board.drag_start(self.selected);
                self.mode = Mode::Dragging {
                    target: self.selected,
                };
            }
            Mode::Dragging { target } => {
                let outcome = self.board.drop_at(target);
                if outcome.is_applied() {
                    self.selected = target;
                }
                self.note(outcome);
                self.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    /// Backs out of whatever is in progress.
    pub fn cancel(&mut self) {
        match std::mem::replace(&mut self.mode, Mode::Browse) {
            Mode::Browse | Mode::Picking(_) => {}
            Mode::Dragging { .. } => {
                // Dropping where it came from leaves the order unchanged.
                let _ = self.board.drop_at(self.selected);
            }
            Mode::Editing(form) => {
                let outcome = self.board.cancel_edit(&form.id);
                self.note(outcome);
            }
        }
    }

    pub fn save(&mut self) {
        if let Mode::Editing(form) = std::mem::replace(&mut self.mode, Mode::Browse) {
            let outcome = self.board.commit_edit(&form.id);
            self.note(outcome);
        }
    }

    // ── Text input ──

    pub fn on_char(&mut self, c: char) {
        let Mode::Editing(form) = &mut self.mode else {
            return;
        };
        let field = form.field();
        let value = if field == DraftField::InterviewTimecode {
            if !c.is_ascii_digit() || form.timecode_digits.len() >= timecode::DIGITS {
                return;
            }
            form.timecode_digits.push(c);
            form.timecode_digits.clone()
        } else {
            let mut value = current_value(&self.board, &form.id, field);
            value.push(c);
            value
        };
        let outcome = self.board.change_draft_field(&form.id, field, &value);
        self.note(outcome);
    }

    pub fn on_backspace(&mut self) {
        let Mode::Editing(form) = &mut self.mode else {
            return;
        };
        let field = form.field();
        let value = if field == DraftField::InterviewTimecode {
            form.timecode_digits.pop();
            form.timecode_digits.clone()
        } else {
            let mut value = current_value(&self.board, &form.id, field);
            value.pop();
            value
        };
        let outcome = self.board.change_draft_field(&form.id, field, &value);
        self.note(outcome);
    }

    /// Newline in multi-line fields, next field otherwise.
    pub fn on_enter(&mut self) {
        let Mode::Editing(form) = &self.mode else {
            return;
        };
        if form.field().is_multiline() {
            self.on_char('\n');
        } else {
            self.on_tab();
        }
    }

    pub fn on_tab(&mut self) {
        if let Mode::Editing(form) = &mut self.mode {
            form.next_field(&self.board);
        }
    }

    // ── Rendering ──

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // title
            Constraint::Min(0),    // blocks
            Constraint::Length(1), // status
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        // Title with the script's total reading time.
        let total = self.board.total_reading_time();
        let title = Paragraph::new(Line::from(vec![
            Span::styled("Scriptboard", highlight),
            Span::styled(
                format!(
                    "  {} {} · {}",
                    self.board.list_blocks().len(),
                    self.locale.blocks_unit(),
                    total.summary(self.locale)
                ),
                muted,
            ),
        ]))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        // Blocks.
        let items: Vec<ListItem> = self
            .board
            .list_blocks()
            .iter()
            .enumerate()
            .map(|(i, block)| ListItem::new(self.block_lines(i, block)))
            .collect();
        let focus = match self.mode {
            Mode::Dragging { target } => target,
            _ => self.selected,
        };
        let mut state = ListState::default().with_selected(Some(focus));
        let list = List::new(items).block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_stateful_widget(list, chunks[1], &mut state);

        if self.board.list_blocks().is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                format!("  {}", self.locale.empty_board_hint()),
                muted,
            )));
            frame.render_widget(empty, chunks[1]);
        }

        // Status line.
        if let Some(status) = &self.status {
            let status = Paragraph::new(Line::from(Span::styled(
                format!(" {status}"),
                Style::default().fg(Color::Yellow),
            )));
            frame.render_widget(status, chunks[2]);
        }

        // Help line.
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                help_text(&self.mode, self.locale),
                muted,
            ))),
            chunks[3],
        );

        if let Mode::Picking(picker) = &self.mode {
            let rows = u16::try_from(BlockKind::ALL.len()).unwrap_or(u16::MAX);
            let popup = centered(area, 30, rows.saturating_add(2));
            frame.render_widget(Clear, popup);
            picker.render(frame, popup, self.locale);
        }
    }

    fn block_lines(&self, index: usize, block: &model::Block) -> Vec<Line<'static>> {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let selected = index == self.selected;
        let style = if selected { highlight } else { normal };

        // Header: pointer, label, markers, last-edited stamp.
        let (pointer, marker) = match self.mode {
            Mode::Dragging { target } => {
                let preview = self.board.drag_over(target);
                match preview {
                    Some(p) if p.from == index => ("≡ ", "  [moving]"),
                    Some(p) if p.to == index && !p.is_noop() => ("→ ", ""),
                    _ => ("  ", ""),
                }
            }
            _ if selected => ("› ", ""),
            _ => ("  ", ""),
        };
        let mut header = vec![
            Span::styled(pointer, style),
            Span::styled(block.kind.label(self.locale), style),
            Span::styled(marker, muted),
        ];
        if self.board.is_editing(&block.id) {
            header.push(Span::styled("  [editing]", Style::default().fg(Color::Cyan)));
        }
        if let Some(at) = block.last_edited_at {
            let stamp = self
                .locale
                .edited_stamp(&at.to_zoned(TimeZone::system()));
            header.push(Span::styled(
                format!("  {} {stamp}", self.locale.last_edited_label()),
                muted,
            ));
        }

        let mut lines = vec![Line::from(header)];

        // Body: the draft while editing, committed content otherwise.
        let focused = match &self.mode {
            Mode::Editing(form) if form.id == block.id => Some(form.field()),
            _ => None,
        };
        let content = self.board.draft(&block.id).unwrap_or(&block.content);
        lines.extend(content_lines(content, focused, self.locale));

        let has_content = match content {
            Content::Text(text) => !text.is_empty(),
            Content::Interview(_) => true,
        };
        if has_content && let Some(time) = self.board.reading_time(&block.id) {
            lines.push(Line::from(Span::styled(
                format!(
                    "    {}: {}",
                    self.locale.reading_time_label(),
                    time.summary(self.locale)
                ),
                muted,
            )));
        }

        lines.push(Line::default());
        lines
    }
}

/// The draft's current value of `field`, or empty if there is none.
fn current_value(board: &Board, id: &BlockId, field: DraftField) -> String {
    board
        .session(id)
        .and_then(|s| s.field(field))
        .unwrap_or_default()
        .to_string()
}

fn field_label(field: DraftField, locale: Locale) -> &'static str {
    match (locale, field) {
        (_, DraftField::Body) => "",
        (Locale::En, DraftField::FullName) => "Full name",
        (Locale::En, DraftField::Position) => "Position",
        (Locale::En, DraftField::InterviewTimecode) => "Timecode",
        (Locale::En, DraftField::AdditionalInfo) => "Additional info",
        (Locale::Th, DraftField::FullName) => "ชื่อ-นามสกุล",
        (Locale::Th, DraftField::Position) => "ตำแหน่ง",
        (Locale::Th, DraftField::InterviewTimecode) => "Timecode",
        (Locale::Th, DraftField::AdditionalInfo) => "ข้อมูลเพิ่มเติม",
    }
}

fn help_text(mode: &Mode, locale: Locale) -> &'static str {
    match (locale, mode) {
        (Locale::En, Mode::Browse) => " ↑↓ select  a add  e edit  d delete  space grab  q quit",
        (Locale::En, Mode::Picking(_)) => " ↑↓ choose  ⏎ add  esc back",
        (Locale::En, Mode::Dragging { .. }) => " ↑↓ move  space drop  esc cancel",
        (Locale::En, Mode::Editing(_)) => " type to edit  tab next field  ctrl-s save  esc discard",
        (Locale::Th, Mode::Browse) => " ↑↓ เลือก  a เพิ่ม  e แก้ไข  d ลบ  space จับ  q ออก",
        (Locale::Th, Mode::Picking(_)) => " ↑↓ เลือกประเภท  ⏎ เพิ่ม  esc กลับ",
        (Locale::Th, Mode::Dragging { .. }) => " ↑↓ ย้าย  space วาง  esc ยกเลิก",
        (Locale::Th, Mode::Editing(_)) => " พิมพ์เพื่อแก้ไข  tab ช่องถัดไป  ctrl-s บันทึก  esc ยกเลิก",
    }
}

fn placeholder(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Press e to add content",
        Locale::Th => "กด e เพื่อเพิ่มเนื้อหา",
    }
}

fn content_lines(
    content: &Content,
    focused: Option<DraftField>,
    locale: Locale,
) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::DarkGray);
    let text_style = Style::default().fg(Color::Gray);
    let focus_style = Style::default().fg(Color::White);

    let field_lines = |field: DraftField, value: &str| -> Vec<Line<'static>> {
        let is_focused = focused == Some(field);
        let style = if is_focused { focus_style } else { text_style };
        let label = field_label(field, locale);
        let mut value = value.to_string();
        if is_focused {
            value.push('▏');
        }
        value
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                let prefix = if i == 0 && !label.is_empty() {
                    format!("    {label}: ")
                } else {
                    "    ".to_string()
                };
                Line::from(vec![
                    Span::styled(prefix, muted),
                    Span::styled(line.to_string(), style),
                ])
            })
            .collect()
    };

    match content {
        Content::Text(text) if text.is_empty() && focused.is_none() => {
            vec![Line::from(Span::styled(
                format!("    {}", placeholder(locale)),
                muted,
            ))]
        }
        Content::Text(text) => field_lines(DraftField::Body, text.as_str()),
        Content::Interview(interview) => {
            let blank = interview.full_name.is_empty()
                && interview.position.is_empty()
                && interview.additional_info.is_empty();
            if blank && focused.is_none() {
                let mut lines = field_lines(
                    DraftField::InterviewTimecode,
                    interview.interview_timecode.as_str(),
                );
                lines.push(Line::from(Span::styled(
                    format!("    {}", placeholder(locale)),
                    muted,
                )));
                return lines;
            }
            let mut lines = Vec::new();
            for field in DraftField::INTERVIEW {
                let value = match field {
                    DraftField::FullName => interview.full_name.as_str(),
                    DraftField::Position => interview.position.as_str(),
                    DraftField::InterviewTimecode => interview.interview_timecode.as_str(),
                    DraftField::AdditionalInfo | DraftField::Body => {
                        interview.additional_info.as_str()
                    }
                };
                lines.extend(field_lines(field, value));
            }
            lines
        }
    }
}

/// A `width` × `height` rectangle centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
