//! Application loop and key routing.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::board::Board;
use crate::locale::Locale;

use super::screens::BoardScreen;

/// Runs the board until the user quits.
pub fn run(locale: Locale) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, BoardScreen::new(Board::new(), locale));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut screen: BoardScreen) -> io::Result<()> {
    tracing::info!("board session started");

    loop {
        terminal.draw(|frame| screen.render(frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(&mut screen, key) == Flow::Quit {
                tracing::info!("board session ended");
                return Ok(());
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_key(screen: &mut BoardScreen, key: KeyEvent) -> Flow {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if screen.is_editing() {
        match key.code {
            KeyCode::Char('s') if ctrl => screen.save(),
            KeyCode::Esc => screen.cancel(),
            KeyCode::Tab => screen.on_tab(),
            KeyCode::Enter => screen.on_enter(),
            KeyCode::Backspace => screen.on_backspace(),
            KeyCode::Char(c) if !ctrl => screen.on_char(c),
            _ => {}
        }
        return Flow::Continue;
    }

    if screen.is_picking() {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => screen.move_up(),
            KeyCode::Down | KeyCode::Char('j') => screen.move_down(),
            KeyCode::Enter => screen.pick(),
            KeyCode::Esc => screen.cancel(),
            _ => {}
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return Flow::Quit,
        KeyCode::Char('c') if ctrl => return Flow::Quit,
        KeyCode::Up | KeyCode::Char('k') => screen.move_up(),
        KeyCode::Down | KeyCode::Char('j') => screen.move_down(),
        KeyCode::Char('a') => screen.open_picker(),
        KeyCode::Char('e') | KeyCode::Enter => screen.begin_edit(),
        KeyCode::Char('d') => screen.delete_selected(),
        KeyCode::Char(' ') => screen.toggle_grab(),
        KeyCode::Esc => screen.cancel(),
        _ => {}
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> BoardScreen {
        BoardScreen::new(Board::new(), Locale::En)
    }

    #[test]
    fn q_quits_from_browse() {
        let mut screen = screen();
        assert_eq!(handle_key(&mut screen, press(KeyCode::Char('q'))), Flow::Quit);
    }

    #[test]
    fn q_is_text_while_editing() {
        let mut screen = screen();
        handle_key(&mut screen, press(KeyCode::Char('a')));
        handle_key(&mut screen, press(KeyCode::Enter));
        handle_key(&mut screen, press(KeyCode::Char('e')));
        assert!(screen.is_editing());

        assert_eq!(
            handle_key(&mut screen, press(KeyCode::Char('q'))),
            Flow::Continue
        );

        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        handle_key(&mut screen, save);
        assert!(!screen.is_editing());
    }

    #[test]
    fn esc_closes_picker() {
        let mut screen = screen();
        handle_key(&mut screen, press(KeyCode::Char('a')));
        assert!(screen.is_picking());

        handle_key(&mut screen, press(KeyCode::Esc));
        assert!(!screen.is_picking());
    }
}
