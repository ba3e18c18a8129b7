// Primer key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::catalog_view::Direction;

/// What currently receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Catalog,
    Modal,
    Pipeline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move(Direction),
    /// Open the modal for the selected card
    Select,
    ShowPipeline,
    StartLearning,
    CloseModal,
    TogglePlay,
    Next,
    Prev,
    Reset,
    Jump(usize),
    Back,
}

/// Map a key event to a command. Only key presses count.
pub fn command_for(focus: Focus, key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match focus {
        Focus::Catalog => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Command::Move(Direction::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::Move(Direction::Down)),
            KeyCode::Left | KeyCode::Char('h') => Some(Command::Move(Direction::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(Command::Move(Direction::Right)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Select),
            KeyCode::Char('p') => Some(Command::ShowPipeline),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        },
        Focus::Modal => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::StartLearning),
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::CloseModal),
            _ => None,
        },
        Focus::Pipeline => match key.code {
            KeyCode::Char(' ') => Some(Command::TogglePlay),
            KeyCode::Char('n') | KeyCode::Right => Some(Command::Next),
            KeyCode::Char('b') | KeyCode::Left => Some(Command::Prev),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char(c @ '1'..='7') => {
                Some(Command::Jump(c as usize - '1' as usize))
            }
            KeyCode::Esc | KeyCode::Backspace => Some(Command::Back),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        },
    }
}

/// Key hints for the footer of each view
pub fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Catalog => "←↑↓→/hjkl move · Enter start · p pipeline · q quit",
        Focus::Modal => "Enter start learning · Esc close",
        Focus::Pipeline => {
            "space play/pause · n/→ next · b/← back · r reset · 1-7 jump · Esc catalog · q quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_catalog_keys() {
        assert_eq!(
            command_for(Focus::Catalog, press(KeyCode::Char('j'))),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            command_for(Focus::Catalog, press(KeyCode::Left)),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            command_for(Focus::Catalog, press(KeyCode::Enter)),
            Some(Command::Select)
        );
        assert_eq!(
            command_for(Focus::Catalog, press(KeyCode::Char('p'))),
            Some(Command::ShowPipeline)
        );
        assert_eq!(command_for(Focus::Catalog, press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_modal_keys() {
        assert_eq!(
            command_for(Focus::Modal, press(KeyCode::Char(' '))),
            Some(Command::StartLearning)
        );
        assert_eq!(
            command_for(Focus::Modal, press(KeyCode::Char('q'))),
            Some(Command::CloseModal)
        );
        // moving is not possible behind the modal
        assert_eq!(command_for(Focus::Modal, press(KeyCode::Down)), None);
    }

    #[test]
    fn test_pipeline_keys() {
        assert_eq!(
            command_for(Focus::Pipeline, press(KeyCode::Char('1'))),
            Some(Command::Jump(0))
        );
        assert_eq!(
            command_for(Focus::Pipeline, press(KeyCode::Char('7'))),
            Some(Command::Jump(6))
        );
        assert_eq!(command_for(Focus::Pipeline, press(KeyCode::Char('8'))), None);
        assert_eq!(
            command_for(Focus::Pipeline, press(KeyCode::Backspace)),
            Some(Command::Back)
        );
        assert_eq!(
            command_for(Focus::Pipeline, press(KeyCode::Right)),
            Some(Command::Next)
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for focus in [Focus::Catalog, Focus::Modal, Focus::Pipeline] {
            assert_eq!(command_for(focus, key), Some(Command::Quit));
        }
    }

    #[test]
    fn test_release_events_are_ignored() {
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for(Focus::Catalog, key), None);
    }
}
