pub mod renderer;

use std::io::{Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    terminal::{self, ClearType},
};

use crate::{
    session::{Command, Session},
    solvers::Solver,
};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Command(Command),
    Quit,
}

/// Map a key to its action. Letter keys are case-insensitive.
pub fn key_to_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'n' => Some(Action::Command(Command::NewMaze)),
            's' => Some(Action::Command(Command::Solve)),
            'd' => Some(Action::Command(Command::SelectSolver(Solver::Dfs))),
            'b' => Some(Action::Command(Command::SelectSolver(Solver::Bfs))),
            'q' => Some(Action::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Terminal front-end: reads keys, dispatches them to the session and redraws.
pub struct App {
    session: Session,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Apply one key press. Returns `false` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match key_to_action(code) {
            Some(Action::Quit) => {
                tracing::debug!("[app loop] Quit key pressed");
                false
            }
            Some(Action::Command(command)) => {
                self.session.dispatch(command);
                true
            }
            None => true,
        }
    }

    /// Main application loop. Every key runs its command to completion before the next redraw.
    pub fn run(&mut self, stdout: &mut Stdout) -> std::io::Result<()> {
        tracing::info!("[app loop] Started main app loop");
        renderer::draw(stdout, &self.session, terminal::size()?)?;

        loop {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if !self.handle_key(key_event.code) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => continue, // Ignore other events
            }
            renderer::draw(stdout, &self.session, terminal::size()?)?;
        }

        tracing::info!("[app loop] Exiting");
        Ok(())
    }
}
