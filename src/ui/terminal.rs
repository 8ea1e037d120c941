use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    execute,
    terminal::{self as term, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode on the alternate screen. A panic while the table is up
/// leaves the screen first so the message is readable.
pub fn setup_terminal() -> io::Result<Tui> {
    term::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave_screen();
        previous(info);
    }));

    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    leave_screen()?;
    terminal.show_cursor()
}

fn leave_screen() -> io::Result<()> {
    term::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}
