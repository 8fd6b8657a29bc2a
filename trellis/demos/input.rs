//! Input widget demo.
//!
//! Tab switches between the two fields, Ctrl+R toggles password
//! visibility, Ctrl+U clears the focused field. Press Esc to quit.
//! Events are logged to `input_demo.log`.

use std::fs::File;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use simplelog::{Config, LevelFilter, WriteLogger};
use trellis::input::render;
use trellis::{Input, InputEvent};

fn main() -> Result<()> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("input_demo.log")?,
    )?;

    let email = Input::new()
        .label("Email")
        .placeholder("you@example.com")
        .helper("We never share your address");
    let password = Input::new()
        .label("Password")
        .placeholder("at least 8 characters")
        .masked();

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &email, &password);

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    email: &Input,
    password: &Input,
) -> Result<()> {
    let mut focus = 0usize;
    let mut status = String::from("ready");

    loop {
        terminal.draw(|frame| {
            let [email_area, password_area, status_area] = Layout::vertical([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .areas(frame.area());
            render::render(frame, email, email_area, focus == 0);
            render::render(frame, password, password_area, focus == 1);
            frame.render_widget(Paragraph::new(status.as_str()), status_area);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            let focused = if focus == 0 { email } else { password };
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Tab => focus = (focus + 1) % 2,
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    focused.toggle_reveal();
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    focused.clear();
                }
                _ => {
                    focused.on_key(&key);
                }
            }

            // Toy validation to exercise the error display.
            if focus == 0 {
                let value = email.value();
                if !value.is_empty() && !value.contains('@') {
                    email.set_error("Expected an email address");
                }
            }

            for event in focused.take_events() {
                info!("{:?}", event);
                status = match event {
                    InputEvent::Changed(value) => format!("changed: {:?}", value),
                    InputEvent::Submitted(value) => format!("submitted: {:?}", value),
                };
            }
        }
    }
}
