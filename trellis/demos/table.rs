//! Table widget demo.
//!
//! Arrow keys move the cursor, Space toggles selection, Ctrl+A selects
//! all, Esc clears. Click a header to sort, click the header checkbox to
//! flip all-selected. Press `q` to quit. Events are logged to
//! `table_demo.log`.

use std::fs::File;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use simplelog::{Config, LevelFilter, WriteLogger};
use trellis::table::render;
use trellis::{CellValue, Column, SelectionMode, Table, TableEvent, TableRow};

#[derive(Clone, Debug)]
struct User {
    id: u32,
    name: String,
    email: String,
    department: String,
    age: i64,
}

impl TableRow for User {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn value(&self, column_id: &str) -> CellValue {
        match column_id {
            "id" => self.id.into(),
            "name" => CellValue::text(&self.name),
            "email" => CellValue::text(&self.email),
            "department" => CellValue::text(&self.department),
            "age" => self.age.into(),
            _ => CellValue::Empty,
        }
    }
}

fn sample_users() -> Vec<User> {
    let first_names = ["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace"];
    let last_names = ["Smith", "Johnson", "Williams", "Brown", "Jones"];
    let departments = ["Engineering", "Sales", "Marketing", "HR", "Finance"];

    (1..=30)
        .map(|i| {
            let first = first_names[i as usize % first_names.len()];
            let last = last_names[i as usize % last_names.len()];
            User {
                id: i,
                name: format!("{} {}", first, last),
                email: format!(
                    "{}.{}@example.com",
                    first.to_lowercase(),
                    last.to_lowercase()
                ),
                department: departments[i as usize % departments.len()].to_string(),
                age: 22 + (i as i64 * 7) % 40,
            }
        })
        .collect()
}

fn main() -> Result<()> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("table_demo.log")?,
    )?;

    let columns = vec![
        Column::new("id", "ID").fixed(6).sortable(),
        Column::new("name", "Name").fixed(20).sortable(),
        Column::new("email", "Email").fixed(30),
        Column::new("department", "Department").fixed(14).sortable(),
        Column::new("age", "Age").fixed(6).sortable(),
    ];
    let table = Table::with_rows(columns, sample_users())
        .with_selection_mode(SelectionMode::Multiple);

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut status = String::from("ready");
    let result = run(&mut terminal, &table, &mut status);

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    table: &Table<User>,
    status: &mut String,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let [table_area, status_area] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
                    .areas(frame.area());
            render::render(frame, table, table_area);
            frame.render_widget(Paragraph::new(status.as_str()), status_area);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.code == KeyCode::Char('q') {
                    return Ok(());
                }
                table.on_key(&key);
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    table.on_click(mouse.column, mouse.row);
                }
            }
            _ => {}
        }

        for event in table.take_events() {
            info!("{:?}", event);
            *status = match event {
                TableEvent::Sort { column, direction } => {
                    format!("sorted by {} ({:?})", column, direction)
                }
                TableEvent::SelectionChange { rows } => {
                    format!("{} selected", rows.len())
                }
                TableEvent::Activate { row } => format!("activated {}", row.name),
                TableEvent::CursorMove { index } => format!("cursor at {}", index),
            };
        }
    }
}
