//! Hints demo: browse a hint table in the terminal.
//!
//! ```text
//! cargo run -- [path-or-url]
//! ```
//!
//! Defaults to `hintdata.csv` in the current directory. Set `RUST_LOG=debug`
//! to write load and toggle events to `hints.log`.

use bubbletea_hints::prelude::*;
use bubbletea_rs::{Cmd, Model, Msg, Program, WindowSizeMsg};
use lipgloss_extras::prelude::*;
use std::fs::File;

const LOG_FILE: &str = "hints.log";

struct App {
    hints: Hints,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut hints = Hints::new();
        if let Some(source) = std::env::args().nth(1) {
            hints = hints.with_source(source.as_str());
        }
        log::info!("loading hints from {}", hints.source());
        let cmd = hints.load_cmd();
        (Self { hints }, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            // Leave room for the header line.
            let inner = WindowSizeMsg {
                width: size.width,
                height: size.height.saturating_sub(2),
            };
            return self.hints.update(Box::new(inner) as Msg);
        }
        self.hints.update(msg)
    }

    fn view(&self) -> String {
        let header = Style::new()
            .bold(true)
            .foreground(Color::from("#7D56F4"))
            .render(&format!("Hints: {}", self.hints.source()));
        format!("{}\n\n{}", header, self.hints.view())
    }
}

fn init_logger() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"));
    // The terminal belongs to the UI, so log lines go to a file.
    if let Ok(file) = File::create(LOG_FILE) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
