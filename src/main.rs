//! Console microwave oven.
//!
//! Reads key presses line by line from stdin and feeds them to the oven
//! as button and door events.  Status lines go to stdout; logs go to
//! stderr (`RUST_LOG`, default `info`).
//!
//! Usage: `microwave [config.json]`

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use env_logger::Env;
use log::{error, info};

use microwave::adapters::console::ConsoleOutput;
use microwave::app::ports::StatusSink;
use microwave::app::service::Oven;
use microwave::config::OvenConfig;
use microwave::events::Event;

const KEY_GUIDE: &str = "Microwave key guide:
O - Open door
C - Close door
P - Power button press
T - Time button press
S - Start/cancel button press
H - Key guide
Q/Esc - Close program";

const ESC: char = '\u{1b}';

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => OvenConfig::load(&path)?,
        None => OvenConfig::default(),
    };
    info!("microwave starting: {:?}", config);

    let out = ConsoleOutput::new();
    let oven = Oven::new(config, out)?;
    // Console feedback shares the status stream.
    let say = |text: &str| out.output_line(text);

    let power = oven.power_button();
    let time = oven.time_button();
    let start_cancel = oven.start_cancel_button();
    let mut door = oven.door();
    let shutdown = oven.shutdown_handle();

    let handle = oven.spawn().context("spawning oven thread")?;

    say(KEY_GUIDE);
    'input: for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        for key in line.chars().filter(|c| !c.is_whitespace()) {
            match key.to_ascii_uppercase() {
                'O' => {
                    say("Opening door");
                    door.open();
                }
                'C' => {
                    say("Closing door");
                    door.close();
                }
                'P' => {
                    say("Power button pressed");
                    power.press();
                }
                'T' => {
                    say("Time button pressed");
                    time.press();
                }
                'S' => {
                    say("Start/cancel button pressed");
                    start_cancel.press();
                }
                'H' => say(KEY_GUIDE),
                'Q' | ESC => break 'input,
                _ => say("Invalid Input - Press H to open Key Guide"),
            }
        }
    }

    shutdown.post(Event::Shutdown);
    let oven = handle
        .join()
        .map_err(|_| anyhow::anyhow!("oven thread panicked"))?;
    info!("microwave stopped after {} events", oven.events_handled());
    Ok(())
}
