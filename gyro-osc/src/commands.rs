// Terminal front end of the settings surface, one command per line.

use log::info;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use gyro_source::GyroPort;

use crate::settings::SettingsSurface;

pub const HELP: &str = "commands: host <text> | port <text> | apply | interval <secs> | show | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Host(String),
    Port(String),
    Apply,
    Interval(f64),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        match name.to_lowercase().as_str() {
            "host" => Ok(Command::Host(rest.to_string())),
            "port" => Ok(Command::Port(rest.to_string())),
            "apply" => Ok(Command::Apply),
            "interval" => rest
                .parse::<f64>()
                .map(Command::Interval)
                .map_err(|_| format!("Interval must be a number of seconds, got {:?}", rest)),
            "show" | "" => Ok(Command::Show),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command {:?}", other)),
        }
    }
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

/// How the command loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEnd {
    Quit,
    Eof,
}

pub fn execute<C: GyroPort>(surface: &mut SettingsSurface<C>, command: Command) -> Outcome {
    match command {
        Command::Host(host) => {
            surface.set_host_text(&host);
            Outcome::Reply(format!("host set to {:?}, type apply to use it", host))
        }
        Command::Port(port) => {
            surface.set_port_text(&port);
            Outcome::Reply(format!("port set to {:?}, type apply to use it", port))
        }
        Command::Apply => match surface.apply_settings() {
            Ok(endpoint) => Outcome::Reply(format!("sending to {}", endpoint)),
            Err(e) => Outcome::Reply(format!("not applied: {}", e)),
        },
        Command::Interval(secs) => match surface.set_interval(secs) {
            Ok(interval) => Outcome::Reply(format!("interval {}", interval)),
            Err(e) => Outcome::Reply(format!("interval unchanged: {}", e)),
        },
        Command::Show => Outcome::Reply(show(surface)),
        Command::Help => Outcome::Reply(HELP.to_string()),
        Command::Quit => Outcome::Quit,
    }
}

fn show<C: GyroPort>(surface: &SettingsSurface<C>) -> String {
    let form = surface.form();
    format!(
        "endpoint {} (form {}:{}), interval {}, gyro [{}]",
        surface.endpoint(),
        form.host_text,
        form.port_text,
        surface.interval(),
        surface.latest_sample_text()
    )
}

/// Reads commands from `reader` until `quit` or end of input, writing replies to `writer`.
pub async fn command_loop<C, R, W>(
    surface: &mut SettingsSurface<C>,
    reader: R,
    mut writer: W,
) -> std::io::Result<LoopEnd>
where
    C: GyroPort,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let reply = match line.parse::<Command>() {
            Ok(command) => match execute(surface, command) {
                Outcome::Reply(reply) => reply,
                Outcome::Quit => {
                    info!("Quit requested");
                    return Ok(LoopEnd::Quit);
                }
            },
            Err(e) => format!("{}\n{}", e, HELP),
        };
        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(LoopEnd::Eof)
}
