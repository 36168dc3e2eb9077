//! Headless `--headless` mode: a blocking loop that reads JSON commands from
//! stdin and writes JSON responses to stdout.
//!
//! No window or UI plugins are added. Logging goes to stderr so stdout
//! carries only the protocol. See [`heat_index::protocol`] for the schema.

use std::io::{BufRead, Write};

use bevy::log::LogPlugin;
use bevy::prelude::*;
use heat_index::protocol::{
    make_response, parse_command, process_command, to_line, ResponsePayload, PROTOCOL_VERSION,
};
use heat_index::CalculatorConfig;
use ui::CalculatorSettings;

use crate::cli::CliArgs;
use crate::startup::insert_calculator_resources;

pub fn run_headless(args: &CliArgs) {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));
    insert_calculator_resources(&mut app, args);

    let config = app.world().resource::<CalculatorSettings>().0.clone();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    info!("feels-like headless mode v{PROTOCOL_VERSION} ready, waiting for commands on stdin");
    if write_line(&mut stdout, &to_line(&make_response(ResponsePayload::Ready))).is_err() {
        return;
    }

    let served = serve(stdin.lock(), &mut stdout, &config);
    info!("feels-like headless mode shutting down after {served} commands");
}

/// Answer each non-empty input line until `quit`, end of input or an I/O error.
/// Returns the number of commands answered.
fn serve(input: impl BufRead, output: &mut impl Write, config: &CalculatorConfig) -> usize {
    let mut served = 0;
    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match parse_command(&line) {
            Ok(cmd) => process_command(cmd, config),
            Err(resp) => resp,
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        if let Err(e) = write_line(output, &to_line(&response)) {
            warn!("stdout write error: {e}");
            break;
        }
        served += 1;

        if is_goodbye {
            break;
        }
    }
    served
}

fn write_line(output: &mut impl Write, line: &str) -> std::io::Result<()> {
    writeln!(output, "{line}")?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> (usize, Vec<serde_json::Value>) {
        let mut out = Vec::new();
        let served = serve(input.as_bytes(), &mut out, &CalculatorConfig::default());
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (served, lines)
    }

    #[test]
    fn test_session_until_quit() {
        let (served, lines) = session(
            "{\"cmd\":\"assess\",\"temperature_c\":32,\"humidity\":70}\n\
             \n\
             {\"cmd\":\"quit\"}\n\
             {\"cmd\":\"config\"}\n",
        );
        assert_eq!(served, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["display"], "40.4°C");
        assert_eq!(lines[1]["type"], "goodbye");
    }

    #[test]
    fn test_bad_line_does_not_end_session() {
        let (served, lines) = session("garbage\n{\"cmd\":\"curves\"}\n");
        assert_eq!(served, 2);
        assert_eq!(lines[0]["type"], "error");
        assert_eq!(lines[1]["type"], "curves");
    }

    #[test]
    fn test_end_of_input_stops() {
        let (served, lines) = session("");
        assert_eq!(served, 0);
        assert!(lines.is_empty());
    }
}
