//! Read/eval/print loop.
//!
//! Generic over the reader and writer so tests can drive it with in-memory
//! buffers; `run` wires it to stdin/stdout.

use std::io::{BufRead, Write};

use tracing::info;

use crate::commands::{parse_command, HELP};
use crate::error::ShellResult;
use crate::session::{Reply, Session};

const WELCOME: &str = "Welcome to the interactive session\n✨ Your basket awaits your orders ✨";

/// Runs the loop until `exit` or end of input.
///
/// Returns the number of commands read.
pub fn run_repl<R, W>(
    session: &mut Session,
    mut input: R,
    output: &mut W,
    prompt: &str,
) -> ShellResult<usize>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;
    writeln!(output, "{}", HELP)?;

    let mut commands = 0;
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!(commands, "end of input");
            break;
        }
        commands += 1;

        match session.execute(parse_command(&line))? {
            Reply::Text(text) => writeln!(output, "{}", text)?,
            Reply::Silent => {}
            Reply::Exit => {
                info!(commands, "session closed by user");
                break;
            }
        }
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use std::io::Cursor;

    fn drive(script: &str, config: &ShellConfig) -> (usize, String) {
        let mut session = Session::from_config(config);
        let mut output = Vec::new();
        let count = run_repl(
            &mut session,
            Cursor::new(script.as_bytes()),
            &mut output,
            &config.prompt,
        )
        .unwrap();
        (count, String::from_utf8(output).unwrap())
    }

    /// Output after the welcome banner and help text.
    fn transcript(output: &str) -> &str {
        let banner = format!("{}\n{}\n", WELCOME, HELP);
        output.strip_prefix(banner.as_str()).unwrap()
    }

    #[test]
    fn test_scripted_session() {
        let script = "add R01\nadd R01\nadd R01\ntotal\nexit\n";
        let (count, output) = drive(script, &ShellConfig::default());
        assert_eq!(count, 5);
        assert_eq!(transcript(&output), "> > > > 82.38\n> ");
    }

    #[test]
    fn test_stops_at_exit() {
        let script = "add B01\nexit\nadd B01\ntotal\n";
        let (count, output) = drive(script, &ShellConfig::default());
        assert_eq!(count, 2);
        assert!(!output.contains("7.95"));
    }

    #[test]
    fn test_end_of_input_without_exit() {
        let (count, output) = drive("add G01\ntotal", &ShellConfig::default());
        assert_eq!(count, 2);
        assert_eq!(transcript(&output), "> > 24.95\n> ");
    }

    #[test]
    fn test_error_does_not_end_session() {
        let config = ShellConfig {
            prompt: String::new(),
            ..ShellConfig::default()
        };
        let (_, output) = drive("add nope\nadd B01\ntotal\n", &config);
        assert_eq!(
            transcript(&output),
            "Encountered error while adding widget: Catalog does not contain widget with code nope\n7.95\n"
        );
    }

    #[test]
    fn test_delivery_from_config() {
        let config = ShellConfig {
            delivery_enabled: true,
            prompt: String::new(),
            ..ShellConfig::default()
        };
        let (_, output) = drive("add B01\nadd G01\ntotal\n", &config);
        assert_eq!(transcript(&output), "37.85\n");
    }
}
