use std::io::{self, BufRead, Stdin, Stdout, Write};

use rand::rngs::SmallRng;

use crate::{
    common::{BoardError, PlayerError, ShotResult},
    coord::Coordinate,
    input::parse_target,
    ui,
};

use super::{Player, TurnView};

/// Human player reading targets from a line-based console.
///
/// Malformed lines are answered with a message and the prompt is repeated.
/// `quit`, `exit` or end of input leave the game.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_target(&mut self) -> Result<Coordinate, PlayerError> {
        loop {
            write!(self.output, "Enter target coordinates: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayerError::Quit);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                return Err(PlayerError::Quit);
            }

            match parse_target(line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, " {} ", e)?,
            }
        }
    }

    fn say(&mut self, message: std::fmt::Arguments<'_>) {
        // A broken console surfaces on the next prompt.
        let _ = self.output.write_fmt(message);
        let _ = self.output.write_all(b"\n");
    }
}

fn describe(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Hit => "Hit!",
        ShotResult::Miss => "Missed!",
        ShotResult::Sunk => "Sunk!",
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        "Player"
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        view: TurnView<'_>,
    ) -> Result<Coordinate, PlayerError> {
        writeln!(self.output, "{}", "*".repeat(78))?;
        write!(self.output, "{}", ui::render_view(view.own, view.opponent))?;
        writeln!(self.output, "{}", "*".repeat(78))?;
        writeln!(self.output, "Your move!")?;
        self.read_target()
    }

    fn handle_shot_result(&mut self, _target: Coordinate, result: ShotResult) {
        self.say(format_args!("{}", describe(result)));
    }

    fn handle_rejected_shot(&mut self, _target: Coordinate, error: &BoardError) {
        self.say(format_args!("Input error: {}", error));
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, result: ShotResult) {
        self.say(format_args!(
            "Computer fires at {}: {}",
            target,
            describe(result)
        ));
    }

    fn rejection_limit(&self, _configured: usize) -> Option<usize> {
        None
    }
}
