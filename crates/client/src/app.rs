//! Interactive loop: read a command, apply it to the session, redraw.
use std::io::{BufRead, Write};

use anyhow::Result;
use runtime::{ParticipantId, Session};

use crate::input::{Command, HELP};
use crate::render::{ViewOptions, render};

pub struct App {
    session: Session,
    participants: Vec<ParticipantId>,
    active: usize,
    view: ViewOptions,
}

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(Option<String>),
    Quit,
}

impl App {
    /// Adds `players` participants to `session`. At least one is always added.
    pub fn new(mut session: Session, players: u32, view: ViewOptions) -> Self {
        let participants = (1..=players.max(1))
            .map(|n| session.add_participant(format!("player {n}")))
            .collect();
        Self {
            session,
            participants,
            active: 0,
            view,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn active(&self) -> ParticipantId {
        self.participants[self.active]
    }

    /// Applies one command. Refused moves produce a message, not an error.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        let id = self.active();
        let message = match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Redraw => None,
            Command::Help => Some(HELP.to_string()),
            Command::Move(direction) => (!self.session.move_participant(id, direction)?)
                .then(|| format!("cannot move {direction}")),
            Command::Forward => {
                (!self.session.advance(id)?).then(|| "the way ahead is blocked".to_string())
            }
            Command::Turn(turn) => {
                let facing = self.session.turn(id, turn)?;
                Some(format!("now facing {facing}"))
            }
            Command::ToggleMap => {
                let show = !self.session.show_full_map();
                self.session.set_show_full_map(show);
                None
            }
            Command::Switch(index) if index < self.participants.len() => {
                self.active = index;
                Some(format!("switched to participant {}", index + 1))
            }
            Command::Switch(index) => Some(format!(
                "no participant {} (have {})",
                index + 1,
                self.participants.len()
            )),
        };
        Ok(Outcome::Continue(message))
    }

    pub fn draw(&self, out: &mut impl Write) -> Result<()> {
        out.write_all(render(&self.session, self.active(), self.view)?.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    pub fn run(mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        writeln!(out, "{HELP}")?;
        self.draw(&mut out)?;

        for line in input.lines() {
            let line = line?;
            match line.parse::<Command>() {
                Ok(command) => match self.apply(command)? {
                    Outcome::Quit => break,
                    Outcome::Continue(message) => {
                        if let Some(message) = message {
                            writeln!(out, "{message}")?;
                        }
                    }
                },
                Err(err) => {
                    tracing::debug!("Rejected input {:?}: {}", line, err);
                    writeln!(out, "{err}")?;
                }
            }
            self.draw(&mut out)?;
        }

        tracing::info!("Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use game_core::{CardinalDirection, Turn};

    use super::*;

    fn app(players: u32) -> App {
        let session = Session::builder().seed(10).build().unwrap();
        App::new(session, players, ViewOptions { color: false })
    }

    #[test]
    fn always_has_one_participant() {
        let app = app(0);
        assert_eq!(app.session().participants().count(), 1);
    }

    #[test]
    fn switching_changes_who_moves() {
        let mut app = app(2);
        let first = app.active();
        assert_eq!(
            app.apply(Command::Switch(1)).unwrap(),
            Outcome::Continue(Some("switched to participant 2".into()))
        );
        app.apply(Command::Turn(Turn::Left)).unwrap();

        let session = app.session();
        assert_eq!(session.participant(first).unwrap().facing(), CardinalDirection::North);
        assert_eq!(
            session.participant(app.active()).unwrap().facing(),
            CardinalDirection::West
        );
        assert!(matches!(
            app.apply(Command::Switch(5)).unwrap(),
            Outcome::Continue(Some(_))
        ));
        assert_ne!(app.active(), first);
    }

    #[test]
    fn run_stops_at_quit() {
        let app = app(1);
        let mut out = Vec::new();
        app.run(Cursor::new("m\nbogus\nx\nw\n"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown command 'bogus'"));
        assert!(text.contains("full map"));
        // Initial draw plus one per line before quit.
        assert_eq!(text.matches("energy 100/100").count(), 3);
    }
}
