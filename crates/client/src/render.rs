//! Plain-text view of one participant's knowledge of the board.
use crossterm::style::{self, Stylize};
use game_core::{CardinalDirection, Color, Position, RoomType};
use runtime::{ParticipantId, Session};

/// Options for [`render`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewOptions {
    /// Color each cell with its room color through crossterm styling.
    pub color: bool,
}

impl ViewOptions {
    /// Colors are on unless `NO_COLOR` is set.
    pub fn from_env() -> Self {
        Self {
            color: std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

pub const fn glyph(room_type: RoomType) -> char {
    match room_type {
        RoomType::EmptySpace => '#',
        RoomType::Corridor => ',',
        RoomType::Start => 'S',
        RoomType::Enemy => 'e',
        RoomType::DifficultEnemy => 'E',
        RoomType::Shop => '$',
        RoomType::Smithy => 'T',
        RoomType::Treasure => '*',
        RoomType::Plain => '.',
        RoomType::Shrine => '+',
        RoomType::Boss => 'B',
        RoomType::Unknown => '?',
    }
}

const fn facing_glyph(direction: CardinalDirection) -> char {
    match direction {
        CardinalDirection::North => '^',
        CardinalDirection::East => '>',
        CardinalDirection::South => 'v',
        CardinalDirection::West => '<',
    }
}

/// Draws the board as seen by `viewer`, followed by a status line.
///
/// Hidden cells are blank. The viewer is drawn as an arrow showing its
/// facing; other participants are drawn as `@`.
pub fn render(
    session: &Session,
    viewer: ParticipantId,
    options: ViewOptions,
) -> runtime::Result<String> {
    let board = session.board();
    let me = session.participant(viewer)?;
    let others: Vec<Position> = session
        .participants()
        .filter(|p| p.id() != viewer)
        .map(|p| p.position())
        .collect();

    let mut out = String::new();
    for row in 0..board.height() as i32 {
        for col in 0..board.width() as i32 {
            let position = Position::new(row, col);
            let ch = if position == me.position() {
                facing_glyph(me.facing())
            } else if !session.is_visible(viewer, position)? {
                ' '
            } else if others.contains(&position) {
                '@'
            } else {
                glyph(board.room_type(position))
            };

            if options.color && ch != ' ' {
                push_colored(&mut out, ch, session.color(position));
            } else {
                out.push(ch);
            }
        }
        out.push('\n');
    }

    let energy = me.energy();
    out.push_str(&format!(
        "{} {} at {} facing {} | energy {}/{} | visited {} explored {}{}\n",
        me.id(),
        me.name(),
        me.position(),
        me.facing(),
        energy.current,
        energy.maximum,
        me.exploration().visited_count(),
        me.exploration().explored_count(),
        if session.show_full_map() { " | full map" } else { "" },
    ));
    Ok(out)
}

fn push_colored(out: &mut String, ch: char, color: Color) {
    let styled = ch.with(style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    });
    out.push_str(&styled.to_string());
}

#[cfg(test)]
mod tests {
    use game_core::Turn;

    use super::*;

    fn plain() -> ViewOptions {
        ViewOptions { color: false }
    }

    #[test]
    fn fresh_view_shows_only_the_surroundings_of_start() {
        let mut session = Session::builder().seed(21).build().unwrap();
        let id = session.add_participant("solo");
        let view = render(&session, id, plain()).unwrap();

        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[10].chars().nth(10), Some('^'));
        // Nothing outside the 3x3 block around start is drawn.
        for (row, line) in lines[..21].iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if (row as i32 - 10).abs() > 1 || (col as i32 - 10).abs() > 1 {
                    assert_eq!(ch, ' ', "({row}, {col})");
                }
            }
        }
        assert!(lines[21].contains("energy 100/100"));
    }

    #[test]
    fn viewer_arrow_tracks_facing() {
        let mut session = Session::builder().seed(2).build().unwrap();
        let id = session.add_participant("solo");
        session.turn(id, Turn::Right).unwrap();
        let view = render(&session, id, plain()).unwrap();
        assert_eq!(view.lines().nth(10).and_then(|l| l.chars().nth(10)), Some('>'));
    }

    #[test]
    fn full_map_draws_walls() {
        let mut session = Session::builder().seed(6).show_full_map(true).build().unwrap();
        let id = session.add_participant("solo");
        let view = render(&session, id, plain()).unwrap();
        assert!(!view.lines().next().unwrap_or_default().contains(' '));
        assert!(view.contains('#'));
    }

    #[test]
    fn colored_output_wraps_visible_cells() {
        let mut session = Session::builder().seed(6).build().unwrap();
        let id = session.add_participant("solo");
        let view = render(&session, id, ViewOptions { color: true }).unwrap();

        let start = session.color(session.board().start());
        let expected = '^'
            .with(style::Color::Rgb {
                r: start.r,
                g: start.g,
                b: start.b,
            })
            .to_string();
        assert!(view.contains(&expected));
        // Fog stays unstyled.
        assert!(view.lines().next().is_some_and(|line| line.trim().is_empty()));
    }
}
