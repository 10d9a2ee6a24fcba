//! Frame description: what to draw for a given session, as plain data.
//!
//! [`Renderer::frame`] reads the session and returns a list of
//! [`DrawCommand`]s. It never touches the session and keeps no state between
//! frames, so the same session always yields the same list. Turning commands
//! into pixels is the job of [`crate::draw`].

use crate::board::SIZE;
use crate::config::{Config, Palette};
use crate::font;
use crate::session::GameSession;
use crate::types::{Player, Point, Rect, Rgb};

/// Prompt shown under the result once a game is over.
pub const REPLAY_PROMPT: &str = "Press 'r' to play again";

/// One drawing primitive, in the order it should be painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Line { from: Point, to: Point, color: Rgb, thickness: i32 },
    /// Ring whose outer edge is `radius`, `thickness` pixels wide inward.
    Circle { center: Point, radius: i32, color: Rgb, thickness: i32 },
    FilledRect { rect: Rect, color: Rgb },
    /// `position` is the top-left corner of the text box.
    Text { text: String, position: Point, color: Rgb, scale: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    side: i32,
    cell: i32,
    thickness: i32,
    text_scale: i32,
    palette: Palette,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            side: config.side(),
            cell: config.cell_size(),
            thickness: config.line_width(),
            text_scale: config.text_scale(),
            palette: *config.palette(),
        }
    }

    /// Everything to paint this frame: background, grid, marks, then the
    /// result overlay if the game is over.
    pub fn frame(&self, session: &GameSession) -> Vec<DrawCommand> {
        let mut cmds = vec![DrawCommand::FilledRect {
            rect: Rect::new(0, 0, self.side, self.side),
            color: self.palette.background,
        }];
        self.grid(&mut cmds);
        for (row, col, player) in session.board().marks() {
            self.mark(&mut cmds, row as i32, col as i32, player);
        }
        if let Some(message) = session.outcome().message() {
            self.overlay(&mut cmds, &message);
        }
        cmds
    }

    fn grid(&self, cmds: &mut Vec<DrawCommand>) {
        let line = |from, to| DrawCommand::Line {
            from,
            to,
            color: self.palette.grid,
            thickness: self.thickness,
        };
        for i in 1..SIZE as i32 {
            let at = self.cell * i;
            cmds.push(line(Point::new(at, 0), Point::new(at, self.side)));
        }
        for i in 1..SIZE as i32 {
            let at = self.cell * i;
            cmds.push(line(Point::new(0, at), Point::new(self.side, at)));
        }
    }

    fn mark(&self, cmds: &mut Vec<DrawCommand>, row: i32, col: i32, player: Player) {
        let c = self.cell;
        match player {
            Player::X => {
                // Two strokes corner to corner.
                let color = self.palette.x_mark;
                cmds.push(DrawCommand::Line {
                    from: Point::new(col * c, row * c),
                    to: Point::new((col + 1) * c, (row + 1) * c),
                    color,
                    thickness: self.thickness,
                });
                cmds.push(DrawCommand::Line {
                    from: Point::new(col * c, (row + 1) * c),
                    to: Point::new((col + 1) * c, row * c),
                    color,
                    thickness: self.thickness,
                });
            }
            Player::O => cmds.push(DrawCommand::Circle {
                center: Point::new(col * c + c / 2, row * c + c / 2),
                radius: c / 2 - self.thickness / 2,
                color: self.palette.o_mark,
                thickness: self.thickness,
            }),
        }
    }

    // Result box centred on the board, prompt box one text-height below the centre line.
    fn overlay(&self, cmds: &mut Vec<DrawCommand>, message: &str) {
        let mid = self.side / 2;

        let (w, h) = font::text_size(message, self.text_scale);
        self.label(cmds, message, Point::new(mid - w / 2, mid - h / 2), w, h);

        let (w, h) = font::text_size(REPLAY_PROMPT, self.text_scale);
        self.label(cmds, REPLAY_PROMPT, Point::new(mid - w / 2, mid + h), w, h);
    }

    fn label(&self, cmds: &mut Vec<DrawCommand>, text: &str, at: Point, w: i32, h: i32) {
        cmds.push(DrawCommand::FilledRect {
            rect: Rect::new(at.x, at.y, w, h),
            color: self.palette.overlay,
        });
        cmds.push(DrawCommand::Text {
            text: text.to_string(),
            position: at,
            color: self.palette.text,
            scale: self.text_scale,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> Renderer {
        Renderer::new(&Config::default())
    }

    fn texts(cmds: &[DrawCommand]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_board_is_background_and_grid() {
        let cmds = renderer().frame(&GameSession::new());
        assert_eq!(cmds.len(), 5);
        assert_eq!(
            cmds[0],
            DrawCommand::FilledRect { rect: Rect::new(0, 0, 300, 300), color: Rgb::WHITE }
        );
        assert_eq!(
            cmds[1],
            DrawCommand::Line {
                from: Point::new(100, 0),
                to: Point::new(100, 300),
                color: Rgb::BLACK,
                thickness: 15
            }
        );
        assert_eq!(
            cmds[4],
            DrawCommand::Line {
                from: Point::new(0, 200),
                to: Point::new(300, 200),
                color: Rgb::BLACK,
                thickness: 15
            }
        );
    }

    #[test]
    fn x_is_two_diagonals_and_o_is_a_ring() {
        let mut session = GameSession::new();
        session.submit_move(0, 0);
        session.submit_move(1, 2);
        let cmds = renderer().frame(&session);
        assert_eq!(cmds.len(), 5 + 3);
        assert_eq!(
            cmds[5],
            DrawCommand::Line {
                from: Point::new(0, 0),
                to: Point::new(100, 100),
                color: Rgb(255, 0, 0),
                thickness: 15
            }
        );
        assert_eq!(
            cmds[6],
            DrawCommand::Line {
                from: Point::new(0, 100),
                to: Point::new(100, 0),
                color: Rgb(255, 0, 0),
                thickness: 15
            }
        );
        assert_eq!(
            cmds[7],
            DrawCommand::Circle {
                center: Point::new(250, 150),
                radius: 43,
                color: Rgb(0, 0, 255),
                thickness: 15
            }
        );
    }

    #[test]
    fn finished_game_shows_result_and_prompt() {
        let mut session = GameSession::new();
        for (r, c) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            session.submit_move(r, c);
        }
        let cmds = renderer().frame(&session);
        assert_eq!(texts(&cmds), vec!["Player X wins!", REPLAY_PROMPT]);

        // "Player X wins!" is 14 chars -> 168x16 at scale 2, centred on 150.
        assert!(cmds.contains(&DrawCommand::FilledRect {
            rect: Rect::new(66, 142, 168, 16),
            color: Rgb(160, 32, 160),
        }));
        // Prompt is 23 chars -> 276x16, placed at 150 + 16.
        assert!(cmds.contains(&DrawCommand::Text {
            text: REPLAY_PROMPT.to_string(),
            position: Point::new(12, 166),
            color: Rgb::WHITE,
            scale: 2,
        }));
    }

    #[test]
    fn overlay_stays_on_board_at_largest_accepted_scale() {
        let side = 4095;
        let scale = side / font::text_size(REPLAY_PROMPT, 1).0;
        let config = Config::new(side as u32, 15, 10, scale as u32).unwrap();
        let mut session = GameSession::new();
        for (r, c) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            session.submit_move(r, c);
        }
        for cmd in Renderer::new(&config).frame(&session) {
            if let DrawCommand::FilledRect { rect, .. } = cmd {
                assert!(rect.x >= 0 && rect.y >= 0, "{rect:?}");
                assert!(rect.x + rect.width <= side && rect.y + rect.height <= side, "{rect:?}");
            }
        }
    }

    #[test]
    fn draw_shows_draw_message() {
        let mut session = GameSession::new();
        for (r, c) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (2, 0), (1, 2), (2, 2), (2, 1)] {
            session.submit_move(r, c);
        }
        assert_eq!(texts(&renderer().frame(&session)), vec!["It's a draw!", REPLAY_PROMPT]);
    }

    #[test]
    fn rendering_is_pure() {
        let mut session = GameSession::new();
        session.submit_move(2, 2);
        let before = session.clone();
        let r = renderer();
        assert_eq!(r.frame(&session), r.frame(&session));
        assert_eq!(session, before);
    }
}
