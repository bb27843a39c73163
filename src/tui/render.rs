use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use super::input::map_key;
use crate::engine::{Tile, SIZE};
use crate::session::{Frame, Frontend, Intent};

const CELL_W: u16 = 8;
const CELL_H: u16 = 3;
const GAP: u16 = 1;
const BOARD_TOP: u16 = 2;

const BG_COLOR: Color = rgb(0xfaf8ef);
const EMPTY_COLOR: Color = rgb(0xcdc1b4);
const DARK_TEXT: Color = rgb(0x776e65);
const LIGHT_TEXT: Color = rgb(0xf9f6f2);
const GAME_OVER_COLOR: Color = Color::Red;

const fn rgb(hex: u32) -> Color {
    Color::Rgb {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

/// Background and text color for a tile value.
pub fn tile_colors(value: Tile) -> (Color, Color) {
    let bg = match value {
        0 => EMPTY_COLOR,
        2 => rgb(0xeee4da),
        4 => rgb(0xede0c8),
        8 => rgb(0xf2b179),
        16 => rgb(0xf59563),
        32 => rgb(0xf67c5f),
        64 => rgb(0xf65e3b),
        128 => rgb(0xedcf72),
        256 => rgb(0xedcc61),
        512 => rgb(0xedc850),
        1024 => rgb(0xedc53f),
        _ => rgb(0xedc22e),
    };
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    (bg, fg)
}

/// Queue one full frame onto `out` and flush it.
pub fn render_frame<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    let snap = &frame.snapshot;
    queue!(
        out,
        SetBackgroundColor(BG_COLOR),
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetForegroundColor(DARK_TEXT),
        SetAttribute(Attribute::Bold),
        Print(format!("Score: {}  |  High Score: {}", snap.score, snap.best_score)),
        SetAttribute(Attribute::Reset),
    )?;

    for (r, row) in snap.board.rows().iter().enumerate() {
        let top = BOARD_TOP + r as u16 * (CELL_H + GAP);
        for line in 0..CELL_H {
            queue!(out, MoveTo(GAP, top + line))?;
            for &value in row.iter() {
                let (bg, fg) = tile_colors(value);
                let text = if line == CELL_H / 2 && value != 0 {
                    format!("{:^width$}", value, width = CELL_W as usize)
                } else {
                    " ".repeat(CELL_W as usize)
                };
                queue!(
                    out,
                    SetBackgroundColor(bg),
                    SetForegroundColor(fg),
                    Print(text),
                    SetBackgroundColor(BG_COLOR),
                    Print(" ".repeat(GAP as usize)),
                )?;
            }
        }
    }

    let mut status_row = BOARD_TOP + SIZE as u16 * (CELL_H + GAP);
    if snap.game_over {
        queue!(
            out,
            MoveTo(GAP, status_row),
            SetForegroundColor(GAME_OVER_COLOR),
            SetAttribute(Attribute::Bold),
            Print("Game Over!"),
            SetAttribute(Attribute::Reset),
        )?;
        status_row += 1;
    }
    if frame.reached_target {
        queue!(
            out,
            MoveTo(GAP, status_row),
            SetBackgroundColor(BG_COLOR),
            SetForegroundColor(DARK_TEXT),
            Print(format!("You reached {}!", frame.target_tile)),
        )?;
        status_row += 1;
    }
    queue!(
        out,
        MoveTo(GAP, status_row + 1),
        SetBackgroundColor(BG_COLOR),
        SetForegroundColor(DARK_TEXT),
        Print("arrows/wasd: move   r: restart   q: quit"),
        ResetColor,
    )?;
    out.flush()
}

/// Raw-mode alternate-screen frontend. Dropping it restores the terminal.
pub struct Terminal<W: Write> {
    out: W,
    active: bool,
}

impl Terminal<Stdout> {
    pub fn stdout() -> io::Result<Self> {
        Self::enter(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn enter(mut out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out, active: true })
    }

    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl<W: Write> Frontend for Terminal<W> {
    fn next_intent(&mut self) -> io::Result<Intent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(intent) = map_key(key) {
                    return Ok(intent);
                }
            }
        }
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        render_frame(&mut self.out, frame)
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Board;
    use crate::game::Snapshot;

    fn frame(board: Board, game_over: bool, reached_target: bool) -> Frame {
        Frame {
            snapshot: Snapshot {
                board,
                score: 36,
                best_score: 120,
                game_over,
                highest_tile: board.highest_tile(),
            },
            target_tile: 2048,
            reached_target,
        }
    }

    fn render(f: &Frame) -> String {
        let mut out = Vec::new();
        render_frame(&mut out, f).unwrap();
        String::from_utf8(out).unwrap()
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn failed_enter_leaves_raw_mode_off() {
        assert!(Terminal::enter(BrokenPipe).is_err());
        assert!(!terminal::is_raw_mode_enabled().unwrap_or(false));
    }

    #[test]
    fn palette() {
        assert_eq!(tile_colors(0).0, EMPTY_COLOR);
        assert_eq!(tile_colors(2), (rgb(0xeee4da), DARK_TEXT));
        assert_eq!(tile_colors(8), (rgb(0xf2b179), LIGHT_TEXT));
        assert_eq!(tile_colors(4096), tile_colors(2048));
        assert_eq!(rgb(0x102030), Color::Rgb { r: 0x10, g: 0x20, b: 0x30 });
    }

    #[test]
    fn frame_shows_scores_and_tiles() {
        let board = Board::from_rows([[2, 0, 0, 0], [0, 64, 0, 0], [0; 4], [0, 0, 0, 1024]]);
        let text = render(&frame(board, false, false));
        assert!(text.contains("Score: 36  |  High Score: 120"));
        assert!(text.contains("   64   "));
        assert!(text.contains("  1024  "));
        assert!(!text.contains("Game Over!"));
        assert!(!text.contains("You reached"));
    }

    #[test]
    fn frame_shows_end_states() {
        let text = render(&frame(Board::EMPTY, true, true));
        assert!(text.contains("Game Over!"));
        assert!(text.contains("You reached 2048!"));
    }
}
