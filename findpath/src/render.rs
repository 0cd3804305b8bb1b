//! Terminal rendering of a [`ViewGrid`] via crossterm.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::{Color, PrintStyledContent, Stylize};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue, style};

use crate::view::{CellView, Step, ViewGrid};

/// Maps a cell status to its display color.
fn cell_color(v: CellView) -> Color {
    match v {
        CellView::Floor => Color::White,
        CellView::Barrier => Color::DarkGrey,
        CellView::Start => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        CellView::Goal => Color::Rgb {
            r: 64,
            g: 224,
            b: 208,
        },
        CellView::Open => Color::Green,
        CellView::Closed => Color::Red,
        CellView::Path => Color::Rgb {
            r: 128,
            g: 0,
            b: 128,
        },
    }
}

/// Draw the whole field, two columns per cell so cells come out roughly
/// square in a terminal.
pub fn draw(out: &mut impl Write, view: &ViewGrid) -> io::Result<()> {
    for row in view.rows() {
        for &v in row {
            queue!(out, PrintStyledContent("██".with(cell_color(v))))?;
        }
        queue!(out, style::Print("\n"))?;
    }
    out.flush()
}

/// Replay recorded expansion steps frame by frame.
pub fn replay(
    out: &mut impl Write,
    view: &mut ViewGrid,
    steps: &[Step],
    frame: Duration,
) -> io::Result<()> {
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    draw(out, view)?;
    for step in steps {
        std::thread::sleep(frame);
        view.apply(step);
        execute!(out, cursor::MoveTo(0, 0))?;
        draw(out, view)?;
    }
    Ok(())
}
