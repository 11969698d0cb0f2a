use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use super::glyph::{self, Glyph};

// Arrow heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compass {
    North,
    South,
    East,
    West,
}

/// Visual feedback device able to show an arrow or a "blocked" icon
pub trait Indicator {
    type Error: std::error::Error + Send + Sync + 'static;

    fn show_arrow(&mut self, heading: Compass) -> Result<(), Self::Error>;

    fn show_blocked(&mut self) -> Result<(), Self::Error>;
}

/// Draws 5x5 matrix frames as text, one frame per render call.
///
/// Frames are separated by a blank line so a terminal shows them as a
/// scrolling animation.
pub struct MatrixIndicator<W: Write> {
    writer: W,
    last: Option<Glyph>,
}

impl<W: Write> MatrixIndicator<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last: None }
    }

    /// Glyph shown by the most recent render call
    pub fn last_glyph(&self) -> Option<Glyph> {
        self.last
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn draw(&mut self, glyph: Glyph) -> io::Result<()> {
        for line in glyph.render('#', '.') {
            writeln!(self.writer, "{}", line)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        self.last = Some(glyph);
        Ok(())
    }
}

impl<W: Write> Indicator for MatrixIndicator<W> {
    type Error = io::Error;

    fn show_arrow(&mut self, heading: Compass) -> Result<(), io::Error> {
        self.draw(Glyph::arrow(heading))
    }

    fn show_blocked(&mut self) -> Result<(), io::Error> {
        self.draw(glyph::BLOCKED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_one_frame_per_call() {
        let mut indicator = MatrixIndicator::new(Vec::new());
        indicator.show_arrow(Compass::North).unwrap();
        assert_eq!(indicator.last_glyph(), Some(glyph::ARROW_NORTH));

        indicator.show_blocked().unwrap();
        assert_eq!(indicator.last_glyph(), Some(glyph::BLOCKED));

        let out = String::from_utf8(indicator.into_inner()).unwrap();
        assert_eq!(
            out,
            "..#..\n.###.\n#.#.#\n..#..\n..#..\n\n#...#\n.#.#.\n..#..\n.#.#.\n#...#\n\n"
        );
    }
}
