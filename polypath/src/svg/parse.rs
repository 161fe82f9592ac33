//! Command interpreter: walks the token stream and builds anchors.

use super::lexer::{tokenize, Token};
use crate::geometry::limits;
use crate::geometry::point::Point;
use crate::path::{Anchor, Path};
use crate::PathError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    MoveTo,
    LineTo,
    Horizontal,
    Vertical,
    Cubic { smooth: bool },
    Quadratic { smooth: bool },
    Arc,
    Close,
}

/// Command letter (uppercase form) to handler. Lowercase letters map to
/// the same handler with relative coordinates.
const DISPATCH: [(u8, Command); 10] = [
    (b'M', Command::MoveTo),
    (b'L', Command::LineTo),
    (b'H', Command::Horizontal),
    (b'V', Command::Vertical),
    (b'C', Command::Cubic { smooth: false }),
    (b'S', Command::Cubic { smooth: true }),
    (b'Q', Command::Quadratic { smooth: false }),
    (b'T', Command::Quadratic { smooth: true }),
    (b'A', Command::Arc),
    (b'Z', Command::Close),
];

fn lookup(letter: u8) -> Option<(Command, bool)> {
    let upper = letter.to_ascii_uppercase();
    DISPATCH
        .iter()
        .find(|(c, _)| *c == upper)
        .map(|(_, cmd)| (*cmd, letter.is_ascii_lowercase()))
}

pub fn parse_impl(d: &str) -> Result<Path, PathError> {
    if d.len() > limits::MAX_SVG_LEN {
        return Err(PathError::LimitExceeded { what: "bytes of path data", limit: limits::MAX_SVG_LEN });
    }
    let tokens = tokenize(d);
    let mut it = Interpreter::new(&tokens);
    it.run()?;
    log::debug!(
        "parsed path data: {} tokens, {} commands, {} anchors, closed={}",
        tokens.len(),
        it.commands,
        it.path.len(),
        it.path.closed
    );
    Ok(it.path)
}

struct Interpreter<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    path: Path,
    commands: usize,
    cur: Point,
    start: Point,
    // Control points available for reflection by a following S/s or T/t.
    last_cubic: Option<Point>,
    last_quad: Option<Point>,
    // Set by Z; the next drawing command reopens a subpath at `start`.
    after_close: bool,
}

impl<'t, 'a> Interpreter<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            path: Path::new(),
            commands: 0,
            cur: Point::ORIGIN,
            start: Point::ORIGIN,
            last_cubic: None,
            last_quad: None,
            after_close: false,
        }
    }

    fn run(&mut self) -> Result<(), PathError> {
        while let Some(&token) = self.tokens.get(self.pos) {
            let letter = match token {
                Token::Command(c) => c,
                Token::Number(n) => {
                    return Err(PathError::syntax(self.pos, format!("expected a command, found '{}'", n)))
                }
            };
            let Some((cmd, relative)) = lookup(letter) else {
                return Err(PathError::syntax(self.pos, format!("unknown command '{}'", letter as char)));
            };
            self.pos += 1;
            self.commands += 1;
            if self.commands > limits::MAX_SVG_COMMANDS {
                return Err(PathError::LimitExceeded { what: "commands", limit: limits::MAX_SVG_COMMANDS });
            }

            if cmd == Command::Close {
                self.close();
                continue;
            }
            // Each command takes at least one argument group and repeats
            // until the next command letter.
            loop {
                self.group(cmd, relative, letter)?;
                if self.path.len() > limits::MAX_PATH_POINTS {
                    return Err(PathError::LimitExceeded { what: "points", limit: limits::MAX_PATH_POINTS });
                }
                if self.at_command() {
                    break;
                }
            }
        }
        Ok(())
    }

    fn at_command(&self) -> bool {
        self.tokens.get(self.pos).map_or(true, |t| t.is_command())
    }

    fn number(&mut self) -> Result<f64, PathError> {
        let index = self.pos;
        let raw = match self.tokens.get(index) {
            Some(Token::Number(n)) => *n,
            Some(Token::Command(c)) => {
                return Err(PathError::syntax(index, format!("expected a number, found command '{}'", *c as char)))
            }
            None => return Err(PathError::syntax(index, "unexpected end of path data")),
        };
        let v: f64 = raw
            .parse()
            .map_err(|_| PathError::syntax(index, format!("malformed number '{}'", raw)))?;
        if !limits::in_coord_bounds(v) {
            return Err(PathError::syntax(index, format!("coordinate '{}' out of range", raw)));
        }
        self.pos += 1;
        Ok(v)
    }

    /// Reads an x,y pair, offset by the current point when relative.
    fn pair(&mut self, relative: bool) -> Result<Point, PathError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(if relative { Point::new(self.cur.x + x, self.cur.y + y) } else { Point::new(x, y) })
    }

    fn group(&mut self, cmd: Command, relative: bool, letter: u8) -> Result<(), PathError> {
        match cmd {
            Command::MoveTo => {
                let p = self.pair(relative)?;
                self.move_to(p);
                // Further pairs are implicit line-tos.
                while !self.at_command() {
                    let p = self.pair(relative)?;
                    self.line_to(p);
                }
            }
            Command::LineTo => {
                let p = self.pair(relative)?;
                self.line_to(p);
            }
            Command::Horizontal => {
                let v = self.number()?;
                let x = if relative { self.cur.x + v } else { v };
                self.line_to(Point::new(x, self.cur.y));
            }
            Command::Vertical => {
                let v = self.number()?;
                let y = if relative { self.cur.y + v } else { v };
                self.line_to(Point::new(self.cur.x, y));
            }
            Command::Cubic { smooth } => {
                let c1 = if smooth {
                    self.reflected(self.last_cubic)
                } else {
                    self.pair(relative)?
                };
                let c2 = self.pair(relative)?;
                let end = self.pair(relative)?;
                self.begin_segment();
                if let Some(last) = self.path.points.last_mut() {
                    last.next = Some(c1);
                }
                self.push(Anchor { prev: Some(c2), ..Anchor::from(end) });
                self.last_cubic = Some(c2);
                self.last_quad = None;
            }
            Command::Quadratic { smooth } => {
                let c = if smooth {
                    self.reflected(self.last_quad)
                } else {
                    self.pair(relative)?
                };
                let end = self.pair(relative)?;
                self.begin_segment();
                self.push(Anchor { prev: Some(c), ..Anchor::from(end) });
                self.last_quad = Some(c);
                self.last_cubic = None;
            }
            Command::Arc => {
                let mut args = [0.0f64; 7];
                for a in args.iter_mut() {
                    *a = self.number()?;
                }
                log::warn!(
                    "elliptical arc '{}' is not supported; skipped to ({}, {})",
                    letter as char,
                    args[5],
                    args[6]
                );
                self.cur = if relative {
                    Point::new(self.cur.x + args[5], self.cur.y + args[6])
                } else {
                    Point::new(args[5], args[6])
                };
                self.last_cubic = None;
                self.last_quad = None;
            }
            Command::Close => self.close(),
        }
        Ok(())
    }

    /// Reflection of the previous control through the current point, or
    /// the current point itself when the previous segment was of another
    /// kind (or there was none).
    fn reflected(&self, control: Option<Point>) -> Point {
        control.map_or(self.cur, |c| c.reflect_through(&self.cur))
    }

    fn move_to(&mut self, p: Point) {
        self.cur = p;
        self.start = p;
        self.after_close = false;
        self.last_cubic = None;
        self.last_quad = None;
        self.path.points.push(Anchor { move_to: true, ..Anchor::from(p) });
    }

    fn line_to(&mut self, p: Point) {
        self.begin_segment();
        self.push(Anchor::from(p));
        self.last_cubic = None;
        self.last_quad = None;
    }

    /// Make sure a segment has an anchor to start from.
    fn begin_segment(&mut self) {
        if self.path.points.is_empty() || self.after_close {
            let at = if self.after_close { self.start } else { self.cur };
            self.path.points.push(Anchor { move_to: true, ..Anchor::from(at) });
            self.after_close = false;
        }
    }

    fn push(&mut self, anchor: Anchor) {
        self.cur = anchor.pt;
        self.path.points.push(anchor);
    }

    fn close(&mut self) {
        self.path.closed = true;
        self.cur = self.start;
        self.after_close = true;
        self.last_cubic = None;
        self.last_quad = None;
    }
}
