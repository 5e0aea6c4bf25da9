//! Halite I text protocol over stdin/stdout.
//!
//! Init: the engine sends our player id, the map dimensions, the production
//! grid, and a first frame. We answer with the bot name. Every turn after
//! that is one frame in (run-length-encoded owners, then a strength grid)
//! and one line of `x y direction` triples out.
//!
//! There is no per-turn recovery: any malformed or truncated input is fatal
//! and propagates out of the game loop (losing a frame loses the game).

use crate::game_map::GameMap;
use crate::moves::MoveSet;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("engine closed the stream")]
    UnexpectedEof,
    #[error("malformed token {token:?}: expected {expected}")]
    MalformedToken {
        token: String,
        expected: &'static str,
    },
    #[error("owner runs cover {got} tiles, map has {expected}")]
    BadOwnerRun { got: usize, expected: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whitespace-token stream over the engine's input.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ProtocolError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return match token.parse() {
                    Ok(value) => Ok(value),
                    Err(_) => Err(ProtocolError::MalformedToken { token, expected }),
                };
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ProtocolError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }
}

/// A bot's connection to the game engine.
pub struct Connection<R, W> {
    tokens: Tokens<R>,
    writer: W,
}

impl<R: BufRead, W: Write> Connection<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Connection {
            tokens: Tokens::new(reader),
            writer,
        }
    }

    /// Read the init handshake: our id, dimensions, the production grid and
    /// the first frame.
    pub fn read_init(&mut self) -> Result<(u8, GameMap), ProtocolError> {
        let my_id: u8 = self.tokens.next("player id")?;
        let width: u16 = self.tokens.next("map width")?;
        let height: u16 = self.tokens.next("map height")?;

        let mut map = GameMap::new(width, height);
        for loc in map.locations() {
            map.site_mut(loc).production = self.tokens.next("production")?;
        }
        self.read_frame(&mut map)?;

        Ok((my_id, map))
    }

    /// Answer the handshake with the bot name.
    pub fn send_init(&mut self, name: &str) -> Result<(), ProtocolError> {
        writeln!(self.writer, "{name}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Apply one frame to the map: run-length owner pairs covering the whole
    /// grid in row-major order, followed by a full strength grid.
    pub fn read_frame(&mut self, map: &mut GameMap) -> Result<(), ProtocolError> {
        let total = map.locations().count();
        let mut owners = Vec::with_capacity(total);

        while owners.len() < total {
            let run: usize = self.tokens.next("owner run length")?;
            let owner: u8 = self.tokens.next("owner id")?;
            if run > total - owners.len() {
                return Err(ProtocolError::BadOwnerRun {
                    got: owners.len() + run,
                    expected: total,
                });
            }
            owners.resize(owners.len() + run, owner);
        }

        for (loc, owner) in map.locations().zip(owners) {
            map.site_mut(loc).owner = owner;
        }
        for loc in map.locations() {
            map.site_mut(loc).strength = self.tokens.next("strength")?;
        }
        Ok(())
    }

    /// Send the turn's moves as `x y direction` triples on one line.
    pub fn send_frame(&mut self, moves: &MoveSet) -> Result<(), ProtocolError> {
        for (loc, direction) in moves.iter() {
            write!(self.writer, "{} {} {} ", loc.x, loc.y, direction.to_wire())?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
