//! Optional JSON-lines capture of each turn for offline inspection.
//!
//! Set `FRONTIER_REPLAY` to a file path to append one line per turn with the
//! map snapshot and the issued moves. Recording problems never abort a game
//! in progress; they are logged and recording is switched off.

use crate::game_map::GameMap;
use crate::location::{Direction, Location};
use crate::moves::MoveSet;
use log::{info, warn};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

pub const REPLAY_ENV: &str = "FRONTIER_REPLAY";

#[derive(Serialize)]
struct MoveRecord {
    location: Location,
    direction: Direction,
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    turn: u32,
    map: &'a GameMap,
    moves: Vec<MoveRecord>,
}

pub struct Recorder {
    writer: Option<BufWriter<File>>,
}

impl Recorder {
    /// A recorder for the path named by `FRONTIER_REPLAY`, or a disabled one
    /// if the variable is unset or the file cannot be opened.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(REPLAY_ENV) else {
            return Recorder { writer: None };
        };
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                info!("recording frames to {}", path.to_string_lossy());
                Recorder {
                    writer: Some(BufWriter::new(file)),
                }
            }
            Err(err) => {
                warn!(
                    "cannot open replay file {}: {err}",
                    path.to_string_lossy()
                );
                Recorder { writer: None }
            }
        }
    }

    pub fn record(&mut self, turn: u32, map: &GameMap, moves: &MoveSet) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let frame = FrameRecord {
            turn,
            map,
            moves: moves
                .iter()
                .map(|(location, direction)| MoveRecord {
                    location,
                    direction,
                })
                .collect(),
        };
        let result = serde_json::to_writer(&mut *writer, &frame)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(writer))
            .and_then(|()| writer.flush());
        if let Err(err) = result {
            warn!("replay recording failed, disabling: {err}");
            self.writer = None;
        }
    }
}
