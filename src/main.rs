use halite_frontier::bot::Bot;
use halite_frontier::game_map::MapQuery;
use halite_frontier::protocol::{Connection, ProtocolError};
use halite_frontier::replay::Recorder;
use log::info;
use std::io;

const BOT_NAME: &str = "Frontier";

fn main() -> Result<(), ProtocolError> {
    // Logs go to stderr; the engine owns stdout.
    env_logger::init();

    let mut conn = Connection::new(io::stdin().lock(), io::stdout().lock());
    let (owner, mut map) = conn.read_init()?;
    let bot = Bot::new(owner, map.width(), map.height());
    conn.send_init(BOT_NAME)?;
    info!(
        "playing as {} on a {}x{} map, move threshold {}",
        bot.owner(),
        map.width(),
        map.height(),
        bot.move_threshold()
    );

    let mut recorder = Recorder::from_env();
    let mut turn = 0u32;
    loop {
        match conn.read_frame(&mut map) {
            // The engine closes the stream when the game ends.
            Err(ProtocolError::UnexpectedEof) => {
                info!("game over after {turn} turns");
                return Ok(());
            }
            other => other?,
        }
        let moves = bot.plan_turn(&map);
        recorder.record(turn, &map, &moves);
        conn.send_frame(&moves)?;
        turn += 1;
    }
}
