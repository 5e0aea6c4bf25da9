pub mod assign;
pub mod bot;
pub mod constants;
pub mod game_map;
pub mod location;
pub mod moves;
pub mod protocol;
pub mod replay;
pub mod scan;
