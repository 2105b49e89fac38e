//! Print exact EV and cumulative house edge for every built-in game.
//!
//! Configuration via environment (see `env_config`):
//! - `XEME_BOUND`: exclusive outcome bound (default 37, single-zero roulette)
//! - `XEME_ROUNDS`: rounds the edge compounds over (default 1)

use num::BigRational;

use xeme::env_config;
use xeme::ev::{house_edge, to_decimal};
use xeme::games::Game;
use xeme::reduction::InverseIndex;

fn main() {
    env_logger::init();

    let bound = env_config::bound();
    let rounds = env_config::rounds();
    let idx = InverseIndex::new();

    println!();
    for game in Game::ALL {
        let ev = match game.ev(&idx, bound) {
            Ok(ev) => ev,
            Err(e) => {
                eprintln!("{}: {}", game, e);
                std::process::exit(1);
            }
        };
        let edge_pct = house_edge(&ev, rounds) * BigRational::from_integer(100.into());
        println!(
            "({}r {}) EV: {}  house edge: {}%",
            rounds,
            game.name().to_uppercase(),
            to_decimal(&ev, 6),
            to_decimal(&edge_pct, 2)
        );
    }
}
