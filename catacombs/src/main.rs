//! Headless chase demo: a few monsters hunt the player across a small
//! walled map, one frame per turn on stdout.

use catacombs_lib::{Entity, Game, GameMap, Tile, blocking_entity_at};
use ember_core::Point;

const WIDTH: i32 = 24;
const HEIGHT: i32 = 12;
const TURNS: i32 = 12;

fn build_map() -> GameMap {
    let mut map = GameMap::new(WIDTH, HEIGHT);
    for p in map.bounds().iter() {
        if p.x == 0 || p.y == 0 || p.x == WIDTH - 1 || p.y == HEIGHT - 1 {
            map.set_tile(p, Tile::wall());
        }
    }
    // An interior wall with a single doorway.
    for y in 1..HEIGHT - 1 {
        if y != 7 {
            map.set_tile(Point::new(9, y), Tile::wall());
        }
    }
    map
}

fn render(game: &Game) -> String {
    let mut out = String::new();
    for y in 0..game.map.height() {
        for x in 0..game.map.width() {
            let p = Point::new(x, y);
            let ch = match blocking_entity_at(&game.entities, p) {
                Some(id) => game.entities[id].ch,
                None => game.map.tile(p).map_or(' ', Tile::rune),
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() {
    let mut game = Game::new(build_map());
    game.spawn(Entity::new("player", '@', Point::new(4, 6), true));
    for name in ["hound", "rat", "viper"] {
        let pos = game.random_floor();
        game.spawn(Entity::new(name, name.chars().next().unwrap_or('m'), pos, true));
    }

    println!("turn 0");
    print!("{}", render(&game));
    for _ in 0..TURNS {
        game.chase_step();
        println!("turn {}", game.turn);
        print!("{}", render(&game));
    }
}
