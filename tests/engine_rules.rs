//! Rule-level tests against the public engine API.

use tui_snake::core::{Collision, EngineConfig, FoodPlacement, GameEngine, TickOutcome};
use tui_snake::types::{Direction, Position};

fn engine(seed: u32) -> GameEngine {
    GameEngine::new(EngineConfig::default(), seed)
}

/// Drive the head to the cell in front of the left wall, then tick into it.
#[test]
fn left_wall_ends_the_round() {
    let mut game = engine(1);
    assert!(game.set_direction(Direction::Up));
    game.tick();
    assert!(game.set_direction(Direction::Left));

    let mut last = TickOutcome::Idle;
    for _ in 0..20 {
        last = game.tick();
        if game.game_over() {
            break;
        }
    }

    assert!(game.game_over());
    assert_eq!(last, TickOutcome::Collided(Collision::Wall));
    assert_eq!(game.head().x, 0);
}

#[test]
fn reverse_is_rejected_in_every_heading() {
    let mut game = engine(2);
    for dir in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
        assert!(game.set_direction(dir));
        assert!(!game.set_direction(dir.opposite()));
        assert_eq!(game.direction(), dir);
    }
}

#[test]
fn game_over_freezes_state_until_reset() {
    let mut game = engine(3);
    game.set_direction(Direction::Down);
    while !game.game_over() {
        game.tick();
    }
    let frozen = game.snapshot();

    for _ in 0..5 {
        assert_eq!(game.tick(), TickOutcome::Idle);
        assert!(!game.set_direction(Direction::Left));
    }
    assert_eq!(game.snapshot(), frozen);

    game.reset();
    let snap = game.snapshot();
    assert!(!snap.game_over);
    assert_eq!(snap.snake, vec![Position::new(10, 10)]);
    assert_eq!(snap.direction, Direction::Right);
    assert_eq!(snap.round, frozen.round + 1);
}

#[test]
fn length_changes_only_when_food_is_eaten() {
    let mut game = engine(4);
    let pattern = [Direction::Up, Direction::Right, Direction::Down, Direction::Right];

    for step in 0..500 {
        if game.game_over() {
            game.reset();
        }
        if step % 3 == 0 {
            game.set_direction(pattern[(step / 3) % pattern.len()]);
        }
        let before = game.len();
        match game.tick() {
            TickOutcome::Ate => assert_eq!(game.len(), before + 1),
            TickOutcome::Moved | TickOutcome::Collided(_) => assert_eq!(game.len(), before),
            TickOutcome::Idle => panic!("engine idle while a round is active"),
        }
    }
}

#[test]
fn seeds_reproduce_the_same_round() {
    let run = |seed| {
        let mut game = engine(seed);
        let mut foods = vec![game.food()];
        for i in 0..60 {
            if game.game_over() {
                game.reset();
            }
            if i % 7 == 0 {
                game.set_direction(Direction::Down);
            } else if i % 7 == 3 {
                game.set_direction(Direction::Right);
            }
            game.tick();
            foods.push(game.food());
        }
        (foods, game.snapshot())
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn avoid_snake_policy_never_places_food_on_the_body() {
    let config = EngineConfig::new(6, 200).with_food_placement(FoodPlacement::AvoidSnake);
    let mut game = GameEngine::new(config, 8);

    for i in 0..400 {
        if game.game_over() {
            game.reset();
        }
        let turn = Direction::ALL[(i * 7 + i / 3) % 4];
        game.set_direction(turn);
        if game.tick() == TickOutcome::Ate || i == 0 {
            let snap = game.snapshot();
            if snap.len() < 36 {
                assert!(!snap.occupies(snap.food), "food {:?} under {:?}", snap.food, snap.snake);
            }
        }
    }
}

#[test]
fn custom_grid_size_sets_center_and_bounds() {
    let mut game = GameEngine::new(EngineConfig::new(8, 100), 5);
    assert_eq!(game.head(), Position::new(4, 4));
    assert_eq!(game.snapshot().grid_size, 8);

    let mut ticks = 0;
    while !game.game_over() {
        game.tick();
        ticks += 1;
    }
    assert_eq!(game.head(), Position::new(7, 4));
    assert_eq!(ticks, 4);
}
