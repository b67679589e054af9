//! The canonical foraging scenario: a lone agent on an open 5x5 torus
//! walks to food by pure gradient descent, closing exactly one cell of
//! toroidal distance per turn.

use formic_core::Cell;
use formic_engine::{Engine, GameSettings, Strategy};
use formic_grid::Observation;
use formic_testkit::FakeClock;

fn settings() -> GameSettings {
    GameSettings {
        rows: 5,
        cols: 5,
        strategy: Strategy::FieldFollowing,
        ..GameSettings::default()
    }
}

#[test]
fn agent_closes_one_cell_per_turn_until_adjacent() {
    let mut engine = Engine::new(settings()).unwrap();
    let food = Cell::new(2, 2);
    let mut agent = Cell::new(0, 0);

    let mut distance = 4; // toroidal |Δrow| + |Δcol| from (0,0) to (2,2)
    while distance > 1 {
        let feed = vec![
            (agent, Observation::Ant(formic_core::PlayerId::ME)),
            (food, Observation::Food),
        ];
        let clock = FakeClock::new(400, 50);
        let outcome = engine.play_turn_with_clock(&feed, &clock).unwrap();

        assert_eq!(outcome.orders.len(), 1, "agent must move every turn");
        let order = outcome.orders[0];
        assert_eq!(order.origin, agent);
        agent = order.destination;

        let next = engine.grid().distance(agent, food);
        assert_eq!(next, distance - 1, "each step closes exactly one cell");
        distance = next;
    }
}

#[test]
fn diffusion_runs_and_is_reported() {
    let mut engine = Engine::new(settings()).unwrap();
    let feed = vec![
        (Cell::new(0, 0), Observation::Ant(formic_core::PlayerId::ME)),
        (Cell::new(2, 2), Observation::Food),
    ];
    let clock = FakeClock::new(400, 50);
    let outcome = engine.play_turn_with_clock(&feed, &clock).unwrap();

    assert!(outcome.metrics.diffusion_passes >= 1);
    assert_eq!(outcome.metrics.agents, 1);
    assert_eq!(outcome.metrics.orders_issued, 1);

    // The food gradient must be visible in the snapshot next to the food.
    let snapshot = engine.field_snapshot();
    assert!(snapshot.value(Cell::new(2, 1), formic_core::Channel::Food) > 0.0);
    assert_eq!(
        snapshot.value(Cell::new(2, 2), formic_core::Channel::Food),
        1000.0
    );
}
