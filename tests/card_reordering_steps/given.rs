//! Given steps for card reordering BDD scenarios.

use std::sync::Arc;

use super::world::BoardWorld;
use eyre::WrapErr;
use laneboard::board::{
    adapters::ids::SequentialCardIdGenerator, config::BoardConfig, services::BoardService,
};
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given("the demo board")]
fn demo_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let board = BoardService::from_config(
        &BoardConfig::with_demo_cards(),
        Arc::new(SequentialCardIdGenerator::new("bdd")),
        Arc::new(DefaultClock),
    )
    .wrap_err("build demo board for scenario")?;
    world.board = Some(board);
    Ok(())
}
