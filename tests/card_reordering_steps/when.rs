//! When steps for card reordering BDD scenarios.

use super::world::BoardWorld;
use laneboard::board::{
    domain::{CardId, DropTarget, LaneId},
    services::CreateCardRequest,
};
use rstest_bdd_macros::when;

#[when(r#"card "{card_id}" is dragged over lane "{lane}" at y {y:u32}"#)]
fn card_dragged_over_lane(
    world: &mut BoardWorld,
    card_id: String,
    lane: String,
    y: u32,
) -> Result<(), eyre::Report> {
    let anchors = world.anchors(&lane)?;
    let target = DropTarget::Lane(LaneId::new(lane)?);
    let board = world.board_mut()?;
    if !board.drag_start(CardId::new(card_id)?) {
        return Err(eyre::eyre!("drag did not start"));
    }
    world.located = world
        .board_mut()?
        .drag_over(target, f64::from(y), &anchors);
    Ok(())
}

#[when(r#"the card is dropped on lane "{lane}""#)]
fn card_dropped_on_lane(world: &mut BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let target = DropTarget::Lane(LaneId::new(lane)?);
    let outcome = world.board_mut()?.drop_on(target);
    world.last_drop = Some(outcome);
    Ok(())
}

#[when(r#"card "{card_id}" is dropped on the discard target"#)]
fn card_dropped_on_discard(world: &mut BoardWorld, card_id: String) -> Result<(), eyre::Report> {
    let board = world.board_mut()?;
    board.drag_start(CardId::new(card_id)?);
    board.drag_over(DropTarget::Discard, 0.0, &[]);
    let outcome = board.drop_on(DropTarget::Discard);
    world.last_drop = Some(outcome);
    Ok(())
}

#[when(r#"a card titled "{title}" is added to lane "{lane}""#)]
fn card_added(world: &mut BoardWorld, title: String, lane: String) -> Result<(), eyre::Report> {
    let result = world
        .board_mut()?
        .create_card(CreateCardRequest::new(title, lane));
    world.last_created = Some(result);
    Ok(())
}

#[when(r#"a blank card is added to lane "{lane}""#)]
fn blank_card_added(world: &mut BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let result = world
        .board_mut()?
        .create_card(CreateCardRequest::new("   ", lane));
    world.last_created = Some(result);
    Ok(())
}
