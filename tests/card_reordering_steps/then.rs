//! Then steps for card reordering BDD scenarios.

use super::world::BoardWorld;
use laneboard::board::{
    domain::{BoardDomainError, CardId, LaneId},
    services::{BoardServiceError, DropOutcome},
};
use rstest_bdd_macros::then;

#[then(r#"lane "{lane}" shows "{ids}""#)]
fn lane_shows(world: &BoardWorld, lane: String, ids: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = ids.split(',').map(str::trim).collect();
    let actual: Vec<String> = world
        .board()?
        .lane_view(&LaneId::new(lane.as_str())?)
        .into_iter()
        .map(|card| card.id().as_str().to_owned())
        .collect();

    if actual != expected {
        return Err(eyre::eyre!(
            "lane {lane}: expected {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the drop placed card "{card_id}" at index {index:usize} of lane "{lane}""#)]
fn drop_placed_card(
    world: &BoardWorld,
    card_id: String,
    index: usize,
    lane: String,
) -> Result<(), eyre::Report> {
    let expected = DropOutcome::Reordered {
        card_id: CardId::new(card_id)?,
        lane: LaneId::new(lane)?,
        index,
    };
    if world.last_drop.as_ref() != Some(&expected) {
        return Err(eyre::eyre!(
            "expected {expected:?}, found {:?}",
            world.last_drop
        ));
    }
    Ok(())
}

#[then(r#"the drop discarded card "{card_id}""#)]
fn drop_discarded_card(world: &BoardWorld, card_id: String) -> Result<(), eyre::Report> {
    let id = CardId::new(card_id)?;
    match &world.last_drop {
        Some(DropOutcome::Discarded(card)) if *card.id() == id => Ok(()),
        other => Err(eyre::eyre!("expected {id} to be discarded, found {other:?}")),
    }
}

#[then("the insertion index is {index:usize}")]
fn insertion_index_is(world: &BoardWorld, index: usize) -> Result<(), eyre::Report> {
    if world.located != Some(index) {
        return Err(eyre::eyre!(
            "expected insertion index {index}, found {:?}",
            world.located
        ));
    }
    Ok(())
}

#[then(r#"card "{card_id}" is not on the board"#)]
fn card_not_on_board(world: &BoardWorld, card_id: String) -> Result<(), eyre::Report> {
    let id = CardId::new(card_id)?;
    let board = world.board()?;
    if board.store().contains(&id) {
        return Err(eyre::eyre!("card {id} is still in the store"));
    }
    if board
        .frame()
        .lanes
        .iter()
        .any(|lane| lane.card_ids().contains(&id))
    {
        return Err(eyre::eyre!("card {id} is still rendered"));
    }
    Ok(())
}

#[then(r#"moving card "{card_id}" to lane "{lane}" changes nothing"#)]
fn moving_card_changes_nothing(
    world: &mut BoardWorld,
    card_id: String,
    lane: String,
) -> Result<(), eyre::Report> {
    let board = world.board_mut()?;
    let before = board.store().clone();
    let outcome = board.move_card(&CardId::new(card_id)?, &LaneId::new(lane)?, 0)?;

    if outcome.store().is_some() || !board.store().same_snapshot(&before) {
        return Err(eyre::eyre!("move of a discarded card changed the board"));
    }
    Ok(())
}

#[then("the card is rejected")]
fn card_is_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result"))?;

    if !matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::EmptyCardTitle))
    ) {
        return Err(eyre::eyre!("expected EmptyCardTitle error, got {result:?}"));
    }
    Ok(())
}

#[then("the board holds {count:usize} cards")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board()?.store().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} cards, found {actual}"));
    }
    Ok(())
}
