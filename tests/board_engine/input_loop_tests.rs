//! Tests for the async input pump.

use super::helpers::{demo_board, ids_in, layout};
use laneboard::board::{
    adapters::input::{input_channel, run_input_loop},
    domain::{CardId, DropTarget, LaneId},
    ports::InputEvent,
    services::CreateCardRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn events_are_applied_in_send_order() -> eyre::Result<()> {
    let mut board = demo_board()?;
    let anchors = layout(&board, "todo")?;
    let todo = DropTarget::Lane(LaneId::new("todo")?);
    let (sender, receiver) = input_channel(16);

    let events = vec![
        InputEvent::DragStart {
            card_id: CardId::new("8")?,
        },
        InputEvent::DragOver {
            target: todo.clone(),
            pointer_y: 10.0,
            anchors: anchors.clone(),
        },
        InputEvent::DragOver {
            target: todo.clone(),
            pointer_y: 70.0,
            anchors,
        },
        InputEvent::Drop { target: todo },
        InputEvent::CreateCard(CreateCardRequest::new("Follow up", "todo")),
    ];
    let producer = tokio::spawn(async move {
        for event in events {
            if sender.send(event).await.is_err() {
                break;
            }
        }
    });

    let applied = run_input_loop(&mut board, receiver).await;
    producer.await?;

    eyre::ensure!(applied == 5);
    // the later hover wins: y = 70 sits between todo midpoints 60 and 100
    eyre::ensure!(ids_in(&board, "todo")? == ["5", "6", "8", "7", "it-1"]);
    eyre::ensure!(ids_in(&board, "doing")? == ["9"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closing_the_channel_mid_drag_leaves_the_store_alone() -> eyre::Result<()> {
    let mut board = demo_board()?;
    let before = board.store().clone();
    let (sender, receiver) = input_channel(4);

    sender
        .send(InputEvent::DragStart {
            card_id: CardId::new("1")?,
        })
        .await?;
    sender
        .send(InputEvent::DragOver {
            target: DropTarget::Discard,
            pointer_y: 0.0,
            anchors: Vec::new(),
        })
        .await?;
    sender.send(InputEvent::Cancel).await?;
    drop(sender);

    let applied = run_input_loop(&mut board, receiver).await;

    eyre::ensure!(applied == 3);
    eyre::ensure!(board.store().same_snapshot(&before));
    eyre::ensure!(!board.session().is_dragging());
    Ok(())
}
