use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{CandidateQueue, PassOutcome, QueueState, SelectionPass};
use crate::gesture::{Decision, DecisionKey, GestureConfig, GestureEvent};
use crate::model::{Photo, PhotoId, Size};

fn photo(id: i64) -> Photo {
    Photo {
        id: PhotoId(id),
        data: vec![id as u8],
        size: Size {
            width: 640,
            height: 480,
        },
    }
}

fn photos(n: usize) -> Vec<Photo> {
    (0..n as i64).map(photo).collect()
}

fn ids(photos: &[Photo]) -> Vec<PhotoId> {
    photos.iter().map(|photo| photo.id).collect()
}

fn is_subsequence(shorter: &[PhotoId], longer: &[PhotoId]) -> bool {
    let mut rest = longer.iter();
    shorter.iter().all(|id| rest.any(|other| other == id))
}

fn pass(n: usize) -> SelectionPass {
    SelectionPass::new(photos(n), GestureConfig::default())
}

fn keep(pass: &mut SelectionPass) -> super::PassUpdate {
    pass.handle_event(GestureEvent::Key(DecisionKey::Right))
}

fn reject(pass: &mut SelectionPass) -> super::PassUpdate {
    pass.handle_event(GestureEvent::Key(DecisionKey::Left))
}

#[test]
fn reject_keep_keep_worked_example() {
    // queue = [A, B, C]
    let mut pass = pass(3);
    assert_eq!(pass.current_photo().unwrap().id, PhotoId(0));

    // reject A: [B, C], cursor stays on index 0 showing B
    let update = reject(&mut pass);
    assert_eq!(update.outcome, None);
    assert_eq!(pass.current_photo().unwrap().id, PhotoId(1));
    assert_eq!(pass.counter(), (1, 2));

    // keep B: shows C
    let update = keep(&mut pass);
    assert_eq!(update.outcome, None);
    assert_eq!(pass.current_photo().unwrap().id, PhotoId(2));
    assert_eq!(pass.counter(), (2, 2));

    // keep C: cursor == len, pass complete with [B, C]
    let update = keep(&mut pass);
    match update.outcome {
        Some(PassOutcome::Complete(kept)) => {
            assert_eq!(ids(&kept), vec![PhotoId(1), PhotoId(2)]);
        }
        other => panic!("expected completed pass, got {other:?}"),
    }
}

#[test]
fn keeping_everything_preserves_count_and_order() {
    let mut pass = pass(5);
    for _ in 0..4 {
        assert_eq!(keep(&mut pass).outcome, None);
    }
    let update = keep(&mut pass);
    match update.outcome {
        Some(PassOutcome::Complete(kept)) => {
            assert_eq!(ids(&kept), (0..5).map(PhotoId).collect::<Vec<_>>());
        }
        other => panic!("expected completed pass, got {other:?}"),
    }
}

#[test]
fn rejecting_everything_is_reported() {
    let mut pass = pass(2);
    assert_eq!(reject(&mut pass).outcome, None);
    assert_eq!(
        reject(&mut pass).outcome,
        Some(PassOutcome::AllRejected)
    );
}

#[test]
fn rejecting_the_last_photo_clamps_back() {
    let mut queue = CandidateQueue::new(photos(3));
    assert_eq!(queue.apply(Decision::Keep), QueueState::Deciding);
    assert_eq!(queue.apply(Decision::Keep), QueueState::Deciding);
    assert_eq!(queue.index(), 2);
    // rejecting at the end puts the cursor back on the new last photo
    assert_eq!(queue.apply(Decision::Reject), QueueState::Deciding);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.index(), 1);
    assert_eq!(queue.current().unwrap().id, PhotoId(1));
}

#[test]
fn apply_on_finished_queue_is_a_no_op() {
    let mut queue = CandidateQueue::new(photos(1));
    assert_eq!(queue.apply(Decision::Keep), QueueState::Complete);
    assert_eq!(queue.apply(Decision::Keep), QueueState::Complete);
    assert_eq!(queue.apply(Decision::Reject), QueueState::Complete);
    assert_eq!(queue.len(), 1);
}

#[test]
fn abandoned_drag_does_not_mutate_the_queue() {
    let mut pass = pass(3);
    pass.handle_event(GestureEvent::DragStart { x: 0.0 });
    pass.handle_event(GestureEvent::DragMove { x: 80.0 });
    let update = pass.handle_event(GestureEvent::DragEnd);
    assert_eq!(update.outcome, None);
    assert_eq!(update.view, crate::gesture::ViewState::NEUTRAL);
    assert_eq!(pass.counter(), (1, 3));
    assert_eq!(pass.current_photo().unwrap().id, PhotoId(0));
}

#[test]
fn committing_drag_drives_the_queue() {
    let mut pass = pass(2);
    pass.handle_event(GestureEvent::DragStart { x: 0.0 });
    pass.handle_event(GestureEvent::DragMove { x: -150.0 });
    let update = pass.handle_event(GestureEvent::DragEnd);
    assert_eq!(update.outcome, None);
    // A was rejected, B is shown
    assert_eq!(pass.current_photo().unwrap().id, PhotoId(1));
    assert_eq!(pass.counter(), (1, 1));
}

#[test]
fn commit_mid_drag_resets_the_session() {
    let mut pass = pass(3);
    pass.handle_event(GestureEvent::DragStart { x: 0.0 });
    pass.handle_event(GestureEvent::DragMove { x: 300.0 });
    // key wins while the drag is still open
    let update = keep(&mut pass);
    assert_eq!(update.outcome, None);
    // the stale drag must not commit onto the next photo
    let update = pass.handle_event(GestureEvent::DragEnd);
    assert_eq!(update.outcome, None);
    assert_eq!(pass.counter(), (2, 3));
}

#[test]
fn prop_queue_commit_arithmetic() {
    proptest!(|(n in 1usize..12, decisions in prop::collection::vec(any::<bool>(), 1..40))| {
        let original = ids(&photos(n));
        let mut queue = CandidateQueue::new(photos(n));
        for keep in decisions {
            if queue.state() != QueueState::Deciding {
                break;
            }
            let index = queue.index();
            let len = queue.len();
            let state = queue.apply(if keep { Decision::Keep } else { Decision::Reject });
            if keep {
                prop_assert_eq!(queue.len(), len);
                prop_assert_eq!(queue.index(), index + 1);
            } else {
                prop_assert_eq!(queue.len(), len - 1);
                if len > 1 {
                    prop_assert_eq!(queue.index(), index.min(len - 2));
                } else {
                    prop_assert_eq!(state, QueueState::AllRejected);
                }
            }
            prop_assert!(queue.index() <= queue.len());
            prop_assert!(is_subsequence(&ids(queue.photos()), &original));
        }
    });
}

#[test]
fn prop_pass_keeps_exactly_the_unrejected() {
    proptest!(|(n in 1usize..10, decisions in prop::collection::vec(any::<bool>(), 0..60))| {
        let original = ids(&photos(n));
        let mut pass = SelectionPass::new(photos(n), GestureConfig::default());
        let mut rejected: Vec<PhotoId> = Vec::new();
        let mut outcome = None;
        for decide_keep in decisions {
            let shown = pass.current_photo().map(|photo| photo.id);
            let update = if decide_keep {
                keep(&mut pass)
            } else {
                rejected.push(shown.unwrap());
                reject(&mut pass)
            };
            if update.outcome.is_some() {
                outcome = update.outcome;
                break;
            }
        }
        match outcome {
            Some(PassOutcome::Complete(kept)) => {
                let expected: Vec<PhotoId> = original
                    .iter()
                    .copied()
                    .filter(|id| !rejected.contains(id))
                    .collect();
                prop_assert_eq!(ids(&kept), expected);
            }
            Some(PassOutcome::AllRejected) => {
                prop_assert_eq!(rejected.len(), original.len());
            }
            // ran out of input mid-pass; nothing terminal to check
            None => {}
        }
    });
}
