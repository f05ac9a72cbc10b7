//! Keyframe interpolation over whole cycles

use lab_animation::{Gait, KeyframeAnimator, KeyframeError, KeyframeSequence};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn assert_pose_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-9, "value {i}: {a} != {e}");
    }
}

#[test_case(0 ; "first keyframe")]
#[test_case(1 ; "second keyframe")]
#[test_case(2 ; "middle keyframe")]
#[test_case(3 ; "fourth keyframe")]
#[test_case(4 ; "closing keyframe")]
fn test_hexapod_hits_keyframes_exactly(index: usize) {
    let gait = Gait::hexapod().unwrap();
    let keyframe = &gait.animator().sequence().keyframes()[index];
    let pose = gait.animator().sample(keyframe.time).unwrap();
    assert_eq!(pose, keyframe.pose);
}

#[test_case(0.1)]
#[test_case(0.3)]
#[test_case(0.6)]
#[test_case(0.9)]
fn test_hexapod_is_linear_between_keyframes(time: f64) {
    let gait = Gait::hexapod().unwrap();
    let sequence = gait.animator().sequence();
    let bracket = sequence.bracket(time);
    let from = &sequence.keyframes()[bracket.previous].pose;
    let to = &sequence.keyframes()[bracket.next].pose;
    let blend = (time - bracket.start) / (bracket.end - bracket.start);

    let expected: Vec<f64> = from
        .iter()
        .zip(to)
        .map(|(h1, h2)| h1 + (h2 - h1) * blend)
        .collect();
    assert_pose_close(&gait.animator().sample(time).unwrap(), &expected);
}

#[test_case(0.2)]
#[test_case(0.65)]
#[test_case(1.0)]
fn test_phase_wraps_every_stride(distance: f64) {
    let gait = Gait::hexapod().unwrap();
    let animator = gait.animator();
    let base = animator.pose_at(distance, 1.0).unwrap();
    for cycles in 1..4 {
        let later = animator
            .pose_at(distance + f64::from(cycles) * animator.stride(), 1.0)
            .unwrap();
        assert_pose_close(&later, &base);
    }
}

#[test]
fn test_negative_phase_lands_in_cycle() {
    let gait = Gait::hexapod().unwrap();
    let animator = gait.animator();
    let time = animator.normalize(-0.325, 1.0).unwrap();
    assert!((time - 0.75).abs() < 1e-12);
    assert_pose_close(
        &animator.pose_at(-0.325, 1.0).unwrap(),
        &animator.sample(0.75).unwrap(),
    );
}

#[test]
fn test_uneven_spacing() {
    let sequence = KeyframeSequence::from_tables(
        &[0.0, 0.1, 0.8, 1.0],
        &[&[0.0, 100.0], &[10.0, 0.0], &[-4.0, 50.0], &[0.0, 100.0]],
    )
    .unwrap();
    let animator = KeyframeAnimator::new(sequence, 1.0).unwrap();

    assert_pose_close(&animator.sample(0.05).unwrap(), &[5.0, 50.0]);
    assert_pose_close(&animator.sample(0.45).unwrap(), &[3.0, 25.0]);
    assert_pose_close(&animator.sample(0.9).unwrap(), &[-2.0, 75.0]);
}

#[test]
fn test_open_cycle_blends_back_to_start() {
    let sequence =
        KeyframeSequence::from_tables(&[0.0, 0.4, 0.6], &[&[0.0], &[4.0], &[8.0]]).unwrap();
    let animator = KeyframeAnimator::new(sequence, 2.0).unwrap();

    // 0.6 -> 1.0 blends from the last pose back to the first
    assert_pose_close(&animator.sample(0.8).unwrap(), &[4.0]);
    assert_pose_close(&animator.pose_at(1.6, 1.0).unwrap(), &[4.0]);
}

#[test]
fn test_sample_into_reuses_buffer() {
    let gait = Gait::hexapod().unwrap();
    let animator = gait.animator();
    let mut pose = vec![0.0; animator.pose_len()];

    let time = animator.pose_into(0.325, 1.0, &mut pose).unwrap();
    assert!((time - 0.25).abs() < 1e-12);
    assert_pose_close(&pose, &animator.sample(0.25).unwrap());

    let mut short = vec![0.0; 4];
    assert_eq!(
        animator.pose_into(0.0, 1.0, &mut short),
        Err(KeyframeError::PoseBufferMismatch {
            expected: 12,
            actual: 4
        })
    );
}

#[test]
fn test_cycle_closes_just_past_one() {
    let gait = Gait::hexapod().unwrap();
    let sequence = gait.animator().sequence();
    let epsilon = 1e-6;
    let after = sequence.sample(1.0 + epsilon).unwrap();
    let start = sequence.sample(epsilon).unwrap();
    assert_pose_close(&after, &start);
}

#[test_case(f64::NAN ; "nan")]
#[test_case(f64::INFINITY ; "positive infinity")]
#[test_case(f64::NEG_INFINITY ; "negative infinity")]
fn test_non_finite_phase_is_rejected(phase: f64) {
    let gait = Gait::hexapod().unwrap();
    let animator = gait.animator();
    assert!(matches!(
        animator.pose_at(phase, 1.0),
        Err(KeyframeError::InvalidPhase(_))
    ));
    assert!(matches!(
        animator.sample(phase),
        Err(KeyframeError::InvalidPhase(_))
    ));
}
