use Direction::*;

use crate::core::Direction;
use crate::test::test_util::GameTestState;

#[test]
fn when_move_right_observes_move_right() {
    let level = r#"
#@ #
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Right);

    game.assert_matches(r#"
# @#
"#);
    assert_eq!(game.game.nmove(), 1);
    assert_eq!(game.game.npush(), 0);
}

#[test]
fn when_push_pushes() {
    let level = r#"
#@$ #
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Right);

    game.assert_matches(r#"
# @$#
"#);
    assert_eq!(game.game.nmove(), 1);
    assert_eq!(game.game.npush(), 1);
}

#[test]
fn when_push_onto_goal_box_shows_in_goal() {
    let level = r#"
#@$.#
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Right);

    game.assert_matches(r#"
# @*#
"#);
    assert!(game.game.is_solved());
}

#[test]
fn when_block_pushed_into_block_remains_two_blocks() {
    let level = r#"
#@$$ #
"#;
    let mut game = GameTestState::new(level);
    assert!(!game.try_move(Right));

    game.assert_matches(r#"
#@$$ #
"#);
}

#[test]
fn when_block_pushed_into_wall_stays_put() {
    let level = r#"
#@$#
"#;
    let mut game = GameTestState::new(level);
    assert!(!game.game.can_step(Right));
    assert!(!game.try_move(Right));

    game.assert_matches(r#"
#@$#
"#);
}

#[test]
fn rejected_move_changes_nothing() {
    let level = r#"
####
#@$#
####
"#;
    let mut game = GameTestState::new(level);
    let player = game.game.player();
    let boxes = game.game.boxes().clone();

    for direction in Direction::ALL {
        assert!(!game.try_move(direction));
    }

    assert_eq!(game.game.player(), player);
    assert_eq!(game.game.boxes(), &boxes);
    assert_eq!(game.game.nmove(), 0);
    assert_eq!(game.game.npush(), 0);
    assert_eq!(game.game.history().len(), 0);
}

#[test]
fn moving_off_the_grid_is_rejected() {
    // No surrounding walls: the grid edge itself must stop the player.
    let mut game = GameTestState::new("@");
    for direction in Direction::ALL {
        assert!(!game.game.can_step(direction));
        assert!(!game.try_move(direction));
    }
    game.assert_matches("@");
}

#[test]
fn can_step_agrees_with_step_and_does_not_mutate() {
    let level = r#"
######
#@$  #
# $. #
#  # #
######
"#;
    let mut game = GameTestState::new(level);

    for _ in 0..6 {
        for direction in Direction::ALL {
            let before = game.game.to_string();
            let predicted = game.game.can_step(direction);
            assert_eq!(game.game.to_string(), before, "can_step must not mutate");
            assert_eq!(game.try_move(direction), predicted);
        }
    }
}

#[test]
fn npush_never_exceeds_nmove() {
    let level = r#"
######
#@$  #
# $. #
#    #
######
"#;
    let mut game = GameTestState::new(level);
    for direction in [Right, Right, Down, Down, Left, Up, Right, Up, Left, Down] {
        game.try_move(direction);
        assert!(game.game.npush() <= game.game.nmove());
    }
}

#[test]
fn solved_requires_goal_coverage_not_box_count() {
    // Two boxes, one goal: covering the goal solves even with a box loose
    // on plain floor.
    let level = r#"
######
#@$.$#
######
"#;
    let mut game = GameTestState::new(level);
    assert!(!game.game.is_solved());

    game.assert_move(Right);
    game.assert_matches(r#"
######
# @*$#
######
"#);
    assert!(game.game.is_solved());
}

#[test]
fn walking_between_boxes_does_not_push() {
    let level = r#"
#####
# $ #
#@ .#
# $ #
#####
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Right);
    game.assert_matches(r#"
#####
# $ #
# @.#
# $ #
#####
"#);
    assert_eq!(game.game.npush(), 0);
}
