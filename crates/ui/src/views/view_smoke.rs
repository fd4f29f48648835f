use std::time::Duration;

use learner_core::model::{Choice, GameMode, Topic};
use services::{GameSettings, ScreenPhase};

use super::GameIntent;
use super::test_harness::{ViewHarness, setup_view_harness};

fn seeded() -> GameSettings {
    GameSettings::default().with_seed(11)
}

fn right_choice(harness: &ViewHarness) -> Choice {
    harness.with_game(|game| game.round().correct())
}

fn wrong_choice(harness: &ViewHarness) -> Choice {
    harness.with_game(|game| {
        let round = game.round();
        round
            .options()
            .iter()
            .copied()
            .find(|option| !round.is_correct(*option))
            .expect("wrong option")
    })
}

#[tokio::test(flavor = "current_thread")]
async fn numbers_screen_renders_round_and_chrome() {
    let harness = setup_view_harness(seeded());
    let html = harness.render();

    for expected in [
        "Count the things and pick the right number!",
        "Correct: 0",
        "Attempts: 0",
        "Stickers:",
        "🔢 Numbers: count and pick!",
        "Mix",
        "New game",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }

    let labels = harness.with_game(|game| {
        game.round()
            .options()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    });
    assert_eq!(labels.len(), 4);
    for label in labels {
        assert!(html.contains(&format!(">{label}<")), "missing option {label} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn correct_selection_updates_score_and_feedback() {
    let mut harness = setup_view_harness(seeded());
    let choice = right_choice(&harness);

    harness.dispatch(GameIntent::Select(choice));
    let html = harness.render();
    assert!(html.contains("Correct: 1"), "missing score in {html}");
    assert!(html.contains("Right! 🎉"), "missing feedback in {html}");
    assert!(html.contains("flash-success"), "missing flash in {html}");
    assert_eq!(
        harness.with_game(|game| game.phase()),
        ScreenPhase::ShowingFeedback
    );
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_selection_counts_an_attempt_only() {
    let mut harness = setup_view_harness(seeded());
    let choice = wrong_choice(&harness);

    harness.dispatch(GameIntent::Select(choice));
    let html = harness.render();
    assert!(html.contains("Correct: 0"), "missing score in {html}");
    assert!(html.contains("Attempts: 1"), "missing attempts in {html}");
    assert!(html.contains("tone-warning"), "missing warning tone in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sticker_goal_fills_the_sticker_bar() {
    let settings = seeded().with_sticker_goal(1).expect("valid goal");
    let mut harness = setup_view_harness(settings);
    let choice = right_choice(&harness);

    harness.dispatch(GameIntent::Select(choice));
    let html = harness.render();
    assert!(html.contains("🌟"), "missing sticker in {html}");
    assert!(html.contains("You earned a sticker"), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn show_topic_deals_a_round_for_that_topic() {
    let mut harness = setup_view_harness(seeded());

    harness.dispatch(GameIntent::ShowTopic(Topic::Letters));
    let html = harness.render();
    assert_eq!(harness.with_game(|game| game.round().mode()), GameMode::Letters);
    assert!(html.contains("Find the right letter!"), "missing title in {html}");
    assert!(html.contains("🔤 Letters"), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn new_game_resets_the_score() {
    let mut harness = setup_view_harness(seeded());
    let choice = wrong_choice(&harness);
    harness.dispatch(GameIntent::Select(choice));

    harness.dispatch(GameIntent::NewGame);
    let html = harness.render();
    assert!(html.contains("Attempts: 0"), "score not reset in {html}");
    assert!(html.contains("New game, have fun!"), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn scheduled_advance_deals_the_next_round() {
    let settings = seeded()
        .with_advance_delay(Duration::from_millis(5))
        .and_then(|s| s.with_flash_delay(Duration::from_millis(1)))
        .expect("valid delays");
    let mut harness = setup_view_harness(settings);
    let choice = right_choice(&harness);
    harness.dispatch(GameIntent::Select(choice));

    for _ in 0..40 {
        let settled = harness.with_game(|game| {
            game.phase() == ScreenPhase::AwaitingAnswer && game.feedback().is_none()
        });
        if settled {
            break;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
        harness.drive_async().await;
    }

    assert_eq!(
        harness.with_game(|game| game.phase()),
        ScreenPhase::AwaitingAnswer
    );
    let html = harness.render();
    assert!(!html.contains("Right! 🎉"), "feedback still shown in {html}");
    assert!(!html.contains("flash-success"), "flash still shown in {html}");
    assert!(html.contains("Correct: 1"), "score lost in {html}");
}
