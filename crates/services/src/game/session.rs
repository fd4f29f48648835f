use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use learner_core::model::{Choice, Round, SessionTally, Topic};
use learner_core::{generate_for_topic, validate};

use super::feedback::{
    ENCOURAGEMENT, Feedback, NEW_GAME, PRAISE, STICKER_EARNED, Tone, greeting, mix_announcement,
};
use super::schedule::{Fired, ScheduledAction, ScheduledJob, Ticket};
use crate::settings::GameSettings;

/// Where the current screen is in its answer cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenPhase {
    /// Options are shown and a selection will be scored.
    AwaitingAnswer,
    /// Feedback is visible; selections are ignored until a scheduled action fires.
    ShowingFeedback,
}

/// Result of scoring a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerReport {
    pub correct: bool,
    pub new_sticker_earned: bool,
    /// Actions to run later, each guarded by its own ticket.
    pub jobs: Vec<ScheduledJob>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One child's game: the active screen, its round, and the running tally.
///
/// The presentation layer owns exactly one session and drives it with
/// [`show_topic`], [`mix`], [`select`], [`fire`] and [`new_game`]. Delays are the
/// caller's job: `select` returns the jobs to schedule and `fire` applies them.
///
/// [`show_topic`]: GameSession::show_topic
/// [`mix`]: GameSession::mix
/// [`select`]: GameSession::select
/// [`fire`]: GameSession::fire
/// [`new_game`]: GameSession::new_game
#[derive(Debug)]
pub struct GameSession {
    settings: GameSettings,
    rng: StdRng,
    tally: SessionTally,
    topic: Topic,
    round: Round,
    epoch: u64,
    answer: u64,
    phase: ScreenPhase,
    feedback: Option<Feedback>,
    flash: Option<Tone>,
    status: &'static str,
}

impl GameSession {
    /// Start on the numbers screen with an empty tally.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        let mut rng = match settings.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let topic = Topic::Numbers;
        let round = generate_for_topic(topic, &mut rng);

        Self {
            settings,
            rng,
            tally: SessionTally::with_goal(settings.sticker_goal()),
            topic,
            round,
            epoch: 0,
            answer: 0,
            phase: ScreenPhase::AwaitingAnswer,
            feedback: None,
            flash: None,
            status: greeting(topic),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    #[must_use]
    pub fn topic(&self) -> Topic {
        self.topic
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Tint of the content area, if a flash is active.
    #[must_use]
    pub fn flash(&self) -> Option<Tone> {
        self.flash
    }

    /// Line shown under the navigation bar.
    #[must_use]
    pub fn status(&self) -> &'static str {
        self.status
    }

    /// Switch to `topic` with a fresh round. Re-entering the current topic also
    /// deals a new round.
    pub fn show_topic(&mut self, topic: Topic) {
        info!(%topic, "showing topic");
        self.topic = topic;
        self.deal();
        self.status = greeting(topic);
    }

    /// Jump to a uniformly chosen topic and announce it.
    pub fn mix(&mut self) -> Topic {
        let topic = Topic::ALL[self.rng.random_range(0..Topic::ALL.len())];
        self.show_topic(topic);
        self.status = mix_announcement(topic);
        topic
    }

    /// Score `selection` against the current round.
    ///
    /// Returns `None` while feedback is showing, so a double click on the right
    /// answer counts once.
    pub fn select(&mut self, selection: Choice) -> Option<AnswerReport> {
        if self.phase != ScreenPhase::AwaitingAnswer {
            debug!(%selection, "ignoring selection while feedback is showing");
            return None;
        }

        self.answer = self.answer.wrapping_add(1);
        let correct = validate(&self.round, selection);
        let outcome = self.tally.record(correct);
        let feedback = Feedback::for_answer(self.round.mode(), correct);

        self.phase = ScreenPhase::ShowingFeedback;
        self.feedback = Some(feedback);
        self.flash = Some(feedback.tone);
        self.status = if outcome.new_sticker_earned {
            info!(stickers = self.tally.sticker_total(), "sticker earned");
            STICKER_EARNED
        } else if correct {
            self.pick_message(&PRAISE)
        } else {
            self.pick_message(&ENCOURAGEMENT)
        };

        debug!(
            mode = %self.round.mode(),
            %selection,
            correct,
            correct_count = self.tally.correct_count(),
            incorrect_count = self.tally.incorrect_count(),
            "answer recorded"
        );

        let flash_delay = self.settings.flash_delay();
        let follow_up = if correct {
            self.job(ScheduledAction::NextRound, self.settings.advance_delay())
        } else {
            self.job(ScheduledAction::Resume, flash_delay)
        };

        Some(AnswerReport {
            correct,
            new_sticker_earned: outcome.new_sticker_earned,
            jobs: vec![self.job(ScheduledAction::RevertFlash, flash_delay), follow_up],
        })
    }

    /// Apply a scheduled action unless its round has been replaced or a later
    /// answer has been given.
    pub fn fire(&mut self, ticket: Ticket) -> Fired {
        if ticket.epoch != self.epoch || ticket.answer != self.answer {
            debug!(
                ?ticket,
                epoch = self.epoch,
                answer = self.answer,
                "dropping stale scheduled action"
            );
            return Fired::Stale;
        }

        match ticket.action {
            ScheduledAction::RevertFlash => self.flash = None,
            ScheduledAction::Resume => self.phase = ScreenPhase::AwaitingAnswer,
            ScheduledAction::NextRound => self.deal(),
        }
        Fired::Applied(ticket.action)
    }

    /// Zero the tally and deal a fresh round on the current topic.
    pub fn new_game(&mut self) {
        info!(
            correct = self.tally.correct_count(),
            stickers = self.tally.sticker_total(),
            "starting new game"
        );
        self.tally.reset();
        self.deal();
        self.status = NEW_GAME;
    }

    fn deal(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.round = generate_for_topic(self.topic, &mut self.rng);
        self.phase = ScreenPhase::AwaitingAnswer;
        self.feedback = None;
        self.flash = None;
        debug!(mode = %self.round.mode(), epoch = self.epoch, "dealt round");
    }

    fn job(&self, action: ScheduledAction, delay: std::time::Duration) -> ScheduledJob {
        ScheduledJob {
            ticket: Ticket {
                epoch: self.epoch,
                answer: self.answer,
                action,
            },
            delay,
        }
    }

    fn pick_message(&mut self, messages: &[&'static str]) -> &'static str {
        messages.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use learner_core::model::{GameMode, Prompt};

    fn session() -> GameSession {
        GameSession::new(GameSettings::default().with_seed(42))
    }

    fn wrong_choice(round: &Round) -> Choice {
        round
            .options()
            .iter()
            .copied()
            .find(|option| !validate(round, *option))
            .expect("every round offers a wrong option")
    }

    fn right_choice(round: &Round) -> Choice {
        round
            .options()
            .iter()
            .copied()
            .find(|option| validate(round, *option))
            .expect("every round offers a right option")
    }

    fn job_for(report: &AnswerReport, action: ScheduledAction) -> ScheduledJob {
        *report
            .jobs
            .iter()
            .find(|job| job.ticket.action() == action)
            .expect("job scheduled")
    }

    #[test]
    fn starts_on_numbers_awaiting_an_answer() {
        let session = session();
        assert_eq!(session.topic(), Topic::Numbers);
        assert_eq!(session.round().mode(), GameMode::Numbers);
        assert_eq!(session.phase(), ScreenPhase::AwaitingAnswer);
        assert_eq!(session.status(), greeting(Topic::Numbers));
        assert_eq!(session.tally().attempts(), 0);
    }

    #[test]
    fn correct_answer_schedules_next_round_after_advance_delay() {
        let mut session = session();
        let before = session.round().clone();

        let report = session.select(right_choice(&before)).unwrap();
        assert!(report.correct);
        assert_eq!(session.phase(), ScreenPhase::ShowingFeedback);
        assert_eq!(session.flash(), Some(Tone::Success));
        assert!(PRAISE.contains(&session.status()));

        let flash = job_for(&report, ScheduledAction::RevertFlash);
        assert_eq!(flash.delay, Duration::from_millis(180));
        assert_eq!(session.fire(flash.ticket), Fired::Applied(ScheduledAction::RevertFlash));
        assert_eq!(session.flash(), None);

        let next = job_for(&report, ScheduledAction::NextRound);
        assert_eq!(next.delay, Duration::from_millis(700));
        assert_eq!(session.fire(next.ticket), Fired::Applied(ScheduledAction::NextRound));
        assert_eq!(session.phase(), ScreenPhase::AwaitingAnswer);
        assert_eq!(session.feedback(), None);
        assert_eq!(session.tally().correct_count(), 1);
    }

    #[test]
    fn wrong_answer_keeps_the_round_for_a_retry() {
        let mut session = session();
        let round = session.round().clone();

        let report = session.select(wrong_choice(&round)).unwrap();
        assert!(!report.correct);
        assert_eq!(session.flash(), Some(Tone::Warning));
        assert!(ENCOURAGEMENT.contains(&session.status()));

        let resume = job_for(&report, ScheduledAction::Resume);
        assert_eq!(resume.delay, session.settings().flash_delay());
        session.fire(resume.ticket);

        assert_eq!(session.phase(), ScreenPhase::AwaitingAnswer);
        assert_eq!(session.round(), &round);
        assert_eq!(
            session.feedback().map(|f| f.tone),
            Some(Tone::Warning),
            "retry keeps the hint visible"
        );
        assert_eq!(session.tally().incorrect_count(), 1);
    }

    #[test]
    fn selections_during_feedback_are_ignored() {
        let mut session = session();
        let choice = right_choice(&session.round().clone());

        assert!(session.select(choice).is_some());
        assert!(session.select(choice).is_none());
        assert_eq!(session.tally().correct_count(), 1);
    }

    #[test]
    fn earlier_answer_tickets_go_stale_after_a_retry() {
        let mut session = session();
        let round = session.round().clone();

        let first = session.select(wrong_choice(&round)).unwrap();
        let first_resume = job_for(&first, ScheduledAction::Resume);
        assert_eq!(
            session.fire(first_resume.ticket),
            Fired::Applied(ScheduledAction::Resume)
        );

        let second = session.select(wrong_choice(&round)).unwrap();
        assert_eq!(session.fire(first_resume.ticket), Fired::Stale);
        assert_eq!(
            session.fire(job_for(&first, ScheduledAction::RevertFlash).ticket),
            Fired::Stale
        );
        assert_eq!(session.phase(), ScreenPhase::ShowingFeedback);
        assert_eq!(session.flash(), Some(Tone::Warning));
        assert!(session.select(right_choice(&round)).is_none());
        assert_eq!(session.tally().attempts(), 2);

        for job in &second.jobs {
            assert!(matches!(session.fire(job.ticket), Fired::Applied(_)));
        }
        assert_eq!(session.phase(), ScreenPhase::AwaitingAnswer);
    }

    #[test]
    fn earlier_flash_revert_leaves_a_later_answer_tinted() {
        let mut session = session();
        let round = session.round().clone();

        let first = session.select(wrong_choice(&round)).unwrap();
        session.fire(job_for(&first, ScheduledAction::Resume).ticket);
        session.select(right_choice(&round)).unwrap();

        assert_eq!(
            session.fire(job_for(&first, ScheduledAction::RevertFlash).ticket),
            Fired::Stale
        );
        assert_eq!(session.flash(), Some(Tone::Success));
    }

    #[test]
    fn topic_switch_invalidates_pending_tickets() {
        let mut session = session();
        let report = session.select(right_choice(&session.round().clone())).unwrap();

        session.show_topic(Topic::Letters);
        let letters_round = session.round().clone();

        for job in &report.jobs {
            assert_eq!(session.fire(job.ticket), Fired::Stale);
        }
        assert_eq!(session.round(), &letters_round);
        assert_eq!(session.phase(), ScreenPhase::AwaitingAnswer);
    }

    #[test]
    fn new_game_zeroes_tally_and_drops_pending_round_advance() {
        let mut session = session();
        let report = session.select(right_choice(&session.round().clone())).unwrap();

        session.new_game();
        assert_eq!(session.tally().attempts(), 0);
        assert_eq!(session.status(), NEW_GAME);
        assert_eq!(
            session.fire(job_for(&report, ScheduledAction::NextRound).ticket),
            Fired::Stale
        );
    }

    #[test]
    fn sticker_message_replaces_praise_on_goal() {
        let settings = GameSettings::default()
            .with_seed(3)
            .with_sticker_goal(2)
            .unwrap();
        let mut session = GameSession::new(settings);

        let mut earned = Vec::new();
        let mut statuses = Vec::new();
        for _ in 0..2 {
            let report = session.select(right_choice(&session.round().clone())).unwrap();
            earned.push(report.new_sticker_earned);
            statuses.push(session.status());
            session.fire(job_for(&report, ScheduledAction::NextRound).ticket);
        }

        assert_eq!(earned, vec![false, true]);
        assert!(PRAISE.contains(&statuses[0]));
        assert_eq!(statuses[1], STICKER_EARNED);
        assert_eq!(session.tally().sticker_total(), 1);
        assert_eq!(session.tally().sticker_progress(), 0);
    }

    #[test]
    fn logic_topic_deals_logic_rounds() {
        let mut session = session();
        session.show_topic(Topic::Logic);
        for _ in 0..20 {
            assert!(matches!(
                session.round().prompt(),
                Prompt::OddOneOut { .. } | Prompt::Shape { .. }
            ));
            session.show_topic(Topic::Logic);
        }
    }

    #[test]
    fn mix_announces_the_chosen_topic() {
        let mut session = session();
        let topic = session.mix();
        assert_eq!(session.topic(), topic);
        assert_eq!(session.status(), mix_announcement(topic));
    }
}
