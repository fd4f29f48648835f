use dioxus::prelude::*;
use dioxus::core::Task;
use learner_core::model::{Choice, Topic};
use services::GameSession;

/// Everything a child can do in the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameIntent {
    ShowTopic(Topic),
    Mix,
    Select(Choice),
    NewGame,
}

/// Delayed tasks spawned for the current round.
///
/// Cancelled whenever the round is replaced by the child rather than by a timer,
/// so a leftover timer never touches the next screen. Tickets guard the same
/// thing inside the session; this keeps the task list from outliving them.
#[derive(Clone, Copy)]
pub struct PendingJobs(Signal<Vec<Task>>);

impl PendingJobs {
    #[must_use]
    pub fn new() -> Self {
        Self(Signal::new(Vec::new()))
    }

    fn cancel_all(&mut self) {
        for task in self.0.write().drain(..) {
            task.cancel();
        }
    }

    fn push(&mut self, task: Task) {
        self.0.write().push(task);
    }
}

impl Default for PendingJobs {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_game_dispatcher() -> Callback<GameIntent> {
    let mut game = use_context::<Signal<GameSession>>();
    let mut pending = use_context::<PendingJobs>();

    use_callback(move |intent: GameIntent| match intent {
        GameIntent::ShowTopic(topic) => {
            pending.cancel_all();
            game.write().show_topic(topic);
        }
        GameIntent::Mix => {
            pending.cancel_all();
            game.write().mix();
        }
        GameIntent::NewGame => {
            pending.cancel_all();
            game.write().new_game();
        }
        GameIntent::Select(choice) => {
            let Some(report) = game.write().select(choice) else {
                return;
            };
            // A retry can arrive while the previous answer's flash revert is still pending.
            pending.cancel_all();
            for job in report.jobs {
                let task = spawn(async move {
                    tokio::time::sleep(job.delay).await;
                    let mut game = game;
                    game.write().fire(job.ticket);
                });
                pending.push(task);
            }
        }
    })
}
