use cyclopep::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

struct SpinnerState {
    pb: ProgressBar,
    phase: String,
}

/// Renders workflow phases and search rounds as a single stderr spinner.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<SpinnerState>>,
}

impl CliProgressHandler {
    pub fn new(quiet: bool) -> Self {
        let pb = ProgressBar::new_spinner()
            .with_style(Self::spinner_style())
            .with_message("Initializing...");
        pb.set_draw_target(if quiet {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        });
        pb.finish_and_clear();

        Self {
            state: Arc::new(Mutex::new(SpinnerState {
                pb,
                phase: String::new(),
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut guard) = state.lock() else {
                warn!("Progress spinner mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    guard.phase = name.to_string();
                    guard.pb.reset();
                    guard.pb.set_style(Self::spinner_style());
                    guard
                        .pb
                        .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    guard.pb.set_message(name.to_string());
                }
                Progress::RoundStart { round, frontier } => {
                    let message = format!("{} (round {}, {} to extend)", guard.phase, round, frontier);
                    guard.pb.set_message(message);
                }
                Progress::RoundFinish { round, survivors } => {
                    let message = format!("{} (round {}, {} kept)", guard.phase, round, survivors);
                    guard.pb.set_message(message);
                    guard.pb.tick();
                }
                Progress::PhaseFinish => {
                    guard.pb.disable_steady_tick();
                    let message = format!("✓ {}", guard.phase);
                    guard.pb.finish_with_message(message);
                }
                Progress::Message(msg) => {
                    if guard.pb.is_finished() {
                        guard.pb.set_message(msg);
                    } else {
                        guard.pb.println(format!("  {}", msg));
                    }
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
            .expect("Failed to create spinner style template")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handler_initializes_in_a_finished_state() {
        let handler = CliProgressHandler::new(true);
        let state = handler.state.lock().unwrap();
        assert!(state.pb.is_finished());
        assert!(state.phase.is_empty());
    }

    #[test]
    fn callback_tracks_phase_and_rounds() {
        let handler = CliProgressHandler::new(true);
        let callback = handler.get_callback();

        callback(Progress::PhaseStart { name: "Leaderboard" });
        {
            let state = handler.state.lock().unwrap();
            assert_eq!(state.pb.message(), "Leaderboard");
            assert!(!state.pb.is_finished());
        }

        callback(Progress::RoundStart {
            round: 2,
            frontier: 20,
        });
        {
            let state = handler.state.lock().unwrap();
            assert_eq!(state.pb.message(), "Leaderboard (round 2, 20 to extend)");
        }

        callback(Progress::RoundFinish {
            round: 2,
            survivors: 12,
        });
        {
            let state = handler.state.lock().unwrap();
            assert_eq!(state.pb.message(), "Leaderboard (round 2, 12 kept)");
        }

        callback(Progress::PhaseFinish);
        {
            let state = handler.state.lock().unwrap();
            assert!(state.pb.is_finished());
            assert_eq!(state.pb.message(), "✓ Leaderboard");
        }
    }

    #[test]
    fn messages_after_a_phase_replace_the_final_line() {
        let handler = CliProgressHandler::new(true);
        let callback = handler.get_callback();

        callback(Progress::PhaseStart { name: "Spectral Convolution" });
        callback(Progress::PhaseFinish);
        callback(Progress::Message("Selected alphabet: ILKQW".to_string()));

        let state = handler.state.lock().unwrap();
        assert_eq!(state.pb.message(), "Selected alphabet: ILKQW");
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::new(true);
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart {
                name: "Brute Force",
            });
            callback(Progress::RoundStart {
                round: 1,
                frontier: 1,
            });
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        let state = handler.state.lock().unwrap();
        assert!(state.pb.is_finished());
        assert_eq!(state.pb.message(), "✓ Brute Force");
    }
}
