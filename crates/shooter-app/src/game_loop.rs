//! Fixed-step frame loop: feeds pilot intents to the board and reports
//! per-round results.
//!
//! Runs as fast as possible by default. With `realtime` set it paces itself
//! to the tick rate, resetting the schedule instead of catching up when it
//! falls too far behind.

use std::time::{Duration, Instant};

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use shooter_core::constants::DT;
use shooter_core::enums::LossCause;
use shooter_core::state::BoardSnapshot;
use shooter_sim::Board;

use crate::autopilot::Pilot;

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Frame cap per round.
    pub max_frames: u64,
    pub rounds: u32,
    /// Seconds per frame handed to the board.
    pub dt: f64,
    /// Sleep between frames to match wall-clock time.
    pub realtime: bool,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            max_frames: 3600,
            rounds: 1,
            dt: DT,
            realtime: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub round: u32,
    pub score: u64,
    pub frames: u64,
    pub elapsed_secs: f64,
    /// `None` when the round hit the frame cap.
    pub loss_cause: Option<LossCause>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub rounds: Vec<RoundSummary>,
}

impl RunSummary {
    pub fn total_score(&self) -> u64 {
        self.rounds.iter().map(|r| r.score).sum()
    }

    pub fn total_frames(&self) -> u64 {
        self.rounds.iter().map(|r| r.frames).sum()
    }
}

pub struct GameLoop<R = ChaCha8Rng> {
    board: Board<R>,
    settings: LoopSettings,
}

impl<R: Rng> GameLoop<R> {
    pub fn new(board: Board<R>, settings: LoopSettings) -> Self {
        Self { board, settings }
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    /// Play every round, calling `on_frame` with each frame's snapshot.
    pub fn run<P: Pilot>(
        &mut self,
        pilot: &mut P,
        mut on_frame: impl FnMut(&BoardSnapshot),
    ) -> RunSummary {
        let frame_duration = Duration::from_secs_f64(self.settings.dt);
        let mut rounds = Vec::with_capacity(self.settings.rounds as usize);

        for round in 1..=self.settings.rounds {
            if round > 1 {
                self.board.reset();
            }
            let mut snapshot = self.board.snapshot();
            let mut next_frame_time = Instant::now();
            info!(round, "round started");

            for _ in 0..self.settings.max_frames {
                if pilot.wants_restart() {
                    self.board.reset();
                    snapshot = self.board.snapshot();
                }

                let intent = pilot.intent(&snapshot);
                self.board.update(self.settings.dt, &intent);
                snapshot = self.board.snapshot();
                on_frame(&snapshot);

                if !snapshot.is_playing() {
                    break;
                }
                if self.settings.realtime {
                    next_frame_time = pace(next_frame_time, frame_duration);
                }
            }

            let summary = RoundSummary {
                round,
                score: snapshot.score,
                frames: snapshot.time.frame,
                elapsed_secs: snapshot.time.elapsed_secs,
                loss_cause: snapshot.loss_cause,
            };
            info!(
                round,
                score = summary.score,
                frames = summary.frames,
                cause = ?summary.loss_cause,
                "round finished"
            );
            rounds.push(summary);
        }

        RunSummary {
            seed: self.board.config().seed,
            rounds,
        }
    }
}

/// Sleep until the next frame is due. Returns the following deadline.
fn pace(mut next_frame_time: Instant, frame_duration: Duration) -> Instant {
    next_frame_time += frame_duration;
    let now = Instant::now();
    if next_frame_time > now {
        std::thread::sleep(next_frame_time - now);
    } else if now - next_frame_time > frame_duration * 2 {
        next_frame_time = now;
    }
    next_frame_time
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autopilot::Autopilot;
    use crate::input::{InputState, Key};
    use shooter_core::commands::PlayerIntent;
    use shooter_sim::BoardConfig;

    /// Idles, asks for one restart before `restart_at`, and keeps every
    /// snapshot it was shown.
    struct Recorder {
        restart_at: usize,
        seen: Vec<BoardSnapshot>,
    }

    impl Pilot for Recorder {
        fn intent(&mut self, snapshot: &BoardSnapshot) -> PlayerIntent {
            self.seen.push(snapshot.clone());
            PlayerIntent::idle()
        }

        fn wants_restart(&mut self) -> bool {
            self.seen.len() == self.restart_at
        }
    }

    fn game_loop(seed: u64, settings: LoopSettings) -> GameLoop {
        let board = Board::new(BoardConfig {
            seed,
            ..Default::default()
        })
        .unwrap();
        GameLoop::new(board, settings)
    }

    #[test]
    fn test_round_ends_on_frame_cap_or_loss() {
        let settings = LoopSettings {
            max_frames: 120,
            rounds: 3,
            ..Default::default()
        };
        let mut game = game_loop(5, settings);
        let mut frames_seen = 0;
        let summary = game.run(&mut Autopilot::default(), |_| frames_seen += 1);

        assert_eq!(summary.seed, 5);
        assert_eq!(summary.rounds.len(), 3);
        assert_eq!(summary.total_frames(), frames_seen);
        for round in &summary.rounds {
            assert!(round.frames <= 120);
            if round.loss_cause.is_none() {
                assert_eq!(round.frames, 120);
            }
        }
    }

    #[test]
    fn test_same_seed_same_summary() {
        let settings = LoopSettings {
            max_frames: 600,
            rounds: 2,
            ..Default::default()
        };
        let a = game_loop(9, settings).run(&mut Autopilot::default(), |_| {});
        let b = game_loop(9, settings).run(&mut Autopilot::default(), |_| {});
        assert_eq!(a, b);
    }

    #[test]
    fn test_walking_off_the_board_loses() {
        let settings = LoopSettings {
            max_frames: 600,
            rounds: 1,
            ..Default::default()
        };
        let mut input = InputState::new();
        input.key_down(Key::Left);
        let summary = game_loop(1, settings).run(&mut input, |_| {});
        let round = &summary.rounds[0];
        assert!(round.loss_cause.is_some());
        assert!(round.frames < 600);
    }

    #[test]
    fn test_restart_key_resets_board() {
        let settings = LoopSettings {
            max_frames: 10,
            rounds: 1,
            ..Default::default()
        };
        let mut game = game_loop(1, settings);
        let mut input = InputState::new();
        input.key_down(Key::Restart);
        input.key_up(Key::Restart);

        let mut first_frame = None;
        game.run(&mut input, |snapshot| {
            first_frame.get_or_insert(snapshot.time.frame);
        });
        assert_eq!(first_frame, Some(1));
        // Consumed by the loop.
        assert!(!input.take_restart());
    }

    #[test]
    fn test_intent_after_restart_sees_reset_board() {
        let settings = LoopSettings {
            max_frames: 8,
            rounds: 1,
            ..Default::default()
        };
        // Near-frozen enemy and bullets so nothing ends the round early.
        let board = Board::new(BoardConfig {
            seed: 3,
            enemy_speed: 1e-6,
            bullet_speed: 1e-6,
            ..Default::default()
        })
        .unwrap();
        let mut game = GameLoop::new(board, settings);
        let mut pilot = Recorder {
            restart_at: 5,
            seen: Vec::new(),
        };
        let mut after_frame = Vec::new();
        game.run(&mut pilot, |snapshot| after_frame.push(snapshot.clone()));

        assert_eq!(pilot.seen[4].time.frame, 4);
        let restarted = &pilot.seen[5];
        assert_eq!(restarted.time.frame, 0);
        assert_eq!(restarted.score, 0);
        assert_ne!(
            restarted.player.square.center,
            after_frame[4].player.square.center
        );
        assert_eq!(after_frame[5].time.frame, 1);
    }
}
