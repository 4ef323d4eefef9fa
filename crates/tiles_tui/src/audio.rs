//! Sound cues driven by engine events.

use crate::config::AudioSettings;
use std::io::Write;
use tiles_engine::{GameEvent, GameObserver, SessionState};
use tracing::{debug, instrument, warn};

/// A sound the game can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SoundCue {
    /// Short click after every accepted move.
    #[display("click")]
    Click,
    /// Played once when the game is decided.
    #[display("game over")]
    GameOver,
}

/// Output device for sound cues.
pub trait Speaker {
    /// Starts playing `cue` at `volume` (0.0 to 1.0).
    fn play(&mut self, cue: SoundCue, volume: f32);

    /// Stops `cue` and rewinds it to the start.
    fn stop(&mut self, cue: SoundCue);
}

/// Speaker that rings the terminal bell.
///
/// The bell has no volume control and cannot be interrupted, so `stop` only
/// logs.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Speaker for TerminalBell {
    fn play(&mut self, cue: SoundCue, volume: f32) {
        debug!(%cue, volume, "Ringing terminal bell");
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            warn!(error = %e, "Failed to ring terminal bell");
        }
    }

    fn stop(&mut self, cue: SoundCue) {
        debug!(%cue, "Terminal bell cannot be stopped");
    }
}

/// Maps engine events to sound cues.
///
/// - every applied move plays [`SoundCue::Click`]
/// - a decided game plays [`SoundCue::GameOver`]
/// - a reset stops the game-over cue if it is still playing
pub struct SoundBoard<S> {
    speaker: S,
    settings: AudioSettings,
    game_over_playing: bool,
}

impl<S: Speaker> SoundBoard<S> {
    /// Creates a sound board playing through `speaker`.
    pub fn new(speaker: S, settings: AudioSettings) -> Self {
        Self {
            speaker,
            settings,
            game_over_playing: false,
        }
    }

    /// Whether the game-over cue has started and not been stopped.
    pub fn game_over_playing(&self) -> bool {
        self.game_over_playing
    }

    /// Returns the underlying speaker.
    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    fn play(&mut self, cue: SoundCue, volume: f32) -> bool {
        if !*self.settings.enabled() || volume <= 0.0 {
            debug!(%cue, "Sound muted");
            return false;
        }
        self.speaker.play(cue, volume);
        true
    }
}

impl<S: Speaker> GameObserver for SoundBoard<S> {
    #[instrument(skip(self, state), fields(filled = state.board().filled()))]
    fn on_event(&mut self, event: &GameEvent, state: &SessionState) {
        match event {
            GameEvent::MoveApplied { .. } => {
                let volume = *self.settings.click_volume();
                self.play(SoundCue::Click, volume);
            }
            GameEvent::OutcomeChanged { .. } => {
                let volume = *self.settings.game_over_volume();
                self.game_over_playing = self.play(SoundCue::GameOver, volume);
            }
            GameEvent::Reset => {
                if self.game_over_playing {
                    self.speaker.stop(SoundCue::GameOver);
                    self.game_over_playing = false;
                }
            }
        }
    }
}
