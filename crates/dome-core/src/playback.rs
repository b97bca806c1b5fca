//! Background music state: autoplay with retry after a user interaction,
//! play/pause, mute, volume and the auto-hiding control panel.
//!
//! The player never touches an audio element itself. Every transition pushes
//! the commands the host must apply, and the host reports back whether a
//! requested `play()` resolved or was rejected.

use crate::config::MusicConfig;
use crate::constants::{MUSIC_AUTOPLAY_DELAY_MS, MUSIC_CONTROLS_HIDE_MS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    SetMuted(bool),
    SetVolume(f32),
    SetLoop(bool),
    /// Start listening for a qualifying user interaction (click / touchstart).
    ListenForInteraction,
    StopListening,
    ShowControls(bool),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AutoplayState {
    Idle,
    Scheduled { at_ms: f64 },
    Attempting,
    AwaitingInteraction,
    Retrying,
    Done,
}

#[derive(Clone, Debug)]
pub struct MusicPlayer {
    pub playing: bool,
    pub muted: bool,
    pub volume: f32,
    pub looped: bool,
    pub controls_visible: bool,
    controls_hide_at_ms: Option<f64>,
    autoplay: AutoplayState,
}

impl MusicPlayer {
    pub fn new(cfg: &MusicConfig, now_ms: f64, out: &mut Vec<PlaybackCommand>) -> Self {
        let volume = cfg.volume.clamp(0.0, 1.0);
        out.push(PlaybackCommand::SetVolume(volume));
        out.push(PlaybackCommand::SetLoop(cfg.looped));
        Self {
            playing: false,
            muted: false,
            volume,
            looped: cfg.looped,
            controls_visible: true,
            controls_hide_at_ms: Some(now_ms + MUSIC_CONTROLS_HIDE_MS),
            autoplay: if cfg.autoplay {
                AutoplayState::Scheduled {
                    at_ms: now_ms + MUSIC_AUTOPLAY_DELAY_MS,
                }
            } else {
                AutoplayState::Idle
            },
        }
    }

    pub fn autoplay(&self) -> AutoplayState {
        self.autoplay
    }

    #[inline]
    pub fn should_sound(&self) -> bool {
        self.playing && !self.muted
    }

    pub fn tick(&mut self, now_ms: f64, out: &mut Vec<PlaybackCommand>) {
        if let AutoplayState::Scheduled { at_ms } = self.autoplay {
            if now_ms >= at_ms {
                self.autoplay = AutoplayState::Attempting;
                out.push(PlaybackCommand::Play);
            }
        }
        if let Some(at) = self.controls_hide_at_ms {
            if now_ms >= at {
                self.controls_hide_at_ms = None;
                if self.controls_visible {
                    self.controls_visible = false;
                    out.push(PlaybackCommand::ShowControls(false));
                }
            }
        }
    }

    pub fn play_succeeded(&mut self) {
        self.playing = true;
        if matches!(
            self.autoplay,
            AutoplayState::Attempting | AutoplayState::Retrying
        ) {
            self.autoplay = AutoplayState::Done;
        }
    }

    pub fn play_failed(&mut self, out: &mut Vec<PlaybackCommand>) {
        self.playing = false;
        match self.autoplay {
            AutoplayState::Attempting => {
                log::info!("[music] autoplay prevented; waiting for a user interaction");
                self.autoplay = AutoplayState::AwaitingInteraction;
                out.push(PlaybackCommand::ListenForInteraction);
            }
            AutoplayState::Retrying => {
                log::info!("[music] play after interaction failed");
                self.autoplay = AutoplayState::Done;
            }
            _ => log::info!("[music] play failed"),
        }
    }

    /// A click or touch anywhere on the page.
    pub fn user_interaction(&mut self, out: &mut Vec<PlaybackCommand>) {
        if self.autoplay == AutoplayState::AwaitingInteraction {
            self.autoplay = AutoplayState::Retrying;
            out.push(PlaybackCommand::StopListening);
            out.push(PlaybackCommand::Play);
        }
    }

    pub fn toggle_play(&mut self, now_ms: f64, out: &mut Vec<PlaybackCommand>) {
        self.playing = !self.playing;
        self.sync(out);
        self.controls_hide_at_ms = Some(now_ms + MUSIC_CONTROLS_HIDE_MS);
    }

    pub fn toggle_mute(&mut self, out: &mut Vec<PlaybackCommand>) {
        self.muted = !self.muted;
        self.sync(out);
    }

    pub fn set_volume(&mut self, volume: f32, out: &mut Vec<PlaybackCommand>) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
        out.push(PlaybackCommand::SetVolume(self.volume));
    }

    pub fn show_controls(&mut self, now_ms: f64, out: &mut Vec<PlaybackCommand>) {
        if !self.controls_visible {
            self.controls_visible = true;
            out.push(PlaybackCommand::ShowControls(true));
        }
        self.controls_hide_at_ms = Some(now_ms + MUSIC_CONTROLS_HIDE_MS);
    }

    pub fn hide_controls(&mut self, out: &mut Vec<PlaybackCommand>) {
        self.controls_hide_at_ms = None;
        if self.controls_visible {
            self.controls_visible = false;
            out.push(PlaybackCommand::ShowControls(false));
        }
    }

    fn sync(&self, out: &mut Vec<PlaybackCommand>) {
        out.push(if self.should_sound() {
            PlaybackCommand::Play
        } else {
            PlaybackCommand::Pause
        });
        out.push(PlaybackCommand::SetMuted(self.muted));
    }
}
