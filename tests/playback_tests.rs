// Host-side tests for the background music state machine.

use dome_core::*;

fn config(autoplay: bool) -> MusicConfig {
    MusicConfig {
        src: "media/song.mp3".to_string(),
        autoplay,
        looped: true,
        volume: 0.5,
    }
}

#[test]
fn new_player_configures_element() {
    let mut out = Vec::new();
    let p = MusicPlayer::new(&config(false), 0.0, &mut out);
    assert_eq!(
        out,
        vec![PlaybackCommand::SetVolume(0.5), PlaybackCommand::SetLoop(true)]
    );
    assert!(!p.playing);
    assert!(p.controls_visible);
    assert_eq!(p.autoplay(), AutoplayState::Idle);
}

#[test]
fn autoplay_starts_after_delay() {
    let mut out = Vec::new();
    let mut p = MusicPlayer::new(&config(true), 1_000.0, &mut out);
    out.clear();
    p.tick(1_499.0, &mut out);
    assert!(out.is_empty());
    p.tick(1_500.0, &mut out);
    assert_eq!(out, vec![PlaybackCommand::Play]);
    assert_eq!(p.autoplay(), AutoplayState::Attempting);

    p.play_succeeded();
    assert!(p.playing);
    assert_eq!(p.autoplay(), AutoplayState::Done);

    out.clear();
    p.tick(1_600.0, &mut out);
    assert!(out.is_empty());
}

#[test]
fn rejected_autoplay_retries_on_interaction() {
    let mut out = Vec::new();
    let mut p = MusicPlayer::new(&config(true), 0.0, &mut out);
    p.tick(500.0, &mut out);
    out.clear();

    p.play_failed(&mut out);
    assert!(!p.playing);
    assert_eq!(out, vec![PlaybackCommand::ListenForInteraction]);
    assert_eq!(p.autoplay(), AutoplayState::AwaitingInteraction);

    out.clear();
    p.user_interaction(&mut out);
    assert_eq!(
        out,
        vec![PlaybackCommand::StopListening, PlaybackCommand::Play]
    );

    out.clear();
    p.user_interaction(&mut out);
    assert!(out.is_empty());

    p.play_succeeded();
    assert!(p.playing);
    assert_eq!(p.autoplay(), AutoplayState::Done);
}

#[test]
fn failed_retry_gives_up() {
    let mut out = Vec::new();
    let mut p = MusicPlayer::new(&config(true), 0.0, &mut out);
    p.tick(500.0, &mut out);
    p.play_failed(&mut out);
    p.user_interaction(&mut out);
    out.clear();
    p.play_failed(&mut out);
    assert!(out.is_empty());
    assert_eq!(p.autoplay(), AutoplayState::Done);
    assert!(!p.playing);
}

#[test]
fn toggles_drive_play_and_mute() {
    let mut out = Vec::new();
    let mut p = MusicPlayer::new(&config(false), 0.0, &mut out);
    out.clear();

    p.toggle_play(10.0, &mut out);
    assert_eq!(
        out,
        vec![PlaybackCommand::Play, PlaybackCommand::SetMuted(false)]
    );
    assert!(p.should_sound());

    out.clear();
    p.toggle_mute(&mut out);
    assert_eq!(
        out,
        vec![PlaybackCommand::Pause, PlaybackCommand::SetMuted(true)]
    );
    assert!(p.playing && p.muted);
    assert!(!p.should_sound());

    out.clear();
    p.toggle_mute(&mut out);
    p.toggle_play(20.0, &mut out);
    assert!(!p.playing);
    assert_eq!(out.last(), Some(&PlaybackCommand::SetMuted(false)));
    assert!(out.contains(&PlaybackCommand::Pause));
}

#[test]
fn volume_is_clamped() {
    let mut out = Vec::new();
    let mut p = MusicPlayer::new(&config(false), 0.0, &mut out);
    out.clear();
    p.set_volume(1.7, &mut out);
    p.set_volume(-0.2, &mut out);
    p.set_volume(f32::NAN, &mut out);
    assert_eq!(
        out,
        vec![
            PlaybackCommand::SetVolume(1.0),
            PlaybackCommand::SetVolume(0.0),
            PlaybackCommand::SetVolume(0.0)
        ]
    );
}

#[test]
fn controls_auto_hide_and_reappear() {
    let mut out = Vec::new();
    let mut p = MusicPlayer::new(&config(false), 0.0, &mut out);
    out.clear();

    p.tick(2_999.0, &mut out);
    assert!(p.controls_visible);
    p.tick(3_000.0, &mut out);
    assert!(!p.controls_visible);
    assert_eq!(out, vec![PlaybackCommand::ShowControls(false)]);

    out.clear();
    p.show_controls(4_000.0, &mut out);
    assert_eq!(out, vec![PlaybackCommand::ShowControls(true)]);
    p.show_controls(5_000.0, &mut out);
    assert_eq!(out.len(), 1);
    p.tick(7_999.0, &mut out);
    assert!(p.controls_visible);
    p.tick(8_000.0, &mut out);
    assert!(!p.controls_visible);

    out.clear();
    p.hide_controls(&mut out);
    assert!(out.is_empty());
}
