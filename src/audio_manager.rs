use std::{fs::File, io::BufReader, io::Cursor, io::Read, sync::Arc};

use rodio::Source;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use oregon_trail::core::session::GameEvent;

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Arc<Vec<u8>>> {
    let found = paths.iter().find_map(|p| load_bytes(p));
    if found.is_none() {
        log::warn!("No sound found at any of {paths:?}");
    }
    found.map(Arc::new)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sfx { Shot, DryFire, Hit, EnemyDown, Achievement }

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bg_sink: Option<Sink>,
    shot: Option<Arc<Vec<u8>>>,
    dry_fire: Option<Arc<Vec<u8>>>,
    hit: Option<Arc<Vec<u8>>>,
    enemy_down: Option<Arc<Vec<u8>>>,
    achievement: Option<Arc<Vec<u8>>>,
    sfx_volume: f32,
}

impl AudioManager {
    /// `None` when there is no output device.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Audio disabled: {e}");
                return None;
            }
        };
        Some(Self {
            _stream,
            handle,
            bg_sink: None,
            shot: None,
            dry_fire: None,
            hit: None,
            enemy_down: None,
            achievement: None,
            sfx_volume: 0.8,
        })
    }

    pub fn load_sfx_auto(&mut self) {
        self.shot = load_bytes_any(&["assets/sounds/shot.wav", "assets/sounds/disparo.wav", "assets/sounds/shot.ogg"]);
        self.dry_fire = load_bytes_any(&["assets/sounds/dry_fire.wav", "assets/sounds/click.wav"]);
        self.hit = load_bytes_any(&["assets/sounds/hit.wav", "assets/sounds/hurt.wav", "assets/sounds/damage.wav"]);
        self.enemy_down =
            load_bytes_any(&["assets/sounds/enemy_down.wav", "assets/sounds/enemy_death.wav", "assets/sounds/kill.wav"]);
        self.achievement =
            load_bytes_any(&["assets/sounds/achievement.wav", "assets/sounds/logro.wav", "assets/sounds/unlock.wav"]);
    }

    pub fn play(&self, sfx: Sfx) {
        let data = match sfx {
            Sfx::Shot => &self.shot,
            Sfx::DryFire => &self.dry_fire,
            Sfx::Hit => &self.hit,
            Sfx::EnemyDown => &self.enemy_down,
            Sfx::Achievement => &self.achievement,
        };
        // own sink per effect so overlapping shots all sound
        if let Some(d) = data.clone() {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec.amplify(self.sfx_volume.clamp(0.0, 2.5)));
                    sink.detach();
                }
            }
        }
    }

    pub fn handle_events(&self, events: &[GameEvent]) {
        for event in events {
            let sfx = match event {
                GameEvent::Shot(_) => Sfx::Shot,
                GameEvent::DryFire(_) => Sfx::DryFire,
                GameEvent::PlayerHit { .. } => Sfx::Hit,
                GameEvent::EnemyDefeated { .. } => Sfx::EnemyDown,
                GameEvent::AchievementUnlocked(_) => Sfx::Achievement,
                _ => continue,
            };
            self.play(sfx);
        }
    }

    pub fn play_music_loop_auto(&mut self) {
        if self.bg_sink.is_some() { return; }
        let candidates = ["assets/sounds/music.ogg", "assets/sounds/music.wav", "assets/sounds/trail.ogg"];
        let Some(bytes) = candidates.iter().find_map(|p| load_bytes(p)) else {
            log::info!("No background music found");
            return;
        };
        if let Ok(dec) = Decoder::new_looped(Cursor::new(bytes)) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec);
                sink.set_volume(0.35);
                self.bg_sink = Some(sink);
            }
        }
    }

    pub fn set_music_paused(&self, paused: bool) {
        if let Some(sink) = &self.bg_sink {
            if paused { sink.pause() } else { sink.play() }
        }
    }
}
