// main.rs
mod audio_manager;
mod process_events;
mod render;

use std::sync::mpsc::{Receiver, TryRecvError};

use rand::Rng;
use raylib::prelude::*;

use audio_manager::AudioManager;
use oregon_trail::config::{Config, DEFAULT_CONFIG_PATH};
use oregon_trail::core::player::Profession;
use oregon_trail::core::session::{GameEvent, Session};
use oregon_trail::core::shop::{self, Offer};
use oregon_trail::dialogue::{DialogueKind, DialogueService, TrailEvent};
use process_events::{UiCommand, read_frame_input, read_text, ui_command};
use render::hud;
use render::screens::{self, SetupView};
use render::sprites::{BoardView, draw_board};
use render::textures::SpriteBank;

const MAP_DIR: &str = "assets/maps";
const NAME_MAX: usize = 16;
const COMPANION_AGES: [u32; 4] = [32, 29, 14, 9];
const MESSAGE_SECS: f64 = 6.0;
const RANDOM_EVENT_CHANCE: f64 = 0.2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Screen {
    Menu,
    Setup,
    Playing,
    Paused,
    Inventory,
    Achievements,
    Shop,
    Ended,
}

struct SetupForm {
    name: String,
    profession: Profession,
    companions: Vec<String>,
    field: usize,
    error: Option<String>,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            profession: Profession::default(),
            companions: vec![String::new(); COMPANION_AGES.len()],
            field: 0,
            error: None,
        }
    }
}

impl SetupForm {
    fn field_count(&self) -> usize { 2 + self.companions.len() }

    fn text_field(&mut self) -> Option<&mut String> {
        match self.field {
            0 => Some(&mut self.name),
            1 => None,
            n => self.companions.get_mut(n - 2),
        }
    }

    fn cycle_profession(&mut self, step: isize) {
        let all = Profession::ALL;
        let i = all.iter().position(|p| *p == self.profession).unwrap_or(0) as isize;
        let n = all.len() as isize;
        self.profession = all[((i + step).rem_euclid(n)) as usize];
    }
}

struct App {
    config: Config,
    dialogue: DialogueService,
    screen: Screen,
    form: SetupForm,
    session: Option<Session>,
    pending: Vec<Receiver<String>>,
    message: Option<(String, f64)>,
    shop_greeting: Option<String>,
    shop_greeting_rx: Option<Receiver<String>>,
    inv_cursor: usize,
    shop_cursor: usize,
    play_ms: f64,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            dialogue: DialogueService::new(&config),
            config,
            screen: Screen::Menu,
            form: SetupForm::default(),
            session: None,
            pending: Vec::new(),
            message: None,
            shop_greeting: None,
            shop_greeting_rx: None,
            inv_cursor: 0,
            shop_cursor: 0,
            play_ms: 0.0,
        }
    }

    fn say(&mut self, text: impl Into<String>, now: f64) {
        self.message = Some((text.into(), now + MESSAGE_SECS));
    }

    fn start_journey(&mut self, now: f64) {
        let name = self.form.name.trim().to_string();
        if name.is_empty() {
            self.form.error = Some("Your leader needs a name".to_string());
            return;
        }
        let companions: Vec<(&str, u32)> = self
            .form
            .companions
            .iter()
            .zip(COMPANION_AGES)
            .filter(|(n, _)| !n.trim().is_empty())
            .map(|(n, a)| (n.as_str(), a))
            .collect();
        match Session::new(self.config.clone(), MAP_DIR, &name, self.form.profession, &companions) {
            Ok(session) => {
                self.session = Some(session);
                self.form.error = None;
                self.screen = Screen::Playing;
                self.say("Head west! WASD to move, Space or click to shoot.", now);
            }
            Err(e) => self.form.error = Some(e.to_string()),
        }
    }

    fn poll_dialogue(&mut self, now: f64) {
        let mut arrived = Vec::new();
        self.pending.retain(|rx| match rx.try_recv() {
            Ok(text) => {
                arrived.push(text);
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => false,
        });
        for text in arrived {
            self.say(text, now);
        }
        if let Some(rx) = &self.shop_greeting_rx {
            match rx.try_recv() {
                Ok(text) => {
                    self.shop_greeting = Some(text);
                    self.shop_greeting_rx = None;
                }
                Err(TryRecvError::Disconnected) => self.shop_greeting_rx = None,
                Err(TryRecvError::Empty) => {}
            }
        }
        if self.message.as_ref().is_some_and(|(_, until)| now > *until) {
            self.message = None;
        }
    }

    fn handle_events(&mut self, events: &[GameEvent], now: f64) {
        let mut rng = rand::thread_rng();
        for event in events {
            match event {
                GameEvent::EnemyDefeated { kind, .. } => {
                    self.pending.push(self.dialogue.request(DialogueKind::EnemyDefeated(*kind)));
                }
                GameEvent::DayPassed(_) if rng.gen_bool(RANDOM_EVENT_CHANCE) => {
                    let event = TrailEvent::random(&mut rng);
                    self.pending.push(self.dialogue.request(DialogueKind::RandomEvent(event)));
                }
                GameEvent::DryFire(weapon) => {
                    self.say(format!("Out of {} ammo! Press Q or load a box from the inventory.", weapon.label()), now);
                }
                GameEvent::ScenarioChanged(kind) => self.say(format!("The trail enters the {}.", kind.label()), now),
                GameEvent::AchievementUnlocked(d) => {
                    let title = self
                        .session
                        .as_ref()
                        .and_then(|s| s.achievements.get(*d))
                        .map(|a| a.title)
                        .unwrap_or("?");
                    self.say(format!("Achievement unlocked: {title}"), now);
                }
                GameEvent::Victory | GameEvent::GameOver(_) => self.screen = Screen::Ended,
                _ => {}
            }
        }
    }

    fn handle_command(&mut self, cmd: UiCommand, now: f64) -> bool {
        match (self.screen, cmd) {
            (Screen::Menu, UiCommand::Confirm) => {
                self.form = SetupForm::default();
                self.screen = Screen::Setup;
            }
            (Screen::Menu, UiCommand::Back) => return false,

            (Screen::Setup, UiCommand::Confirm) => self.start_journey(now),
            (Screen::Setup, UiCommand::Back) => self.screen = Screen::Menu,
            (Screen::Setup, UiCommand::NextField | UiCommand::Down) => {
                self.form.field = (self.form.field + 1) % self.form.field_count();
            }
            (Screen::Setup, UiCommand::Up) => {
                let n = self.form.field_count();
                self.form.field = (self.form.field + n - 1) % n;
            }
            (Screen::Setup, UiCommand::Left) if self.form.field == 1 => self.form.cycle_profession(-1),
            (Screen::Setup, UiCommand::Right) if self.form.field == 1 => self.form.cycle_profession(1),

            (Screen::Playing, UiCommand::Back) => self.screen = Screen::Paused,
            (Screen::Playing, UiCommand::Inventory) => {
                self.inv_cursor = 0;
                self.screen = Screen::Inventory;
            }
            (Screen::Playing, UiCommand::Achievements) => self.screen = Screen::Achievements,
            (Screen::Playing, UiCommand::Shop) => {
                self.shop_cursor = 0;
                self.shop_greeting = None;
                self.shop_greeting_rx = Some(self.dialogue.request(DialogueKind::Merchant));
                self.screen = Screen::Shop;
            }
            (Screen::Playing, UiCommand::Talk) => {
                self.pending.push(self.dialogue.request(DialogueKind::FriendlyTraveler));
            }

            (Screen::Paused, UiCommand::Back) => self.screen = Screen::Playing,
            (Screen::Paused | Screen::Ended, UiCommand::MainMenu) => {
                self.session = None;
                self.screen = Screen::Menu;
            }

            (Screen::Inventory, UiCommand::Back | UiCommand::Inventory) => self.screen = Screen::Playing,
            (Screen::Inventory, UiCommand::Up) => self.inv_cursor = self.inv_cursor.saturating_sub(1),
            (Screen::Inventory, UiCommand::Down) => {
                let len = self.session.as_ref().map_or(0, |s| s.inventory.len());
                self.inv_cursor = (self.inv_cursor + 1).min(len.saturating_sub(1));
            }
            (Screen::Inventory, UiCommand::Sort(n)) => {
                if let Some(s) = self.session.as_mut() {
                    match n {
                        1 => s.inventory.sort_by_type_bubble(),
                        2 => s.inventory.sort_by_quantity_selection(),
                        _ => s.inventory.sort_by_priority_insertion(),
                    }
                }
            }
            (Screen::Inventory, UiCommand::Confirm) => self.use_selected_item(now),

            (Screen::Achievements, UiCommand::Back | UiCommand::Achievements) => self.screen = Screen::Playing,

            (Screen::Shop, UiCommand::Back | UiCommand::Shop) => self.screen = Screen::Playing,
            (Screen::Shop, UiCommand::Up) => self.shop_cursor = self.shop_cursor.saturating_sub(1),
            (Screen::Shop, UiCommand::Down) => self.shop_cursor = (self.shop_cursor + 1).min(Offer::ALL.len() - 1),
            (Screen::Shop, UiCommand::Confirm) => self.buy_selected(now),

            (Screen::Ended, UiCommand::Confirm) => {
                if let Some(s) = self.session.as_mut() {
                    match s.restart() {
                        Ok(()) => self.screen = Screen::Playing,
                        Err(e) => log::error!("Restart failed: {e}"),
                    }
                }
            }
            _ => {}
        }
        true
    }

    fn use_selected_item(&mut self, now: f64) {
        let Some(s) = self.session.as_mut() else { return };
        let Some(name) = s.inventory.iter().nth(self.inv_cursor).map(|i| i.name.clone()) else { return };
        let text = match s.inventory.use_item(&name, &mut s.game.player, &mut s.game.caravan) {
            Ok(outcome) => outcome.to_string(),
            Err(e) => e.to_string(),
        };
        self.inv_cursor = self.inv_cursor.min(s.inventory.len().saturating_sub(1));
        self.say(text, now);
    }

    fn buy_selected(&mut self, now: f64) {
        let Some(s) = self.session.as_mut() else { return };
        let offer = Offer::ALL[self.shop_cursor];
        let text = match shop::buy(offer, &mut s.game.player, &mut s.inventory) {
            Ok(()) => format!("Bought {} for ${}", offer.label(), offer.price()),
            Err(e) => e.to_string(),
        };
        self.say(text, now);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        log::error!("Bad config {config_path}: {e}; using defaults");
        let mut config = Config::default();
        config.apply_env();
        config
    });

    let (sw, sh) = (config.window_width, config.window_height);
    let (mut window, raylib_thread) = raylib::init().size(sw, sh).title("The Oregon Trail").build();
    window.set_exit_key(None);
    window.set_target_fps(config.target_fps);

    let bank = SpriteBank::new(&mut window, &raylib_thread);
    let view = BoardView::new(16.0, 36.0, config.tile_size, config.board_width, config.board_height);
    let panel_x = (view.x + view.width()) as i32 + 12;

    let mut audio = AudioManager::new();
    if let Some(a) = audio.as_mut() {
        a.load_sfx_auto();
        a.play_music_loop_auto();
    }

    let mut app = App::new(config);
    log::info!("Started, dialogue {}", if app.dialogue.is_configured() { "online" } else { "offline" });

    while !window.window_should_close() {
        let now = window.get_time();

        if matches!(app.screen, Screen::Setup) {
            if let Some(buf) = app.form.text_field() {
                read_text(&mut window, buf, NAME_MAX);
            }
        }
        if let Some(cmd) = ui_command(&window) {
            if !app.handle_command(cmd, now) {
                break;
            }
        }

        if app.screen == Screen::Playing {
            app.play_ms += window.get_frame_time() as f64 * 1000.0;
            if let Some(session) = app.session.as_mut() {
                let input = read_frame_input(&window, &view, session.game.player.pos);
                let events = session.update(&input, app.play_ms as u64);
                if let Some(a) = audio.as_ref() {
                    a.handle_events(&events);
                }
                app.handle_events(&events, now);
            }
        }
        if let Some(a) = audio.as_ref() {
            a.set_music_paused(app.screen == Screen::Paused);
        }
        app.poll_dialogue(now);

        let fps = window.get_fps();
        let mut d = window.begin_drawing(&raylib_thread);
        match (app.screen, app.session.as_ref()) {
            (Screen::Setup, _) => {
                let v = SetupView {
                    name: &app.form.name,
                    profession: app.form.profession,
                    companions: &app.form.companions,
                    field: app.form.field,
                    error: app.form.error.as_deref(),
                };
                screens::draw_setup(&mut d, &v, sw, sh);
            }
            (Screen::Menu, _) | (_, None) => screens::draw_menu(&mut d, sw, sh, app.dialogue.is_configured()),
            (Screen::Ended, Some(s)) => {
                let headline = if s.game.won() {
                    format!("{} days on the trail", s.game.day())
                } else {
                    s.game.loss_cause().describe().to_string()
                };
                let report = format!("{}\n{}", s.game.final_report(), s.achievements.unlocked_report());
                screens::draw_end(&mut d, s.game.won(), &headline, &report, sw, sh);
            }
            (screen, Some(s)) => {
                d.clear_background(Color::new(20, 16, 10, 255));
                draw_board(&mut d, &view, &bank, s);
                hud::draw_panel(&mut d, s, panel_x, 0, sw - panel_x, sh);
                if let Some((text, _)) = &app.message {
                    hud::draw_message(&mut d, text, view.x as i32, (view.y + view.height()) as i32, view.width() as i32);
                }
                match screen {
                    Screen::Paused => screens::draw_paused(&mut d, sw, sh),
                    Screen::Inventory => screens::draw_inventory(&mut d, &s.inventory, app.inv_cursor, sw, sh),
                    Screen::Achievements => screens::draw_achievements(&mut d, &s.achievements, sw, sh),
                    Screen::Shop => screens::draw_shop(
                        &mut d,
                        &s.game.player,
                        &s.inventory,
                        app.shop_cursor,
                        app.shop_greeting.as_deref(),
                        sw,
                        sh,
                    ),
                    _ => {}
                }
                hud::draw_fps(&mut d, fps);
            }
        }
    }
    log::info!("Bye");
}
