use raylib::prelude::*;
use std::collections::HashMap;

use oregon_trail::core::enemy::EnemyKind;
use oregon_trail::core::grid::ScenarioType;
use oregon_trail::core::session::{HERO_IDLE_FRAMES, HERO_RUN_FRAMES};

/// CPU pixels for a procedural placeholder, uploaded once as an `Image`.
#[derive(Clone)]
struct Pixmap {
    w: u32,
    h: u32,
    px: Vec<Color>,
}

impl Pixmap {
    fn new(w: u32, h: u32, px: Vec<Color>) -> Self { Self { w, h, px } }

    fn to_image(&self) -> Image {
        let mut img = Image::gen_image_color(self.w as i32, self.h as i32, Color::BLANK);
        for y in 0..self.h {
            for x in 0..self.w {
                let c = self.px[(y * self.w + x) as usize];
                if c.a > 0 {
                    img.draw_pixel(x as i32, y as i32, c);
                }
            }
        }
        img
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    HeroIdle(usize),
    HeroRun(usize),
    Enemy(EnemyKind),
    Background(ScenarioType),
    Obstacle,
}

pub struct SpriteBank {
    textures: HashMap<SpriteKey, Texture2D>,
}

fn kind_slug(kind: EnemyKind) -> &'static str {
    match kind {
        EnemyKind::Bandit => "bandit",
        EnemyKind::Wolf => "wolf",
        EnemyKind::Bear => "bear",
    }
}

fn scenario_slug(kind: ScenarioType) -> &'static str {
    match kind {
        ScenarioType::Start => "llanuras",
        ScenarioType::Road => "montana",
        ScenarioType::River => "rio",
    }
}

/// Files tried for each sprite, first hit wins.
fn candidates(key: SpriteKey) -> Vec<String> {
    match key {
        SpriteKey::HeroIdle(i) => vec![
            format!("assets/images/hero/idle_{i}.png"),
            format!("assets/images/hero_idle_{i}.png"),
        ],
        SpriteKey::HeroRun(i) => vec![
            format!("assets/images/hero/run_{i}.png"),
            format!("assets/images/hero_run_{i}.png"),
        ],
        SpriteKey::Enemy(kind) => vec![
            format!("assets/images/enemy_{}.png", kind_slug(kind)),
            "assets/images/enemy.png".to_string(),
        ],
        SpriteKey::Background(kind) => vec![
            format!("assets/images/bg_{}.png", scenario_slug(kind)),
            format!("assets/images/{}.png", scenario_slug(kind)),
        ],
        SpriteKey::Obstacle => vec!["assets/images/rock.png".to_string(), "assets/images/obstacle.png".to_string()],
    }
}

impl SpriteBank {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread) -> Self {
        let mut keys = vec![SpriteKey::Obstacle];
        keys.extend((0..HERO_IDLE_FRAMES).map(SpriteKey::HeroIdle));
        keys.extend((0..HERO_RUN_FRAMES).map(SpriteKey::HeroRun));
        keys.extend([EnemyKind::Bandit, EnemyKind::Wolf, EnemyKind::Bear].map(SpriteKey::Enemy));
        keys.extend([ScenarioType::Start, ScenarioType::Road, ScenarioType::River].map(SpriteKey::Background));

        let mut bank = Self { textures: HashMap::new() };
        let mut missing = 0;
        for key in keys {
            let img = match candidates(key).iter().find_map(|p| Image::load_image(p).ok()) {
                Some(img) => img,
                None => {
                    missing += 1;
                    Self::placeholder(key).to_image()
                }
            };
            match rl.load_texture_from_image(thread, &img) {
                Ok(tex) => {
                    bank.textures.insert(key, tex);
                }
                Err(e) => log::warn!("Could not upload sprite {key:?}: {e}"),
            }
        }
        if missing > 0 {
            log::warn!("{missing} sprites missing under assets/images, using placeholders");
        }
        bank
    }

    pub fn get(&self, key: SpriteKey) -> Option<&Texture2D> {
        self.textures.get(&key)
    }

    fn placeholder(key: SpriteKey) -> Pixmap {
        match key {
            SpriteKey::HeroIdle(i) => Self::make_figure(32, 32, Color::new(70, 110, 200, 255), 0, i),
            SpriteKey::HeroRun(i) => {
                // alternate the legs so the run cycle reads
                let stride = if i % 2 == 0 { 2 } else { -2 };
                Self::make_figure(32, 32, Color::new(70, 110, 200, 255), stride, i)
            }
            SpriteKey::Enemy(EnemyKind::Bandit) => Self::make_enemy_flat(32, 32, Color::new(150, 40, 40, 255)),
            SpriteKey::Enemy(EnemyKind::Wolf) => Self::make_enemy_flat(32, 32, Color::new(120, 120, 130, 255)),
            SpriteKey::Enemy(EnemyKind::Bear) => Self::make_enemy_flat(32, 32, Color::new(110, 70, 35, 255)),
            SpriteKey::Background(ScenarioType::Start) => Self::make_checker_pixmap(128, 128, Color::new(96, 140, 60, 255)),
            SpriteKey::Background(ScenarioType::Road) => Self::make_checker_pixmap(128, 128, Color::new(120, 104, 84, 255)),
            SpriteKey::Background(ScenarioType::River) => Self::make_checker_pixmap(128, 128, Color::new(60, 120, 130, 255)),
            SpriteKey::Obstacle => Self::make_checker_pixmap(32, 32, Color::new(90, 84, 78, 255)),
        }
    }

    fn make_checker_pixmap(w: u32, h: u32, base: Color) -> Pixmap {
        let mut px = vec![base; (w * h) as usize];
        let cell = 8u32;
        for y in 0..h {
            for x in 0..w {
                if ((x / cell) + (y / cell)) % 2 == 0 {
                    let i = (y * w + x) as usize;
                    px[i] = Self::mix(px[i], Color::WHITE, 24);
                }
            }
        }
        Pixmap::new(w, h, px)
    }

    /// Round body, used for every enemy kind.
    fn make_enemy_flat(w: u32, h: u32, body: Color) -> Pixmap {
        let mut px = vec![Color::BLANK; (w * h) as usize];
        let cx = (w as f32) * 0.5;
        let cy = (h as f32) * 0.6;
        let rx = (w as f32) * 0.3;
        let ry = (h as f32) * 0.35;
        for y in 0..h {
            for x in 0..w {
                let nx = (x as f32 - cx) / rx;
                let ny = (y as f32 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    // darker toward the bottom edge
                    let shade = ((ny + 1.0) * 40.0) as u8;
                    px[(y * w + x) as usize] = Self::mix(body, Color::BLACK, shade);
                }
            }
        }
        Pixmap::new(w, h, px)
    }

    /// Head, torso and two legs offset by `stride` pixels.
    fn make_figure(w: u32, h: u32, body: Color, stride: i32, frame: usize) -> Pixmap {
        let mut px = vec![Color::BLANK; (w * h) as usize];
        let skin = Color::new(230, 190, 150, 255);
        let bob = (frame % 2) as u32;
        let mut fill = |x0: i32, y0: i32, x1: i32, y1: i32, c: Color| {
            for y in y0.max(0)..y1.min(h as i32) {
                for x in x0.max(0)..x1.min(w as i32) {
                    px[(y as u32 * w + x as u32) as usize] = c;
                }
            }
        };
        let top = 4 + bob as i32;
        fill(12, top, 20, top + 7, skin);
        fill(10, top + 7, 22, top + 18, body);
        fill(11 + stride, top + 18, 15 + stride, 30, Self::mix(body, Color::BLACK, 90));
        fill(17 - stride, top + 18, 21 - stride, 30, Self::mix(body, Color::BLACK, 90));
        Pixmap::new(w, h, px)
    }

    #[inline]
    fn mix(a: Color, b: Color, t: u8) -> Color {
        let ta = t as u16;
        let na = 255u16 - ta;
        let mixc = |x: u8, y: u8| -> u8 { (((x as u16) * na + (y as u16) * ta) / 255) as u8 };
        Color::new(mixc(a.r, b.r), mixc(a.g, b.g), mixc(a.b, b.b), a.a)
    }
}
