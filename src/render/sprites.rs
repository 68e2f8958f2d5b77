//! Board drawing: background, obstacles, enemies and the hero.
//!
//! Exposes:
//! - `BoardView`: where the board sits on screen and tile <-> pixel mapping
//! - `draw_board`: everything inside the board, enemies sorted back to front
//!
use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::*;

use oregon_trail::core::enemy::{Enemy, EnemyKind, EnemyState};
use oregon_trail::core::grid::{Direction, GridPos};
use oregon_trail::core::session::Session;

use crate::render::textures::{SpriteBank, SpriteKey};

#[derive(Copy, Clone, Debug)]
pub struct BoardView {
    pub x: f32,
    pub y: f32,
    pub tile: f32,
    pub cols: i32,
    pub rows: i32,
}

impl BoardView {
    pub fn new(x: f32, y: f32, tile: i32, cols: i32, rows: i32) -> Self {
        Self { x, y, tile: tile as f32, cols, rows }
    }

    pub fn width(&self) -> f32 { self.cols as f32 * self.tile }
    pub fn height(&self) -> f32 { self.rows as f32 * self.tile }

    pub fn tile_rect(&self, p: GridPos) -> Rectangle {
        Rectangle::new(self.x + p.x as f32 * self.tile, self.y + p.y as f32 * self.tile, self.tile, self.tile)
    }

    /// Vector in tiles from the centre of `from` to a screen point.
    pub fn aim_from(&self, from: GridPos, screen: Vector2) -> (f64, f64) {
        let cx = self.x + (from.x as f32 + 0.5) * self.tile;
        let cy = self.y + (from.y as f32 + 0.5) * self.tile;
        (((screen.x - cx) / self.tile) as f64, ((screen.y - cy) / self.tile) as f64)
    }

    pub fn contains(&self, screen: Vector2) -> bool {
        screen.x >= self.x && screen.y >= self.y && screen.x < self.x + self.width() && screen.y < self.y + self.height()
    }
}

fn draw_sprite(d: &mut RaylibDrawHandle, tex: &Texture2D, dest: Rectangle, flip: bool, tint: Color) {
    let w = tex.width() as f32;
    let h = tex.height() as f32;
    let src = Rectangle::new(0.0, 0.0, if flip { -w } else { w }, h);
    d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, tint);
}

fn enemy_fallback_color(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Bandit => Color::MAROON,
        EnemyKind::Wolf => Color::GRAY,
        EnemyKind::Bear => Color::BROWN,
    }
}

fn draw_enemy(d: &mut RaylibDrawHandle, view: &BoardView, bank: &SpriteBank, enemy: &Enemy, player: GridPos) {
    let dest = view.tile_rect(enemy.pos);
    let tint = match enemy.state {
        EnemyState::Attacking => Color::new(255, 160, 160, 255),
        _ => Color::WHITE,
    };
    match bank.get(SpriteKey::Enemy(enemy.kind)) {
        Some(tex) => draw_sprite(d, tex, dest, enemy.pos.x > player.x, tint),
        None => d.draw_rectangle_rec(dest, enemy_fallback_color(enemy.kind)),
    }
    if enemy.is_chasing() {
        d.draw_text("!", dest.x as i32 + dest.width as i32 - 8, dest.y as i32 - 4, 16, Color::YELLOW);
    }
}

pub fn draw_board(d: &mut RaylibDrawHandle, view: &BoardView, bank: &SpriteBank, session: &Session) {
    let area = Rectangle::new(view.x, view.y, view.width(), view.height());
    match bank.get(SpriteKey::Background(session.scenario.kind)) {
        Some(tex) => draw_sprite(d, tex, area, false, Color::WHITE),
        None => d.draw_rectangle_rec(area, Color::DARKGREEN),
    }

    for p in session.obstacles.iter().filter(|p| session.scenario.in_bounds(*p)) {
        let dest = view.tile_rect(p);
        match bank.get(SpriteKey::Obstacle) {
            Some(tex) => draw_sprite(d, tex, dest, false, Color::WHITE),
            None => d.draw_rectangle_rec(dest, Color::DARKGRAY),
        }
    }

    let player = &session.game.player;
    // lower rows overlap the ones above them
    let mut enemies: Vec<&Enemy> = session.enemies.iter().collect();
    enemies.sort_by_key(|e| (e.pos.y, e.pos.x));
    for enemy in enemies {
        draw_enemy(d, view, bank, enemy, player.pos);
    }

    let frame = session.anim.current();
    let key = if session.anim.moving { SpriteKey::HeroRun(frame) } else { SpriteKey::HeroIdle(frame) };
    let dest = view.tile_rect(player.pos);
    match bank.get(key) {
        Some(tex) => draw_sprite(d, tex, dest, player.facing == Direction::Left, Color::WHITE),
        None => d.draw_rectangle_rec(dest, Color::BLUE),
    }

    d.draw_rectangle_lines_ex(area, 2.0, Color::new(40, 30, 20, 255));
}
