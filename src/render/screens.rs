//! Full-screen menus and the overlays that pause play.
use raylib::prelude::*;

use oregon_trail::core::achievements::AchievementLog;
use oregon_trail::core::inventory::Inventory;
use oregon_trail::core::player::{Player, Profession};
use oregon_trail::core::shop::Offer;

use crate::render::hud::wrap;

const INK: Color = Color::new(238, 226, 196, 255);
const DIM: Color = Color::new(170, 156, 128, 255);
const PICK: Color = Color::GOLD;

fn centered(d: &mut RaylibDrawHandle, text: &str, y: i32, size: i32, color: Color, screen_w: i32) {
    let w = measure_text(text, size);
    d.draw_text(text, (screen_w - w) / 2, y, size, color);
}

fn frame(d: &mut RaylibDrawHandle, x: i32, y: i32, w: i32, h: i32, title: &str) {
    d.draw_rectangle(x, y, w, h, Color::new(24, 18, 12, 240));
    d.draw_rectangle_lines(x, y, w, h, DIM);
    d.draw_text(title, x + 16, y + 12, 26, INK);
}

pub fn draw_menu(d: &mut RaylibDrawHandle, screen_w: i32, screen_h: i32, dialogue_ready: bool) {
    d.clear_background(Color::new(58, 40, 24, 255));
    centered(d, "THE OREGON TRAIL", screen_h / 4, 48, INK, screen_w);
    centered(d, "Independence, Missouri - 1848", screen_h / 4 + 60, 20, DIM, screen_w);
    centered(d, "Press ENTER to set out", screen_h / 2, 24, PICK, screen_w);
    centered(d, "Esc to quit", screen_h / 2 + 36, 18, DIM, screen_w);
    let ai = if dialogue_ready { "Dialogue: online" } else { "Dialogue: offline lines" };
    centered(d, ai, screen_h - 40, 16, DIM, screen_w);
}

pub struct SetupView<'a> {
    pub name: &'a str,
    pub profession: Profession,
    pub companions: &'a [String],
    pub field: usize,
    pub error: Option<&'a str>,
}

pub fn draw_setup(d: &mut RaylibDrawHandle, v: &SetupView, screen_w: i32, screen_h: i32) {
    d.clear_background(Color::new(58, 40, 24, 255));
    frame(d, 80, 60, screen_w - 160, screen_h - 120, "Outfit your caravan");
    let x = 110;
    let mut y = 120;

    let color = |field: usize| if v.field == field { PICK } else { INK };
    d.draw_text(&format!("Leader name: {}_", v.name), x, y, 22, color(0));
    y += 44;

    d.draw_text("Profession (Left/Right):", x, y, 22, color(1));
    y += 30;
    for p in Profession::ALL {
        let mark = if p == v.profession { ">" } else { " " };
        let c = if p == v.profession { PICK } else { DIM };
        d.draw_text(&format!("{mark} {} - ${}", p.label(), p.starting_money()), x + 20, y, 20, c);
        y += 26;
    }
    y += 18;

    d.draw_text("Companions:", x, y, 22, INK);
    y += 30;
    for (i, name) in v.companions.iter().enumerate() {
        let cursor = if v.field == i + 2 { "_" } else { "" };
        d.draw_text(&format!("{}. {name}{cursor}", i + 1), x + 20, y, 20, color(i + 2));
        y += 26;
    }

    if let Some(err) = v.error {
        d.draw_text(err, x, screen_h - 130, 18, Color::new(230, 90, 80, 255));
    }
    d.draw_text("Tab/Up/Down: field   Enter: start   Esc: back", x, screen_h - 100, 18, DIM);
}

pub fn draw_inventory(d: &mut RaylibDrawHandle, inventory: &Inventory, cursor: usize, screen_w: i32, screen_h: i32) {
    let (x, y, w, h) = (120, 80, screen_w - 240, screen_h - 160);
    frame(d, x, y, w, h, &format!("Inventory ({})", inventory.summary()));
    if inventory.is_empty() {
        d.draw_text("Your wagon is empty.", x + 20, y + 60, 20, DIM);
    }
    for (i, item) in inventory.iter().enumerate() {
        let c = if i == cursor { PICK } else { INK };
        let mark = if i == cursor { ">" } else { " " };
        let row = format!("{mark} {:<16} x{:<4} {}", item.name, item.quantity, item.category.label());
        d.draw_text(&row, x + 20, y + 60 + i as i32 * 24, 20, c);
    }
    d.draw_text("Enter: use   1: by type   2: by quantity   3: by priority", x + 20, y + h - 56, 16, DIM);
    d.draw_text("Up/Down: select   I/Esc: close", x + 20, y + h - 32, 16, DIM);
}

pub fn draw_achievements(d: &mut RaylibDrawHandle, log: &AchievementLog, screen_w: i32, screen_h: i32) {
    let (x, y, w, h) = (80, 60, screen_w - 160, screen_h - 120);
    let (unlocked, total, pct) = log.progress();
    frame(d, x, y, w, h, &format!("Achievements {unlocked}/{total} ({pct:.0}%)"));
    for (i, a) in log.catalog_in_order().enumerate() {
        let done = log.has(a.difficulty);
        let c = if done { PICK } else { DIM };
        let mark = if done { "[x]" } else { "[ ]" };
        let row_y = y + 56 + i as i32 * 44;
        d.draw_text(&format!("{mark} {}. {}", a.difficulty, a.title), x + 20, row_y, 20, c);
        d.draw_text(a.description, x + 64, row_y + 22, 16, DIM);
    }
    d.draw_text("L/Esc: close", x + 20, y + h - 30, 16, DIM);
}

pub fn draw_shop(
    d: &mut RaylibDrawHandle,
    player: &Player,
    inventory: &Inventory,
    cursor: usize,
    greeting: Option<&str>,
    screen_w: i32,
    screen_h: i32,
) {
    let (x, y, w, h) = (120, 80, screen_w - 240, screen_h - 160);
    frame(d, x, y, w, h, "General Store");
    d.draw_text(&format!("Money: ${}   {}", player.money(), inventory.summary()), x + 20, y + 50, 18, INK);
    for (i, offer) in Offer::ALL.iter().enumerate() {
        let c = if i == cursor { PICK } else { INK };
        let mark = if i == cursor { ">" } else { " " };
        let row = format!("{mark} {:<22} ${}", offer.label(), offer.price());
        d.draw_text(&row, x + 20, y + 90 + i as i32 * 28, 20, c);
    }
    if let Some(text) = greeting {
        for (i, l) in wrap(text, 48).iter().enumerate() {
            d.draw_text(l, x + 20, y + 220 + i as i32 * 22, 18, DIM);
        }
    }
    d.draw_text("Enter: buy   Up/Down: select   B/Esc: close", x + 20, y + h - 32, 16, DIM);
}

pub fn draw_paused(d: &mut RaylibDrawHandle, screen_w: i32, screen_h: i32) {
    d.draw_rectangle(0, 0, screen_w, screen_h, Color::new(0, 0, 0, 150));
    centered(d, "PAUSED", screen_h / 2 - 40, 40, INK, screen_w);
    centered(d, "Esc: resume   M: main menu", screen_h / 2 + 12, 20, DIM, screen_w);
}

/// Victory or game over, with the final report.
pub fn draw_end(d: &mut RaylibDrawHandle, won: bool, headline: &str, report: &str, screen_w: i32, screen_h: i32) {
    let bg = if won { Color::new(30, 60, 30, 255) } else { Color::new(60, 20, 20, 255) };
    d.clear_background(bg);
    let title = if won { "YOU REACHED OREGON!" } else { "GAME OVER" };
    centered(d, title, 70, 44, INK, screen_w);
    centered(d, headline, 130, 20, DIM, screen_w);
    for (i, l) in report.lines().enumerate() {
        d.draw_text(l, screen_w / 2 - 180, 180 + i as i32 * 24, 20, INK);
    }
    centered(d, "Enter: new journey   M: main menu", screen_h - 60, 20, PICK, screen_w);
}
