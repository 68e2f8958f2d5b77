//! Side panel and message boxes drawn over the board.
use raylib::prelude::*;

use oregon_trail::core::game::TOTAL_DISTANCE;
use oregon_trail::core::session::Session;

const PANEL_BG: Color = Color::new(34, 26, 18, 235);
const INK: Color = Color::new(238, 226, 196, 255);
const DIM: Color = Color::new(170, 156, 128, 255);

/// Greedy word wrap by character count.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}

fn bar(d: &mut RaylibDrawHandle, x: i32, y: i32, w: i32, h: i32, frac: f32, fill: Color) {
    d.draw_rectangle(x, y, w, h, Color::new(20, 16, 10, 255));
    d.draw_rectangle(x, y, (w as f32 * frac.clamp(0.0, 1.0)) as i32, h, fill);
    d.draw_rectangle_lines(x, y, w, h, DIM);
}

pub fn draw_panel(d: &mut RaylibDrawHandle, session: &Session, x: i32, y: i32, w: i32, h: i32) {
    d.draw_rectangle(x, y, w, h, PANEL_BG);
    let game = &session.game;
    let player = &game.player;
    let caravan = &game.caravan;
    let mut line = y + 12;
    let text = |d: &mut RaylibDrawHandle, line: &mut i32, s: &str, size: i32, c: Color| {
        d.draw_text(s, x + 12, *line, size, c);
        *line += size + 6;
    };

    text(d, &mut line, &player.name, 22, INK);
    text(d, &mut line, player.profession.label(), 16, DIM);
    let hearts: String = (0..player.max_health()).map(|i| if i < player.health() { '#' } else { '-' }).collect();
    text(d, &mut line, &format!("Health  {hearts}"), 18, Color::new(230, 90, 80, 255));
    text(d, &mut line, &format!("Money   ${}", player.money()), 18, INK);
    text(d, &mut line, &format!("Day     {}", game.day()), 18, INK);
    text(d, &mut line, &format!("Miles   {}/{}", game.distance(), TOTAL_DISTANCE), 18, INK);
    bar(d, x + 12, line, w - 24, 10, game.progress_percent() as f32 / 100.0, Color::new(200, 170, 80, 255));
    line += 18;
    text(d, &mut line, &format!("Region  {}", session.scenario.kind.label()), 18, INK);
    text(d, &mut line, &format!("Enemies {}/{}", session.enemies.count(), session.scenario.max_enemies()), 18, INK);
    let kinds = session.enemies.kinds_summary();
    if !kinds.is_empty() {
        for l in wrap(&kinds, 28) {
            text(d, &mut line, &l, 14, DIM);
        }
    }

    line += 6;
    let arsenal = &player.arsenal;
    text(d, &mut line, &format!("{} [{}]", arsenal.selected.label(), arsenal.current_ammo()), 18, Color::GOLD);
    text(d, &mut line, &format!("Other: {}", arsenal.ammo(arsenal.selected.other())), 16, DIM);

    line += 6;
    text(d, &mut line, &format!("Pace    {}", caravan.pace.label()), 16, INK);
    text(d, &mut line, &format!("Rations {}", caravan.rations.label()), 16, INK);
    text(d, &mut line, &format!("Food    {} lbs", caravan.food()), 16, INK);
    text(d, &mut line, &format!("Party   {}/{}", caravan.alive_count(), caravan.total_members()), 16, INK);
    for m in caravan.members() {
        let c = if m.is_alive() { DIM } else { Color::new(120, 60, 60, 255) };
        text(d, &mut line, &format!(" {} {} ({})", m.name(), m.health(), m.condition()), 14, c);
    }

    let (unlocked, total, _) = session.achievements.progress();
    text(d, &mut line, &format!("Achievements {unlocked}/{total}"), 16, INK);
    d.draw_text(&session.inventory.summary(), x + 12, y + h - 90, 16, DIM);
    d.draw_text("I items  L achiev.  B shop", x + 12, y + h - 64, 14, DIM);
    d.draw_text("E talk  P pace  R rations", x + 12, y + h - 46, 14, DIM);
    d.draw_text("Q weapon  Esc pause", x + 12, y + h - 28, 14, DIM);
}

/// Bottom strip for dialogue and status lines.
pub fn draw_message(d: &mut RaylibDrawHandle, text: &str, x: i32, y: i32, w: i32) {
    let lines = wrap(text, ((w - 24) / 9).max(10) as usize);
    let h = lines.len() as i32 * 20 + 16;
    d.draw_rectangle(x, y - h, w, h, Color::new(0, 0, 0, 190));
    for (i, l) in lines.iter().enumerate() {
        d.draw_text(l, x + 12, y - h + 8 + i as i32 * 20, 18, INK);
    }
}

pub fn draw_fps(d: &mut RaylibDrawHandle, fps: u32) {
    d.draw_text(&format!("FPS: {fps}"), 10, 10, 18, Color::WHITE);
}
