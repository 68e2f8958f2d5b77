use raylib::prelude::*;

use oregon_trail::core::grid::GridPos;
use oregon_trail::core::movement::HeldDirections;
use oregon_trail::core::session::FrameInput;

use crate::render::sprites::BoardView;

/// Discrete key presses outside of movement and shooting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UiCommand {
    Confirm,
    Back,
    Up,
    Down,
    Left,
    Right,
    NextField,
    Inventory,
    Achievements,
    Shop,
    Talk,
    MainMenu,
    Sort(u8),
}

/// Play input for one frame. The mouse aims while it is over the board.
pub fn read_frame_input(window: &RaylibHandle, view: &BoardView, player: GridPos) -> FrameInput {
    let down = |a: KeyboardKey, b: KeyboardKey| window.is_key_down(a) || window.is_key_down(b);
    let held = HeldDirections {
        up: down(KeyboardKey::KEY_W, KeyboardKey::KEY_UP),
        down: down(KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN),
        left: down(KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT),
        right: down(KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT),
    };
    let mouse = window.get_mouse_position();
    let mouse_fire = window.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) && view.contains(mouse);
    FrameInput {
        held,
        shooting: window.is_key_down(KeyboardKey::KEY_SPACE) || mouse_fire,
        switch_weapon: window.is_key_pressed(KeyboardKey::KEY_Q),
        // keyboard fire shoots where the hero faces
        aim: mouse_fire.then(|| view.aim_from(player, mouse)),
        cycle_pace: window.is_key_pressed(KeyboardKey::KEY_P),
        cycle_rations: window.is_key_pressed(KeyboardKey::KEY_R),
    }
}

pub fn ui_command(window: &RaylibHandle) -> Option<UiCommand> {
    let pressed = |k: KeyboardKey| window.is_key_pressed(k);
    let map = [
        (KeyboardKey::KEY_ENTER, UiCommand::Confirm),
        (KeyboardKey::KEY_KP_ENTER, UiCommand::Confirm),
        (KeyboardKey::KEY_ESCAPE, UiCommand::Back),
        (KeyboardKey::KEY_UP, UiCommand::Up),
        (KeyboardKey::KEY_DOWN, UiCommand::Down),
        (KeyboardKey::KEY_LEFT, UiCommand::Left),
        (KeyboardKey::KEY_RIGHT, UiCommand::Right),
        (KeyboardKey::KEY_TAB, UiCommand::NextField),
        (KeyboardKey::KEY_I, UiCommand::Inventory),
        (KeyboardKey::KEY_L, UiCommand::Achievements),
        (KeyboardKey::KEY_B, UiCommand::Shop),
        (KeyboardKey::KEY_E, UiCommand::Talk),
        (KeyboardKey::KEY_M, UiCommand::MainMenu),
        (KeyboardKey::KEY_ONE, UiCommand::Sort(1)),
        (KeyboardKey::KEY_TWO, UiCommand::Sort(2)),
        (KeyboardKey::KEY_THREE, UiCommand::Sort(3)),
    ];
    map.iter().find(|(k, _)| pressed(*k)).map(|(_, c)| *c)
}

/// Typed characters and backspace into `buf`, up to `max` chars.
pub fn read_text(window: &mut RaylibHandle, buf: &mut String, max: usize) {
    while let Some(c) = window.get_char_pressed() {
        if !c.is_control() && buf.chars().count() < max {
            buf.push(c);
        }
    }
    if window.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
        buf.pop();
    }
}
