/// Keyboard actions available on the room page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePause,
    ToggleHint,
    VolumeUp,
    VolumeDown,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Spacebar" => Some(KeyAction::TogglePause),
        "h" | "H" => Some(KeyAction::ToggleHint),
        "ArrowUp" => Some(KeyAction::VolumeUp),
        "ArrowDown" => Some(KeyAction::VolumeDown),
        _ => None,
    }
}

pub const VOLUME_STEP: f32 = 0.05;

#[inline]
pub fn step_volume(current: f32, action: KeyAction) -> f32 {
    match action {
        KeyAction::VolumeUp => (current + VOLUME_STEP).min(1.0),
        KeyAction::VolumeDown => (current - VOLUME_STEP).max(0.0),
        _ => current,
    }
}

/// One-line status shown in the room page's hint overlay.
pub fn hint_text(paused: bool, ball_count: usize, volume: f32) -> String {
    let mode = if paused {
        "Paused: click a ball to remove it"
    } else {
        "Click a wall to add a ball"
    };
    format!(
        "{} • Balls: {} • Volume: {:.0}% • Space pause • H hide",
        mode,
        ball_count,
        volume * 100.0
    )
}
