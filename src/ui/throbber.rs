//! Spinner and bounce animation helpers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Braille spinner characters for animated loading indicators.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Player token frames while moving.
const BOUNCE: [char; 2] = ['▲', '●'];

fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Current spinner character; cycles every 100ms.
pub fn spinner_char() -> char {
    SPINNER[((current_millis() / 100) % SPINNER.len() as u128) as usize]
}

/// Player token glyph. Bounces while advancing, otherwise steady.
pub fn player_token(advancing: bool) -> char {
    if advancing {
        BOUNCE[((current_millis() / 250) % BOUNCE.len() as u128) as usize]
    } else {
        '●'
    }
}
