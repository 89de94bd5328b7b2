//! Runtime tuning read from the page URL query string (`?speed=600&bpm=100`).

use crate::constants::{BALL_SPEED, DEFAULT_BPM, MAX_BALL_SPEED, SPAWN_OFFSET};
use crate::note::{Note, NoteParseError, NoteValue};
use crate::transport::RiffPattern;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
    #[error("{key} must be within {min}..={max}, got {value}")]
    OutOfRange {
        key: String,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("invalid {key}: {source}")]
    Music {
        key: String,
        source: NoteParseError,
    },
}

/// Parameters of the bouncing-ball room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomConfig {
    pub ball_speed: f32,
    pub spawn_offset: f32,
    pub master_volume: f32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            spawn_offset: SPAWN_OFFSET,
            master_volume: 0.25,
        }
    }
}

/// Parameters of the bass riff page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiffConfig {
    pub bpm: f32,
    pub master_volume: f32,
    pub note: Note,
    pub length: NoteValue,
}

impl Default for RiffConfig {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            master_volume: 0.5,
            note: RiffPattern::default().note,
            length: RiffPattern::default().length,
        }
    }
}

impl RoomConfig {
    /// Apply `key=value` pairs from a query string. Unknown keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        for (key, value) in query_pairs(query) {
            match key {
                "speed" => cfg.ball_speed = parse_in_range(key, value, 1.0, MAX_BALL_SPEED)?,
                "offset" => cfg.spawn_offset = parse_in_range(key, value, 0.0, 1_000.0)?,
                "volume" => cfg.master_volume = parse_in_range(key, value, 0.0, 1.0)?,
                other => log::warn!("[config] ignoring unknown key {:?}", other),
            }
        }
        Ok(cfg)
    }
}

impl RiffConfig {
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        for (key, value) in query_pairs(query) {
            match key {
                "bpm" => cfg.bpm = parse_in_range(key, value, 20.0, 300.0)?,
                "volume" => cfg.master_volume = parse_in_range(key, value, 0.0, 1.0)?,
                "note" => cfg.note = parse_music(key, value)?,
                "length" => cfg.length = parse_music(key, value)?,
                other => log::warn!("[config] ignoring unknown key {:?}", other),
            }
        }
        Ok(cfg)
    }

    pub fn pattern(&self) -> RiffPattern {
        RiffPattern::with_note(self.note, self.length)
    }
}

fn parse_music<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = NoteParseError>,
{
    value.parse().map_err(|source| ConfigError::Music {
        key: key.to_string(),
        source,
    })
}

fn query_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| p.split_once('=').unwrap_or((p, "")))
}

fn parse_in_range(key: &str, value: &str, min: f32, max: f32) -> Result<f32, ConfigError> {
    let v: f32 = value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    if !v.is_finite() || v < min || v > max {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value: v,
            min,
            max,
        });
    }
    Ok(v)
}
