//! Stage configuration table and layout generation
//!
//! A stage is a named venue (livehouse/hall/arena) with a fixed difficulty
//! config. Layout generation is a pure function of the config: identical
//! configs always produce identical layouts.

use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_STAGE_WIDTH, SEAT_SPACING};

/// Configuration errors surfaced to the host before a session starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StageError {
    #[error("unknown stage id: {0:?}")]
    UnknownStage(String),
}

/// Venue difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// Stage identifier, the key of the fixed config table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageId {
    Livehouse,
    Hall,
    Arena,
}

/// A venue configuration, selected once per session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageConfig {
    pub name: &'static str,
    /// Venue floor dimensions
    pub width: f32,
    pub depth: f32,
    /// Guards spawned for a session; equals `guard_spawns` length
    pub guard_count: usize,
    pub lighting_intensity: f32,
    pub audience_rows: usize,
    pub audience_cols: usize,
    pub difficulty: Difficulty,
}

const LIVEHOUSE: StageConfig = StageConfig {
    name: "小規模ライブハウス",
    width: 20.0,
    depth: 30.0,
    guard_count: 2,
    lighting_intensity: 1.5,
    audience_rows: 3,
    audience_cols: 5,
    difficulty: Difficulty::Easy,
};

const HALL: StageConfig = StageConfig {
    name: "中規模ホール",
    width: 40.0,
    depth: 50.0,
    guard_count: 4,
    lighting_intensity: 2.0,
    audience_rows: 6,
    audience_cols: 9,
    difficulty: Difficulty::Normal,
};

const ARENA: StageConfig = StageConfig {
    name: "大規模アリーナ",
    width: 60.0,
    depth: 80.0,
    guard_count: 6,
    lighting_intensity: 2.5,
    audience_rows: 10,
    audience_cols: 15,
    difficulty: Difficulty::Hard,
};

impl StageId {
    pub const ALL: [StageId; 3] = [StageId::Livehouse, StageId::Hall, StageId::Arena];

    pub fn as_str(self) -> &'static str {
        match self {
            StageId::Livehouse => "livehouse",
            StageId::Hall => "hall",
            StageId::Arena => "arena",
        }
    }

    /// Fixed config table entry for this stage
    pub fn config(self) -> &'static StageConfig {
        match self {
            StageId::Livehouse => &LIVEHOUSE,
            StageId::Hall => &HALL,
            StageId::Arena => &ARENA,
        }
    }
}

impl FromStr for StageId {
    type Err = StageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "livehouse" => Ok(StageId::Livehouse),
            "hall" => Ok(StageId::Hall),
            "arena" => Ok(StageId::Arena),
            _ => Err(StageError::UnknownStage(s.to_string())),
        }
    }
}

/// Axis-aligned playable bounds derived from the venue dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LightKind {
    Point,
    Spot,
}

/// One light of the stage rig (consumed by the host renderer)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageLight {
    pub kind: LightKind,
    pub pos: Vec3,
    /// 0xRRGGBB
    pub color: u32,
    pub intensity: f32,
}

/// Generated venue layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageLayout {
    /// Audience seat positions, row-major from the front row
    pub seats: Vec<Vec3>,
    /// Floor positions guards start a session from
    pub guard_spawns: Vec<Vec3>,
    pub stage_width: f32,
    pub wall_bounds: WallBounds,
    pub lights: Vec<StageLight>,
}

/// Build the venue layout for a config. Pure and deterministic: no RNG.
pub fn generate_layout(config: &StageConfig) -> StageLayout {
    let mut seats = Vec::with_capacity(config.audience_rows * config.audience_cols);
    let half_cols = (config.audience_cols / 2) as f32;
    for row in 0..config.audience_rows {
        for col in 0..config.audience_cols {
            let x = (col as f32 - half_cols) * SEAT_SPACING;
            let z = row as f32 * SEAT_SPACING;
            seats.push(Vec3::new(x, 0.3, z));
        }
    }

    let stage_width = (config.width * 0.6).min(MAX_STAGE_WIDTH);

    let wall_bounds = WallBounds {
        min_x: -config.width / 2.0,
        max_x: config.width / 2.0,
        min_z: -20.0,
        max_z: config.depth - 20.0,
    };

    log::info!(
        "generated layout for {}: {} seats, {} guards, stage width {}",
        config.name,
        seats.len(),
        config.guard_count,
        stage_width
    );

    StageLayout {
        seats,
        guard_spawns: guard_spawns(config.difficulty),
        stage_width,
        wall_bounds,
        lights: light_rig(config),
    }
}

/// Hand-placed guard posts per difficulty, mirrored about the z centerline
fn guard_spawns(difficulty: Difficulty) -> Vec<Vec3> {
    match difficulty {
        Difficulty::Easy => vec![Vec3::new(-5.0, 0.0, -10.0), Vec3::new(5.0, 0.0, -10.0)],
        Difficulty::Normal => vec![
            Vec3::new(-8.0, 0.0, -15.0),
            Vec3::new(8.0, 0.0, -15.0),
            Vec3::new(-8.0, 0.0, 5.0),
            Vec3::new(8.0, 0.0, 5.0),
        ],
        Difficulty::Hard => vec![
            Vec3::new(-12.0, 0.0, -20.0),
            Vec3::new(0.0, 0.0, -20.0),
            Vec3::new(12.0, 0.0, -20.0),
            Vec3::new(-12.0, 0.0, 0.0),
            Vec3::new(12.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 10.0),
        ],
    }
}

fn light_rig(config: &StageConfig) -> Vec<StageLight> {
    let intensity = config.lighting_intensity;
    let mut lights = vec![
        StageLight {
            kind: LightKind::Point,
            pos: Vec3::new(-5.0, 6.0, -15.0),
            color: 0xff0000,
            intensity: intensity * 2.0,
        },
        StageLight {
            kind: LightKind::Point,
            pos: Vec3::new(0.0, 6.0, -15.0),
            color: 0x00ff00,
            intensity: intensity * 2.0,
        },
        StageLight {
            kind: LightKind::Point,
            pos: Vec3::new(5.0, 6.0, -15.0),
            color: 0x0000ff,
            intensity: intensity * 2.0,
        },
    ];

    // Extra rig only for the biggest venue
    if config.difficulty == Difficulty::Hard {
        lights.push(StageLight {
            kind: LightKind::Point,
            pos: Vec3::new(-10.0, 8.0, -15.0),
            color: 0xff00ff,
            intensity,
        });
        lights.push(StageLight {
            kind: LightKind::Point,
            pos: Vec3::new(10.0, 8.0, -15.0),
            color: 0xffff00,
            intensity,
        });
        lights.push(StageLight {
            kind: LightKind::Point,
            pos: Vec3::new(0.0, 10.0, 0.0),
            color: 0x00ffff,
            intensity,
        });
    }

    lights.push(StageLight {
        kind: LightKind::Spot,
        pos: Vec3::new(0.0, 10.0, -10.0),
        color: 0xffffff,
        intensity,
    });

    lights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_stage_id_fails_fast() {
        let err = "warehouse".parse::<StageId>().unwrap_err();
        assert_eq!(err, StageError::UnknownStage("warehouse".to_string()));
        assert_eq!("ARENA".parse::<StageId>(), Ok(StageId::Arena));
    }

    #[test]
    fn test_layout_is_deterministic() {
        for id in StageId::ALL {
            let a = generate_layout(id.config());
            let b = generate_layout(id.config());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_seat_count_matches_grid() {
        for id in StageId::ALL {
            let config = id.config();
            let layout = generate_layout(config);
            assert_eq!(layout.seats.len(), config.audience_rows * config.audience_cols);
        }
    }

    #[test]
    fn test_guard_spawn_counts() {
        assert_eq!(generate_layout(StageId::Livehouse.config()).guard_spawns.len(), 2);
        assert_eq!(generate_layout(StageId::Hall.config()).guard_spawns.len(), 4);
        assert_eq!(generate_layout(StageId::Arena.config()).guard_spawns.len(), 6);
        for id in StageId::ALL {
            let config = id.config();
            assert_eq!(generate_layout(config).guard_spawns.len(), config.guard_count);
        }
    }

    #[test]
    fn test_guard_spawns_mirror_centerline() {
        for id in StageId::ALL {
            let layout = generate_layout(id.config());
            for spawn in &layout.guard_spawns {
                let mirrored = Vec3::new(-spawn.x, spawn.y, spawn.z);
                assert!(
                    layout.guard_spawns.contains(&mirrored),
                    "{:?} has no mirror in {:?}",
                    spawn,
                    id
                );
            }
        }
    }

    #[test]
    fn test_stage_width_is_clamped() {
        // 60% of width, capped at 20 units
        assert_eq!(generate_layout(StageId::Livehouse.config()).stage_width, 12.0);
        assert_eq!(generate_layout(StageId::Hall.config()).stage_width, 20.0);
        assert_eq!(generate_layout(StageId::Arena.config()).stage_width, 20.0);
    }

    #[test]
    fn test_hard_stage_gets_extra_lights() {
        let easy = generate_layout(StageId::Livehouse.config()).lights.len();
        let hard = generate_layout(StageId::Arena.config()).lights.len();
        assert_eq!(easy, 4);
        assert_eq!(hard, 7);
    }
}
