//! Zombie type templates.
//!
//! A `ZombieType` is immutable once loaded. Activation copies its numbers into the pooled
//! entity; after that the entity's copy can drift (freeze) without touching the template.

use std::collections::HashMap;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum ZombieKind {
    #[default]
    Normal,
    Strong,
    MiniBoss,
}

impl ZombieKind {
    pub const ALL: [ZombieKind; 3] = [ZombieKind::Normal, ZombieKind::Strong, ZombieKind::MiniBoss];
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ZombieType {
    pub base_health: i32,
    pub attack_power: i32,
    /// World units per second.
    pub base_chase_speed: f32,
    /// 0xRRGGBB
    pub tint: u32,
}

impl ZombieType {
    pub const NORMAL: ZombieType = ZombieType {
        base_health: 100,
        attack_power: 5,
        base_chase_speed: 20.0,
        tint: 0xffffff,
    };
    pub const STRONG: ZombieType = ZombieType {
        base_health: 200,
        attack_power: 10,
        base_chase_speed: 40.0,
        tint: 0x00ff00,
    };
    pub const MINI_BOSS: ZombieType = ZombieType {
        base_health: 1000,
        attack_power: 30,
        base_chase_speed: 30.0,
        tint: 0xffff00,
    };

    pub fn tint_color(&self) -> Color {
        let [_, r, g, b] = self.tint.to_be_bytes();
        Color::srgb_u8(r, g, b)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ZombieCatalog {
    types: HashMap<ZombieKind, ZombieType>,
}

impl Default for ZombieCatalog {
    fn default() -> Self {
        Self {
            types: HashMap::from([
                (ZombieKind::Normal, ZombieType::NORMAL),
                (ZombieKind::Strong, ZombieType::STRONG),
                (ZombieKind::MiniBoss, ZombieType::MINI_BOSS),
            ]),
        }
    }
}

impl ZombieCatalog {
    /// Parse a catalog from RON text. Kinds missing from the text are simply absent;
    /// spawn requests for them get dropped by the allocator.
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    #[inline]
    pub fn get(&self, kind: ZombieKind) -> Option<&ZombieType> {
        self.types.get(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ZombieKind> + '_ {
        self.types.keys().copied()
    }
}

/// Where the windowed app looks for a catalog override.
pub const CATALOG_PATH: &str = "assets/zombies.ron";

/// Startup: replace the built-in catalog with `assets/zombies.ron` when it exists and parses.
pub fn load_catalog_override(mut catalog: ResMut<ZombieCatalog>) {
    let path = Path::new(CATALOG_PATH);
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            debug!("No catalog override at {}: {e}", path.display());
            return;
        }
    };

    match ZombieCatalog::from_ron(&text) {
        Ok(loaded) => {
            info!("Loaded zombie catalog from {} ({} kinds)", path.display(), loaded.types.len());
            *catalog = loaded;
        }
        Err(e) => warn!("Ignoring malformed zombie catalog {}: {e}", path.display()),
    }
}
