//! Casting cost strips.
//!
//! A strip is one mana icon per cost symbol, composited left to right. Strips
//! are shared between every card with the same cost through a
//! [`CostImageCache`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use image::imageops::{self, FilterType};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};
use crate::parser::cost::tokenize;

use super::catalog::SymbolCatalog;
use super::store::{ImageCategory, ImageStore};

/// Cache key for cards without a casting cost.
pub const EMPTY_COST_KEY: &str = "None";

/// Strip geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostImageConfig {
    /// Horizontal distance between icons.
    pub pitch: u32,
    /// Strip height.
    pub height: u32,
    /// Icon draw offset from its slot.
    pub offset_x: i64,
    pub offset_y: i64,
    /// Icons are scaled to this size.
    pub icon_width: u32,
    pub icon_height: u32,
}

impl Default for CostImageConfig {
    fn default() -> Self {
        Self {
            pitch: 18,
            height: 20,
            offset_x: -7,
            offset_y: -7,
            icon_width: 32,
            icon_height: 32,
        }
    }
}

/// Shared cost strips keyed by raw cost.
///
/// Lookup, build and insert happen under one lock, so a strip is never
/// built twice even when requested from several threads at once.
#[derive(Debug, Default)]
pub struct CostImageCache {
    config: CostImageConfig,
    strips: Mutex<HashMap<String, Arc<RgbaImage>>>,
}

impl CostImageCache {
    pub fn new(config: CostImageConfig) -> Self {
        Self {
            config,
            strips: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &CostImageConfig {
        &self.config
    }

    /// The strip for `cost`, building it on first use.
    pub fn fetch_or_build(
        &self,
        cost: &str,
        catalog: &dyn SymbolCatalog,
        store: &dyn ImageStore,
    ) -> Result<Arc<RgbaImage>> {
        let key = if cost.is_empty() { EMPTY_COST_KEY } else { cost };
        let mut strips = self.lock();

        if let Some(strip) = strips.get(key) {
            log::debug!("cost image cache hit for {}", key);
            return Ok(Arc::clone(strip));
        }

        let strip = Arc::new(build_strip(cost, &self.config, catalog, store)?);
        strips.insert(key.to_string(), Arc::clone(&strip));
        Ok(strip)
    }

    pub fn contains(&self, cost: &str) -> bool {
        let key = if cost.is_empty() { EMPTY_COST_KEY } else { cost };
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached strip.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<RgbaImage>>> {
        self.strips.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Composite a cost strip. Missing icons leave their slot empty.
pub fn build_strip(
    cost: &str,
    config: &CostImageConfig,
    catalog: &dyn SymbolCatalog,
    store: &dyn ImageStore,
) -> Result<RgbaImage> {
    let symbols = tokenize(cost)?;
    if symbols.is_empty() {
        return Ok(RgbaImage::new(1, 1));
    }

    let width = u32::try_from(symbols.len())
        .ok()
        .and_then(|n| config.pitch.checked_mul(n))
        .filter(|w| w.checked_mul(config.height).is_some())
        .ok_or_else(|| CardError::Build {
            message: format!(
                "Cost strip for {:?} is too large ({} symbols at pitch {})",
                cost,
                symbols.len(),
                config.pitch
            ),
            help: Some("Lower cost_image.pitch or cost_image.height in cardface.yaml".to_string()),
        })?;
    let mut strip = RgbaImage::new(width, config.height);

    for (i, symbol) in symbols.iter().enumerate() {
        let token = symbol.token();
        let icon = catalog
            .resolve(&token)
            .and_then(|key| store.load(&key, ImageCategory::Mana));

        let Some(icon) = icon else {
            log::debug!("no mana icon for {}", token);
            continue;
        };

        let icon = imageops::resize(&icon, config.icon_width, config.icon_height, FilterType::CatmullRom);
        let x = (config.pitch as usize * i) as i64 + config.offset_x;
        imageops::overlay(&mut strip, &icon, x, config.offset_y);
    }

    Ok(strip)
}
