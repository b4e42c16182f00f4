use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Default RON layers, base first; the local layer is optional and git-ignored.
pub const DEFAULT_CONFIG_LAYERS: [&str; 2] =
    ["assets/config/burst.ron", "assets/config/burst.local.ron"];

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Particle Burst".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}
impl SpawnRange<f32> {
    /// Linear interpolation from `min` to `max` by `t` in [0,1].
    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PoolConfig {
    pub count: usize,
    pub radius: f32,
    /// Circle mesh resolution.
    pub segments: u32,
}
impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            count: 100,
            radius: 3.0,
            segments: 32,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BurstTimingConfig {
    /// Seconds from burst start until a particle is fully faded.
    pub lifetime: f32,
    /// Pause between full expiry and the next burst.
    pub delay: f32,
    /// Speed factor range, multiplied by `speed_scale` (world units / lifetime).
    pub speed: SpawnRange<f32>,
    pub speed_scale: f32,
}
impl Default for BurstTimingConfig {
    fn default() -> Self {
        Self {
            lifetime: 3.0,
            delay: 1.5,
            speed: SpawnRange { min: 0.5, max: 4.0 },
            speed_scale: 220.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    /// Max hue shift, as a fraction of a full turn.
    pub hue_jitter: f32,
    pub saturation_jitter: f32,
    /// Brightness scale applied to RGB after the HSL jitter.
    pub brightness: SpawnRange<f32>,
}
impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            hue_jitter: 0.05,
            saturation_jitter: 0.1,
            brightness: SpawnRange { min: 0.4, max: 1.0 },
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BurstConfig {
    pub window: WindowConfig,
    pub pool: PoolConfig,
    pub burst: BurstTimingConfig,
    pub palette: PaletteConfig,
    /// Fixed RNG seed for reproducible runs; entropy seeded when absent.
    pub seed: Option<u64>,
}

impl BurstConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Loads every readable layer in order and merges them key by key (later layers win).
    /// Returns the config, the layers actually used, and non-fatal errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (BurstConfig::default(), used, errors);
        };
        match val.into_rust::<BurstConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (BurstConfig::default(), used, errors)
            }
        }
    }

    /// Non-fatal sanity checks; each entry is a human readable warning.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.pool.count == 0 {
            w.push("pool.count is 0; nothing will be drawn".into());
        }
        if self.pool.count > 100_000 {
            w.push(format!(
                "pool.count {} very high; performance may suffer",
                self.pool.count
            ));
        }
        if self.pool.radius <= 0.0 {
            w.push("pool.radius must be > 0".into());
        }
        if self.pool.segments < 3 {
            w.push(format!(
                "pool.segments {} too low for a circle (min 3)",
                self.pool.segments
            ));
        }
        if self.burst.lifetime <= 0.0 {
            w.push("burst.lifetime must be > 0".into());
        }
        if self.burst.delay < 0.0 {
            w.push("burst.delay negative -> bursts restart immediately".into());
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!(
                    "{label} min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
            if (r.max - r.min).abs() < f32::EPSILON {
                w.push(format!("{label} min == max ({}) -> zero variation", r.min));
            }
        }
        check_range_f32(&mut w, "burst.speed", &self.burst.speed);
        if self.burst.speed.min < 0.0 {
            w.push("burst.speed.min negative -> particles travel inward".into());
        }
        if self.burst.speed_scale <= 0.0 {
            w.push("burst.speed_scale must be > 0".into());
        }
        if !(0.0..=0.5).contains(&self.palette.hue_jitter) {
            w.push(format!(
                "palette.hue_jitter {} outside 0..0.5",
                self.palette.hue_jitter
            ));
        }
        if !(0.0..=1.0).contains(&self.palette.saturation_jitter) {
            w.push(format!(
                "palette.saturation_jitter {} outside 0..1",
                self.palette.saturation_jitter
            ));
        }
        check_range_f32(&mut w, "palette.brightness", &self.palette.brightness);
        if self.palette.brightness.min < 0.0 || self.palette.brightness.max > 1.0 {
            w.push(format!(
                "palette.brightness ({}..{}) outside 0..1",
                self.palette.brightness.min, self.palette.brightness.max
            ));
        }
        w
    }
}

fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
    use ron::value::Value;
    match (base, overlay) {
        (Value::Map(bm), Value::Map(om)) => {
            for (k, v) in om.into_iter() {
                let mut incoming = Some(v);
                for (ek, ev) in bm.iter_mut() {
                    if *ek == k {
                        if let Some(val) = incoming.take() {
                            merge_value(ev, val);
                        }
                        break;
                    }
                }
                if let Some(val) = incoming {
                    bm.insert(k, val);
                }
            }
        }
        (b, o) => *b = o,
    }
}
