//! In-memory provider.
//!
//! Backs the test suites and `hwinfo --fixture`, which replays attributes
//! captured on another machine.

use crate::display::DisplayInfo;
use crate::traits::{AttributeSource, DisplaySource, PlatformProvider};
use hw_core::error::{HwError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct FixturePlatform {
    attributes: HashMap<String, Vec<u8>>,
    displays: Option<Vec<DisplayInfo>>,
    queries: AtomicUsize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    #[serde(default)]
    attributes: HashMap<String, FixtureValue>,
    #[serde(default)]
    displays: Option<Vec<DisplayInfo>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureValue {
    Text(String),
    Int(FixtureInt),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum FixtureInt {
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
}

impl FixturePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON fixture format:
    /// `{"attributes": {"hw.packages": {"i32": 1}, "hw.model": "Mac14,2"}, "displays": [...]}`
    pub fn from_json(text: &str) -> Result<Self> {
        let file: FixtureFile =
            serde_json::from_str(text).map_err(|e| HwError::Fixture(e.to_string()))?;

        let mut fixture = Self::new();
        for (key, value) in file.attributes {
            fixture = match value {
                FixtureValue::Text(s) => fixture.with_text(key, &s),
                FixtureValue::Int(FixtureInt::I32(v)) => fixture.with_i32(key, v),
                FixtureValue::Int(FixtureInt::U32(v)) => fixture.with_u32(key, v),
                FixtureValue::Int(FixtureInt::I64(v)) => fixture.with_i64(key, v),
                FixtureValue::Int(FixtureInt::U64(v)) => fixture.with_u64(key, v),
            };
        }
        fixture.displays = file.displays;
        Ok(fixture)
    }

    pub fn with_raw(mut self, key: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.attributes.insert(key.into(), bytes);
        self
    }

    pub fn with_i32(self, key: impl Into<String>, value: i32) -> Self {
        self.with_raw(key, value.to_ne_bytes().to_vec())
    }

    pub fn with_u32(self, key: impl Into<String>, value: u32) -> Self {
        self.with_raw(key, value.to_ne_bytes().to_vec())
    }

    pub fn with_i64(self, key: impl Into<String>, value: i64) -> Self {
        self.with_raw(key, value.to_ne_bytes().to_vec())
    }

    pub fn with_u64(self, key: impl Into<String>, value: u64) -> Self {
        self.with_raw(key, value.to_ne_bytes().to_vec())
    }

    /// Stored NUL-terminated, the way the host stores strings.
    pub fn with_text(self, key: impl Into<String>, value: &str) -> Self {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        self.with_raw(key, bytes)
    }

    pub fn with_displays(mut self, displays: Vec<DisplayInfo>) -> Self {
        self.displays = Some(displays);
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.attributes.remove(key);
        self
    }

    /// Number of `query` calls served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl PlatformProvider for FixturePlatform {
    fn name(&self) -> &'static str {
        "fixture"
    }
}

impl AttributeSource for FixturePlatform {
    fn query(&self, key: &str, out: &mut [u8]) -> io::Result<usize> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        let stored = self.attributes.get(key).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("unknown attribute '{}'", key))
        })?;
        let n = stored.len().min(out.len());
        out[..n].copy_from_slice(&stored[..n]);
        Ok(stored.len())
    }
}

impl DisplaySource for FixturePlatform {
    fn active_displays(&self) -> Option<Vec<DisplayInfo>> {
        self.displays.clone()
    }
}
