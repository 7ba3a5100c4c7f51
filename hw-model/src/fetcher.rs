//! Typed access to the host's named-attribute primitive.
//!
//! Every failure mode of the primitive (unknown key, wrong width, denied,
//! invalid key) collapses into [`AttributeResult::Unavailable`].

use crate::attribute::AttributeResult;
use hw_platform::AttributeSource;
use tracing::{debug, trace};

pub const DEFAULT_TEXT_CAPACITY: usize = 256;

/// Decode shape of a requested attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    I32,
    U32,
    I64,
    U64,
    /// NUL-terminated text of at most `capacity` bytes.
    Text { capacity: usize },
}

impl Shape {
    pub fn text() -> Self {
        Shape::Text {
            capacity: DEFAULT_TEXT_CAPACITY,
        }
    }

    fn buffer_len(self) -> usize {
        match self {
            Shape::I32 | Shape::U32 => 4,
            Shape::I64 | Shape::U64 => 8,
            Shape::Text { capacity } => capacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRequest {
    key: String,
    shape: Shape,
}

impl AttributeRequest {
    pub fn new(key: impl Into<String>, shape: Shape) -> Self {
        Self {
            key: key.into(),
            shape,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Int(i64),
    UInt(u64),
    Text(String),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Fixed-width integers that can be decoded straight from host bytes.
pub trait FixedWidth: Sized {
    const SHAPE: Shape;
    fn from_ne_slice(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $shape:ident),+ $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const SHAPE: Shape = Shape::$shape;

                fn from_ne_slice(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$ty>::from_ne_bytes)
                }
            }
        )+
    };
}

impl_fixed_width!(i32 => I32, u32 => U32, i64 => I64, u64 => U64);

/// A non-empty sequence of dot-separated `[A-Za-z0-9_]+` segments.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        })
}

fn decode_text(bytes: &[u8]) -> AttributeResult<String> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let text = String::from_utf8_lossy(&bytes[..end]).trim().to_string();
    if text.is_empty() {
        AttributeResult::Unavailable
    } else {
        AttributeResult::Present(text)
    }
}

pub struct AttributeFetcher<'a, S: AttributeSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: AttributeSource + ?Sized> AttributeFetcher<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Raw query into a buffer sized for `shape`. Returns the bytes that fit
    /// and the full stored length.
    fn read(&self, key: &str, shape: Shape) -> AttributeResult<(Vec<u8>, usize)> {
        if !is_valid_key(key) {
            debug!(key, "rejected malformed attribute key");
            return AttributeResult::Unavailable;
        }
        let capacity = shape.buffer_len();
        if capacity == 0 {
            debug!(key, "zero-capacity request");
            return AttributeResult::Unavailable;
        }

        let mut buf = vec![0u8; capacity];
        match self.source.query(key, &mut buf) {
            Ok(stored) => {
                buf.truncate(stored.min(capacity));
                trace!(key, stored, "attribute fetched");
                AttributeResult::Present((buf, stored))
            }
            Err(e) => {
                debug!(key, error = %e, "attribute unavailable");
                AttributeResult::Unavailable
            }
        }
    }

    pub fn fetch(&self, request: &AttributeRequest) -> AttributeResult<AttributeValue> {
        let key = request.key();
        match request.shape() {
            Shape::I32 => self.fetch_int::<i32>(key).map(|v| AttributeValue::Int(v.into())),
            Shape::U32 => self.fetch_int::<u32>(key).map(|v| AttributeValue::UInt(v.into())),
            Shape::I64 => self.fetch_int::<i64>(key).map(AttributeValue::Int),
            Shape::U64 => self.fetch_int::<u64>(key).map(AttributeValue::UInt),
            Shape::Text { capacity } => self.fetch_text(key, capacity).map(AttributeValue::Text),
        }
    }

    /// Decodes native-endian; any width other than `T`'s exact width is
    /// unavailable.
    pub fn fetch_int<T: FixedWidth>(&self, key: &str) -> AttributeResult<T> {
        let expected = T::SHAPE.buffer_len();
        self.read(key, T::SHAPE).and_then(|(bytes, stored)| {
            if stored != expected {
                debug!(key, stored, expected, "width mismatch");
                return AttributeResult::Unavailable;
            }
            T::from_ne_slice(&bytes).into()
        })
    }

    pub fn fetch_i32(&self, key: &str) -> AttributeResult<i32> {
        self.fetch_int(key)
    }

    pub fn fetch_u32(&self, key: &str) -> AttributeResult<u32> {
        self.fetch_int(key)
    }

    pub fn fetch_i64(&self, key: &str) -> AttributeResult<i64> {
        self.fetch_int(key)
    }

    pub fn fetch_u64(&self, key: &str) -> AttributeResult<u64> {
        self.fetch_int(key)
    }

    /// Reads at most `capacity` bytes and stops at the first NUL. Empty or
    /// all-whitespace text is unavailable.
    pub fn fetch_text(&self, key: &str, capacity: usize) -> AttributeResult<String> {
        self.read(key, Shape::Text { capacity })
            .and_then(|(bytes, _)| decode_text(&bytes))
    }
}
