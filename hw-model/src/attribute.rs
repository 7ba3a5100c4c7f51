use serde::Serialize;

/// Outcome of one attribute fetch.
///
/// This is the only representation of a missing value in the workspace.
/// Serializes as the bare value, or `null` when unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeResult<T> {
    Present(T),
    Unavailable,
}

use AttributeResult::{Present, Unavailable};

impl<T> AttributeResult<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    pub fn present(self) -> Option<T> {
        match self {
            Present(v) => Some(v),
            Unavailable => None,
        }
    }

    pub fn as_ref(&self) -> AttributeResult<&T> {
        match self {
            Present(v) => Present(v),
            Unavailable => Unavailable,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AttributeResult<U> {
        match self {
            Present(v) => Present(f(v)),
            Unavailable => Unavailable,
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> AttributeResult<U>) -> AttributeResult<U> {
        match self {
            Present(v) => f(v),
            Unavailable => Unavailable,
        }
    }

    /// Present only when both sides are present.
    pub fn zip<U>(self, other: AttributeResult<U>) -> AttributeResult<(T, U)> {
        match (self, other) {
            (Present(a), Present(b)) => Present((a, b)),
            _ => Unavailable,
        }
    }

    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> AttributeResult<T> {
        match self {
            Present(v) if predicate(&v) => Present(v),
            _ => Unavailable,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Present(v) => v,
            Unavailable => default,
        }
    }
}

impl AttributeResult<i32> {
    /// Counts and sizes are reported as signed ints; negatives are not data.
    pub fn non_negative(self) -> AttributeResult<u32> {
        self.and_then(|v| u32::try_from(v).ok().into())
    }
}

impl AttributeResult<i64> {
    pub fn non_negative(self) -> AttributeResult<u64> {
        self.and_then(|v| u64::try_from(v).ok().into())
    }
}

impl<T> Default for AttributeResult<T> {
    fn default() -> Self {
        Unavailable
    }
}

impl<T> From<Option<T>> for AttributeResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Present(v),
            None => Unavailable,
        }
    }
}

impl<T> From<AttributeResult<T>> for Option<T> {
    fn from(value: AttributeResult<T>) -> Self {
        value.present()
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeResult::{Present, Unavailable};
    use super::*;

    #[test]
    fn test_zip_requires_both() {
        assert_eq!(Present(8).zip(Present(10)), Present((8, 10)));
        assert_eq!(Present(8).zip(AttributeResult::<u32>::Unavailable), Unavailable);
        assert_eq!(AttributeResult::<u32>::Unavailable.zip(Present(10)), Unavailable);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(Present(4_i32).non_negative(), Present(4_u32));
        assert_eq!(Present(-1_i32).non_negative(), Unavailable);
        assert_eq!(Present(-1_i64).non_negative(), Unavailable);
        assert_eq!(Present(1_i64 << 40).non_negative(), Present(1_u64 << 40));
    }

    #[test]
    fn test_default_is_unavailable() {
        let value: AttributeResult<String> = Default::default();
        assert!(!value.is_present());
    }

    #[test]
    fn test_serializes_as_value_or_null() {
        let present: AttributeResult<u64> = Present(64);
        let missing: AttributeResult<u64> = Unavailable;
        assert_eq!(serde_json::to_string(&present).unwrap(), "64");
        assert_eq!(serde_json::to_string(&missing).unwrap(), "null");
    }
}
