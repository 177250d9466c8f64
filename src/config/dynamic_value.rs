//! Values that are either fixed or computed on every read
//!
//! Gesture thresholds can follow game state (difficulty, time of day, ...).
//! Callers hand over either a constant or a zero-argument provider; readers
//! always go through `resolve`, so both cases look the same downstream.

use std::fmt;
use std::sync::Arc;

pub enum DynamicValue<T> {
    Fixed(T),
    Provider(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T: Clone> DynamicValue<T> {
    pub fn fixed(value: T) -> Self {
        DynamicValue::Fixed(value)
    }

    pub fn provider<F>(provider: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        DynamicValue::Provider(Arc::new(provider))
    }

    /// Current value; providers are called on every read
    pub fn resolve(&self) -> T {
        match self {
            DynamicValue::Fixed(value) => value.clone(),
            DynamicValue::Provider(provider) => provider(),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, DynamicValue::Fixed(_))
    }
}

impl<T: Clone> Clone for DynamicValue<T> {
    fn clone(&self) -> Self {
        match self {
            DynamicValue::Fixed(value) => DynamicValue::Fixed(value.clone()),
            DynamicValue::Provider(provider) => DynamicValue::Provider(Arc::clone(provider)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicValue::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            DynamicValue::Provider(_) => f.write_str("Provider(<fn>)"),
        }
    }
}

impl<T> From<T> for DynamicValue<T> {
    fn from(value: T) -> Self {
        DynamicValue::Fixed(value)
    }
}
