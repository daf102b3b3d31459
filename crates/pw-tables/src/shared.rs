//! Runtime-editable coefficient set.
//!
//! Readers take an `Arc` snapshot and compute against it without holding the
//! lock, so a batch never sees a half-applied edit. Writers replace the whole
//! set after validating it.

use crate::Coefficients;
use crate::error::TablesResult;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default)]
pub struct SharedCoefficients {
    inner: Arc<RwLock<Arc<Coefficients>>>,
}

impl SharedCoefficients {
    pub fn new(tables: Coefficients) -> TablesResult<Self> {
        tables.validate()?;
        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(tables))),
        })
    }

    /// Current table set.
    pub fn snapshot(&self) -> Arc<Coefficients> {
        // a panicked writer never leaves a partial set behind, so poisoning is benign
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn replace(&self, tables: Coefficients) -> TablesResult<()> {
        tables.validate()?;
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(tables);
        tracing::debug!("coefficient tables replaced");
        Ok(())
    }

    /// Edit a copy of the current set and publish it if it still validates.
    pub fn update<F>(&self, edit: F) -> TablesResult<()>
    where
        F: FnOnce(&mut Coefficients),
    {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let mut next = Coefficients::clone(&guard);
        edit(&mut next);
        next.validate()?;
        *guard = Arc::new(next);
        tracing::debug!("coefficient tables updated");
        Ok(())
    }
}
