//! Ordered write pipelines.
//!
//! A write hands its candidate record, together with the set of fields the
//! write touched, to a [`Pipeline`]. Each step either returns the (possibly
//! rewritten) candidate or fails; the first failure ends the run and nothing
//! downstream, persistence included, sees a half-normalized record.

use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Marker for per-entity field enums.
pub trait Field: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

impl<F> Field for F where F: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

/// Fields modified by the write in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifiedFields<F: Field> {
    fields: HashSet<F>,
}

impl<F: Field> Default for ModifiedFields<F> {
    fn default() -> Self {
        Self {
            fields: HashSet::new(),
        }
    }
}

impl<F: Field> ModifiedFields<F> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of(fields: impl IntoIterator<Item = F>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, field: F) {
        self.fields.insert(field);
    }

    /// Mark `field` when `changed` holds.
    pub fn mark_if(&mut self, field: F, changed: bool) {
        if changed {
            self.fields.insert(field);
        }
    }

    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// One validation or normalization step of a write pipeline.
#[async_trait]
pub trait PipelineStep<T, F>: Send + Sync
where
    T: Send + 'static,
    F: Field,
{
    /// Transform the candidate or reject it.
    async fn apply(&self, candidate: T, modified: &ModifiedFields<F>) -> AppResult<T>;

    /// Get the name of this step for logging
    fn step_name(&self) -> &'static str;

    /// Whether this write needs the step at all
    fn should_run(&self, _modified: &ModifiedFields<F>) -> bool {
        true
    }
}

/// Steps executed in insertion order; the first failure short-circuits.
pub struct Pipeline<T, F>
where
    T: Send + 'static,
    F: Field,
{
    name: &'static str,
    steps: Vec<Arc<dyn PipelineStep<T, F>>>,
}

impl<T, F> Clone for Pipeline<T, F>
where
    T: Send + 'static,
    F: Field,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            steps: self.steps.clone(),
        }
    }
}

impl<T, F> Pipeline<T, F>
where
    T: Send + 'static,
    F: Field,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    pub fn add_step(mut self, step: Arc<dyn PipelineStep<T, F>>) -> Self {
        self.steps.push(step);
        self
    }

    pub async fn run(&self, candidate: T, modified: &ModifiedFields<F>) -> AppResult<T> {
        let mut current = candidate;

        for step in &self.steps {
            if !step.should_run(modified) {
                log::trace!(
                    "Pipeline {}: step '{}' skipped",
                    self.name,
                    step.step_name()
                );
                continue;
            }

            current = match step.apply(current, modified).await {
                Ok(next) => {
                    LogContext::pipeline_step(self.name, step.step_name(), Ok(()));
                    next
                }
                Err(e) => {
                    let reason = e.to_string();
                    LogContext::pipeline_step(self.name, step.step_name(), Err(reason.as_str()));
                    return Err(e);
                }
            };
        }

        Ok(current)
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.step_name()).collect()
    }
}
