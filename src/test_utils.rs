//! In-memory records and store shared by unit tests.
#![cfg(test)]
#![allow(clippy::expect_used, clippy::panic)]

use std::cell::Cell;
use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::UntranslatableSettings;
use crate::propagation::{
    FieldPropagator,
    PersistenceError,
    PropagationReport,
    PropagationScope,
};
use crate::record::{
    Publishable,
    Record,
    RecordStore,
};
use crate::types::{
    FieldValue,
    RecordId,
};

/// Content key shared by every test record.
pub(crate) const CONTENT_KEY: &str = "article-1";

/// Settings with `fields` configured for `Article`.
pub(crate) fn article_settings(fields: &[&str]) -> UntranslatableSettings {
    let mut map = IndexMap::new();
    map.insert("Article".to_string(), fields.iter().map(ToString::to_string).collect());
    UntranslatableSettings { fields: Some(map), ..UntranslatableSettings::default() }
}

/// Draft/live flag.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LiveState(bool);

impl Publishable for LiveState {
    fn is_published(&self) -> bool {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MemoryRecord {
    type_name: String,
    id: RecordId,
    values: IndexMap<String, FieldValue>,
    live: Option<LiveState>,
}

impl MemoryRecord {
    /// Record without any fields.
    pub(crate) fn new(type_name: &str, locale: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            id: RecordId::new(CONTENT_KEY, locale),
            values: IndexMap::new(),
            live: None,
        }
    }

    /// `Article` with `Title` and `Body`.
    pub(crate) fn article(locale: &str, title: &str, body: &str) -> Self {
        Self::new("Article", locale).with("Title", title.into()).with("Body", body.into())
    }

    pub(crate) fn with(mut self, name: &str, value: FieldValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    /// Marks the record as a publishable type that is currently live.
    pub(crate) fn published(mut self) -> Self {
        self.live = Some(LiveState(true));
        self
    }

    /// Text value of `name`, or `""`.
    pub(crate) fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }
}

impl Record for MemoryRecord {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn declared_fields(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        self.values.get(name).cloned()
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
    }

    fn publish_state(&self) -> Option<&dyn Publishable> {
        self.live.as_ref().map(|live| live as &dyn Publishable)
    }
}

/// Store keeping every locale of one content key.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    records: Vec<MemoryRecord>,
    writes: HashMap<String, usize>,
    failing_locales: Vec<String>,
    fail_translations: bool,
    translation_lookups: Cell<usize>,
    published: Vec<String>,
    post_save_hook: Option<FieldPropagator>,
    hook_reports: Vec<PropagationReport>,
}

impl MemoryStore {
    pub(crate) fn new(records: Vec<MemoryRecord>) -> Self {
        Self { records, ..Self::default() }
    }

    /// Runs `propagator` after every write, like a host save pipeline.
    pub(crate) fn with_post_save_hook(mut self, propagator: FieldPropagator) -> Self {
        self.post_save_hook = Some(propagator);
        self
    }

    pub(crate) fn get(&self, locale: &str) -> &MemoryRecord {
        self.records
            .iter()
            .find(|record| record.id.locale == locale)
            .unwrap_or_else(|| panic!("no record for locale {locale}"))
    }

    pub(crate) fn fail_writes_for(&mut self, locale: &str) {
        self.failing_locales.push(locale.to_string());
    }

    pub(crate) fn fail_translations(&mut self) {
        self.fail_translations = true;
    }

    pub(crate) fn writes_for(&self, locale: &str) -> usize {
        self.writes.get(locale).copied().unwrap_or(0)
    }

    pub(crate) fn total_writes(&self) -> usize {
        self.writes.values().sum()
    }

    pub(crate) fn translation_lookups(&self) -> usize {
        self.translation_lookups.get()
    }

    pub(crate) fn published_locales(&self) -> Vec<String> {
        self.published.clone()
    }

    /// Reports of the propagations triggered by writes.
    pub(crate) fn hook_reports(&self) -> &[PropagationReport] {
        &self.hook_reports
    }
}

impl RecordStore for MemoryStore {
    type Record = MemoryRecord;

    fn translations(&self, source: &MemoryRecord) -> Result<Vec<MemoryRecord>, PersistenceError> {
        self.translation_lookups.set(self.translation_lookups.get() + 1);
        if self.fail_translations {
            return Err(PersistenceError::Storage("translation table unavailable".into()));
        }
        Ok(self
            .records
            .iter()
            .filter(|record| record.id.same_content(&source.id) && record.id != source.id)
            .cloned()
            .collect())
    }

    fn write(
        &mut self,
        record: &MemoryRecord,
        scope: &PropagationScope,
    ) -> Result<(), PersistenceError> {
        if self.failing_locales.contains(&record.id.locale) {
            return Err(PersistenceError::Write {
                record: record.id(),
                message: "simulated failure".to_string(),
            });
        }

        let stored = self
            .records
            .iter_mut()
            .find(|stored| stored.id == record.id)
            .expect("writes only target existing records");
        *stored = record.clone();
        *self.writes.entry(record.id.locale.clone()).or_default() += 1;

        if let Some(hook) = self.post_save_hook.clone() {
            let report = hook
                .propagate(record, self, scope)
                .map_err(|error| PersistenceError::Storage(Box::new(error)))?;
            self.hook_reports.push(report);
        }
        Ok(())
    }

    fn publish(
        &mut self,
        record: &MemoryRecord,
        _scope: &PropagationScope,
    ) -> Result<(), PersistenceError> {
        self.published.push(record.id.locale.clone());
        Ok(())
    }
}
