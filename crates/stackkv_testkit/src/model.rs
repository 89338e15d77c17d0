//! Layered reference model of nested transactions.
//!
//! Instead of copying the whole mapping on BEGIN, the model keeps a base
//! mapping plus one override layer per open transaction. Reads consult the
//! layers innermost first. Commit folds the innermost layer into the one
//! below it; rollback drops it. The store must agree with this model on
//! every operation.

use crate::generators::StoreOperation;
use stackkv_core::{CommandKind, CoreError, CoreResult, Mapping, Response};
use std::collections::BTreeMap;

/// Pending overrides of one transaction; `None` marks a removal.
type Layer = BTreeMap<String, Option<String>>;

/// Reference implementation using delta layers.
#[derive(Debug, Clone, Default)]
pub struct LayeredModel {
    base: Mapping,
    layers: Vec<Layer>,
}

impl LayeredModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model whose base holds `mapping`.
    #[must_use]
    pub fn from_mapping(mapping: Mapping) -> Self {
        Self {
            base: mapping,
            layers: Vec::new(),
        }
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        for layer in self.layers.iter().rev() {
            if let Some(entry) = layer.get(key) {
                return entry.as_deref();
            }
        }
        self.base.get(key).map(String::as_str)
    }

    fn write(&mut self, key: &str, value: Option<String>) {
        match self.layers.last_mut() {
            Some(layer) => {
                layer.insert(key.to_string(), value);
            }
            None => match value {
                Some(value) => {
                    self.base.insert(key.to_string(), value);
                }
                None => {
                    self.base.remove(key);
                }
            },
        }
    }

    /// Returns the mapping as seen through every layer.
    #[must_use]
    pub fn visible(&self) -> Mapping {
        let mut visible = self.base.clone();
        for layer in &self.layers {
            for (key, entry) in layer {
                match entry {
                    Some(value) => {
                        visible.insert(key.clone(), value.clone());
                    }
                    None => {
                        visible.remove(key);
                    }
                }
            }
        }
        visible
    }

    /// Applies `op`, returning what the store is expected to return.
    pub fn apply(&mut self, op: &StoreOperation) -> CoreResult<Response> {
        match op {
            StoreOperation::Set { key, value } => {
                self.write(key, Some(value.clone()));
                Ok(Response::Empty)
            }
            StoreOperation::Unset { key } => {
                if self.lookup(key).is_none() {
                    return Err(CoreError::key_not_found(CommandKind::Unset, key.as_str()));
                }
                self.write(key, None);
                Ok(Response::Empty)
            }
            StoreOperation::Get { key } => self
                .lookup(key)
                .map(|value| Response::Value(value.to_string()))
                .ok_or_else(|| CoreError::key_not_found(CommandKind::Get, key.as_str())),
            StoreOperation::Counts { value } => Ok(Response::Count(
                self.visible().values().filter(|v| *v == value).count(),
            )),
            StoreOperation::Find { value } => Ok(Response::Keys(
                self.visible()
                    .into_iter()
                    .filter(|(_, v)| v == value)
                    .map(|(k, _)| k)
                    .collect(),
            )),
            StoreOperation::Begin => {
                self.layers.push(Layer::new());
                Ok(Response::Empty)
            }
            StoreOperation::Rollback => {
                self.layers
                    .pop()
                    .ok_or_else(|| CoreError::no_open_transaction(CommandKind::Rollback))?;
                Ok(Response::Empty)
            }
            StoreOperation::Commit => {
                let layer = self
                    .layers
                    .pop()
                    .ok_or_else(|| CoreError::no_open_transaction(CommandKind::Commit))?;
                for (key, entry) in layer {
                    self.write(&key, entry);
                }
                Ok(Response::Empty)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::mapping;

    fn set(key: &str, value: &str) -> StoreOperation {
        StoreOperation::Set {
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn commit_folds_into_outer_layer() {
        let mut model = LayeredModel::new();
        model.apply(&StoreOperation::Begin).unwrap();
        model.apply(&StoreOperation::Begin).unwrap();
        model.apply(&set("A", "1")).unwrap();
        model.apply(&StoreOperation::Commit).unwrap();
        assert_eq!(model.visible(), mapping(&[("A", "1")]));

        model.apply(&StoreOperation::Rollback).unwrap();
        assert!(model.visible().is_empty());
        assert_eq!(model.depth(), 0);
    }

    #[test]
    fn removal_in_layer_hides_base_value() {
        let mut model = LayeredModel::from_mapping(mapping(&[("A", "1")]));
        model.apply(&StoreOperation::Begin).unwrap();
        model
            .apply(&StoreOperation::Unset { key: "A".into() })
            .unwrap();
        assert!(model
            .apply(&StoreOperation::Get { key: "A".into() })
            .is_err());

        model.apply(&StoreOperation::Rollback).unwrap();
        assert_eq!(
            model.apply(&StoreOperation::Get { key: "A".into() }),
            Ok(Response::Value("1".into()))
        );
    }
}
