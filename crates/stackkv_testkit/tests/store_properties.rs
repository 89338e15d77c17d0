//! Property tests for the transactional store.

use proptest::prelude::*;
use stackkv_core::{CommandKind, CoreError, Response, Store};
use stackkv_testkit::prelude::*;

proptest! {
    #![proptest_config(PropTestConfig::thorough().to_proptest_config())]

    #[test]
    fn store_agrees_with_layered_model(ops in operation_sequence_strategy(1, 80)) {
        let mut store = Store::new();
        let mut model = LayeredModel::new();

        for op in &ops {
            let expected = model.apply(op);
            let actual = store.execute(&op.to_command());
            prop_assert_eq!(&actual, &expected, "diverged on {:?}", op);
            prop_assert_eq!(store.mapping(), &model.visible());
            prop_assert_eq!(store.transaction_depth(), model.depth());
        }
    }
}

proptest! {
    #![proptest_config(PropTestConfig::default().to_proptest_config())]

    #[test]
    fn counts_matches_find(
        ops in operation_sequence_strategy(0, 60),
        value in value_strategy(),
    ) {
        let mut store = Store::new();
        for op in &ops {
            let _ = store.execute(&op.to_command());
        }
        prop_assert_eq!(store.counts(&value), store.find(&value).len());
        for key in store.find(&value) {
            prop_assert_eq!(store.get(key).unwrap(), value.as_str());
        }
    }

    #[test]
    fn rollback_restores_state_at_begin(
        setup in operation_sequence_strategy(0, 30),
        inside in operation_sequence_strategy(0, 30),
    ) {
        let mut store = Store::new();
        for op in &setup {
            let _ = store.execute(&op.to_command());
        }
        let before = store.mapping().clone();
        let depth = store.transaction_depth();

        store.begin_transaction();
        // Stay inside the transaction opened above.
        for op in inside.iter().filter(|op| {
            !matches!(op, StoreOperation::Begin | StoreOperation::Rollback | StoreOperation::Commit)
        }) {
            let _ = store.execute(&op.to_command());
        }
        store.rollback_transaction().unwrap();

        prop_assert_eq!(store.mapping(), &before);
        prop_assert_eq!(store.transaction_depth(), depth);
    }

    #[test]
    fn set_then_get(key in key_strategy(), value in value_strategy(), ops in operation_sequence_strategy(0, 30)) {
        let mut store = Store::new();
        for op in &ops {
            let _ = store.execute(&op.to_command());
        }
        store.set(key.as_str(), value.as_str());
        prop_assert_eq!(store.get(&key).unwrap(), value.as_str());
    }

    #[test]
    fn failed_operations_leave_store_untouched(ops in operation_sequence_strategy(0, 60)) {
        let mut store = Store::new();
        for op in &ops {
            let before = store.clone();
            if store.execute(&op.to_command()).is_err() {
                prop_assert_eq!(store.mapping(), before.mapping());
                prop_assert_eq!(store.transaction_depth(), before.transaction_depth());
            }
        }
    }

    #[test]
    fn queries_never_mutate(ops in operation_sequence_strategy(0, 60)) {
        let mut store = Store::new();
        for op in &ops {
            let before = store.mapping().clone();
            let _ = store.execute(&op.to_command());
            if !op.is_mutation() {
                prop_assert_eq!(store.mapping(), &before);
            }
        }
    }

    #[test]
    fn unset_absent_key_always_fails(key in key_strategy(), ops in operation_sequence_strategy(0, 30)) {
        let mut store = Store::new();
        for op in &ops {
            let _ = store.execute(&op.to_command());
        }
        if !store.contains_key(&key) {
            let before = store.mapping().clone();
            prop_assert_eq!(
                store.unset(&key),
                Err(CoreError::key_not_found(CommandKind::Unset, key.as_str()))
            );
            prop_assert_eq!(store.mapping(), &before);
        }
    }

    #[test]
    fn find_response_joins_keys(ops in operation_sequence_strategy(0, 40), value in value_strategy()) {
        let mut store = Store::new();
        for op in &ops {
            let _ = store.execute(&op.to_command());
        }
        let keys = store.find(&value).join(" ");
        let response = store
            .dispatch(CommandKind::Find, None, Some(value.as_str()))
            .unwrap();
        prop_assert_eq!(response.render(), Some(keys));
        prop_assert!(!matches!(response, Response::Empty));
    }
}
