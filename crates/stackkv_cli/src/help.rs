//! Help text printed by the HELP command.

/// Documentation for every command.
pub const HELP_TEXT: &str = "
    StackKV is an in-memory database that stores string values under string keys
    and answers questions about the stored values. Nested transactions are
    supported. Nothing is written to disk; all data is lost when the session ends.
    Commands:
            SET KEY VALUE   - store VALUE under KEY, replacing any previous value.
            GET KEY         - print the value stored under KEY, or NULL if KEY is not set.
            UNSET KEY       - remove KEY. Removing a key that is not set is an error.
            COUNTS VALUE    - print how many keys hold VALUE.
            FIND VALUE      - print the keys that hold VALUE.
            END             - close the session.
    Transactions:
            BEGIN           - open a new transaction (transactions nest).
            ROLLBACK        - discard the changes of the innermost transaction.
            COMMIT          - keep the changes of the innermost transaction.
    Names are case-insensitive. Keys and values cannot contain spaces.";
