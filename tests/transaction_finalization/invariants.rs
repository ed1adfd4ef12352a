//! Finalization invariants over arbitrary call sequences

use crate::*;
use proptest::prelude::*;

fn reply() -> impl Strategy<Value = Reply> {
    let msg = prop_oneof![
        4 => Just(Message::success()),
        1 => Just(Message::Ignored),
        1 => Just(Message::record(vec![Value::Int(1)])),
        1 => Just(Message::failure("Neo.DatabaseError.General.UnknownError", "oops")),
    ];
    prop_oneof![
        6 => (msg.clone(), msg).prop_map(|pair| -> Reply { Ok(pair) }),
        1 => Just(()).prop_map(|_| -> Reply {
            Err(boltx_core::Error::Protocol("framing".into()))
        }),
    ]
}

proptest! {
    #[test]
    fn finalization_happens_at_most_once(
        replies in proptest::collection::vec(reply(), 0..10),
        ops in proptest::collection::vec(any::<bool>(), 1..10),
        statement_fails in any::<bool>(),
    ) {
        let mut conn = ScriptedConnection::new(replies);
        conn.open_statement(statement_fails.then_some("disk full"));
        let mut tx = Transaction::new(&mut conn, TxnId::new(1));
        let mut closed_after: Option<Vec<Call>> = None;

        for commit in ops {
            let result = if commit { tx.commit() } else { tx.rollback() };
            match result {
                Ok(()) => {
                    prop_assert!(closed_after.is_none(), "finalized twice");
                    closed_after = Some(tx.connection().calls());
                }
                Err(e) => match &closed_after {
                    Some(calls) => {
                        prop_assert!(e.is_already_closed());
                        prop_assert_eq!(&tx.connection().calls(), calls);
                    }
                    None => {
                        prop_assert!(!e.is_already_closed());
                        prop_assert!(!tx.is_closed());
                        prop_assert_eq!(tx.connection().transaction, Some(TxnId::new(1)));
                    }
                },
            }
        }

        if statement_fails {
            prop_assert!(tx.connection().sent_keywords().is_empty());
            prop_assert!(!tx.is_closed());
        }
        prop_assert_eq!(tx.connection().transaction.is_none(), tx.is_closed());
    }

    #[test]
    fn statement_close_precedes_every_send(
        replies in proptest::collection::vec(reply(), 1..5),
        ops in proptest::collection::vec(any::<bool>(), 1..5),
    ) {
        let mut conn = ScriptedConnection::new(replies);
        conn.open_statement(None);
        let mut tx = Transaction::new(&mut conn, TxnId::new(2));
        for commit in ops {
            let _ = if commit { tx.commit() } else { tx.rollback() };
        }

        let calls = tx.connection().calls();
        prop_assert_eq!(calls.first(), Some(&Call::CloseStatement));
        prop_assert_eq!(
            calls.iter().filter(|c| **c == Call::CloseStatement).count(),
            1
        );
    }
}
