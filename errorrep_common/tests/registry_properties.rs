//! Property tests over arbitrary raise/clear sequences.
//!
//! Each property replays a generated operation list against the registry
//! and compares it with a straightforward model built from std collections.

use errorrep_common::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Set(i32, Severity),
    Clear(i32),
}

fn severity() -> impl Strategy<Value = Severity> {
    (0u8..5).prop_map(|tag| Severity::from_u8(tag).unwrap())
}

/// Small code space so raises and clears collide often.
fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-8i32..=-1, severity()).prop_map(|(c, s)| Op::Set(c, s)),
        1 => (-8i32..=-1).prop_map(Op::Clear),
    ]
}

fn replay(log_capacity: usize, ops: &[Op]) -> ErrorRegistry {
    let mut reg = ErrorRegistry::new(RegistryConfig::with_log_capacity(log_capacity)).unwrap();
    for op in ops {
        match *op {
            Op::Set(code, sev) => {
                reg.set_error(code, sev).unwrap();
            }
            Op::Clear(code) => {
                reg.clear_error(code);
            }
        }
    }
    reg
}

proptest! {
    #[test]
    fn active_set_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        let reg = replay(16, &ops);

        let mut model: Vec<i32> = Vec::new();
        for op in &ops {
            match *op {
                Op::Set(code, _) => {
                    if !model.contains(&code) {
                        model.push(code);
                    }
                }
                Op::Clear(code) => model.retain(|c| *c != code),
            }
        }
        prop_assert_eq!(reg.error_report().codes().collect::<Vec<_>>(), model);
    }

    #[test]
    fn log_is_bounded_fifo(
        capacity in 1usize..=MAX_LOG_CAPACITY,
        ops in prop::collection::vec(op(), 0..128),
    ) {
        let reg = replay(capacity, &ops);
        let raised: Vec<i32> = ops
            .iter()
            .filter_map(|op| match *op {
                Op::Set(code, _) => Some(code),
                Op::Clear(_) => None,
            })
            .collect();

        let log = reg.error_log();
        prop_assert!(log.len() <= capacity);
        let keep = raised.len().min(capacity);
        prop_assert_eq!(log.codes().collect::<Vec<_>>(), raised[raised.len() - keep..].to_vec());
        prop_assert_eq!(log.evicted as usize, raised.len() - keep);
    }

    #[test]
    fn current_error_is_first_maximum(ops in prop::collection::vec(op(), 1..64)) {
        let mut reg = ErrorRegistry::new(RegistryConfig::with_log_capacity(4)).unwrap();
        let mut raised: Vec<ErrorEntry> = Vec::new();
        let mut last_severity: Option<Severity> = None;

        for op in &ops {
            match *op {
                Op::Set(code, sev) => raised.push(reg.set_error(code, sev).unwrap()),
                Op::Clear(code) => {
                    reg.clear_error(code);
                }
            }

            let current = reg.current_error();
            // Non-decreasing across the call sequence.
            if let (Some(prev), Some(now)) = (last_severity, current.map(|e| e.severity)) {
                prop_assert!(now >= prev);
            }
            last_severity = current.map(|e| e.severity);

            // Identity: first entry carrying the maximum severity so far.
            let expected = raised
                .iter()
                .map(|e| e.severity)
                .max()
                .and_then(|max| raised.iter().find(|e| e.severity == max).copied());
            prop_assert_eq!(current, expected);
            prop_assert_eq!(current, resolve_current_all(raised.iter().copied()));
        }
    }

    #[test]
    fn clear_never_touches_log_or_current(
        ops in prop::collection::vec(op(), 0..64),
        code in -8i32..=-1,
    ) {
        let mut reg = replay(8, &ops);
        let log_before: Vec<ErrorEntry> = reg.log_entries().copied().collect();
        let current_before = reg.current_error();
        let evicted_before = reg.evicted_count();

        reg.clear_error(code);

        prop_assert_eq!(reg.log_entries().copied().collect::<Vec<_>>(), log_before);
        prop_assert_eq!(reg.current_error(), current_before);
        prop_assert_eq!(reg.evicted_count(), evicted_before);
        prop_assert!(!reg.is_active(code));
    }

    #[test]
    fn double_raise_is_idempotent_for_membership(
        ops in prop::collection::vec(op(), 0..32),
        code in -8i32..=-1,
        sev in severity(),
    ) {
        let mut once = replay(32, &ops);
        let mut twice = once.clone();

        once.set_error(code, sev).unwrap();
        twice.set_error(code, sev).unwrap();
        twice.set_error(code, sev).unwrap();

        prop_assert_eq!(
            once.error_report().codes().collect::<Vec<_>>(),
            twice.error_report().codes().collect::<Vec<_>>()
        );
        prop_assert_eq!(twice.log_len(), (once.log_len() + 1).min(32));
    }

    #[test]
    fn rejected_codes_never_mutate(
        ops in prop::collection::vec(op(), 0..32),
        bad in 0i32..=i32::MAX,
        sev in severity(),
    ) {
        let mut reg = replay(16, &ops);
        let before = (reg.error_report(), reg.error_log(), reg.current_error(), reg.last_sequence());

        prop_assert_eq!(reg.set_error(bad, sev), Err(RegistryError::InvalidCode(bad)));
        prop_assert!(!reg.clear_error(bad));

        let after = (reg.error_report(), reg.error_log(), reg.current_error(), reg.last_sequence());
        prop_assert_eq!(before, after);
    }
}
