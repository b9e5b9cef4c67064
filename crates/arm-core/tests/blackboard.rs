use arm_core::{Blackboard, BlackboardError, Key};

const READY: Key<bool> = Key::new("ready");

#[test]
fn const_keys_interoperate_with_named_writes() {
    let mut bb = Blackboard::new();
    bb.set_by_name("ready", true).unwrap();
    assert_eq!(bb.get(&READY).copied(), Ok(true));
    assert_eq!(READY.name(), "ready");
}

#[test]
fn declare_set_get_roundtrip() -> Result<(), BlackboardError> {
    let mut bb = Blackboard::new();
    let k_count: Key<u32> = bb.declare("count")?;
    let k_frame: Key<String> = bb.declare("frame")?;

    assert!(!bb.contains("count"));
    assert!(bb.is_declared("count"));

    bb.set(&k_count, 123)?;
    bb.set(&k_frame, "frameA".to_string())?;

    assert_eq!(bb.get(&k_count).copied(), Ok(123));
    assert_eq!(bb.get(&k_frame).map(|s| s.as_str()), Ok("frameA"));

    assert_eq!(bb.remove(&k_count)?, Some(123));
    assert!(!bb.contains("count"));
    assert!(bb.is_declared("count"));
    Ok(())
}

#[test]
fn missing_entry_is_a_typed_error() {
    let bb = Blackboard::new();
    assert_eq!(
        bb.get_by_name::<bool>("frameA"),
        Err(BlackboardError::Missing {
            key: "frameA".to_string()
        })
    );
}

#[test]
fn declared_but_unset_entry_is_missing() {
    let mut bb = Blackboard::new();
    let key: Key<bool> = bb.declare("flag").unwrap();
    assert!(matches!(
        bb.get(&key),
        Err(BlackboardError::Missing { .. })
    ));
}

#[test]
fn mistyped_read_is_a_typed_error_not_a_panic() {
    let mut bb = Blackboard::new();
    bb.set_by_name("frameA", true).unwrap();
    let err = bb.get_by_name::<String>("frameA").unwrap_err();
    assert!(matches!(err, BlackboardError::TypeMismatch { .. }));
}

#[test]
fn redeclaring_with_another_type_is_rejected() {
    let mut bb = Blackboard::new();
    let _first: Key<u32> = bb.declare("count").unwrap();
    let second = bb.declare::<String>("count");
    assert!(matches!(second, Err(BlackboardError::Redeclared { .. })));

    // Same type again is fine and yields an equivalent key.
    let again: Key<u32> = bb.declare("count").unwrap();
    assert_eq!(again.name(), "count");
}

#[test]
fn set_by_name_type_checks_after_first_write() {
    let mut bb = Blackboard::new();
    bb.set_by_name("flag", true).unwrap();
    let err = bb.set_by_name("flag", 1u32).unwrap_err();
    assert!(matches!(err, BlackboardError::TypeMismatch { .. }));
    // Original value is untouched.
    assert_eq!(bb.get_by_name::<bool>("flag").copied(), Ok(true));
}

#[test]
fn get_mut_updates_in_place() {
    let mut bb = Blackboard::new();
    let key: Key<u32> = bb.declare("count").unwrap();
    bb.set(&key, 1).unwrap();
    *bb.get_mut(&key).unwrap() += 1;
    assert_eq!(bb.get(&key).copied(), Ok(2));
}
