use crate::convert::ConversionKind;
use crate::history::{EntryKind, HistoryEntry, MemoryStore};
use crate::{CalcError, Engine, Evaluation};
use std::sync::Arc;

fn engine_with_store() -> (Engine, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let engine = Engine::with_store(Box::new(Arc::clone(&store)));
    (engine, store)
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within 1e-9, got {}",
        expected,
        actual
    );
}

#[test]
fn test_unit_conversion_line() {
    let (mut engine, _) = engine_with_store();
    match engine.evaluate("5.7 km m").unwrap() {
        Evaluation::Conversion(result) => {
            assert_eq!(result.kind, ConversionKind::Unit);
            assert_close(result.value, 5700.0);
            assert_eq!(result.to, "m");
        }
        other => panic!("expected conversion, got {:?}", other),
    }
}

#[test]
fn test_currency_line_is_not_malformed_arithmetic() {
    let (mut engine, _) = engine_with_store();
    match engine.evaluate("100 aed inr").unwrap() {
        Evaluation::Conversion(result) => {
            assert_eq!(result.kind, ConversionKind::Currency);
            assert_close(result.value, 100.0 * (1.0 / 3.67) * 83.5);
        }
        other => panic!("expected conversion, got {:?}", other),
    }
}

#[test]
fn test_arithmetic_line() {
    let (mut engine, _) = engine_with_store();
    match engine.evaluate("10.5+23.7").unwrap() {
        Evaluation::Arithmetic { value } => assert_close(value, 34.2),
        other => panic!("expected arithmetic, got {:?}", other),
    }
}

#[test]
fn test_glyph_operators_are_normalized() {
    let (mut engine, _) = engine_with_store();
    match engine.evaluate("10×2÷4").unwrap() {
        Evaluation::Arithmetic { value } => assert_close(value, 5.0),
        other => panic!("expected arithmetic, got {:?}", other),
    }
    // The recorded expression is the normalized one
    assert_eq!(engine.history().last().unwrap().expr, "10*2/4");
}

#[test]
fn test_malformed_input_is_a_recoverable_parse_error() {
    let (mut engine, _) = engine_with_store();
    match engine.evaluate("abc def ghi") {
        Err(CalcError::Parse(message)) => assert!(message.contains("abc def ghi")),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(engine.history().is_empty());
}

#[test]
fn test_unknown_conversion_falls_through_to_arithmetic() {
    let (mut engine, _) = engine_with_store();
    // Conversion grammar matches, no table entry, arithmetic fails too
    assert!(matches!(
        engine.evaluate("100 xyz abc"),
        Err(CalcError::Parse(_))
    ));
}

#[test]
fn test_reverse_entry_missing_falls_through() {
    let (mut engine, _) = engine_with_store();
    // km->ft has no table entry and is not a currency pair
    assert!(engine.evaluate("1 km ft").is_err());
}

#[test]
fn test_failed_evaluation_records_nothing() {
    let (mut engine, store) = engine_with_store();
    assert!(engine.evaluate("1/0").is_err());
    assert!(engine.history().is_empty());
    assert!(store.entries().is_empty());
    assert_eq!(engine.session_count(), 0);
}

#[test]
fn test_history_entries_carry_kind_and_arrow_expr() {
    let (mut engine, _) = engine_with_store();
    engine.evaluate("5.7 km m").unwrap();
    engine.evaluate("100 AED INR").unwrap();
    engine.evaluate("2+3").unwrap();

    let history = engine.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].expr, "5.7 km→m");
    assert_eq!(history[0].kind, EntryKind::Unit);
    assert_eq!(history[1].expr, "100 AED→INR");
    assert_eq!(history[1].kind, EntryKind::Currency);
    assert_eq!(history[2].kind, EntryKind::Math);
    assert_eq!(engine.session_count(), 3);
}

#[test]
fn test_persisted_history_is_trimmed_to_twenty() {
    let (mut engine, store) = engine_with_store();
    for i in 0..25 {
        engine.evaluate(&format!("{}+1", i)).unwrap();
    }

    let persisted = store.entries();
    assert_eq!(persisted.len(), 20);
    // The most recent 20, in original order
    assert_eq!(persisted[0].expr, "5+1");
    assert_eq!(persisted[19].expr, "24+1");

    // In-memory history keeps the whole session
    assert_eq!(engine.history().len(), 25);
}

#[test]
fn test_prior_history_is_loaded() {
    let store = Arc::new(MemoryStore::with_entries(vec![HistoryEntry {
        expr: "2+3".to_string(),
        result: 5.0,
        kind: EntryKind::Math,
    }]));
    let engine = Engine::with_store(Box::new(Arc::clone(&store)));

    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.session_count(), 0);
}

#[test]
fn test_clear_persists_empty_history() {
    let (mut engine, store) = engine_with_store();
    engine.evaluate("2+3").unwrap();
    assert_eq!(store.entries().len(), 1);

    engine.clear_history();
    assert!(engine.history().is_empty());
    assert!(store.entries().is_empty());
    // Session count is about work done, not entries retained
    assert_eq!(engine.session_count(), 1);
}
