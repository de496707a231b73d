use crate::convert::{ConversionEngine, ConversionKind, ConversionResult};
use crate::history::{EntryKind, HistoryEntry, HistoryStore, MAX_PERSISTED_ENTRIES};
use crate::parser::conversions::{classify, Input};
use crate::parser::{normalize_operators, parse};
use crate::tables::UnitCurrencyTable;
use crate::{CalcResult, Evaluator};

/// What a successful evaluation produced
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Conversion(ConversionResult),
    Arithmetic { value: f64 },
}

/// The smartcalc facade: one entry point per input line.
///
/// Owns the lookup tables, the in-memory history and the persistence store.
/// Classification, conversion, arithmetic fallback and history recording all
/// happen inside [`Engine::evaluate`]; the shell only reads lines and prints.
pub struct Engine {
    tables: UnitCurrencyTable,
    store: Box<dyn HistoryStore>,
    history: Vec<HistoryEntry>,
    session_count: usize,
}

impl Engine {
    /// Create an engine backed by the given store, loading any prior history.
    ///
    /// A store that fails to load degrades to an empty in-memory history; the
    /// session still works, it just starts from scratch.
    pub fn with_store(store: Box<dyn HistoryStore>) -> Self {
        let history = match store.load() {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(%error, "failed to load history, starting empty");
                Vec::new()
            }
        };

        Self {
            tables: UnitCurrencyTable::new(),
            store,
            history,
            session_count: 0,
        }
    }

    /// Evaluate one input line.
    ///
    /// Dispatch order:
    /// 1. a line matching the conversion grammar is tried against the unit
    ///    table, then (for 3-letter codes) the currency table;
    /// 2. everything else, including conversion-shaped lines with no table
    ///    entry, is evaluated as arithmetic after operator-glyph
    ///    normalization.
    ///
    /// Every success appends a history entry and persists the trimmed tail.
    pub fn evaluate(&mut self, raw: &str) -> CalcResult<Evaluation> {
        let input = raw.trim();

        if let Input::Conversion(request) = classify(input) {
            if let Some(result) = ConversionEngine::new(&self.tables).convert(&request) {
                self.record(HistoryEntry {
                    expr: format!("{} {}→{}", request.value, request.from_unit, request.to_unit),
                    result: result.value,
                    kind: match result.kind {
                        ConversionKind::Unit => EntryKind::Unit,
                        ConversionKind::Currency => EntryKind::Currency,
                    },
                });
                return Ok(Evaluation::Conversion(result));
            }
            // Unknown unit/currency tokens get a second chance as math. This
            // can mask typos like "100 xyz abc"; kept for compatibility.
            tracing::debug!(%input, "conversion grammar matched but no table entry, trying arithmetic");
        }

        let normalized = normalize_operators(input);
        let expr = parse(&normalized)?;
        let value = Evaluator::new().evaluate(&expr)?;

        self.record(HistoryEntry {
            expr: normalized,
            result: value,
            kind: EntryKind::Math,
        });
        Ok(Evaluation::Arithmetic { value })
    }

    /// All entries known to this session, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of calculations recorded this session (excludes loaded history,
    /// unaffected by `clear`)
    pub fn session_count(&self) -> usize {
        self.session_count
    }

    /// Empty the history and persist immediately
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist();
    }

    fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
        self.session_count += 1;
        self.persist();
    }

    fn persist(&self) {
        let start = self.history.len().saturating_sub(MAX_PERSISTED_ENTRIES);
        if let Err(error) = self.store.save(&self.history[start..]) {
            tracing::warn!(%error, "failed to persist history, continuing in memory");
        }
    }
}
