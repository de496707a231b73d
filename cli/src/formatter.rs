use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use smartcalc::{ConversionKind, EntryKind, Evaluation, HistoryEntry};

/// How many history entries the `history` command shows
const HISTORY_DISPLAY_COUNT: usize = 8;

fn marker(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Math => "🧮",
        EntryKind::Unit => "📏",
        EntryKind::Currency => "💱",
    }
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Format a successful evaluation.
    ///
    /// Conversions show 3 decimal places and the destination code as typed;
    /// arithmetic shows 4 decimal places and no suffix.
    pub fn format_evaluation(&self, input: &str, evaluation: &Evaluation) -> String {
        match evaluation {
            Evaluation::Conversion(result) => {
                let icon = match result.kind {
                    ConversionKind::Unit => marker(EntryKind::Unit),
                    ConversionKind::Currency => marker(EntryKind::Currency),
                };
                format!("{} {} = {:.3} {}\n", icon, input, result.value, result.to)
            }
            Evaluation::Arithmetic { value } => {
                format!("{} {} = {:.4}\n", marker(EntryKind::Math), input, value)
            }
        }
    }

    /// Format a failed evaluation: the original input echoed back plus a
    /// fixed hint. All failure causes collapse into this one message.
    pub fn format_failure(&self, input: &str) -> String {
        format!(
            "❌ Invalid: {}\nTry: 5.7 km m  OR  100 AED INR  OR  sqrt(16)\n",
            input
        )
    }

    /// Format the most recent history entries as a table, newest last
    pub fn format_history(&self, entries: &[HistoryEntry]) -> String {
        if entries.is_empty() {
            return "No history yet!\n".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["", "Expression", "Result"]);

        let start = entries.len().saturating_sub(HISTORY_DISPLAY_COUNT);
        for entry in &entries[start..] {
            let mut row = Row::new();
            row.add_cell(Cell::new(marker(entry.kind)));
            row.add_cell(Cell::new(&entry.expr));
            row.add_cell(
                Cell::new(format!("{:.3}", entry.result)).set_alignment(CellAlignment::Right),
            );
            table.add_row(row);
        }

        format!(
            "=== CALC HISTORY (last {}) ===\n{}\n",
            HISTORY_DISPLAY_COUNT, table
        )
    }

    pub fn format_help(&self) -> String {
        concat!(
            "=== ALL FEATURES ===\n",
            "🧮 Math: 10.5+23.7, 2^3, sqrt(16)\n",
            "📏 Units: 5.7 km m, 23.9 C F, 100 m ft, 2.5 kg lbs\n",
            "💱 Currency: 100.5 AED INR, 250 GBP USD\n",
            "📝 Commands: history, help, clear, quit\n",
        )
        .to_string()
    }
}
