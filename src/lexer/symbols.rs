//! Insertion-ordered symbol table.

use rustc_hash::FxHashMap;

use super::token::VariableType;

/// One table entry: a name bound to a stable numeric id and the currently
/// recorded variable type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub id: u32,
    pub var_type: VariableType,
}

/// Ordered registry of name → id → type.
///
/// Ids are assigned sequentially from 1 in first-sighting order and never
/// reassigned. Re-declaring a name overwrites the stored type in place
/// (last write wins). The lexer owns the table it builds; the semantic
/// analyzer borrows it read-only and each generator works on its own clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: FxHashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` with `var_type`, or overwrite the recorded type of an
    /// existing entry. Returns the stable id either way.
    pub fn declare(&mut self, name: &str, var_type: VariableType) -> u32 {
        if let Some(&slot) = self.index.get(name) {
            self.entries[slot].var_type = var_type;
            return self.entries[slot].id;
        }
        let id = self.max_id() + 1;
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(SymbolEntry {
            name: name.to_string(),
            id,
            var_type,
        });
        id
    }

    /// Insert `name` with the default Integer type unless already recorded;
    /// an existing entry keeps whatever type is on record. Returns the id
    /// and the recorded type.
    pub fn declare_default(&mut self, name: &str) -> (u32, VariableType) {
        if let Some(&slot) = self.index.get(name) {
            let entry = &self.entries[slot];
            return (entry.id, entry.var_type);
        }
        let id = self.declare(name, VariableType::Integer);
        (id, VariableType::Integer)
    }

    /// Recorded type of `name`, if present.
    pub fn type_of(&self, name: &str) -> Option<VariableType> {
        self.index.get(name).map(|&slot| self.entries[slot].var_type)
    }

    /// Id of `name`, if present.
    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.index.get(name).map(|&slot| self.entries[slot].id)
    }

    /// Highest id handed out so far; 0 for an empty table.
    pub fn max_id(&self) -> u32 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }

    /// Lexical symbol dump: `N – name [целый|вещественный]` per entry.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!(
                "{} – {} [{}]\n",
                entry.id,
                entry.name,
                entry.var_type.russian_name()
            ));
        }
        out
    }

    /// Generators' symbol dump: `<id,N> - name, integer|float` per entry.
    pub fn dump_extended(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!(
                "<id,{}> - {}, {}\n",
                entry.id,
                entry.name,
                entry.var_type.english_name()
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_from_one() {
        let mut table = SymbolTable::new();
        assert_eq!(table.declare("a", VariableType::Integer), 1);
        assert_eq!(table.declare("b", VariableType::Float), 2);
        assert_eq!(table.declare("c", VariableType::Integer), 3);
        assert_eq!(table.max_id(), 3);
    }

    #[test]
    fn test_redeclare_keeps_id_overwrites_type() {
        let mut table = SymbolTable::new();
        table.declare("a", VariableType::Integer);
        table.declare("b", VariableType::Integer);

        let id = table.declare("a", VariableType::Float);
        assert_eq!(id, 1);
        assert_eq!(table.type_of("a"), Some(VariableType::Float));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_declare_default_preserves_recorded_type() {
        let mut table = SymbolTable::new();
        table.declare("a", VariableType::Float);

        let (id, var_type) = table.declare_default("a");
        assert_eq!(id, 1);
        assert_eq!(var_type, VariableType::Float);

        let (id, var_type) = table.declare_default("fresh");
        assert_eq!(id, 2);
        assert_eq!(var_type, VariableType::Integer);
    }

    #[test]
    fn test_dump_formats() {
        let mut table = SymbolTable::new();
        table.declare("a", VariableType::Float);
        table.declare("b", VariableType::Integer);

        assert_eq!(table.dump(), "1 – a [вещественный]\n2 – b [целый]\n");
        assert_eq!(
            table.dump_extended(),
            "<id,1> - a, float\n<id,2> - b, integer\n"
        );
    }
}
