/// Append-only table of `(label, byte address)` pairs.
///
/// Duplicates are permitted; `find` returns the first occurrence. Labels
/// borrow from the source line, so pass 1 never copies them out.
pub struct SymbolTable<'i> {
    symbols: Vec<(&'i str, u32)>,
}

impl<'i> SymbolTable<'i> {
    pub fn new() -> SymbolTable<'i> {
        SymbolTable { symbols: Vec::new() }
    }

    pub fn append(&mut self, label: &'i str, address: u32) {
        self.symbols.push((label, address));
    }

    pub fn find(&self, label: &str) -> Option<u32> {
        self.symbols
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, address)| *address)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'i> Default for SymbolTable<'i> {
    fn default() -> SymbolTable<'i> {
        SymbolTable::new()
    }
}
