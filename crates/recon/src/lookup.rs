use std::collections::HashMap;

use gtci_catalog::Catalog;

/// `code -> name` dictionary built once from a catalog.
///
/// Codes are not unique across editions; when a code appears on several rows
/// the later row wins, which maps a reused code to its 2025 successor.
#[derive(Debug, Clone, Default)]
pub struct CodeLookup {
    names: HashMap<String, String>,
}

impl CodeLookup {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut names = HashMap::with_capacity(catalog.len());
        for ind in catalog {
            names.insert(ind.code.clone(), ind.name.clone());
        }
        Self { names }
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
