//! Spanish to Portuguese word table.
//!
//! Entries are kept in definition order. Redefining a key replaces its value
//! but keeps the key at the position of its first definition, which matters
//! for case-insensitive lookups: the first key (in table order) whose
//! lowercase form matches wins.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in entries, in authoring order.
///
/// The punctuated `Aceptar` variants can never match a word run.
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("Aceptar", "Aceitar"),
    ("Aceptar.", "Aceitar."),
    ("Aceptar!", "Aceitar!"),
    ("Aceptar?", "Aceitar?"),
    ("Aceptar;", "Aceitar;"),
    ("Aceptar,", "Aceitar,"),
    ("Cancelar", "Cancelar"),
    ("Sí", "Sim"),
    ("Si", "Se"),
    ("No", "Não"),
    ("Bienvenido", "Bem-vindo"),
    ("Bienvenida", "Bem-vinda"),
    ("Bienvenidos", "Bem-vindos"),
    ("Cerrar", "Fechar"),
    ("Abrir", "Abrir"),
    ("Aceptar", "Aceitar"),
    ("Reino", "Reino"),
    ("Reyes", "Reis"),
    ("Rey", "Rei"),
    ("Reina", "Rainha"),
    ("Hijos", "Filhos"),
    ("Hijas", "Filhas"),
    ("Hijo", "Filho"),
    ("Hija", "Filha"),
    ("Guardar", "Salvar"),
    ("Cargar", "Carregar"),
    ("Siguiente", "Próximo"),
    ("Anterior", "Anterior"),
    ("Aceptar", "Aceitar"),
];

static BUILTIN: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::from_pairs(BUILTIN_ENTRIES.iter().copied()));

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl Dictionary {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static Dictionary {
        &BUILTIN
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut dictionary = Self::default();
        dictionary.extend(pairs);
        dictionary
    }

    /// Add entries, replacing the value of keys that already exist.
    pub fn extend<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.insert(key.into(), value.into());
        }
    }

    fn insert(&mut self, key: String, value: String) {
        if let Some(&index) = self.exact.get(&key) {
            self.entries[index].1 = value;
            return;
        }
        let index = self.entries.len();
        self.folded.entry(key.to_lowercase()).or_insert(index);
        self.exact.insert(key.clone(), index);
        self.entries.push((key, value));
    }

    /// Look up a word with its exact casing.
    pub fn lookup_exact(&self, word: &str) -> Option<&str> {
        self.exact
            .get(word)
            .map(|&index| self.entries[index].1.as_str())
    }

    /// Look up a word ignoring case.
    pub fn lookup_folded(&self, word: &str) -> Option<&str> {
        self.folded
            .get(&word.to_lowercase())
            .map(|&index| self.entries[index].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
