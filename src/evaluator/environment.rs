use std::collections::HashMap;

/// Variable bindings used during evaluation.
///
/// Looking up a name that was never bound yields 0 rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: HashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn bind(&mut self, name: impl Into<String>, value: i64) {
        self.bindings.insert(name.into(), value);
    }

    /// Returns the value bound to `name`, or 0 if it is unbound.
    pub fn lookup(&self, name: &str) -> i64 {
        self.get(name).unwrap_or(0)
    }

    /// Returns the value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut environment = Environment::new();
        for (name, value) in iter {
            environment.bind(name, value);
        }
        environment
    }
}
