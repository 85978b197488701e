use std::fmt;

/// Ordered `key=value` pairs shown after a bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    fields: Vec<(String, String)>,
}

impl Postfix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, or replaces the value of an existing key in place.
    pub fn field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// The text appended to a bar: empty, or `, ` followed by the fields.
    pub fn suffix(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(", {self}")
        }
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
