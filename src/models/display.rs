//! `{Name: value,Name: value}` rendering shared by the response shapes.
//!
//! Only fields that are set are written, in the order the caller visits them.
//! The output is for logs and diagnostics; nothing parses it back.

use std::fmt;

pub(crate) struct ShapeWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    has_fields: bool,
    result: fmt::Result,
}

impl<'a, 'b> ShapeWriter<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        Self {
            f,
            has_fields: false,
            result,
        }
    }

    pub(crate) fn field<T: fmt::Display + ?Sized>(
        &mut self,
        name: &str,
        value: Option<&T>,
    ) -> &mut Self {
        if self.result.is_err() {
            return self;
        }
        if let Some(value) = value {
            let sep = if self.has_fields { "," } else { "" };
            self.has_fields = true;
            self.result = write!(self.f, "{sep}{name}: {value}");
        }
        self
    }

    pub(crate) fn list<T: fmt::Display>(&mut self, name: &str, value: Option<&[T]>) -> &mut Self {
        self.field(name, value.map(DisplayList).as_ref())
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}

/// Renders a slice as `[a, b]`.
pub(crate) struct DisplayList<'a, T>(pub(crate) &'a [T]);

impl<T: fmt::Display> fmt::Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
