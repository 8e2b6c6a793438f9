use crate::errors::{OpalError, Result};

/// Parse helpers for the whitespace-split fields of one artifact line.
pub trait FieldsExt {
    fn get_required(&self, index: usize, line: usize) -> Result<&str>;
    fn parse_float_at(&self, index: usize, line: usize) -> Result<f64>;
    fn parse_usize_at(&self, index: usize, line: usize) -> Result<usize>;
}

impl FieldsExt for [&str] {
    fn get_required(&self, index: usize, line: usize) -> Result<&str> {
        self.get(index)
            .copied()
            .ok_or(OpalError::MissingField { line })
    }

    fn parse_float_at(&self, index: usize, line: usize) -> Result<f64> {
        let field = self.get_required(index, line)?;
        field.parse().map_err(|e| OpalError::FloatParseError {
            string: field.to_string(),
            source: e,
        })
    }

    fn parse_usize_at(&self, index: usize, line: usize) -> Result<usize> {
        let field = self.get_required(index, line)?;
        field.parse().map_err(|e| OpalError::IntParseError {
            string: field.to_string(),
            source: e,
        })
    }
}
