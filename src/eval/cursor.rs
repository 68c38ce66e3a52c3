use crate::error::EvalError;

/// Position tracker into the input text used during the descent.
///
/// Owned by exactly one evaluation call. The offset only moves forward;
/// once a token is consumed the cursor never backs up.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    pub fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Consumes `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skips spaces and tabs. Newlines are not token separators here;
    /// an expression is a single line.
    pub fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.bump();
        }
    }

    /// Scans a maximal identifier run: letters, digits and underscores.
    /// The caller has already checked that the first character is a letter.
    pub fn scan_identifier(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.bump();
        }
        &self.input[start..self.pos]
    }

    /// Scans a number literal: digits with at most one decimal point,
    /// then an optional `e`/`E` exponent with optional sign.
    ///
    /// A second decimal point is an invalid-number error; a scan that
    /// consumes nothing is an expected-number error. Conversion to `f64`
    /// is left to the caller.
    pub fn scan_number(&mut self) -> Result<&'a str, EvalError> {
        let start = self.pos;
        let mut has_dot = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => self.bump(),
                '.' => {
                    if has_dot {
                        return Err(EvalError::InvalidNumber(
                            self.input[start..self.pos + 1].to_string(),
                        ));
                    }
                    has_dot = true;
                    self.bump();
                }
                _ => break,
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            while matches!(self.peek(), Some('0'..='9')) {
                self.bump();
            }
        }

        if self.pos == start {
            return Err(EvalError::ExpectedNumber(start));
        }
        Ok(&self.input[start..self.pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_spaces_stops_at_newline() {
        let mut cursor = Cursor::new("  \t x \n y");
        cursor.skip_spaces();
        assert_eq!(cursor.peek(), Some('x'));
        cursor.bump();
        cursor.skip_spaces();
        assert_eq!(cursor.peek(), Some('\n'));
    }

    #[test]
    fn test_scan_identifier_maximal_run() {
        let mut cursor = Cursor::new("log2(8)");
        assert_eq!(cursor.scan_identifier(), "log2");
        assert_eq!(cursor.peek(), Some('('));

        let mut cursor = Cursor::new("my_var + 1");
        assert_eq!(cursor.scan_identifier(), "my_var");
    }

    #[test]
    fn test_scan_number_plain_and_decimal() {
        let mut cursor = Cursor::new("42");
        assert_eq!(cursor.scan_number().unwrap(), "42");

        let mut cursor = Cursor::new("3.25*2");
        assert_eq!(cursor.scan_number().unwrap(), "3.25");
        assert_eq!(cursor.peek(), Some('*'));
    }

    #[test]
    fn test_scan_number_scientific() {
        let mut cursor = Cursor::new("1.5e-3+1");
        assert_eq!(cursor.scan_number().unwrap(), "1.5e-3");

        let mut cursor = Cursor::new("2E8");
        assert_eq!(cursor.scan_number().unwrap(), "2E8");
    }

    #[test]
    fn test_scan_number_second_dot_fails() {
        let mut cursor = Cursor::new("1..2");
        assert!(matches!(
            cursor.scan_number(),
            Err(EvalError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_scan_number_empty_fails() {
        let mut cursor = Cursor::new("*3");
        assert_eq!(cursor.scan_number(), Err(EvalError::ExpectedNumber(0)));
    }
}
