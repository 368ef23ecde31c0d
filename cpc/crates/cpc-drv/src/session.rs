//! Scanning sessions.
//!
//! A [`Session`] owns the driver configuration and runs the scanner over a
//! file or over lines read interactively. Output streams are passed in so
//! the same code serves the binary and the tests.

use std::io::{BufRead, Write};
use std::path::Path;

use cpc_lex::Token;
use cpc_util::{Diagnostic, Handler};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DriverError, Result};

/// A driver session.
///
/// # Example
///
/// ```
/// use cpc_drv::{Config, Session};
///
/// let session = Session::new(Config::default());
/// let mut out: Vec<u8> = Vec::new();
/// let mut err: Vec<u8> = Vec::new();
///
/// session.run("print 1;", &mut out, &mut err).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "PRINT print null\nINT 1 1\nSEMICOLON ; null\n"
/// );
/// assert!(err.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    color: bool,
}

impl Session {
    /// Create a session with colorless diagnostics.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            color: false,
        }
    }

    /// Enable or disable ANSI colors in diagnostics.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Scan `source`, writing tokens to `out` and diagnostics to `err`.
    ///
    /// Every token and every diagnostic is written even when errors were
    /// found; the errors then come back as [`DriverError::Diagnostics`].
    pub fn run<O, E>(&self, source: &str, out: &mut O, err: &mut E) -> Result<()>
    where
        O: Write,
        E: Write,
    {
        let mut handler = Handler::new();
        let tokens = cpc_lex::scan(source, &mut handler);

        for diagnostic in handler.diagnostics() {
            writeln!(err, "{}", self.render_diagnostic(&diagnostic))?;
        }
        for token in &tokens {
            writeln!(out, "{}", self.render_token(token))?;
        }

        handler.check()?;
        Ok(())
    }

    /// Read and scan a whole file.
    ///
    /// Bytes that are not valid UTF-8 are decoded as U+FFFD rather than
    /// rejecting the file; inside comments and strings they are harmless.
    pub fn run_file<O, E>(&self, path: &Path, out: &mut O, err: &mut E) -> Result<()>
    where
        O: Write,
        E: Write,
    {
        let bytes = std::fs::read(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        debug!(path = %path.display(), bytes = bytes.len(), "scanning file");

        self.run(&source, out, err)
    }

    /// Prompt for lines on `out` and scan each one until `input` ends.
    ///
    /// Lines are independent: each gets a fresh lexer and handler, and
    /// errors on one line do not end the session.
    pub fn run_prompt<R, O, E>(&self, input: &mut R, out: &mut O, err: &mut E) -> Result<()>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        info!("interactive session started");
        let mut line = Vec::new();
        let mut count = 0usize;

        loop {
            write!(out, "{}", self.config.repl.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            count += 1;

            let text = String::from_utf8_lossy(&line);
            let source = text.trim_end_matches(&['\n', '\r'][..]);
            match self.run(source, out, err) {
                Ok(()) => {},
                Err(DriverError::Diagnostics(e)) => debug!(line = count, "{}", e),
                Err(e) => return Err(e),
            }
        }

        info!(lines = count, "interactive session ended");
        Ok(())
    }

    /// Render one token as `KIND lexeme literal`.
    pub fn render_token(&self, token: &Token) -> String {
        if self.config.output.show_spans {
            format!("{} @{}", token, token.span())
        } else {
            token.to_string()
        }
    }

    /// Render one diagnostic as `Error [line N]: message`.
    pub fn render_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        if self.color {
            diagnostic.render_colored()
        } else {
            diagnostic.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(session: &Session, source: &str) -> (Result<()>, String, String) {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let result = session.run(source, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_run_prints_tokens() {
        let session = Session::new(Config::default());
        let (result, out, err) = run(&session, "var s = \"hi\";");
        assert!(result.is_ok());
        assert_eq!(
            out,
            "VAR var null\nIDENTIFIER s null\nEQUAL = null\nSTRING \"hi\" hi\nSEMICOLON ; null\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_reports_errors_and_keeps_tokens() {
        let session = Session::new(Config::default());
        let (result, out, err) = run(&session, "1 @\n'open");
        assert!(matches!(result, Err(DriverError::Diagnostics(_))));
        assert_eq!(out, "INT 1 1\n");
        assert_eq!(
            err,
            "Error [line 1]: unexpected character '@'\nError [line 2]: Unfinished string\n"
        );
    }

    #[test]
    fn test_run_with_spans() {
        let mut config = Config::default();
        config.output.show_spans = true;
        let session = Session::new(config);
        let (_, out, _) = run(&session, "a .5");
        assert_eq!(out, "IDENTIFIER a null @0..1\nFLOAT .5 0.5 @2..4\n");
    }

    #[test]
    fn test_run_with_color() {
        let session = Session::new(Config::default()).with_color(true);
        let (_, _, err) = run(&session, "@");
        assert!(err.starts_with("\x1b[1;31mError\x1b[0m [line 1]"));
    }

    #[test]
    fn test_run_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.cp");
        std::fs::write(&path, "# comment\nprint 2 ** 3;\n").unwrap();

        let session = Session::new(Config::default());
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        session.run_file(&path, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("STAR_STAR ** null"));
    }

    #[test]
    fn test_run_file_with_invalid_utf8_in_comment() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.cp");
        std::fs::write(&path, b"# caf\xe9\nvar x;\n").unwrap();

        let session = Session::new(Config::default());
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        session.run_file(&path, &mut out, &mut err).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "VAR var null\nIDENTIFIER x null\nSEMICOLON ; null\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_file_missing() {
        let session = Session::new(Config::default());
        let result = session.run_file(
            Path::new("/nonexistent/script.cp"),
            &mut Vec::<u8>::new(),
            &mut Vec::<u8>::new(),
        );
        let err = result.unwrap_err();
        assert!(matches!(err, DriverError::Read { .. }));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_prompt_lines_are_independent() {
        let session = Session::new(Config::default());
        let mut input = Cursor::new("1 $\n'open\nvar x;\n");
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();

        session.run_prompt(&mut input, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert_eq!(
            out,
            "cp> INT 1 1\ncp> cp> VAR var null\nIDENTIFIER x null\nSEMICOLON ; null\ncp> "
        );
        // Every line is line 1 of its own scan.
        assert_eq!(
            err,
            "Error [line 1]: unexpected character '$'\nError [line 1]: Unfinished string\n"
        );
    }

    #[test]
    fn test_prompt_survives_invalid_utf8_line() {
        let session = Session::new(Config::default());
        let mut input = Cursor::new(&b"var \xff\n1\n"[..]);
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();

        session.run_prompt(&mut input, &mut out, &mut err).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "cp> VAR var null\ncp> INT 1 1\ncp> "
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error [line 1]: unexpected character '\u{fffd}'\n"
        );
    }

    #[test]
    fn test_prompt_uses_configured_prompt() {
        let mut config = Config::default();
        config.repl.prompt = ">> ".to_string();
        let session = Session::new(config);
        let mut out: Vec<u8> = Vec::new();

        session
            .run_prompt(&mut Cursor::new(""), &mut out, &mut Vec::<u8>::new())
            .unwrap();

        assert_eq!(out, b">> ");
    }

    #[test]
    fn test_prompt_handles_crlf_and_missing_final_newline() {
        let session = Session::new(Config::default());
        let mut out: Vec<u8> = Vec::new();

        session
            .run_prompt(&mut Cursor::new("+\r\n-"), &mut out, &mut Vec::<u8>::new())
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "cp> PLUS + null\ncp> MINUS - null\ncp> "
        );
    }
}
