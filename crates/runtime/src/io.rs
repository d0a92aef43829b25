//! I/O Operations for Velocity
//!
//! The output engine behind the language's `println`. A call renders its
//! template (see [`template`](crate::template)) with the positional
//! arguments, then writes the line and a trailing newline in one go. If
//! rendering fails, nothing is written.
//!
//! Generated code normally goes through the macros:
//!
//! ```no_run
//! use velocity_runtime::print_line;
//!
//! # fn main() -> velocity_runtime::Result<()> {
//! let count = 3;
//! print_line!("{} items, {{escaped}}", count)?;
//! # Ok(())
//! # }
//! ```

use crate::config::PrintConfig;
use crate::template::Template;
use std::io::{self, Write};
use tracing::debug;
use velocity_core::{Format, Result};

/// Render `template` with the process-wide configuration
pub fn render(template: &str, args: &[&dyn Format]) -> Result<String> {
    render_with(template, args, PrintConfig::global())
}

/// Render `template` with an explicit configuration
pub fn render_with(template: &str, args: &[&dyn Format], config: &PrintConfig) -> Result<String> {
    Template::parse(template)?.render(args, config.argument_policy)
}

/// Render `template` and write it plus `\n` to `writer`
pub fn write_line<W: Write>(
    writer: &mut W,
    template: &str,
    args: &[&dyn Format],
    config: &PrintConfig,
) -> Result<()> {
    let mut line = render_with(template, args, config)?;
    line.push('\n');
    writer.write_all(line.as_bytes())?;
    debug!(bytes = line.len(), "wrote line");
    Ok(())
}

/// Render `template` and write it plus `\n` to stdout, then flush
pub fn print_line(template: &str, args: &[&dyn Format]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_line(&mut handle, template, args, PrintConfig::global())?;
    handle.flush()?;
    Ok(())
}

/// Print a template line to stdout
///
/// Expands to [`io::print_line`](crate::io::print_line) with every
/// argument passed through its [`Format`] capability.
#[macro_export]
macro_rules! print_line {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::io::print_line($template, &[$(&$arg as &dyn $crate::Format),*])
    };
}

/// Render a template line to a `String` without printing it
#[macro_export]
macro_rules! render {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::io::render($template, &[$(&$arg as &dyn $crate::Format),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArgumentPolicy;
    use velocity_core::RuntimeError;

    fn strict() -> PrintConfig {
        PrintConfig::new()
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut out = Vec::new();
        write_line(&mut out, "x.type = {}", &[&"A"], &strict()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "x.type = A\n");
    }

    #[test]
    fn test_write_line_escaped_braces() {
        let mut out = Vec::new();
        write_line(&mut out, "{{}}", &[], &strict()).unwrap();
        assert_eq!(out, b"{}\n");
    }

    #[test]
    fn test_invalid_template_writes_nothing() {
        let mut out = Vec::new();
        let err = write_line(&mut out, "{", &[&1], &strict()).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidTemplate { position: 0, .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_argument_mismatch_writes_nothing() {
        let mut out = Vec::new();
        assert!(write_line(&mut out, "{} {}", &[&1], &strict()).is_err());
        assert!(write_line(&mut out, "{}", &[&1, &2], &strict()).is_err());
        assert!(out.is_empty());

        let lenient = PrintConfig::new().with_argument_policy(ArgumentPolicy::Lenient);
        write_line(&mut out, "{}", &[&1, &2], &lenient).unwrap();
        assert_eq!(out, b"1\n");
    }

    #[test]
    fn test_render_with() {
        assert_eq!(
            render_with("{} and {}", &[&1.5, &true], &strict()).unwrap(),
            "1.5 and true"
        );
    }

    #[test]
    fn test_render_macro() {
        let name = "world";
        assert_eq!(crate::render!("hello {}", name).unwrap(), "hello world");
        assert_eq!(crate::render!("plain").unwrap(), "plain");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let err = write_line(&mut FailingWriter, "hi", &[], &strict()).unwrap_err();
        assert!(matches!(err, RuntimeError::Io(_)));
    }
}
