use std::io::Write;

use error_stack::{Result, ResultExt};
use hellocommon::greeting::{greet, DEFAULT_NAME};
use hellocommon::{errorln, hintln, verboseln};

use crate::cli::Cli;
use crate::error::Error;

pub fn run(cli: &Cli, w: &mut impl Write) -> Result<(), Error> {
    let name = cli.resolve_name();
    match name {
        Some(name) => verboseln!("greeting `{}`", name),
        None => verboseln!("no name given, greeting `{}`", DEFAULT_NAME),
    }

    let result = write_greeting(w, name);
    if result.is_err() {
        errorln!("Failed", "Cannot write greeting");
        hintln!("Consider", "Check that stdout is open and writable");
    }
    result
}

/// Write the greeting for `name` as one line
pub fn write_greeting(w: &mut impl Write, name: Option<&str>) -> Result<(), Error> {
    writeln!(w, "{}", greet(name)).change_context(Error::WriteOutput)?;
    w.flush().change_context(Error::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn cli(args: &[&str]) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(std::iter::once("hello").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_run() {
        let mut out = Vec::new();
        run(&cli(&["Bob", "Alice"]), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, Bob!\n");
    }

    #[test]
    fn test_run_error() {
        let report = run(&cli(&["Bob"]), &mut BrokenPipe).unwrap_err();
        assert!(matches!(report.current_context(), Error::WriteOutput));
    }

    #[test]
    fn test_write_greeting() {
        let mut out = Vec::new();
        write_greeting(&mut out, Some("Bob")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, Bob!\n");
    }

    #[test]
    fn test_write_greeting_default() {
        let mut out = Vec::new();
        write_greeting(&mut out, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, world!\n");
    }

    #[test]
    fn test_write_greeting_error() {
        let report = write_greeting(&mut BrokenPipe, None).unwrap_err();
        assert!(matches!(report.current_context(), Error::WriteOutput));
        let io = report
            .downcast_ref::<std::io::Error>()
            .expect("io error should be in the report");
        assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
