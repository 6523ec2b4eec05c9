use error_stack::Report;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write greeting to stdout")]
    WriteOutput,
}

/// Format a fatal error for stderr
///
/// Only the top-level message is shown unless `trace` is on
pub fn format_report(report: &Report<Error>, trace: bool) -> String {
    if trace {
        format!("error: {:?}", report)
    } else {
        format!("error: {}", report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_stack::ResultExt;

    fn broken_pipe_report() -> Report<Error> {
        Err::<(), _>(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
            .change_context(Error::WriteOutput)
            .unwrap_err()
    }

    #[test]
    fn test_format_report() {
        let message = format_report(&broken_pipe_report(), false);
        assert_eq!(message, "error: failed to write greeting to stdout");
    }

    #[test]
    fn test_format_report_trace() {
        let message = format_report(&broken_pipe_report(), true);
        assert!(message.starts_with("error: "), "{}", message);
        assert!(message.contains("failed to write greeting to stdout"), "{}", message);
        assert!(message.contains("broken pipe"), "{}", message);
    }
}
