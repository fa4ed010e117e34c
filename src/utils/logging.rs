use tracing::Level;

pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

pub fn setup_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // prompts own stdout, so log lines go to stderr.
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::utils::logging::parse_level;

    #[test]
    fn test_should_parse_levels() {
        assert_eq!(Level::DEBUG, parse_level("debug"));
        assert_eq!(Level::INFO, parse_level("INFO"));
        assert_eq!(Level::WARN, parse_level("warn"));
        assert_eq!(Level::WARN, parse_level("nonsense"));
    }
}
