use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScdError {
    #[error("API Error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Endpoint Error {status}: {body}")]
    Endpoint { status: u16, body: String },
}

/// Renders an error together with every `source()` beneath it.
/// reqwest keeps the root cause (refused connection, DNS failure) out of its own message.
pub fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct Outer(#[source] io::Error);

    #[test]
    fn describe_walks_source_chain() {
        let err = Outer(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"));
        assert_eq!(describe(&err), "error sending request: connection refused");
    }

    #[test]
    fn describe_does_not_repeat_inlined_causes() {
        let err = ScdError::Io(io::Error::other("disk full"));
        assert_eq!(describe(&err), "IO Error: disk full");
    }
}
