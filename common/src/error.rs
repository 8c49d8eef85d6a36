use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /* the remote service answered, but not with something we can use */

    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),
    #[error("malformed range line {0:?}")]
    MalformedRangeLine(String),

    #[error("invalid configuration: {0:#}")]
    Config(eyre::Report),

    /* transport failures (DNS, refused, TLS, timeout, body decoding). Kept opaque,
       callers only need a printable reason */
    #[error("{0:#}")]
    Network(
        #[from]
        eyre::Report
    ),
}

pub type Result<T> = std::result::Result<T, Error>;
