#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("payment {0} not found")]
    PaymentNotFound(String),
    #[error("{0} payments found, a payment hash is required to select one")]
    AmbiguousPayment(usize),
    #[error("payment {0} has no htlcs")]
    NoHtlcs(String),
    #[error("htlc {index} of payment {payment_hash} has an empty route")]
    EmptyRoute { payment_hash: String, index: usize },
    #[error("settled amount via route `{0}` overflows")]
    SettledAmountOutOfRange(String),
}

impl Error {
    /// Splits reader failures from malformed input; the JSON decoder reports both as its own error.
    pub(crate) fn from_decoder(e: serde_json::Error) -> Self {
        if e.is_io() {
            Error::Io(e.into())
        } else {
            Error::Json(e)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
