pub mod cli;
pub mod preimage;

pub use preimage::Error;
pub use preimage::HashRecord;
pub use preimage::OutputFormat;
pub use preimage::PreimageHash;
