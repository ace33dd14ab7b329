use rand::rngs::OsRng;
use rand::RngCore;
use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;

pub const PREIMAGE_LEN: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not draw preimage from the OS random source: {0}")]
    Entropy(#[from] rand::Error),
    #[error("could not serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `preimage: <hex>` and `hash:     <hex>` on two lines.
    Plain,
    /// A pretty-printed object with `preimage` and `hash` fields.
    Json,
}

/// A hold invoice secret together with its payment hash.
///
/// The hash is handed to the payer, the preimage is revealed later to settle.
#[derive(Clone, PartialEq, Eq)]
pub struct PreimageHash {
    preimage: [u8; PREIMAGE_LEN],
    hash: [u8; 32],
}

/// Wire form of a [`PreimageHash`], both fields lowercase hex.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct HashRecord {
    pub preimage: String,
    pub hash: String,
}

impl PreimageHash {
    /// Draws a preimage from the operating system's CSPRNG.
    pub fn generate() -> Result<Self, Error> {
        Self::generate_from(&mut OsRng)
    }

    pub fn generate_from<R: RngCore>(rng: &mut R) -> Result<Self, Error> {
        let mut preimage = [0u8; PREIMAGE_LEN];
        rng.try_fill_bytes(&mut preimage)?;

        Ok(Self::from_preimage(preimage))
    }

    pub fn from_preimage(preimage: [u8; PREIMAGE_LEN]) -> Self {
        let hash = Sha256::digest(preimage).into();

        Self { preimage, hash }
    }

    pub fn preimage(&self) -> &[u8; PREIMAGE_LEN] {
        &self.preimage
    }

    pub fn hash(&self) -> &[u8; 32] {
        &self.hash
    }

    pub fn record(&self) -> HashRecord {
        HashRecord {
            preimage: hex::encode(self.preimage),
            hash: hex::encode(self.hash),
        }
    }

    /// Renders the pair including the trailing newline.
    pub fn render(&self, format: OutputFormat) -> Result<String, Error> {
        let record = self.record();

        let out = match format {
            OutputFormat::Plain => {
                format!("preimage: {}\nhash:     {}\n", record.preimage, record.hash)
            }
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&record)?;
                json.push('\n');
                json
            }
        };

        Ok(out)
    }
}

// Only the hash is public information.
impl std::fmt::Debug for PreimageHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreimageHash")
            .field("hash", &hex::encode(self.hash))
            .finish_non_exhaustive()
    }
}
