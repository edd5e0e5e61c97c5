use crate::Signer;

use super::config::SessionConfig;

pub struct Data {
    pub config: SessionConfig,
    pub signer: Box<dyn Signer + Send + Sync>,
}
