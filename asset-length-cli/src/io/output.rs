use asset_length::io::ext_repr::ExtLengthReport;
use serde::{Deserialize, Serialize};

use crate::config::AlcConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct LengthOutput {
    #[serde(flatten)]
    pub report: ExtLengthReport,
    pub config: AlcConfig,
}
