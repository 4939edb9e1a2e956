use serde::{Deserialize, Serialize};

/// JSON body returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
