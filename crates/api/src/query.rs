//! Query parameter types shared by handlers.

use serde::Deserialize;

/// `?q=` search parameter. Missing and empty are treated alike.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
