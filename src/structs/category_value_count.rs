use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryValueCount {
    pub name: String,
    pub value: usize,
    pub raw_suffix: String,
}
