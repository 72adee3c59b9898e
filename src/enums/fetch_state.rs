use crate::errors::LabelscopeError;

/// Pagination walk. `Fetching` carries the continuation token for the next
/// request (`None` on the first one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Fetching { token: Option<String> },
    Done,
    Failed(LabelscopeError),
}

impl FetchState {
    pub const fn start() -> Self {
        Self::Fetching { token: None }
    }

    pub fn after_page(next_token: Option<&str>) -> Self {
        match next_token {
            Some(token) if !token.is_empty() => Self::Fetching { token: Some(token.to_string()) },
            _ => Self::Done,
        }
    }
}
