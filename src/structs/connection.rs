use std::fmt;

/// Everything needed to reach the tracker through the proxy.
#[derive(Clone, PartialEq, Eq)]
pub struct Connection {
    pub proxy_url: String,
    pub host: String,
    pub email: String,
    pub token: String,
    pub project: String,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("proxy_url", &self.proxy_url)
            .field("host", &self.host)
            .field("email", &self.email)
            .field("token", &"***")
            .field("project", &self.project)
            .finish()
    }
}
