use super::Session;

/// Outcome of checking a destination against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

/// Path-prefix access rules for portal destinations.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    protected_prefixes: Vec<String>,
    admin_prefix: String,
    auth_prefixes: Vec<String>,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self {
            protected_prefixes: vec!["/profile".to_string(), "/admin".to_string()],
            admin_prefix: "/admin".to_string(),
            auth_prefixes: vec!["/auth".to_string()],
        }
    }
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&self, path: &str, session: &Session) -> RouteDecision {
        if self.protected_prefixes.iter().any(|p| path.starts_with(p.as_str())) {
            if !session.is_authenticated() {
                return RouteDecision::Redirect(format!(
                    "/auth?from={}",
                    urlencoding::encode(path)
                ));
            }
            if path.starts_with(self.admin_prefix.as_str()) && !session.is_admin() {
                return RouteDecision::Redirect("/".to_string());
            }
        }

        if session.is_authenticated()
            && self
                .auth_prefixes
                .iter()
                .any(|p| path.starts_with(p.as_str()))
        {
            return RouteDecision::Redirect("/profile".to_string());
        }

        RouteDecision::Allow
    }

    /// Destination the navigator should actually open.
    pub fn resolve(&self, path: &str, session: &Session) -> String {
        match self.check(path, session) {
            RouteDecision::Allow => path.to_string(),
            RouteDecision::Redirect(target) => {
                tracing::info!(from = %path, to = %target, "navigation redirected");
                target
            }
        }
    }
}
