use crate::configuration::Settings;
use crate::forms;
use crate::middleware::authentication::get_header;
use crate::models;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub struct AuthCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedContext>>,
}

struct CachedContext {
    context: models::AuthContext,
    expires_at: Instant,
}

impl AuthCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, token: &str) -> Option<models::AuthContext> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(token) {
                if entry.expires_at > now {
                    return Some(entry.context.clone());
                }
            }
        }

        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(token) {
            if entry.expires_at <= now {
                entries.remove(token);
            } else {
                return Some(entry.context.clone());
            }
        }

        None
    }

    pub async fn insert(&self, token: String, context: models::AuthContext) {
        let now = Instant::now();
        let expires_at = now + self.ttl;
        let mut entries = self.entries.write().await;
        // every insert also evicts whatever has expired
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(token, CachedContext { context, expires_at });
    }
}

fn try_extract_token(authentication: String) -> Result<String, String> {
    let mut authentication_parts = authentication.splitn(2, ' ');
    match authentication_parts.next() {
        Some("Bearer") => {}
        _ => return Err("Bearer missing scheme".to_string()),
    }
    let token = authentication_parts.next();
    if token.is_none() {
        tracing::error!("Bearer token is missing");
        return Err("Authentication required".to_string());
    }

    Ok(token.unwrap().into())
}

#[tracing::instrument(name = "Authenticate with bearer token")]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<bool, String> {
    let authentication = get_header::<String>(req, "authorization")?;
    if authentication.is_none() {
        return Ok(false);
    }

    let token = try_extract_token(authentication.unwrap())?;
    let settings = req.app_data::<web::Data<Settings>>().unwrap();
    let http_client = req.app_data::<web::Data<reqwest::Client>>().unwrap();
    let cache = req.app_data::<web::Data<AuthCache>>().unwrap();

    let context = match cache.get(&token).await {
        Some(context) => context,
        None => {
            let context =
                fetch_account(http_client.get_ref(), settings.auth_url.as_str(), &token).await?;
            cache.insert(token, context.clone()).await;
            context
        }
    };

    if req.extensions_mut().insert(context).is_some() {
        return Err("caller already authenticated".to_string());
    }

    Ok(true)
}

pub async fn fetch_account(
    client: &reqwest::Client,
    auth_url: &str,
    token: &str,
) -> Result<models::AuthContext, String> {
    let resp = client
        .get(auth_url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|err| {
            tracing::error!(target: "auth", error = %err, "account service request failed");
            "No response from the account service".to_string()
        })?;

    if !resp.status().is_success() {
        return Err("401 Unauthorized".to_string());
    }

    resp.json::<forms::UserForm>()
        .await
        .map_err(|_err| "can't parse the response body".to_string())?
        .try_into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_from_bearer_scheme() {
        let token = try_extract_token("Bearer abc123".to_string());
        assert_eq!(token, Ok("abc123".to_string()));
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(try_extract_token("abc123".to_string()).is_err());
        assert!(try_extract_token("Basic abc123".to_string()).is_err());
    }

    #[tokio::test]
    async fn cache_expires_entries() {
        let cache = AuthCache::new(Duration::from_millis(10));
        let context = models::AuthContext {
            user_id: "u1".to_string(),
        };

        cache.insert("token".to_string(), context.clone()).await;
        assert_eq!(cache.get("token").await, Some(context));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(cache.get("token").await, None);
    }

    #[tokio::test]
    async fn insert_sweeps_expired_entries() {
        let cache = AuthCache::new(Duration::from_millis(10));
        let stale = models::AuthContext {
            user_id: "u1".to_string(),
        };
        let fresh = models::AuthContext {
            user_id: "u2".to_string(),
        };

        cache.insert("stale".to_string(), stale).await;
        tokio::time::sleep(Duration::from_millis(20)).await;
        cache.insert("fresh".to_string(), fresh).await;

        let entries = cache.entries.read().await;
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key("fresh"));
    }
}
