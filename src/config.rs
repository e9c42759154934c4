//! Environment-backed configuration for the remote store connection.

use anyhow::{Context, Result};

/// Connection settings for the hosted database service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub supabase_url: String,
    /// Publishable (anon) API key; row-level security does the real gating.
    pub supabase_anon_key: String,
}

impl Config {
    /// Read configuration from the environment:
    /// - `SUPABASE_URL` - project base URL
    /// - `SUPABASE_ANON_KEY` - publishable API key
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            supabase_url: std::env::var("SUPABASE_URL")
                .context("SUPABASE_URL is not set")?,
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY")
                .context("SUPABASE_ANON_KEY is not set")?,
        })
    }
}
