use anyhow::{Context, Result};
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Détecte automatiquement l'environnement
    pub fn detect() -> Self {
        Self::from_vars(
            env::var("AWS_LAMBDA_FUNCTION_NAME").ok().as_deref(),
            env::var("APP_ENV").ok().as_deref(),
        )
    }

    fn from_vars(lambda_function: Option<&str>, app_env: Option<&str>) -> Self {
        // Méthode 1: on tourne dans AWS Lambda
        if lambda_function.is_some() {
            return Self::Production;
        }

        // Méthode 2: variable APP_ENV
        match app_env {
            Some("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Filtre de logs utilisé quand RUST_LOG n'est pas défini
    pub fn default_log_filter(self) -> &'static str {
        if self.is_production() {
            "info,tower_http=info"
        } else {
            "info,arguehub_auth=debug,tower_http=info"
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    /// Vrai quand le binaire est invoqué par le runtime AWS Lambda
    pub lambda: bool,
    pub server_host: String,
    pub server_port: u16,
    pub max_body_bytes: usize,
}

impl Config {
    /// Charge la configuration depuis les variables d'environnement
    pub fn from_env() -> Result<Self> {
        let environment = Environment::detect();
        let lambda = env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok();

        tracing::info!(
            "🌍 Environment detected: {}",
            environment.as_str().to_uppercase()
        );

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let server_port = parse_or("SERVER_PORT", env::var("SERVER_PORT").ok(), DEFAULT_PORT)?;
        let max_body_bytes = parse_or(
            "MAX_BODY_BYTES",
            env::var("MAX_BODY_BYTES").ok(),
            DEFAULT_MAX_BODY_BYTES,
        )?;

        tracing::info!("✅ Configuration loaded successfully");
        tracing::debug!("   Server: {}:{}", server_host, server_port);
        tracing::debug!("   Max body: {} bytes", max_body_bytes);

        Ok(Self {
            environment,
            lambda,
            server_host,
            server_port,
            max_body_bytes,
        })
    }

    /// Configuration par défaut pour les tests et le développement local
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            lambda: false,
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Adresse d'écoute du serveur local
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Parse une variable optionnelle; une valeur invalide est une erreur de démarrage
fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a valid number (got {value:?})")),
        None => Ok(default),
    }
}
