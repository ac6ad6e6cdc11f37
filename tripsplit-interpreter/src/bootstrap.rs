use std::env;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tripsplit_application::SettlementService;
use tripsplit_domain::{SettlementContext, UnsupportedScale};

const CURRENCY_SYMBOL_VAR: &str = "TRIPSPLIT_CURRENCY_SYMBOL";
const SCALE_VAR: &str = "TRIPSPLIT_SCALE";
const SHOW_BALANCES_VAR: &str = "TRIPSPLIT_SHOW_BALANCES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TRIPSPLIT_SCALE must be a non-negative integer (got '{0}')")]
    InvalidScale(String),
    #[error("TRIPSPLIT_SCALE={scale} exceeds the supported maximum of {max_supported}")]
    UnsupportedScale { scale: u32, max_supported: u32 },
    #[error("TRIPSPLIT_SHOW_BALANCES must be true/false/1/0 (got '{0}')")]
    InvalidFlag(String),
}

impl From<UnsupportedScale> for ConfigError {
    fn from(err: UnsupportedScale) -> Self {
        ConfigError::UnsupportedScale {
            scale: err.scale,
            max_supported: err.max_supported,
        }
    }
}

/// Application configuration
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Replaces the symbol derived from each trip's currency code.
    pub currency_symbol: Option<String>,
    /// Replaces the minor unit derived from each trip's currency code.
    pub context: Option<SettlementContext>,
    pub show_balances: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency_symbol = lookup(CURRENCY_SYMBOL_VAR).filter(|symbol| !symbol.is_empty());

        let context = match lookup(SCALE_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                let scale = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidScale(raw.clone()))?;
                Some(SettlementContext::new(scale)?)
            }
            _ => None,
        };

        let show_balances = match lookup(SHOW_BALANCES_VAR).as_deref().map(str::trim) {
            None | Some("") => false,
            Some(flag) if flag.eq_ignore_ascii_case("true") || flag == "1" => true,
            Some(flag) if flag.eq_ignore_ascii_case("false") || flag == "0" => false,
            Some(flag) => return Err(ConfigError::InvalidFlag(flag.to_string())),
        };

        Ok(Self {
            currency_symbol,
            context,
            show_balances,
        })
    }

    pub fn settlement_service(&self) -> SettlementService {
        match self.context {
            Some(context) => SettlementService::with_context(context),
            None => SettlementService::new(),
        }
    }
}

/// Initialize logging and tracing
///
/// Events go to stderr so the report on stdout stays clean. Defaults to `warn`
/// unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
