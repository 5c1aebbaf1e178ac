use anyhow::{Context, Result};
use clap::Parser;
use std::{env, path::PathBuf};

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Preview EC2/Snowball SDK wire shapes")]
pub struct Args {
    /// Host to bind to (overrides SDK_SHAPES_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides SDK_SHAPES_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Marshal the DescribeNetworkInterfaces request JSON in FILE, print the
    /// form body and exit
    #[arg(long, value_name = "FILE")]
    pub marshal: Option<PathBuf>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and the
    /// optional one-shot marshal input.
    pub fn from_env_and_args() -> Result<(Self, Option<PathBuf>)> {
        let args = Args::parse();
        let cfg = Self::merge(&args, |name| env::var(name))?;
        Ok((cfg, args.marshal))
    }

    /// CLI values win over the environment, which wins over defaults.
    fn merge(
        args: &Args,
        lookup: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self> {
        let env_host = lookup("SDK_SHAPES_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match lookup("SDK_SHAPES_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing SDK_SHAPES_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading SDK_SHAPES_PORT"),
        };

        Ok(Self {
            host: args.host.clone().unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Result<String, env::VarError> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["sdk-shapes"]);
        let cfg = AppConfig::merge(&args, lookup_from(&[])).unwrap();
        assert_eq!(cfg.addr(), "0.0.0.0:3000");
        assert!(args.marshal.is_none());
    }

    #[test]
    fn test_cli_overrides_env() {
        let args = Args::parse_from(["sdk-shapes", "--port", "8080", "--marshal", "req.json"]);
        let cfg = AppConfig::merge(
            &args,
            lookup_from(&[("SDK_SHAPES_HOST", "127.0.0.1"), ("SDK_SHAPES_PORT", "9000")]),
        )
        .unwrap();
        assert_eq!(cfg.addr(), "127.0.0.1:8080");
        assert_eq!(args.marshal, Some(PathBuf::from("req.json")));
    }

    #[test]
    fn test_bad_port_is_reported() {
        let args = Args::parse_from(["sdk-shapes"]);
        let err = AppConfig::merge(&args, lookup_from(&[("SDK_SHAPES_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("SDK_SHAPES_PORT"));
    }
}
