use anyhow::{anyhow, Result};
use std::env;
use std::str::FromStr;

pub const ENV_VAR_EXCESS_FIELDS: &str = "AMQP_TYPES_EXCESS_FIELDS";

/// What to do when a peer transmits more fields than the local schema declares.
///
/// A newer peer may append fields to a list we know an older version of.
/// Those trailing fields are unknown to us, so by default they are skipped.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum ExcessFields {
    #[default]
    Ignore,
    Reject,
}

impl FromStr for ExcessFields {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            _ => Err(anyhow!(
                "Invalid {} value {:?}. Expected \"ignore\" or \"reject\".",
                ENV_VAR_EXCESS_FIELDS,
                s
            )),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct DecodeOpts {
    pub excess_fields: ExcessFields,
}

impl DecodeOpts {
    pub fn from_env() -> Result<Self> {
        let excess_fields = match env::var(ENV_VAR_EXCESS_FIELDS) {
            Err(env::VarError::NotPresent) => ExcessFields::default(),
            Err(e) => return Err(anyhow!(e)),
            Ok(s) => s.parse()?,
        };
        Ok(Self { excess_fields })
    }

    pub fn strict() -> Self {
        Self {
            excess_fields: ExcessFields::Reject,
        }
    }
}
