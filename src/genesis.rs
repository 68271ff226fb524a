use std::{collections::BTreeMap, fs, path::Path};

use log::debug;
use serde::{
    de::{self, DeserializeOwned},
    Deserialize, Deserializer, Serialize,
};
use serde_json::{Map, Value};

use crate::error::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Genesis {
    #[serde(deserialize_with = "object")]
    pub config: ChainConfig,
    #[serde(deserialize_with = "or_default")]
    pub nonce: String,
    #[serde(deserialize_with = "or_default")]
    pub timestamp: String,
    #[serde(deserialize_with = "or_default")]
    pub extra_data: String,
    #[serde(deserialize_with = "or_default")]
    pub gas_limit: String,
    #[serde(deserialize_with = "or_default")]
    pub difficulty: String,
    #[serde(deserialize_with = "or_default")]
    pub mix_hash: String,
    #[serde(deserialize_with = "or_default")]
    pub coinbase: String,
    #[serde(deserialize_with = "alloc")]
    pub alloc: BTreeMap<String, Account>,
    #[serde(deserialize_with = "or_default")]
    pub number: String,
    #[serde(deserialize_with = "or_default")]
    pub gas_used: String,
    #[serde(deserialize_with = "or_default")]
    pub parent_hash: String,
    /// Absent and `Some("0x0")` are different things.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChainConfig {
    #[serde(deserialize_with = "or_default")]
    pub chain_id: i64,
    #[serde(deserialize_with = "or_default")]
    pub homestead_block: i64,
    #[serde(deserialize_with = "or_default")]
    pub eip150_block: i64,
    #[serde(deserialize_with = "or_default")]
    pub eip150_hash: String,
    #[serde(deserialize_with = "or_default")]
    pub eip155_block: i64,
    #[serde(deserialize_with = "or_default")]
    pub eip158_block: i64,
    #[serde(deserialize_with = "or_default")]
    pub byzantium_block: i64,
    #[serde(deserialize_with = "or_default")]
    pub constantinople_block: i64,
    #[serde(deserialize_with = "or_default")]
    pub petersburg_block: i64,
    #[serde(deserialize_with = "or_default")]
    pub istanbul_block: i64,
    #[serde(deserialize_with = "or_default")]
    pub berlin_block: i64,
    #[serde(deserialize_with = "or_default")]
    pub london_block: i64,
    #[serde(deserialize_with = "object")]
    pub ethash: Ethash,
}

/// Ethash sealing marker, its contents are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ethash {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "or_default")]
    pub balance: String,
}

impl Genesis {
    /// Read and parse the genesis file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|source| Error::IoFailure {
            path: path.to_path_buf(),
            source,
        })?;

        let genesis = Self::from_slice(&content).map_err(|source| Error::ParseFailure {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            "📣 Loaded genesis from {:?}: chain id {}, {} allocations",
            path,
            genesis.config.chain_id,
            genesis.alloc.len()
        );
        Ok(genesis)
    }

    pub fn from_slice(content: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<Object<Self>>(content).map(|Object(genesis)| genesis)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        Self::from_slice(content.as_bytes())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A struct that only deserializes from a JSON object or `null`.
///
/// Going through `Map` keeps the last of repeated keys and stops serde's
/// struct visitor from accepting an array.
struct Object<T>(T);

impl<'de, T> Deserialize<'de> for Object<T>
where
    T: DeserializeOwned + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<Map<String, Value>>::deserialize(deserializer)? {
            Some(map) => T::deserialize(Value::Object(map))
                .map(Object)
                .map_err(de::Error::custom),
            None => Ok(Object(T::default())),
        }
    }
}

fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Object::deserialize(deserializer).map(|Object(value)| value)
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn alloc<'de, D>(deserializer: D) -> Result<BTreeMap<String, Account>, D::Error>
where
    D: Deserializer<'de>,
{
    let accounts: Option<BTreeMap<String, Object<Account>>> = Option::deserialize(deserializer)?;
    Ok(accounts
        .unwrap_or_default()
        .into_iter()
        .map(|(address, Object(account))| (address, account))
        .collect())
}
