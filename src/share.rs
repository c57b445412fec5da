//! Share records as they appear in a parsed test case, and their conversion
//! into a [`PointSet`].

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::point::{Point, PointSet};
use crate::radix::{self, Radix};
use log::debug;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A declared base, written either as a string (`"16"`) or a number (`16`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BaseSpec {
    Number(u64),
    Text(String),
}

impl BaseSpec {
    pub fn radix(&self) -> Result<Radix> {
        match self {
            BaseSpec::Number(n) => {
                let n = u32::try_from(*n).map_err(|_| Error::InvalidBase(n.to_string()))?;
                Radix::new(n)
            }
            BaseSpec::Text(s) => Radix::parse(s),
        }
    }
}

impl From<Radix> for BaseSpec {
    fn from(radix: Radix) -> Self {
        BaseSpec::Text(radix.to_string())
    }
}

/// One encoded share value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub base: BaseSpec,
    pub value: String,
}

impl ShareRecord {
    pub fn new(value: impl Into<String>, base: impl Into<BaseSpec>) -> Self {
        Self {
            base: base.into(),
            value: value.into(),
        }
    }

    pub fn decode(&self) -> Result<BigUint> {
        radix::decode(&self.value, self.base.radix()?)
    }
}

/// Share count `n` and reconstruction threshold `k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// A whole test case: the `keys` entry plus the share entries keyed by index.
///
/// Entries whose key is not a share index are kept verbatim in `metadata`
/// whatever their shape; an entry under a share index must be a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShareInput")]
pub struct ShareInput {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, ShareRecord>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct RawShareInput {
    keys: Keys,
    #[serde(flatten)]
    entries: BTreeMap<String, serde_json::Value>,
}

impl TryFrom<RawShareInput> for ShareInput {
    type Error = Error;

    fn try_from(raw: RawShareInput) -> Result<Self> {
        let mut shares = BTreeMap::new();
        let mut metadata = BTreeMap::new();
        for (key, value) in raw.entries {
            if parse_index(&key).is_none() {
                metadata.insert(key, value);
                continue;
            }
            match serde_json::from_value::<ShareRecord>(value) {
                Ok(record) => {
                    shares.insert(key, record);
                }
                Err(err) => {
                    return Err(Error::MalformedShare {
                        key,
                        reason: err.to_string(),
                    })
                }
            }
        }
        Ok(Self {
            keys: raw.keys,
            shares,
            metadata,
        })
    }
}

impl ShareInput {
    pub fn point_set(&self) -> Result<PointSet> {
        build_point_set(
            self.shares.iter().map(|(key, rec)| (key.as_str(), rec)),
            self.keys.k,
        )
    }
}

/// Parse a share index. Only plain decimal digits qualify.
fn parse_index(key: &str) -> Option<BigUint> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(key.as_bytes(), 10)
}

/// Decode every entry whose key is a share index and keep them ordered by
/// ascending index. Entries with other keys are skipped.
pub fn build_point_set<'a, I>(entries: I, k: usize) -> Result<PointSet>
where
    I: IntoIterator<Item = (&'a str, &'a ShareRecord)>,
{
    let mut points = Vec::new();
    for (key, record) in entries {
        let Some(x) = parse_index(key) else {
            debug!("ignoring non-share key {key:?}");
            continue;
        };
        let y = record.decode()?;
        points.push(Point::new(x, y));
    }
    points.sort_by(|a, b| a.x().cmp(b.x()));
    debug!("decoded {} shares, threshold {k}", points.len());
    PointSet::new(points, k)
}
