//! Validated Stellar account value.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::checksum::is_valid;

/// Returned when text is not a checksum-valid Stellar account id.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid Stellar account id")]
pub struct InvalidAccountId;

/// A Stellar account identified by its public account id.
///
/// Instances only exist for ids that pass [`is_valid`]. Equality, ordering
/// and hashing use the stored text exactly as given, so ids differing only in
/// letter case are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct StellarAccount {
    account_id: String,
}

impl StellarAccount {
    /// Validates `account_id` and wraps it.
    pub fn parse(account_id: &str) -> Result<Self, InvalidAccountId> {
        create_account(account_id).ok_or(InvalidAccountId)
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn into_account_id(self) -> String {
        self.account_id
    }
}

/// Creates a [`StellarAccount`] when `encoded` is a valid account id.
///
/// # Example
///
/// ```
/// use stellar_checksum::create_account;
///
/// let account = create_account("GD4T35DMXYDE7BJWYPUWK43VFJO5IBUQYG2YGMICPTWP4JTNWQELKAVA").unwrap();
/// assert_eq!(account.to_string(), "GD4T35DMXYDE7BJWYPUWK43VFJO5IBUQYG2YGMICPTWP4JTNWQELKAVA");
/// assert!(create_account("not valid").is_none());
/// assert!(create_account(None).is_none());
/// ```
pub fn create_account<'a>(encoded: impl Into<Option<&'a str>>) -> Option<StellarAccount> {
    let encoded = encoded.into()?;
    is_valid(encoded).then(|| StellarAccount {
        account_id: encoded.to_owned(),
    })
}

impl fmt::Display for StellarAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.account_id)
    }
}

impl AsRef<str> for StellarAccount {
    fn as_ref(&self) -> &str {
        &self.account_id
    }
}

impl FromStr for StellarAccount {
    type Err = InvalidAccountId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StellarAccount::parse(s)
    }
}

impl TryFrom<&str> for StellarAccount {
    type Error = InvalidAccountId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        StellarAccount::parse(value)
    }
}

impl TryFrom<String> for StellarAccount {
    type Error = InvalidAccountId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid(value.as_str()) {
            Ok(StellarAccount { account_id: value })
        } else {
            Err(InvalidAccountId)
        }
    }
}

impl From<StellarAccount> for String {
    fn from(account: StellarAccount) -> Self {
        account.account_id
    }
}
