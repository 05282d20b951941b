//! Principal identities: standard addresses and contract identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::{AddressError, ParseError};
use crate::limits::MAX_CONTRACT_NAME_LEN;
use crate::model::value::ClarityName;
use crate::util::{c32_address, c32_address_decode};

/// A standard principal: a single-signature or multisig account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardPrincipal {
    /// Address version byte. Always < 32; 22 on mainnet, 26 on testnet.
    pub version: u8,
    /// hash160 of the account's public key(s).
    pub hash: [u8; 20],
}

impl StandardPrincipal {
    pub fn new(version: u8, hash: [u8; 20]) -> Result<Self, AddressError> {
        if version >= 32 {
            return Err(AddressError::InvalidVersion { version });
        }
        Ok(StandardPrincipal { version, hash })
    }

    /// The c32check address string for this principal.
    pub fn address(&self) -> String {
        c32_address(self.version, &self.hash)
    }
}

impl fmt::Display for StandardPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}

impl FromStr for StandardPrincipal {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (version, hash) = c32_address_decode(s)?;
        StandardPrincipal::new(version, hash)
    }
}

/// A principal value: a standard address or `address.contract-name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrincipalData {
    Standard(StandardPrincipal),
    Contract {
        issuer: StandardPrincipal,
        name: ClarityName,
    },
}

impl PrincipalData {
    pub fn issuer(&self) -> &StandardPrincipal {
        match self {
            PrincipalData::Standard(issuer) => issuer,
            PrincipalData::Contract { issuer, .. } => issuer,
        }
    }
}

impl fmt::Display for PrincipalData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrincipalData::Standard(issuer) => issuer.fmt(f),
            PrincipalData::Contract { issuer, name } => write!(f, "{issuer}.{name}"),
        }
    }
}

impl FromStr for PrincipalData {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            None => Ok(PrincipalData::Standard(s.parse()?)),
            Some((addr, contract)) => {
                let issuer: StandardPrincipal = addr.parse()?;
                if contract.len() > MAX_CONTRACT_NAME_LEN {
                    return Err(ParseError::InvalidName {
                        name: contract.to_owned(),
                    });
                }
                let name: ClarityName = contract.parse()?;
                Ok(PrincipalData::Contract { issuer, name })
            }
        }
    }
}
