//! The configurable codec front end.

use crate::error::{CodecError, Result};
use crate::family::AddressFamily;
use crate::grammar::{AddressGrammar, StdGrammar};
use crate::policy::ZeroRunPolicy;
use crate::{ipv4, ipv6};

/// Bidirectional address codec for both families.
///
/// Holds the validity grammar consulted before parsing and the zero-run
/// policy used when formatting IPv6. The codec has no mutable state; a
/// shared reference can be used from any number of threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InetCodec<G = StdGrammar> {
    grammar: G,
    policy: ZeroRunPolicy,
}

impl InetCodec<StdGrammar> {
    /// Codec with [`StdGrammar`] and [`ZeroRunPolicy::FirstRun`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grammar: StdGrammar,
            policy: ZeroRunPolicy::FirstRun,
        }
    }
}

impl<G: AddressGrammar> InetCodec<G> {
    /// Replace the validity grammar.
    #[must_use]
    pub fn with_grammar<H: AddressGrammar>(self, grammar: H) -> InetCodec<H> {
        InetCodec {
            grammar,
            policy: self.policy,
        }
    }

    /// Set the IPv6 zero-run policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ZeroRunPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active IPv6 zero-run policy.
    #[must_use]
    pub fn policy(&self) -> ZeroRunPolicy {
        self.policy
    }

    /// Validity grammar in use.
    #[must_use]
    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    /// Dotted-quad text to `u32`. Fails with `InvalidAddress` on invalid text.
    pub fn from_ipv4(&self, text: &str) -> Result<u32> {
        ipv4::parse_with(&self.grammar, text)
    }

    /// `u32` to dotted-quad text.
    #[must_use]
    pub fn to_ipv4(&self, value: u32) -> String {
        ipv4::format(value)
    }

    /// Colon-hex text to `u128`. Fails with `InvalidAddress` on invalid text.
    pub fn from_ipv6(&self, text: &str) -> Result<u128> {
        ipv6::parse_with(&self.grammar, text)
    }

    /// `u128` to colon-hex text, abbreviated under the codec's policy.
    #[must_use]
    pub fn to_ipv6(&self, value: u128) -> String {
        ipv6::format_with(self.policy, value)
    }

    /// Parses `text` as an address of `family`, widened to `u128`.
    pub fn parse(&self, family: AddressFamily, text: &str) -> Result<u128> {
        match family {
            AddressFamily::Ipv4 => self.from_ipv4(text).map(u128::from),
            AddressFamily::Ipv6 => self.from_ipv6(text),
        }
    }

    /// Formats `value` as an address of `family`.
    ///
    /// Fails with `ValueOutOfRange` if `value` is wider than the family.
    pub fn format(&self, family: AddressFamily, value: u128) -> Result<String> {
        if !family.layout().fits(value) {
            return Err(CodecError::ValueOutOfRange { family, value });
        }
        Ok(match family {
            // Checked against the 32-bit layout above.
            AddressFamily::Ipv4 => self.to_ipv4(value as u32),
            AddressFamily::Ipv6 => self.to_ipv6(value),
        })
    }
}
