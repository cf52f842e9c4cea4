//! Membership proofs for individual leaves.

use std::fmt;
use std::str::FromStr;

use log::trace;

use super::options::Side;
use crate::digest::Digest;
use crate::error::{MerkleError, Result};

/// One step of a proof: the sibling met at some level on the way to the root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProofStep {
    /// Digest of the sibling node
    pub sibling: Digest,
    /// Where the sibling sits; only recorded for positional trees
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub side: Option<Side>,
}

impl ProofStep {
    /// A step without a position tag, as produced under sorted pairs
    pub const fn untagged(sibling: Digest) -> Self {
        Self {
            sibling,
            side: None,
        }
    }

    /// A step with an explicit position tag
    pub const fn tagged(sibling: Digest, side: Side) -> Self {
        Self {
            sibling,
            side: Some(side),
        }
    }
}

/// Renders as `0x<hex>` or `<side>:0x<hex>` when tagged
impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Some(side) => write!(f, "{side}:{:#x}", self.sibling),
            None => write!(f, "{:#x}", self.sibling),
        }
    }
}

impl FromStr for ProofStep {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((side, sibling)) => Ok(Self::tagged(sibling.parse()?, side.parse()?)),
            None => Ok(Self::untagged(s.parse()?)),
        }
    }
}

/// A membership proof: sibling digests read from the leaf up to the root.
///
/// A proof for a tree of `n > 1` leaves has `ceil(log2(n))` steps; a proof in
/// a single-leaf tree is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Proof {
    steps: Vec<ProofStep>,
}

impl Proof {
    /// Create a proof from its steps, leaf side first
    pub const fn new(steps: Vec<ProofStep>) -> Self {
        Self { steps }
    }

    /// Parse a proof from its text form.
    ///
    /// Each entry is a hex digest, optionally prefixed with `left:` or
    /// `right:`. Digest lengths are not checked here; the verifier does that.
    pub fn from_hex<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let steps = entries
            .into_iter()
            .enumerate()
            .map(|(step, entry)| {
                entry.as_ref().parse::<ProofStep>().map_err(|err| match err {
                    MerkleError::MalformedProof { reason, .. } => {
                        MerkleError::malformed_proof(step, reason)
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { steps })
    }

    /// Steps as `0x`-prefixed hex, leaf side first.
    ///
    /// Tagged steps keep their side as a `left:` or `right:` prefix, so the
    /// output parses back with [`Proof::from_hex`].
    pub fn to_hex(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }

    /// Steps, leaf side first
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Sibling digests, leaf side first
    pub fn siblings(&self) -> impl Iterator<Item = &Digest> + '_ {
        self.steps.iter().map(|step| &step.sibling)
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Checks if the proof has no steps (single-leaf tree)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps
    pub fn iter(&self) -> std::slice::Iter<'_, ProofStep> {
        self.steps.iter()
    }

    /// Consume the proof and return its steps
    pub fn into_steps(self) -> Vec<ProofStep> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Proof {
    type Item = &'a ProofStep;
    type IntoIter = std::slice::Iter<'a, ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl From<Vec<ProofStep>> for Proof {
    fn from(steps: Vec<ProofStep>) -> Self {
        Self::new(steps)
    }
}

/// Walk from leaf `index` to the root collecting siblings.
///
/// A node without a sibling (odd tail) is its own sibling, mirroring how the
/// builder paired it with itself.
pub(crate) fn generate(levels: &[Vec<Digest>], index: usize, tagged: bool) -> Result<Proof> {
    let leaf_count = levels.first().map_or(0, Vec::len);
    if index >= leaf_count {
        return Err(MerkleError::index_out_of_range(index, leaf_count));
    }

    let mut steps = Vec::with_capacity(levels.len().saturating_sub(1));
    let mut current = index;

    for level in levels.iter().take_while(|level| level.len() > 1) {
        let sibling = level.get(current ^ 1).unwrap_or(&level[current]).clone();
        steps.push(ProofStep {
            sibling,
            side: tagged.then_some(Side::of_sibling(current)),
        });
        current >>= 1;
    }

    trace!(
        "generated proof for leaf {index}/{leaf_count}: {} steps",
        steps.len()
    );

    Ok(Proof::new(steps))
}
