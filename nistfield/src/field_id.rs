//! Runtime identifiers for the shipped fields.

use crate::self_test::{SelfTestError, self_test};
use core::{fmt, str::FromStr};
use montfield::FieldParams;

#[cfg(feature = "nist256")]
use crate::{nist256, test_vectors::nist256 as nist256_vectors};
#[cfg(feature = "nist384")]
use crate::{nist384, test_vectors::nist384 as nist384_vectors};

/// Identifies one of the prime fields shipped by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum FieldId {
    /// NIST P-256 base field.
    #[cfg(feature = "nist256")]
    Nist256,

    /// NIST P-384 base field.
    #[cfg(feature = "nist384")]
    Nist384,
}

impl FieldId {
    /// Every field enabled in this build.
    pub const ALL: &'static [FieldId] = &[
        #[cfg(feature = "nist256")]
        FieldId::Nist256,
        #[cfg(feature = "nist384")]
        FieldId::Nist384,
    ];

    /// Short name of the field, e.g. `"NIST256"`.
    pub const fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "nist256")]
            FieldId::Nist256 => <nist256::Params as FieldParams<{ nist256::LIMBS }>>::NAME,
            #[cfg(feature = "nist384")]
            FieldId::Nist384 => <nist384::Params as FieldParams<{ nist384::LIMBS }>>::NAME,
        }
    }

    /// Bit length of the modulus.
    pub const fn num_bits(self) -> u32 {
        match self {
            #[cfg(feature = "nist256")]
            FieldId::Nist256 => nist256::FieldElement::DESCRIPTOR.num_bits(),
            #[cfg(feature = "nist384")]
            FieldId::Nist384 => nist384::FieldElement::DESCRIPTOR.num_bits(),
        }
    }

    /// Size of a serialized field element in bytes.
    pub const fn byte_len(self) -> usize {
        match self {
            #[cfg(feature = "nist256")]
            FieldId::Nist256 => nist256::FieldElement::DESCRIPTOR.byte_len(),
            #[cfg(feature = "nist384")]
            FieldId::Nist384 => nist384::FieldElement::DESCRIPTOR.byte_len(),
        }
    }

    /// Limb width of the default `FieldElement` in this build.
    pub const fn limb_bits(self) -> u32 {
        match self {
            #[cfg(feature = "nist256")]
            FieldId::Nist256 => nist256::FieldElement::DESCRIPTOR.limb_bits(),
            #[cfg(feature = "nist384")]
            FieldId::Nist384 => nist384::FieldElement::DESCRIPTOR.limb_bits(),
        }
    }

    /// Limb count of the default `FieldElement` in this build.
    pub const fn limbs(self) -> usize {
        match self {
            #[cfg(feature = "nist256")]
            FieldId::Nist256 => nist256::LIMBS,
            #[cfg(feature = "nist384")]
            FieldId::Nist384 => nist384::LIMBS,
        }
    }

    /// Big-endian hex serialization of the modulus.
    pub const fn modulus_hex(self) -> &'static str {
        match self {
            #[cfg(feature = "nist256")]
            FieldId::Nist256 => nist256::MODULUS_HEX,
            #[cfg(feature = "nist384")]
            FieldId::Nist384 => nist384::MODULUS_HEX,
        }
    }

    /// Look up a field by its short name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }

    /// Run the known-answer self-test against every limb layout of this field.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn self_test(self) -> Result<(), SelfTestError> {
        match self {
            #[cfg(feature = "nist256")]
            FieldId::Nist256 => {
                let vectors = &nist256_vectors::KNOWN_ANSWERS;
                self_test::<nist256::Nist256Params28, 10, 32>(vectors)?;
                #[cfg(target_pointer_width = "64")]
                self_test::<nist256::Nist256Params56, 5, 32>(vectors)?;
                Ok(())
            }
            #[cfg(feature = "nist384")]
            FieldId::Nist384 => {
                let vectors = &nist384_vectors::KNOWN_ANSWERS;
                self_test::<nist384::Nist384Params28, 14, 48>(vectors)?;
                #[cfg(target_pointer_width = "64")]
                self_test::<nist384::Nist384Params56, 7, 48>(vectors)?;
                Ok(())
            }
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownField;

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown field name")
    }
}

impl core::error::Error for UnknownField {}

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, UnknownField> {
        Self::from_name(s).ok_or(UnknownField)
    }
}
