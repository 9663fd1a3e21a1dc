//! ML-KEM-1024 key-encapsulation adapter.
//!
//! Wraps the FIPS 203 lattice KEM at the 1024 security level behind byte
//! oriented key types. Encapsulation derives a fresh 32-byte shared secret
//! for the holder of the matching private key; decapsulation recovers it.
//! Decapsulation of a well-formed but foreign ciphertext yields an
//! implicit-rejection secret rather than an error, so a wrong key surfaces
//! downstream as a failed tag check, never as a decode oracle.

use crate::error::{CryptoError, CryptoResult};
use ml_kem::kem::{Decapsulate, Encapsulate};
use ml_kem::{EncodedSizeUser, KemCore, MlKem1024};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

type Ek = <MlKem1024 as KemCore>::EncapsulationKey;
type Dk = <MlKem1024 as KemCore>::DecapsulationKey;

/// Encapsulation (public) key length in bytes.
pub const PUBLIC_KEY_SIZE: usize = 1568;

/// Decapsulation (private) key length in bytes.
pub const SECRET_KEY_SIZE: usize = 3168;

/// KEM ciphertext length in bytes.
pub const KEM_CIPHERTEXT_SIZE: usize = 1568;

/// Shared secret length in bytes.
pub const SHARED_SECRET_SIZE: usize = 32;

/// ML-KEM-1024 public (encapsulation) key.
#[derive(Clone, PartialEq, Eq)]
pub struct KemPublicKey(Vec<u8>);

impl KemPublicKey {
    /// Validates length and wraps raw public-key bytes.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(CryptoError::InvalidKey {
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for KemPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KemPublicKey({} bytes)", self.0.len())
    }
}

/// ML-KEM-1024 private (decapsulation) key. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KemSecretKey(Vec<u8>);

impl KemSecretKey {
    /// Validates length and wraps raw private-key bytes.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != SECRET_KEY_SIZE {
            return Err(CryptoError::InvalidKey {
                expected: SECRET_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for KemSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KemSecretKey([REDACTED])")
    }
}

/// Ephemeral 32-byte symmetric key produced by encapsulation or
/// decapsulation. Zeroized on drop; lives only for one encrypt/decrypt call.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; SHARED_SECRET_SIZE]);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret([REDACTED])")
    }
}

/// ML-KEM-1024 keypair.
#[derive(Clone, Debug)]
pub struct KemKeyPair {
    pub public: KemPublicKey,
    pub secret: KemSecretKey,
}

impl KemKeyPair {
    /// Returns the raw public-key bytes.
    pub fn public_bytes(&self) -> &[u8] {
        self.public.as_bytes()
    }

    /// Returns the raw private-key bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

/// Generates a fresh ML-KEM-1024 keypair from the OS random source.
pub fn generate_keypair() -> KemKeyPair {
    let mut rng = rand::rngs::OsRng;
    let (dk, ek) = MlKem1024::generate(&mut rng);

    KemKeyPair {
        public: KemPublicKey(ek.as_bytes().to_vec()),
        secret: KemSecretKey(dk.as_bytes().to_vec()),
    }
}

/// Encapsulates to `public_key`, returning the KEM ciphertext and the
/// derived shared secret.
pub fn encapsulate(public_key: &KemPublicKey) -> CryptoResult<(Vec<u8>, SharedSecret)> {
    let ek_bytes: ml_kem::Encoded<Ek> =
        public_key.0.as_slice().try_into().map_err(|_| CryptoError::InvalidKey {
            expected: PUBLIC_KEY_SIZE,
            actual: public_key.0.len(),
        })?;
    let ek = Ek::from_bytes(&ek_bytes);

    let (ct, ss) = ek
        .encapsulate(&mut rand::rngs::OsRng)
        .map_err(|_| CryptoError::InvalidKey {
            expected: PUBLIC_KEY_SIZE,
            actual: public_key.0.len(),
        })?;

    let mut secret = [0u8; SHARED_SECRET_SIZE];
    secret.copy_from_slice(ss.as_ref());

    Ok((ct.to_vec(), SharedSecret(secret)))
}

/// Decapsulates `kem_ciphertext` with `secret_key`, recovering the shared
/// secret.
pub fn decapsulate(kem_ciphertext: &[u8], secret_key: &KemSecretKey) -> CryptoResult<SharedSecret> {
    let dk_bytes: ml_kem::Encoded<Dk> =
        secret_key.0.as_slice().try_into().map_err(|_| CryptoError::InvalidKey {
            expected: SECRET_KEY_SIZE,
            actual: secret_key.0.len(),
        })?;
    let dk = Dk::from_bytes(&dk_bytes);

    let ct: ml_kem::Ciphertext<MlKem1024> = kem_ciphertext
        .try_into()
        .map_err(|_| CryptoError::DecapsulationFailed)?;

    let ss = dk
        .decapsulate(&ct)
        .map_err(|_| CryptoError::DecapsulationFailed)?;

    let mut secret = [0u8; SHARED_SECRET_SIZE];
    secret.copy_from_slice(ss.as_ref());

    Ok(SharedSecret(secret))
}
