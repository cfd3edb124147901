//! BIP39 mnemonic phrases

use super::bits::{read_bits, write_bits};
use super::language::Language;
use super::seed::Seed;
use crate::{Error, Result};
use core::fmt::{self, Debug};
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256, Sha512};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

/// Number of PBKDF2 rounds to perform when deriving the seed
const PBKDF2_ROUNDS: u32 = 2048;

/// Number of bits in each wordlist index
const WORD_BITS: usize = 11;

/// Allowed mnemonic word counts
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Entropy length in bytes for a given word count: `ENT = n*11 - n/3` bits.
pub(crate) fn entropy_len(word_count: usize) -> Result<usize> {
    if WORD_COUNTS.contains(&word_count) {
        Ok((word_count * WORD_BITS - word_count / 3) / 8)
    } else {
        Err(Error::WordCount)
    }
}

/// Word count whose entropy is exactly `len` bytes.
fn word_count_for(len: usize) -> Result<usize> {
    WORD_COUNTS
        .iter()
        .copied()
        .find(|&n| entropy_len(n) == Ok(len))
        .ok_or(Error::EntropyLength)
}

/// BIP39 mnemonic phrases: sequences of words representing cryptographic
/// keys.
///
/// A `Phrase` is always checksummed and canonical: construction from words
/// validates membership and checksum, construction from entropy computes
/// them.
#[derive(Clone)]
pub struct Phrase {
    /// Language
    language: Language,

    /// Source entropy for this phrase
    entropy: Zeroizing<Vec<u8>>,

    /// Mnemonic phrase, words joined by a single ASCII space
    phrase: Zeroizing<String>,
}

impl Phrase {
    /// Create a random mnemonic phrase of the given word count using the
    /// provided random number generator.
    ///
    /// ```
    /// use hdseed::mnemonic::{Language, Phrase};
    /// use rand_core::OsRng;
    ///
    /// let phrase = Phrase::random(OsRng, Language::default(), 24).unwrap();
    /// assert_eq!(phrase.word_count(), 24);
    /// ```
    pub fn random(
        mut rng: impl RngCore + CryptoRng,
        language: Language,
        word_count: usize,
    ) -> Result<Self> {
        let mut entropy = Zeroizing::new(vec![0u8; entropy_len(word_count)?]);
        rng.fill_bytes(&mut entropy);
        Self::from_entropy(&entropy, language)
    }

    /// Create a new mnemonic phrase from the given entropy.
    ///
    /// Entropy must be exactly 16, 20, 24, 28 or 32 bytes, producing 12,
    /// 15, 18, 21 or 24 words.
    pub fn from_entropy(entropy: &[u8], language: Language) -> Result<Self> {
        let word_count = word_count_for(entropy.len())?;
        let wordlist = language.wordlist()?;

        // The checksum is the top `word_count / 3` bits of the entropy
        // hash; appending the whole first hash byte and reading exactly
        // `word_count * 11` bits off the stream takes precisely those.
        let checksum = Sha256::digest(entropy)[0];
        let mut stream = Zeroizing::new(entropy.to_vec());
        stream.push(checksum);

        let words: Vec<&str> = (0..word_count)
            .map(|word| wordlist.get_word(read_bits(&stream, word * WORD_BITS, WORD_BITS)))
            .collect();

        Ok(Phrase {
            language,
            entropy: Zeroizing::new(entropy.to_vec()),
            phrase: Zeroizing::new(words.join(" ")),
        })
    }

    /// Create a mnemonic phrase from the given string, validating word
    /// membership and checksum.
    ///
    /// Words are NFKD-normalized and lower-cased first, so surrounding
    /// whitespace, interior whitespace runs, and letter case never affect
    /// the result.
    pub fn new(phrase: impl AsRef<str>, language: Language) -> Result<Self> {
        let wordlist = language.wordlist()?;

        let words: Vec<Zeroizing<String>> = phrase
            .as_ref()
            .split_whitespace()
            .map(|word| Zeroizing::new(word.nfkd().collect::<String>().to_lowercase()))
            .collect();

        let word_count = words.len();
        let entropy_bytes = entropy_len(word_count)?;
        let checksum_bits = word_count / 3;

        let mut stream = Zeroizing::new(vec![0u8; (word_count * WORD_BITS + 7) / 8]);
        for (i, word) in words.iter().enumerate() {
            write_bits(
                &mut stream,
                i * WORD_BITS,
                wordlist.get_index(word)?,
                WORD_BITS,
            );
        }

        let entropy = &stream[..entropy_bytes];
        let expected = Sha256::digest(entropy)[0] >> (8 - checksum_bits);
        let actual = stream[entropy_bytes] >> (8 - checksum_bits);

        if expected != actual {
            return Err(Error::Checksum);
        }

        Self::from_entropy(entropy, language)
    }

    /// Get source entropy for this phrase.
    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    /// Get the mnemonic phrase as a string reference.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Language this phrase's wordlist is for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of words in this phrase.
    pub fn word_count(&self) -> usize {
        self.phrase.split(' ').count()
    }

    /// Convert this mnemonic phrase into the BIP39 seed value.
    ///
    /// `seed = PBKDF2-HMAC-SHA512(NFKD(phrase), NFKD("mnemonic" ||
    /// passphrase), 2048 rounds, 64 bytes)`.
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        let password = Zeroizing::new(self.phrase.nfkd().collect::<String>());
        let salt = Zeroizing::new(format!("mnemonic{}", passphrase));
        let salt = Zeroizing::new(salt.nfkd().collect::<String>());

        let mut seed = [0u8; Seed::SIZE];
        pbkdf2::pbkdf2_hmac::<Sha512>(
            password.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
            &mut seed,
        );
        Seed(seed)
    }
}

impl Debug for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Phrase")
            .field("language", &self.language)
            .field("phrase", &"...")
            .finish()
    }
}
