//! Wordlist support.
//!
//! The ten BIP39 wordlists (the official nine plus Portuguese) are sourced
//! from the `bip39` crate's embedded tables and re-verified against the
//! SHA-256 digests of the upstream wordlist files before first use. A list
//! whose digest does not match is refused outright.
//!
//! NOTE: wordlist lookups are not constant time and may leak information
//! via timing side-channels.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Supported mnemonic languages.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    /// English
    English,

    /// Japanese
    Japanese,

    /// Korean
    Korean,

    /// Spanish
    Spanish,

    /// Chinese (Simplified)
    ChineseSimplified,

    /// Chinese (Traditional)
    ChineseTraditional,

    /// French
    French,

    /// Italian
    Italian,

    /// Czech
    Czech,

    /// Portuguese (in the upstream wordlist repertoire, although BIP85
    /// predates its language index)
    Portuguese,
}

impl Language {
    /// Every supported language, in BIP85 index order.
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Japanese,
        Language::Korean,
        Language::Spanish,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::French,
        Language::Italian,
        Language::Czech,
        Language::Portuguese,
    ];

    /// The language index used by BIP85 mnemonic application paths.
    pub fn bip85_index(self) -> u32 {
        match self {
            Language::English => 0,
            Language::Japanese => 1,
            Language::Korean => 2,
            Language::Spanish => 3,
            Language::ChineseSimplified => 4,
            Language::ChineseTraditional => 5,
            Language::French => 6,
            Language::Italian => 7,
            Language::Czech => 8,
            Language::Portuguese => 9,
        }
    }

    /// Language for a BIP85 language index.
    pub fn from_bip85_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Three-letter ISO-639 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Japanese => "jpn",
            Language::Korean => "kor",
            Language::Spanish => "spa",
            Language::ChineseSimplified => "zho",
            Language::ChineseTraditional => "zht",
            Language::French => "fra",
            Language::Italian => "ita",
            Language::Czech => "ces",
            Language::Portuguese => "por",
        }
    }

    /// Language for a three-letter ISO-639 code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }

    /// The verified wordlist for this language.
    pub(crate) fn wordlist(self) -> Result<&'static WordList> {
        WORDLISTS[self.bip85_index() as usize]
            .as_ref()
            .ok_or(Error::Decode)
    }

    /// Embedded wordlist table this language is sourced from.
    fn source(self) -> bip39::Language {
        match self {
            Language::English => bip39::Language::English,
            Language::Japanese => bip39::Language::Japanese,
            Language::Korean => bip39::Language::Korean,
            Language::Spanish => bip39::Language::Spanish,
            Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Language::ChineseTraditional => bip39::Language::TraditionalChinese,
            Language::French => bip39::Language::French,
            Language::Italian => bip39::Language::Italian,
            Language::Czech => bip39::Language::Czech,
            Language::Portuguese => bip39::Language::Portuguese,
        }
    }

    /// SHA-256 of the upstream wordlist file (2048 newline-terminated
    /// lines).
    fn digest(self) -> &'static str {
        match self {
            Language::English => {
                "2f5eed53a4727b4bf8880d8f3f199efc90e58503646d9ff8eff3a2ed3b24dbda"
            }
            Language::Japanese => {
                "2eed0aef492291e061633d7ad8117f1a2b03eb80a29d0e4e3117ac2528d05ffd"
            }
            Language::Korean => {
                "9e95f86c167de88f450f0aaf89e87f6624a57f973c67b516e338e8e8b8897f60"
            }
            Language::Spanish => {
                "46846a5a0139d1e3cb77293e521c2865f7bcdb82c44e8d0a06a2cd0ecba48c0b"
            }
            Language::ChineseSimplified => {
                "5c5942792bd8340cb8b27cd592f1015edf56a8c5b26276ee18a482428e7c5726"
            }
            Language::ChineseTraditional => {
                "417b26b3d8500a4ae3d59717d7011952db6fc2fb84b807f3f94ac734e89c1b5f"
            }
            Language::French => {
                "ebc3959ab7801a1df6bac4fa7d970652f1df76b683cd2f4003c941c63d517e59"
            }
            Language::Italian => {
                "d392c49fdb700a24cd1fceb237c1f65dcc128f6b34a8aacb58b59384b5c648c2"
            }
            Language::Czech => {
                "7e80e161c3e93d9554c2efb78d4e3cebf8fc727e9c52e03b83b94406bdcc95fc"
            }
            Language::Portuguese => {
                "2685e9c194c82ae67e10ba59d9ea5345a23dc093e92276fc5361f6667d79cd3f"
            }
        }
    }
}

impl Default for Language {
    fn default() -> Language {
        Language::English
    }
}

/// A digest-verified 2048-word list with its reverse lookup map.
pub(crate) struct WordList {
    words: &'static [&'static str; 2048],
    map: BTreeMap<&'static str, u16>,
}

impl WordList {
    /// Load and verify the list for `language`; `None` on digest mismatch.
    fn load(language: Language) -> Option<WordList> {
        let words = language.source().word_list();

        let mut hasher = Sha256::new();
        for word in words.iter() {
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }

        if hex::encode(hasher.finalize()) != language.digest() {
            return None;
        }

        let map = words
            .iter()
            .enumerate()
            .map(|(index, word)| (*word, index as u16))
            .collect::<BTreeMap<_, _>>();

        if map.len() != words.len() {
            return None;
        }

        Some(WordList { words, map })
    }

    /// Word at an 11-bit index.
    pub fn get_word(&self, index: u16) -> &'static str {
        self.words[index as usize]
    }

    /// 11-bit index for a word.
    pub fn get_index(&self, word: &str) -> Result<u16> {
        self.map.get(word).copied().ok_or(Error::UnknownWord)
    }
}

static WORDLISTS: [Lazy<Option<WordList>>; 10] = [
    Lazy::new(|| WordList::load(Language::English)),
    Lazy::new(|| WordList::load(Language::Japanese)),
    Lazy::new(|| WordList::load(Language::Korean)),
    Lazy::new(|| WordList::load(Language::Spanish)),
    Lazy::new(|| WordList::load(Language::ChineseSimplified)),
    Lazy::new(|| WordList::load(Language::ChineseTraditional)),
    Lazy::new(|| WordList::load(Language::French)),
    Lazy::new(|| WordList::load(Language::Italian)),
    Lazy::new(|| WordList::load(Language::Czech)),
    Lazy::new(|| WordList::load(Language::Portuguese)),
];
