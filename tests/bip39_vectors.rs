//! BIP39 test vectors

use hdseed::mnemonic::{Language, Phrase};
use hdseed::ExtendedKey;
use hex_literal::hex;

/// BIP39 test vector
struct TestVector {
    entropy: &'static [u8],
    phrase: &'static str,
    seed: [u8; 64],
    xprv: &'static str,
}

/// Password used on all test vectors
const TEST_VECTOR_PASSWORD: &str = "TREZOR";

/// From: <https://github.com/trezor/python-mnemonic/blob/master/vectors.json>
const TEST_VECTORS: &[TestVector] = &[
    TestVector {
        entropy: &hex!("00000000000000000000000000000000"),
        phrase: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        seed: hex!("c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"),
        xprv: "xprv9s21ZrQH143K3h3fDYiay8mocZ3afhfULfb5GX8kCBdno77K4HiA15Tg23wpbeF1pLfs1c5SPmYHrEpTuuRhxMwvKDwqdKiGJS9XFKzUsAF",
    },
    TestVector {
        entropy: &hex!("7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f"),
        phrase: "legal winner thank year wave sausage worth useful legal winner thank yellow",
        seed: hex!("2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607"),
        xprv: "xprv9s21ZrQH143K2gA81bYFHqU68xz1cX2APaSq5tt6MFSLeXnCKV1RVUJt9FWNTbrrryem4ZckN8k4Ls1H6nwdvDTvnV7zEXs2HgPezuVccsq",
    },
    TestVector {
        entropy: &hex!("9e885d952ad362caeb4efe34a8e91bd2"),
        phrase: "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
        seed: hex!("274ddc525802f7c828d8ef7ddbcdc5304e87ac3535913611fbbfa986d0c9e5476c91689f9c8a54fd55bd38606aa6a8595ad213d4c9c9f9aca3fb217069a41028"),
        xprv: "xprv9s21ZrQH143K2oZ9stBYpoaZ2ktHj7jLz7iMqpgg1En8kKFTXJHsjxry1JbKH19YrDTicVwKPehFKTbmaxgVEc5TpHdS1aYhB2s9aFJBeJH",
    },
    TestVector {
        entropy: &hex!("23db8160a31d3e0dca3688ed941adbf3"),
        phrase: "cat swing flag economy stadium alone churn speed unique patch report train",
        seed: hex!("deb5f45449e615feff5640f2e49f933ff51895de3b4381832b3139941c57b59205a42480c52175b6efcffaa58a2503887c1e8b363a707256bdd2b587b46541f5"),
        xprv: "xprv9s21ZrQH143K4G28omGMogEoYgDQuigBo8AFHAGDaJdqQ99QKMQ5J6fYTMfANTJy6xBmhvsNZ1CJzRZ64PWbnTFUn6CDV2FxoMDLXdk95DQ",
    },
    TestVector {
        entropy: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        phrase: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
        seed: hex!("bda85446c68413707090a52022edd26a1c9462295029f2e60cd7c4f2bbd3097170af7a4d73245cafa9c3cca8d561a7c3de6f5d4a10be8ed2a5e608d68f92fcc8"),
        xprv: "xprv9s21ZrQH143K32qBagUJAMU2LsHg3ka7jqMcV98Y7gVeVyNStwYS3U7yVVoDZ4btbRNf4h6ibWpY22iRmXq35qgLs79f312g2kj5539ebPM",
    },
    TestVector {
        entropy: &hex!("68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c"),
        phrase: "hamster diagram private dutch cause delay private meat slide toddler razor book happy fancy gospel tennis maple dilemma loan word shrug inflict delay length",
        seed: hex!("64c87cde7e12ecf6704ab95bb1408bef047c22db4cc7491c4271d170a1b213d20b385bc1588d9c7b38f1b39d415665b8a9030c9ec653d75e65f847d8fc1fc440"),
        xprv: "xprv9s21ZrQH143K2XTAhys3pMNcGn261Fi5Ta2Pw8PwaVPhg3D8DWkzWQwjTJfskj8ofb81i9NP2cUNKxwjueJHHMQAnxtivTA75uUFqPFeWzk",
    },
    TestVector {
        entropy: &hex!("f585c11aec520db57dd353c69554b21a89b20fb0650966fa0a9d6f74fd989d8f"),
        phrase: "void come effort suffer camp survey warrior heavy shoot primary clutch crush open amazing screen patrol group space point ten exist slush involve unfold",
        seed: hex!("01f5bced59dec48e362f2c45b5de68b9fd6c92c6634f44d6d40aab69056506f0e35524a518034ddc1192e1dacd32c1ed3eaa3c3b131c88ed8e7e54c49a5d0998"),
        xprv: "xprv9s21ZrQH143K39rnQJknpH1WEPFJrzmAqqasiDcVrNuk926oizzJDDQkdiTvNPr2FYDYzWgiMiC63YmfPAa2oPyNB23r2g7d1yiK6WpqaQS",
    },
];

#[test]
fn entropy_to_phrase() {
    for vector in TEST_VECTORS {
        let phrase = Phrase::from_entropy(vector.entropy, Language::English).unwrap();
        assert_eq!(phrase.phrase(), vector.phrase);
    }
}

#[test]
fn phrase_to_entropy() {
    for vector in TEST_VECTORS {
        let phrase = Phrase::new(vector.phrase, Language::English).unwrap();
        assert_eq!(phrase.entropy(), vector.entropy);
    }
}

#[test]
fn phrase_to_seed() {
    for vector in TEST_VECTORS {
        let phrase = Phrase::new(vector.phrase, Language::English).unwrap();
        assert_eq!(phrase.to_seed(TEST_VECTOR_PASSWORD).as_bytes(), &vector.seed);
    }
}

#[test]
fn seed_to_xprv() {
    for vector in TEST_VECTORS {
        let master = ExtendedKey::master_from_seed(&vector.seed, true, true).unwrap();
        assert_eq!(master.to_string(), vector.xprv);
    }
}

/// Seed stretching with and without a passphrase.
#[test]
fn seed_stretching() {
    const MNEMONIC: &str =
        "punch man spread gap size struggle clean crouch cloth swear erode fan";
    const XPRV: &str = "xprv9s21ZrQH143K417dJYmPr6Qmy2t61xrKtDCCL3Cec4NMFFFRZTF2jSbtqSXpuCz8UqgsuyrPC5wngx3dk5Gt8zQnbnHVAsMyb7bWtHZ95Jk";
    const XPRV_WITH_PASS: &str = "xprv9s21ZrQH143K4B2kKWHTX4xpRoNt4ctY9JA7v1hA1MbdkBYop44HUZDJWYvcXkvF8tRyoZRk4zUNoszpfbrPeBCbtyyxFJi5wnno19gdMfF";

    let phrase = Phrase::new(MNEMONIC, Language::English).unwrap();
    let seed = phrase.to_seed("");
    let master = ExtendedKey::master_from_seed(seed.as_bytes(), true, true).unwrap();
    assert_eq!(master.to_string(), XPRV);

    // a different passphrase must produce a different tree
    let seed = phrase.to_seed("pass");
    let master = ExtendedKey::master_from_seed(seed.as_bytes(), true, true).unwrap();
    assert_eq!(master.to_string(), XPRV_WITH_PASS);
    assert_ne!(XPRV, XPRV_WITH_PASS);
}

/// Surrounding whitespace and letter case never change the seed.
#[test]
fn whitespace_and_case_invariance() {
    const MNEMONIC: &str =
        "punch man spread gap size struggle clean crouch cloth swear erode fan";

    let canonical = Phrase::new(MNEMONIC, Language::English).unwrap();
    let padded = Phrase::new(
        format!("  {}  \n", MNEMONIC.to_uppercase()),
        Language::English,
    )
    .unwrap();

    assert_eq!(canonical.phrase(), padded.phrase());
    assert_eq!(
        canonical.to_seed("").as_bytes(),
        padded.to_seed("").as_bytes()
    );
}

/// Flipping a single word to another wordlist member breaks the checksum.
#[test]
fn single_word_flip_fails_checksum() {
    let flipped = "abandon abandon abandon abandon abandon abandon abandon abandon \
                   abandon abandon abandon zoo";
    assert!(Phrase::new(flipped, Language::English).is_err());
}

/// Entropy survives a words round trip in every supported language.
#[test]
fn all_languages_roundtrip() {
    let entropy = hex!("68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c");

    for language in Language::ALL {
        let phrase = Phrase::from_entropy(&entropy, language).unwrap();
        assert_eq!(phrase.word_count(), 24);

        let parsed = Phrase::new(phrase.phrase(), language).unwrap();
        assert_eq!(parsed.entropy(), entropy, "{:?}", language);
    }
}

/// Every allowed word count maps to its entropy size and back.
#[test]
fn word_counts() {
    for (len, count) in [(16, 12), (20, 15), (24, 18), (28, 21), (32, 24)] {
        let phrase = Phrase::from_entropy(&vec![0x5a; len], Language::English).unwrap();
        assert_eq!(phrase.word_count(), count);

        let reparsed = Phrase::new(phrase.phrase(), Language::English).unwrap();
        assert_eq!(reparsed.entropy().len(), len);
    }
}
