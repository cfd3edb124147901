//! BIP85 test vectors.
//!
//! Sourced from: <https://github.com/bitcoin/bips/blob/master/bip-0085.mediawiki#test-vectors>

use hdseed::bip85::{self, Output};
use hdseed::mnemonic::Language;
use hdseed::{DerivationPath, Error, ExtendedKey};
use hex_literal::hex;

/// Master key used by the published BIP85 test vectors.
const MASTER: &str = "xprv9s21ZrQH143K2LBWUUQRFXhucrQqBpKdRRxNVq2zBqsx8HVqFk2uYo8kmbaLLHRdqtQpUm98uKfu3vca1LqdGhUtyoFnCNkfmXRyPXLjbKb";

fn master() -> ExtendedKey {
    MASTER.parse().unwrap()
}

fn path(s: &str) -> DerivationPath {
    s.parse().unwrap()
}

fn derive(s: &str) -> Output {
    bip85::derive(&master(), &path(s)).unwrap()
}

#[test]
fn derived_key_and_entropy() {
    let master = master();

    let node = master.derive_path(&path("m/83696968'/0'/0'"), true).unwrap();
    assert_eq!(
        node.key_bytes()[1..],
        hex!("cca20ccb0e9a90feb0912870c3323b24874b0ca3d8018c4b96d0b97c0e82ded0")
    );

    let entropy = bip85::derive_entropy(&master, &path("m/83696968'/0'/0'")).unwrap();
    assert_eq!(
        entropy[..],
        hex!(
            "efecfbccffea313214232d29e71563d941229afb4338c21f9517c41aaa0d16f0
             0b83d2a09ef747e7a64e8e2bd5a14869e693da66ce94ac2da570ab7ee48618f7"
        )
    );

    let entropy = bip85::derive_entropy(&master, &path("m/83696968'/0'/1'")).unwrap();
    assert_eq!(
        entropy[..],
        hex!(
            "70c6e3e8ebee8dc4c0dbba66076819bb8c09672527c4277ca8729532ad711872
             218f826919f6b67218adde99018a6df9095ab2b58d803b5b93ec9802085a690e"
        )
    );
}

#[test]
fn drng_output() {
    let expected = hex!(
        "b78b1ee6b345eae6836c2d53d33c64cdaf9a696487be81b03e822dc84b3f1cd8
         83d7559e53d175f243e4c349e822a957bbff9224bc5dde9492ef54e8a439f6bc
         8c7355b87a925a37ee405a7502991111"
    );

    match derive("m/83696968'/0'/0'") {
        Output::Drng(mut drng) => assert_eq!(drng.read(80), expected),
        other => panic!("expected a DRNG, got {:?}", other),
    }

    // reads are consecutive spans of the same stream
    match derive("m/83696968'/0'/0'") {
        Output::Drng(mut drng) => {
            let mut out = drng.read(35);
            out.extend(drng.read(45));
            assert_eq!(out, expected);
        }
        other => panic!("expected a DRNG, got {:?}", other),
    }
}

#[test]
fn mnemonic_12_words() {
    match derive("m/83696968'/39'/0'/12'/0'") {
        Output::Mnemonic(phrase) => {
            assert_eq!(
                phrase.phrase(),
                "girl mad pet galaxy egg matter matrix prison refuse sense ordinary nose"
            );
            assert_eq!(phrase.entropy(), hex!("6250b68daf746d12a24d58b4787a714b"));
            assert_eq!(phrase.language(), Language::English);
        }
        other => panic!("expected a mnemonic, got {:?}", other),
    }
}

#[test]
fn mnemonic_18_words() {
    match derive("m/83696968'/39'/0'/18'/0'") {
        Output::Mnemonic(phrase) => {
            assert_eq!(
                phrase.phrase(),
                "near account window bike charge season chef number sketch tomorrow \
                 excuse sniff circle vital hockey outdoor supply token"
            );
            assert_eq!(
                phrase.entropy(),
                hex!("938033ed8b12698449d4bbca3c853c66b293ea1b1ce9d9dc")
            );
        }
        other => panic!("expected a mnemonic, got {:?}", other),
    }
}

#[test]
fn mnemonic_24_words() {
    match derive("m/83696968'/39'/0'/24'/0'") {
        Output::Mnemonic(phrase) => {
            assert_eq!(
                phrase.phrase(),
                "puppy ocean match cereal symbol another shed magic wrap hammer bulb \
                 intact gadget divorce twin tonight reason outdoor destroy simple \
                 truth cigar social volcano"
            );
            assert_eq!(
                phrase.entropy(),
                hex!("ae131e2312cdc61331542efe0d1077bac5ea803adf24b313a4f0e48e9c51f37f")
            );
        }
        other => panic!("expected a mnemonic, got {:?}", other),
    }
}

/// Mnemonics derive in every language, and the index segment may be
/// omitted.
#[test]
fn mnemonic_languages() {
    for language in Language::ALL {
        let p = format!("m/83696968'/39'/{}'/12'", language.bip85_index());
        match bip85::derive(&master(), &path(&p)).unwrap() {
            Output::Mnemonic(phrase) => {
                assert_eq!(phrase.language(), language);
                assert_eq!(phrase.word_count(), 12);
            }
            other => panic!("expected a mnemonic, got {:?}", other),
        }
    }
}

#[test]
fn wif() {
    match derive("m/83696968'/2'/0'") {
        Output::Wif(wif) => {
            assert_eq!(wif, "Kzyv4uF39d4Jrw2W7UryTHwZr1zQVNk4dAFyqE6BuMrMh1Za7uhp")
        }
        other => panic!("expected a WIF, got {:?}", other),
    }
}

#[test]
fn xprv_application() {
    match derive("m/83696968'/32'/0'") {
        Output::Xprv(key) => {
            assert_eq!(
                key.to_string(),
                "xprv9s21ZrQH143K2srSbCSg4m4kLvPMzcWydgmKEnMmoZUurYuBuYG46c6P71UGXMzmriLzCCBvKQWBUv3vPB3m1SATMhp3uEjXHJ42jFg7myX"
            );
            // always mainnet-private at depth zero
            assert!(key.is_mainnet());
            assert!(key.is_private());
            assert_eq!(key.depth(), 0);
        }
        other => panic!("expected an xprv, got {:?}", other),
    }
}

#[test]
fn hex_application() {
    match derive("m/83696968'/128169'/64'/0'") {
        Output::Hex(hex_str) => assert_eq!(
            hex_str,
            "492db4698cf3b73a5a24998aa3e9d7fa96275d85724a91e71aa2d645442f8785\
             55d078fd1f1f67e368976f04137b1f7a0d19232136ca50c44614af72b5582a5c"
        ),
        other => panic!("expected hex, got {:?}", other),
    }

    match derive("m/83696968'/128169'/16'/0'") {
        Output::Hex(hex_str) => assert_eq!(hex_str.len(), 32),
        other => panic!("expected hex, got {:?}", other),
    }
}

/// The published Base64 vector's password. (The *entropy* listed alongside
/// it in the published document disagrees with the algorithm; the password
/// itself is what the algorithm produces.)
#[test]
fn base64_password() {
    match derive("m/83696968'/707764'/21'/0'") {
        Output::Base64(pwd) => assert_eq!(pwd, "dKLoepugzdVJvdL56ogNV"),
        other => panic!("expected a password, got {:?}", other),
    }
}

#[test]
fn base85_password() {
    match derive("m/83696968'/707785'/12'/0'") {
        Output::Base85(pwd) => assert_eq!(pwd, "_s`{TW89)i4`"),
        other => panic!("expected a password, got {:?}", other),
    }
}

#[test]
fn dice() {
    match derive("m/83696968'/89101'/6'/10'/0'") {
        Output::Dice(rolls) => {
            assert_eq!(rolls, "1,0,0,2,0,1,5,5,2,4");

            let values: Vec<u32> = rolls.split(',').map(|r| r.parse().unwrap()).collect();
            assert_eq!(values.len(), 10);
            assert!(values.iter().all(|&r| r < 6));
        }
        other => panic!("expected dice rolls, got {:?}", other),
    }
}

#[test]
fn parameter_bounds() {
    for p in [
        // hex wants 16..=64 bytes
        "m/83696968'/128169'/15'/0'",
        "m/83696968'/128169'/65'/0'",
        // base64 wants 20..=86 chars
        "m/83696968'/707764'/19'/0'",
        "m/83696968'/707764'/87'/0'",
        // base85 wants 10..=80 chars
        "m/83696968'/707785'/9'/0'",
        "m/83696968'/707785'/81'/0'",
        // dice wants sides >= 2, rolls >= 1
        "m/83696968'/89101'/1'/10'/0'",
        "m/83696968'/89101'/6'/0'/0'",
        // mnemonic wants a known language index
        "m/83696968'/39'/10'/12'/0'",
    ] {
        assert_eq!(
            bip85::derive(&master(), &path(p)).err(),
            Some(Error::Range),
            "{}",
            p
        );
    }

    // mnemonic wants a BIP39 word count
    assert_eq!(
        bip85::derive(&master(), &path("m/83696968'/39'/0'/13'/0'")).err(),
        Some(Error::WordCount)
    );
}

#[test]
fn unsupported_applications() {
    // RSA is deliberately unimplemented
    assert_eq!(
        bip85::derive(&master(), &path("m/83696968'/828365'/1024'/0'")).err(),
        Some(Error::NotImplemented)
    );

    // unknown application codes
    assert_eq!(
        bip85::derive(&master(), &path("m/83696968'/99999'/0'")).err(),
        Some(Error::NotImplemented)
    );
}

#[test]
fn malformed_paths() {
    for p in [
        "m/83696968'",
        "m/83696968'/2'",
        "m/83696968'/128169'/0/0'",
        "m/44'/0'/0'",
    ] {
        assert_eq!(
            bip85::derive(&master(), &path(p)).err(),
            Some(Error::Decode),
            "{}",
            p
        );
    }
}

#[test]
fn public_master_cannot_derive() {
    let public = master().neuter().unwrap();
    assert_eq!(
        bip85::derive(&public, &path("m/83696968'/2'/0'")).err(),
        Some(Error::Crypto)
    );
}
