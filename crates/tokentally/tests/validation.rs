#![allow(missing_docs)]
#![cfg(feature = "client")]

use tiktoken_rs::CoreBPE;
use tokentally::{EncodingFamily, count_for_model, for_model, get_codec, get_encoding};

const SAMPLES: &[&str] = &[
    "hello world",
    "hello  world",
    "hello   world",
    "The quick brown fox jumps over the lazy dog.",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "123 + 456 = 789",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
    "$$$!!!...---",
    " ",
    "a",
    "\t\ttabs\tand\tspaces ",
    "emoji: \u{1f600}\u{1f680}\u{1f4a1}",
    "mixed: hello\u{00a0}world\u{2003}wide",
];

const SUPERCAL: &str = "supercalifragilistic";
const HAMLET: &str = "We know what we are, but know not what we may be.";

fn expect_ids(
    family: EncodingFamily,
    cases: &[(&str, &[u32])],
) {
    let codec = get_codec(family).unwrap();
    for &(text, expected) in cases {
        let ids = codec.encode_ids(text).unwrap();
        assert_eq!(ids, expected, "Encode mismatch for {family}: {text:?}");
        assert_eq!(codec.decode(&ids).unwrap(), text);
        assert_eq!(codec.count(text).unwrap(), expected.len());
    }
}

fn roundtrip_validation(family: EncodingFamily) {
    let codec = get_codec(family).unwrap();
    for text in SAMPLES {
        let ids = codec.encode_ids(text).unwrap();
        let decoded = codec.decode(&ids).unwrap();
        assert_eq!(
            &decoded, text,
            "Roundtrip mismatch for {family}: {text:?}"
        );
        assert_eq!(codec.count(text).unwrap(), ids.len());
    }
}

fn tiktoken_validation(
    family: EncodingFamily,
    tiktoken_bpe: &CoreBPE,
) {
    let codec = get_codec(family).unwrap();
    for text in SAMPLES {
        let tt_ids: Vec<u32> = tiktoken_bpe
            .encode_with_special_tokens(text)
            .into_iter()
            .map(|t| t as u32)
            .collect();

        assert_eq!(
            codec.encode_ids(text).unwrap(),
            tt_ids,
            "Encode mismatch (tokentally vs tiktoken) for {family}: {text:?}"
        );
    }
}

#[test]
#[ignore]
fn o200k_literal_ids() {
    expect_ids(
        EncodingFamily::O200kBase,
        &[
            ("hello world", &[24912, 2375]),
            ("hello  world", &[24912, 220, 2375]),
            ("hello   world", &[24912, 256, 2375]),
            (SUPERCAL, &[17789, 5842, 366, 17764, 311, 6207]),
            (
                HAMLET,
                &[
                    2167, 1761, 1412, 581, 553, 11, 889, 1761, 625, 1412, 581, 1340, 413, 13,
                ],
            ),
        ],
    );
}

#[test]
#[ignore]
fn cl100k_literal_ids() {
    expect_ids(
        EncodingFamily::Cl100kBase,
        &[
            ("hello world", &[15339, 1917]),
            ("hello  world", &[15339, 220, 1917]),
            ("hello   world", &[15339, 256, 1917]),
            (SUPERCAL, &[13066, 3035, 278, 333, 4193, 321, 4633]),
            (
                HAMLET,
                &[
                    1687, 1440, 1148, 584, 527, 11, 719, 1440, 539, 1148, 584, 1253, 387, 13,
                ],
            ),
        ],
    );
}

#[test]
#[ignore]
fn r50k_literal_ids() {
    let hamlet: &[u32] = &[
        1135, 760, 644, 356, 389, 11, 475, 760, 407, 644, 356, 743, 307, 13,
    ];
    for family in [EncodingFamily::R50kBase, EncodingFamily::Gpt2] {
        expect_ids(
            family,
            &[
                ("hello world", &[31373, 995]),
                ("hello  world", &[31373, 220, 995]),
                ("hello   world", &[31373, 220, 220, 995]),
                (SUPERCAL, &[16668, 9948, 361, 22562, 346, 2569]),
                (HAMLET, hamlet),
            ],
        );
    }
}

#[test]
#[ignore]
fn p50k_literal_ids() {
    for family in [EncodingFamily::P50kBase, EncodingFamily::P50kEdit] {
        expect_ids(
            family,
            &[
                ("hello world", &[31373, 995]),
                ("hello  world", &[31373, 220, 995]),
                ("hello   world", &[31373, 50257, 995]),
                (SUPERCAL, &[16668, 9948, 361, 22562, 346, 2569]),
            ],
        );
    }
}

#[test]
#[ignore]
fn specials_are_matched() {
    let codec = get_encoding("cl100k_base").unwrap();
    let ids = codec.encode_ids("hello<|endoftext|>").unwrap();
    assert_eq!(ids, vec![15339, 100257]);
    assert_eq!(codec.decode(&ids).unwrap(), "hello<|endoftext|>");

    let codec = get_encoding("p50k_edit").unwrap();
    assert_eq!(
        codec.encode_ids("<|fim_prefix|>").unwrap(),
        vec![50281]
    );
}

#[test]
#[ignore]
fn shared_vocabularies() {
    let base = get_codec(EncodingFamily::P50kBase).unwrap();
    let edit = get_codec(EncodingFamily::P50kEdit).unwrap();
    assert!(std::sync::Arc::ptr_eq(base.vocab(), edit.vocab()));

    let r50k = get_codec(EncodingFamily::R50kBase).unwrap();
    let gpt2 = get_codec(EncodingFamily::Gpt2).unwrap();
    assert!(std::sync::Arc::ptr_eq(r50k.vocab(), gpt2.vocab()));
}

#[test]
#[ignore]
fn model_resolution() {
    assert_eq!(for_model("gpt-4o").unwrap().name(), "o200k_base");
    assert_eq!(for_model("gpt-4").unwrap().name(), "cl100k_base");
    assert_eq!(for_model("text-davinci-003").unwrap().name(), "p50k_base");

    let raw = for_model("claude-3-5-sonnet-20241022")
        .unwrap()
        .count(HAMLET)
        .unwrap();
    assert_eq!(raw, 14);
    assert_eq!(
        count_for_model("claude-3-5-sonnet-20241022", HAMLET).unwrap(),
        (14.0 * 1.165f64).floor() as usize
    );
}

#[test]
#[ignore]
fn all_families_roundtrip() {
    use strum::IntoEnumIterator;
    for family in EncodingFamily::iter() {
        roundtrip_validation(family);
    }
}

#[test]
#[ignore]
fn cl100k_vs_tiktoken() {
    let bpe = tiktoken_rs::cl100k_base().unwrap();
    tiktoken_validation(EncodingFamily::Cl100kBase, &bpe);
}

#[test]
#[ignore]
fn o200k_vs_tiktoken() {
    let bpe = tiktoken_rs::o200k_base().unwrap();
    tiktoken_validation(EncodingFamily::O200kBase, &bpe);
}

#[test]
#[ignore]
fn r50k_vs_tiktoken() {
    let bpe = tiktoken_rs::r50k_base().unwrap();
    tiktoken_validation(EncodingFamily::R50kBase, &bpe);
}

#[test]
#[ignore]
fn p50k_vs_tiktoken() {
    let bpe = tiktoken_rs::p50k_base().unwrap();
    tiktoken_validation(EncodingFamily::P50kBase, &bpe);
}
