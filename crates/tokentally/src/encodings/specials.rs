//! # Special Tokens
//!
//! Ids are the published vendor ids; none of them is a merge rank
//! of the vocabulary it ships with.

use crate::{
    declare_carrot_special,
    vocab::utility::specials_tools::format_reserved_special_token,
};

declare_carrot_special!(
    (ENDOFTEXT, "endoftext"),
    (ENDOFPROMPT, "endofprompt"),
    (FIM_PREFIX, "fim_prefix"),
    (FIM_MIDDLE, "fim_middle"),
    (FIM_SUFFIX, "fim_suffix"),
    (BEGIN_OF_TEXT, "begin_of_text"),
    (END_OF_TEXT, "end_of_text"),
    (FINETUNE_RIGHT_PAD_ID, "finetune_right_pad_id"),
    (STEP_ID, "step_id"),
    (START_HEADER_ID, "start_header_id"),
    (END_HEADER_ID, "end_header_id"),
    (EOM_ID, "eom_id"),
    (EOT_ID, "eot_id"),
    (PYTHON_TAG, "python_tag"),
    (IMAGE, "image"),
);

/// The "`r50k_base`" and `gpt2` special tokens.
pub const R50K_SPECIALS: &[(&str, usize)] = &[(ENDOFTEXT, 50256)];

/// The "`p50k_base`" special tokens.
pub const P50K_BASE_SPECIALS: &[(&str, usize)] = &[(ENDOFTEXT, 50256)];

/// The "`p50k_edit`" special tokens.
pub const P50K_EDIT_SPECIALS: &[(&str, usize)] = &[
    (ENDOFTEXT, 50256),
    (FIM_PREFIX, 50281),
    (FIM_MIDDLE, 50282),
    (FIM_SUFFIX, 50283),
];

/// The "`cl100k_base`" special tokens.
pub const CL100K_SPECIALS: &[(&str, usize)] = &[
    (ENDOFTEXT, 100257),
    (FIM_PREFIX, 100258),
    (FIM_MIDDLE, 100259),
    (FIM_SUFFIX, 100260),
    (ENDOFPROMPT, 100276),
];

/// The "`o200k_base`" special tokens.
pub const O200K_SPECIALS: &[(&str, usize)] = &[(ENDOFTEXT, 199999), (ENDOFPROMPT, 200018)];

/// Size of the Llama 3 reserved region.
pub const LLAMA3_NUM_SPECIALS: usize = 256;

/// The named Llama 3 specials, in id order from the base of the reserved region.
///
/// `None` marks a numbered reserved slot.
const LLAMA3_HEAD: &[Option<&str>] = &[
    Some(BEGIN_OF_TEXT),
    Some(END_OF_TEXT),
    None,
    None,
    Some(FINETUNE_RIGHT_PAD_ID),
    Some(STEP_ID),
    Some(START_HEADER_ID),
    Some(END_HEADER_ID),
    Some(EOM_ID),
    Some(EOT_ID),
    Some(PYTHON_TAG),
    Some(IMAGE),
];

/// Generate the Llama 3 special tokens.
///
/// The reserved region starts at `base`, the merge vocabulary length,
/// and holds [`LLAMA3_NUM_SPECIALS`] ids. Unnamed slots are numbered
/// ``reserved_special_token_{i}`` in id order.
pub fn llama3_specials(base: usize) -> Vec<(String, usize)> {
    let mut specials = Vec::with_capacity(LLAMA3_NUM_SPECIALS);
    let mut reserved = 0;

    for offset in 0..LLAMA3_NUM_SPECIALS {
        let word = match LLAMA3_HEAD.get(offset).copied().flatten() {
            Some(name) => name.to_string(),
            None => {
                reserved += 1;
                format_reserved_special_token(reserved - 1)
            }
        };
        specials.push((word, base + offset));
    }

    specials
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_specials() {
        assert_eq!(R50K_SPECIALS, &[("<|endoftext|>", 50256)]);
        assert_eq!(
            P50K_EDIT_SPECIALS.iter().map(|&(_, t)| t).collect::<Vec<_>>(),
            vec![50256, 50281, 50282, 50283]
        );
        assert_eq!(CL100K_SPECIALS[4], ("<|endofprompt|>", 100276));
        assert_eq!(
            O200K_SPECIALS,
            &[("<|endoftext|>", 199999), ("<|endofprompt|>", 200018)]
        );
    }

    #[test]
    fn test_llama3_specials() {
        let base = 128000;
        let specials = llama3_specials(base);
        assert_eq!(specials.len(), LLAMA3_NUM_SPECIALS);

        let word = |id: usize| specials[id - base].0.as_str();
        assert_eq!(word(128000), "<|begin_of_text|>");
        assert_eq!(word(128001), "<|end_of_text|>");
        assert_eq!(word(128002), "<|reserved_special_token_0|>");
        assert_eq!(word(128003), "<|reserved_special_token_1|>");
        assert_eq!(word(128004), "<|finetune_right_pad_id|>");
        assert_eq!(word(128006), "<|start_header_id|>");
        assert_eq!(word(128009), "<|eot_id|>");
        assert_eq!(word(128011), "<|image|>");
        assert_eq!(word(128012), "<|reserved_special_token_2|>");
        assert_eq!(word(128255), "<|reserved_special_token_245|>");

        for (i, (_, id)) in specials.iter().enumerate() {
            assert_eq!(*id, base + i);
        }
    }
}
