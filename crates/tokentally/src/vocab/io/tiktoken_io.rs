//! # Tiktoken Vocabulary IO
//!
//! Lines are:
//! ```terminaloutput
//! {BASE64 SPAN} {RANK}
//! ```
//!
//! Blank lines are skipped; as is a leading ``#version`` header line.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{TallyError, TallyResult},
    types::TokenType,
    vocab::{SpanMapVocab, SpanTokenMap},
};

/// Load a [`SpanMapVocab`] from a tiktoken vocab file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_tiktoken_vocab_path<T, P>(path: P) -> TallyResult<SpanMapVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    SpanMapVocab::try_from_span_map(load_tiktoken_span_map_path(path)?)
}

/// Load a [`SpanTokenMap`] from a tiktoken vocab file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_tiktoken_span_map_path<T, P>(path: P) -> TallyResult<SpanTokenMap<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_tiktoken_span_map(reader)
}

/// Read a [`SpanMapVocab`] from a tiktoken vocab line reader.
pub fn read_tiktoken_vocab<T, R>(reader: R) -> TallyResult<SpanMapVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    SpanMapVocab::try_from_span_map(read_tiktoken_span_map(reader)?)
}

/// Read a [`SpanTokenMap`] from a tiktoken vocab line reader.
///
/// ## Errors
/// * [`TallyError::Parse`] for a malformed line, naming the 1-based line number;
/// * [`TallyError::VocabSizeOverflow`] if a rank does not fit in `T`;
/// * [`TallyError::VocabConflict`] if a span is listed twice.
pub fn read_tiktoken_span_map<T, R>(reader: R) -> TallyResult<SpanTokenMap<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut span_map = SpanTokenMap::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let s = line.trim_end();

        if s.is_empty() || (idx == 0 && s.starts_with("#version")) {
            continue;
        }

        let (b64, rank) = s.split_once(' ').ok_or_else(|| {
            TallyError::Parse(format!("line {lineno}: expected `<base64> <rank>`"))
        })?;

        let span = BASE64_STANDARD
            .decode(b64)
            .map_err(|e| TallyError::Parse(format!("line {lineno}: {e}")))?;

        let rank: u64 = rank
            .trim()
            .parse()
            .map_err(|e| TallyError::Parse(format!("line {lineno}: {e}")))?;
        let token = T::from_u64(rank).ok_or(TallyError::VocabSizeOverflow {
            size: rank as usize,
        })?;

        if span_map.insert(span, token).is_some() {
            return Err(TallyError::VocabConflict(format!(
                "line {lineno}: span listed twice"
            )));
        }
    }

    Ok(span_map)
}

/// Save a [`SpanTokenMap`] to a tiktoken vocab file.
///
/// ## Arguments
/// * `span_map` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_tiktoken_span_map_path<T: TokenType, P: AsRef<Path>>(
    span_map: &SpanTokenMap<T>,
    path: P,
) -> TallyResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_tiktoken_span_map(span_map, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`SpanMapVocab`] to a [`Write`] writer, in rank order.
pub fn write_tiktoken_vocab<T, W>(
    vocab: &SpanMapVocab<T>,
    writer: &mut W,
) -> TallyResult<()>
where
    T: TokenType,
    W: Write,
{
    write_tiktoken_span_map(vocab.span_map(), writer)
}

/// Write a [`SpanTokenMap`] to a [`Write`] writer, in rank order.
///
/// ## Arguments
/// * `span_map` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_tiktoken_span_map<T, W>(
    span_map: &SpanTokenMap<T>,
    writer: &mut W,
) -> TallyResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut items: Vec<(&Vec<u8>, &T)> = span_map.iter().collect();
    items.sort_by_key(|(_, t)| **t);

    for (span, token) in items {
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(span), token)?;
    }

    Ok(())
}
