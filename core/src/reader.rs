//! # File Reader
//!
//! Input files are read as a flat stream of whitespace-separated words; line
//! breaks carry no meaning. Each word goes through the tokenizer and the
//! validator on its own, and the survivors are appended to the shared
//! [`AddressCollection`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use pingscript_common::address::{self, AddressCollection};
use pingscript_common::error::ScriptError;
use tracing::trace;

/// Longest word chunk, in bytes. Longer words are split, not truncated;
/// the leftover bytes are read as the next word.
pub const MAX_WORD_LEN: usize = 99;

/// Word counters for one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub words: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Outcome of reading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadReport {
    pub path: PathBuf,
    pub tally: Tally,
}

/// Reads `path` and appends every valid address it contains to `collection`.
///
/// Fails with [`ScriptError::OpenInput`] when the file cannot be opened, in
/// which case `collection` is left untouched. A read error part way through
/// gives [`ScriptError::ReadInput`]; addresses found before it stay in
/// `collection`.
pub fn read_file(
    path: &Path,
    collection: &mut AddressCollection,
) -> Result<ReadReport, ScriptError> {
    let file: File = File::open(path).map_err(|source| ScriptError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    let tally: Tally =
        read_words(BufReader::new(file), collection).map_err(|source| ScriptError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(ReadReport {
        path: path.to_path_buf(),
        tally,
    })
}

/// Same as [`read_file`], for any buffered source.
pub fn read_words<R: BufRead>(
    reader: R,
    collection: &mut AddressCollection,
) -> io::Result<Tally> {
    let mut tally = Tally::default();

    for_each_word(reader, |word| {
        tally.words += 1;
        match address::address_from_word(word) {
            Some(addr) => {
                collection.push(addr);
                tally.accepted += 1;
            }
            None => {
                trace!("discarding word '{word}'");
                tally.rejected += 1;
            }
        }
    })?;

    Ok(tally)
}

/// Streams whitespace-separated words of at most [`MAX_WORD_LEN`] bytes.
///
/// Only one word is buffered at a time. A chunk is never cut inside a UTF-8
/// sequence; invalid bytes are replaced with U+FFFD, which can never be part
/// of an address.
fn for_each_word<R, F>(mut reader: R, mut on_word: F) -> io::Result<()>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut word: Vec<u8> = Vec::with_capacity(MAX_WORD_LEN);
    let mut emit = |word: &mut Vec<u8>| {
        on_word(&String::from_utf8_lossy(word));
        word.clear();
    };

    loop {
        let available: &[u8] = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }

        let consumed: usize = available.len();
        for &byte in available {
            if is_separator(byte) {
                if !word.is_empty() {
                    emit(&mut word);
                }
                continue;
            }

            if word.len() == MAX_WORD_LEN {
                let rest: Vec<u8> = word.split_off(char_boundary(&word));
                emit(&mut word);
                word.extend_from_slice(&rest);
            }
            word.push(byte);
        }
        reader.consume(consumed);
    }

    if !word.is_empty() {
        emit(&mut word);
    }

    Ok(())
}

/// Bytes `scanf("%s")` treats as whitespace.
fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Length of the longest prefix of `chunk` that does not end inside a
/// multi-byte UTF-8 sequence.
fn char_boundary(chunk: &[u8]) -> usize {
    for back in 1..=chunk.len().min(4) {
        let idx: usize = chunk.len() - back;
        let byte: u8 = chunk[idx];
        if byte & 0xC0 == 0x80 {
            continue;
        }

        let needed: usize = match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        return if back < needed && idx > 0 { idx } else { chunk.len() };
    }
    chunk.len()
}
