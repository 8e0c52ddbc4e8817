/*
 * Copyright (C) 2026 The basemoji developers
 *
 * This file is part of basemoji.
 *
 * basemoji is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * basemoji is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with basemoji. If not, see <https://www.gnu.org/licenses/>.
 */

//! Functions and types for decoding data.

use super::encoding::{Encoding, STD_ENCODING};
use super::sextet::Sextet;
use super::{BITS_PER_BYTE, BITS_PER_GROUP, BITS_PER_SYMBOL, BYTE_MASK};
use super::{BYTES_PER_GROUP, SYMBOLS_PER_GROUP};

use core::array;
use core::iter::{self, Fuse, FusedIterator, Take};
use core::str::Utf8Error;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// An error encountered while decoding.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Encountered a symbol that isn't in the alphabet.
    #[error("bad symbol {symbol:?} at position {index}")]
    InvalidSymbol {
        /// The offending codepoint.
        symbol: char,
        /// Position of the symbol in the input, counted in codepoints.
        index: usize,
    },
    /// The input ended with a single symbol, which cannot hold a whole byte.
    #[error("input ends with an incomplete group")]
    TruncatedInput,
    /// The input to [`Encoding::decode`] was not valid UTF-8. Only returned
    /// in strict mode.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

use DecodeError as Error;

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Used by the `*_with` functions to configure the decoding process.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
    /// If true, symbols that aren't in the alphabet decode as zero and a
    /// lone trailing symbol decodes as one byte with its low bits zeroed,
    /// rather than causing an error. Invalid UTF-8 given to
    /// [`Encoding::decode_with`] counts as one unknown symbol per byte.
    /// [default: false]
    pub relaxed: bool,
}

impl DecodeConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            relaxed: false,
        }
    }

    /// Returns a configuration that never fails on bad symbols.
    pub const fn relaxed() -> Self {
        Self {
            relaxed: true,
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The number of bytes that `symbols` symbols decode to, or `None` if that
/// many symbols can't be produced by encoding.
pub const fn decoded_len(symbols: usize) -> Option<usize> {
    let tail = match symbols % SYMBOLS_PER_GROUP {
        1 => return None,
        0 => 0,
        n => n - 1,
    };
    Some(symbols / SYMBOLS_PER_GROUP * BYTES_PER_GROUP + tail)
}

type UnflatBytes = Take<array::IntoIter<u8, BYTES_PER_GROUP>>;

/// Packs up to four sextets back into bytes. `len` sextets produce
/// `len - 1` bytes; any bits left over in the last sextet are dropped.
fn sextets_to_bytes(
    sextets: [Sextet; SYMBOLS_PER_GROUP],
    len: usize,
) -> UnflatBytes {
    debug_assert!((2..=SYMBOLS_PER_GROUP).contains(&len));
    let group = sextets.iter().enumerate().fold(0_u32, |sum, (i, &s)| {
        let shift = BITS_PER_GROUP - BITS_PER_SYMBOL * (i as u32 + 1);
        sum | (u32::from(s) << shift)
    });

    let mut bytes = [0; BYTES_PER_GROUP];
    bytes.iter_mut().enumerate().for_each(|(i, b)| {
        let shift = BITS_PER_GROUP - BITS_PER_BYTE * (i as u32 + 1);
        *b = ((group >> shift) & BYTE_MASK) as u8;
    });
    IntoIterator::into_iter(bytes).take(len - 1)
}

/// Iterator returned by [`Encoding::decode_chars`] and [`decode_chars`].
///
/// Yields an error at most once, after which it stops.
#[derive(Clone)]
pub struct CharDecoder<'a, I> {
    encoding: &'a Encoding,
    config: DecodeConfig,
    chars: Fuse<I>,
    /// Number of symbols consumed so far.
    consumed: usize,
    pending: UnflatBytes,
    done: bool,
}

impl<'a, I: Iterator> CharDecoder<'a, I> {
    pub(crate) fn new(
        encoding: &'a Encoding,
        chars: I,
        config: DecodeConfig,
    ) -> Self {
        Self {
            encoding,
            config,
            chars: chars.fuse(),
            consumed: 0,
            pending: IntoIterator::into_iter([0; BYTES_PER_GROUP]).take(0),
            done: false,
        }
    }
}

impl<I> CharDecoder<'_, I>
where
    I: Iterator<Item = char>,
{
    fn lookup(&mut self, symbol: char) -> DecodeResult<Sextet> {
        let index = self.consumed;
        self.consumed += 1;
        match self.encoding.value(symbol) {
            Some(s) => Ok(s),
            None if self.config.relaxed => {
                log::trace!("treating {:?} at {} as zero", symbol, index);
                Ok(Sextet::ZERO)
            }
            None => Err(Error::InvalidSymbol {
                symbol,
                index,
            }),
        }
    }

    fn next_group(&mut self) -> DecodeResult<Option<UnflatBytes>> {
        let mut sextets = [Sextet::ZERO; SYMBOLS_PER_GROUP];
        let mut len = 0;
        while len < SYMBOLS_PER_GROUP {
            let c = match self.chars.next() {
                Some(c) => c,
                None => break,
            };
            sextets[len] = self.lookup(c)?;
            len += 1;
        }

        match len {
            0 => Ok(None),
            1 if self.config.relaxed => {
                log::trace!("padding lone trailing symbol with zero");
                Ok(Some(sextets_to_bytes(sextets, 2)))
            }
            1 => Err(Error::TruncatedInput),
            _ => Ok(Some(sextets_to_bytes(sextets, len))),
        }
    }
}

impl<I> Iterator for CharDecoder<'_, I>
where
    I: Iterator<Item = char>,
{
    type Item = DecodeResult<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(b) = self.pending.next() {
                return Some(Ok(b));
            }
            if self.done {
                return None;
            }
            match self.next_group() {
                Ok(Some(bytes)) => self.pending = bytes,
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending.len();
        if self.done {
            return (pending, Some(pending));
        }
        let (_, upper) = self.chars.size_hint();
        (
            pending,
            upper
                .map(|n| {
                    n / SYMBOLS_PER_GROUP * BYTES_PER_GROUP
                        + (n % SYMBOLS_PER_GROUP).saturating_sub(1)
                })
                .and_then(|n| {
                    // Room for an error in place of the last group.
                    n.checked_add(pending + 1)
                }),
        )
    }
}

impl<I: Iterator<Item = char>> FusedIterator for CharDecoder<'_, I> {}

impl Encoding {
    /// Decodes a sequence of symbols.
    pub fn decode_chars<I>(&self, chars: I) -> CharDecoder<'_, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        self.decode_chars_with(chars, DecodeConfig::new())
    }

    /// Decodes a sequence of symbols with the given config.
    ///
    /// This function is like [`Self::decode_chars`], but takes a
    /// configuration object.
    pub fn decode_chars_with<I>(
        &self,
        chars: I,
        config: DecodeConfig,
    ) -> CharDecoder<'_, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        CharDecoder::new(self, chars.into_iter(), config)
    }

    /// Decodes `s` into a [`Vec`].
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn decode_str(&self, s: &str) -> DecodeResult<Vec<u8>> {
        self.decode_str_with(s, DecodeConfig::new())
    }

    /// This function is like [`Self::decode_str`], but takes a configuration
    /// object.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn decode_str_with(
        &self,
        s: &str,
        config: DecodeConfig,
    ) -> DecodeResult<Vec<u8>> {
        decode_to_vec(self.decode_chars_with(s.chars(), config))
    }

    /// Decodes the UTF-8 text `src` into `dst` and returns the number of
    /// bytes written.
    ///
    /// The whole of `src` is always decoded, so any error in it is reported,
    /// but only the first `dst.len()` decoded bytes are written.
    pub fn decode(&self, dst: &mut [u8], src: &[u8]) -> DecodeResult<usize> {
        self.decode_with(dst, src, DecodeConfig::new())
    }

    /// This function is like [`Self::decode`], but takes a configuration
    /// object.
    pub fn decode_with(
        &self,
        dst: &mut [u8],
        src: &[u8],
        config: DecodeConfig,
    ) -> DecodeResult<usize> {
        if config.relaxed {
            let chars = src.utf8_chunks().flat_map(|chunk| {
                let invalid = chunk.invalid().len();
                chunk.valid().chars().chain(
                    iter::repeat(char::REPLACEMENT_CHARACTER).take(invalid),
                )
            });
            return self.decode_into(dst, chars, config);
        }
        let text = core::str::from_utf8(src)?;
        self.decode_into(dst, text.chars(), config)
    }

    fn decode_into<I>(
        &self,
        dst: &mut [u8],
        chars: I,
        config: DecodeConfig,
    ) -> DecodeResult<usize>
    where
        I: Iterator<Item = char>,
    {
        let mut written = 0;
        for b in self.decode_chars_with(chars, config) {
            let b = b?;
            if let Some(slot) = dst.get_mut(written) {
                *slot = b;
                written += 1;
            }
        }
        Ok(written)
    }
}

/// Decodes a sequence of symbols with [`STD_ENCODING`].
pub fn decode_chars<I>(chars: I) -> CharDecoder<'static, I::IntoIter>
where
    I: IntoIterator<Item = char>,
{
    STD_ENCODING.decode_chars(chars)
}

/// Decodes `s` with [`STD_ENCODING`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_str(s: &str) -> DecodeResult<Vec<u8>> {
    STD_ENCODING.decode_str(s)
}

/// Takes a decoder and stores the contents in a [`Vec`].
///
/// This is equivalent to calling [`decoder.collect()`](Iterator::collect).
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_to_vec<D, E>(decoder: D) -> Result<Vec<u8>, E>
where
    D: Iterator<Item = Result<u8, E>>,
{
    decoder.collect()
}
