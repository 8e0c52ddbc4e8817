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

//! Functions and types for encoding data.

use super::encoding::{Encoding, STD_ENCODING};
use super::sextet::Sextet;
use super::{BITS_PER_BYTE, BITS_PER_GROUP, BITS_PER_SYMBOL};
use super::{BYTES_PER_GROUP, SYMBOLS_PER_GROUP};

use core::array;
use core::iter::{FusedIterator, Take};

#[cfg(feature = "alloc")]
use alloc::string::String;

type UnflatSextets = Take<array::IntoIter<Sextet, SYMBOLS_PER_GROUP>>;

/// Splits a group of one to three bytes into sextets, most significant bits
/// first. A partial group yields one sextet more than it has bytes, with the
/// unused low bits of the last sextet set to zero.
fn bytes_to_sextets(bytes: &[u8]) -> UnflatSextets {
    debug_assert!((1..=BYTES_PER_GROUP).contains(&bytes.len()));
    let group = bytes.iter().enumerate().fold(0_u32, |sum, (i, &b)| {
        let shift = BITS_PER_GROUP - BITS_PER_BYTE * (i as u32 + 1);
        sum | (u32::from(b) << shift)
    });

    let mut sextets = [Sextet::ZERO; SYMBOLS_PER_GROUP];
    sextets.iter_mut().enumerate().for_each(|(i, s)| {
        let shift = BITS_PER_GROUP - BITS_PER_SYMBOL * (i as u32 + 1);
        *s = Sextet::from_low_bits(group >> shift);
    });
    IntoIterator::into_iter(sextets).take(bytes.len() + 1)
}

/// The number of symbols that `len` bytes encode to.
pub const fn encoded_len(len: usize) -> usize {
    let tail = match len % BYTES_PER_GROUP {
        0 => 0,
        n => n + 1,
    };
    len / BYTES_PER_GROUP * SYMBOLS_PER_GROUP + tail
}

/// Iterator returned by [`Encoding::encode_chars`] and [`encode_to_chars`].
#[derive(Clone)]
pub struct Symbols<'a> {
    encoding: &'a Encoding,
    rest: &'a [u8],
    pending: UnflatSextets,
}

impl<'a> Symbols<'a> {
    pub(crate) fn new(encoding: &'a Encoding, bytes: &'a [u8]) -> Self {
        Self {
            encoding,
            rest: bytes,
            pending: IntoIterator::into_iter([Sextet::ZERO; SYMBOLS_PER_GROUP])
                .take(0),
        }
    }
}

impl Iterator for Symbols<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(s) = self.pending.next() {
                return Some(self.encoding.symbol(s));
            }
            if self.rest.is_empty() {
                return None;
            }
            let mid = self.rest.len().min(BYTES_PER_GROUP);
            let (group, rest) = self.rest.split_at(mid);
            self.rest = rest;
            self.pending = bytes_to_sextets(group);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.pending.len() + encoded_len(self.rest.len());
        (len, Some(len))
    }
}

impl ExactSizeIterator for Symbols<'_> {}

impl FusedIterator for Symbols<'_> {}

impl Encoding {
    /// Encodes `bytes` as a sequence of symbols.
    pub fn encode_chars<'a>(&'a self, bytes: &'a [u8]) -> Symbols<'a> {
        Symbols::new(self, bytes)
    }

    /// The length in bytes of the UTF-8 text that `bytes` encode to.
    pub fn encoded_utf8_len(&self, bytes: &[u8]) -> usize {
        self.encode_chars(bytes).map(char::len_utf8).sum()
    }

    /// Encodes `bytes` as a [`String`].
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn encode_to_string(&self, bytes: &[u8]) -> String {
        let mut s = String::with_capacity(self.encoded_utf8_len(bytes));
        s.extend(self.encode_chars(bytes));
        s
    }

    /// Writes the UTF-8 encoded form of `src` to `dst` and returns the number
    /// of bytes written.
    ///
    /// If `dst` is too short, only the first `dst.len()` bytes of the output
    /// are written, which may end partway through a symbol. Use
    /// [`Self::encoded_utf8_len`] to size `dst`.
    pub fn encode(&self, dst: &mut [u8], src: &[u8]) -> usize {
        let mut written = 0;
        for c in self.encode_chars(src) {
            if written == dst.len() {
                break;
            }
            let mut buf = [0; 4];
            let utf8 = c.encode_utf8(&mut buf).as_bytes();
            let n = utf8.len().min(dst.len() - written);
            dst[written..written + n].copy_from_slice(&utf8[..n]);
            written += n;
        }
        written
    }
}

/// Encodes `bytes` with [`STD_ENCODING`].
pub fn encode_to_chars(bytes: &[u8]) -> Symbols<'_> {
    STD_ENCODING.encode_chars(bytes)
}

/// Encodes `bytes` with [`STD_ENCODING`] as a [`String`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string(bytes: &[u8]) -> String {
    STD_ENCODING.encode_to_string(bytes)
}

/// Like [`Encoding::encode`], with [`STD_ENCODING`].
pub fn encode_into(dst: &mut [u8], src: &[u8]) -> usize {
    STD_ENCODING.encode(dst, src)
}
