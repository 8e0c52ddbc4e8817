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

//! Radix-64 encoding with a 64-symbol alphabet of arbitrary codepoints.
//!
//! Works like unpadded base64, except that each 6-bit value is written as
//! one Unicode codepoint. The standard alphabet is the 64 emoji from
//! U+1F600 to U+1F63F; custom alphabets can be built with
//! [`Encoding::new`].
//!
//! ```
//! use basemoji::STD_ENCODING;
//!
//! let text = STD_ENCODING.encode_to_string(b"hi!");
//! assert_eq!(text, "😚😆😤😡");
//! assert_eq!(STD_ENCODING.decode_str(&text).unwrap(), b"hi!");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

pub mod decode;
pub mod encode;
pub mod encoding;
mod sextet;

#[cfg(feature = "alloc")]
extern crate alloc;

const BITS_PER_BYTE: u32 = 8;
const BITS_PER_SYMBOL: u32 = 6;
const BITS_PER_GROUP: u32 = 24;

const BYTES_PER_GROUP: usize = 3;
const SYMBOLS_PER_GROUP: usize = 4;

const ALPHABET_LEN: usize = 1 << BITS_PER_SYMBOL;

const BYTE_MASK: u32 = (1 << BITS_PER_BYTE) - 1;
const SEXTET_MASK: u32 = (1 << BITS_PER_SYMBOL) - 1;

pub use sextet::Sextet;

pub use encoding::{AlphabetError, Encoding};
pub use encoding::{STD_ALPHABET, STD_ENCODING};

pub use decode::decode_chars;
#[cfg(feature = "alloc")]
pub use decode::decode_str;
pub use decode::{DecodeConfig, DecodeError, DecodeResult};

pub use encode::encode_into;
pub use encode::encode_to_chars;
#[cfg(feature = "alloc")]
pub use encode::encode_to_string;
