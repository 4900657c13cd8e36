use super::{BLOCKBYTES, KEYBYTES, OUTBYTES};

/// BLAKE2s initialization vector, shared with SHA-256.
const IV: [u32; 8] = [
    0x6A09_E667, 0xBB67_AE85, 0x3C6E_F372, 0xA54F_F53A, 0x510E_527F, 0x9B05_688C, 0x1F83_D9AB,
    0x5BE0_CD19,
];

/// Message-word schedule for each of the ten rounds.
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Applies the G mixing function to one (a, b, c, d) quadruple.
///
/// The two message words `x` and `y` are selected by the round's schedule
/// at the call site. Rotation distances are the fixed 16, 12, 8, 7; all
/// additions are mod 2^32.
#[inline(always)]
fn g(v: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, x: u32, y: u32) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(12);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(8);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(7);
}

/// Incremental BLAKE2s state.
///
/// Created by [`Blake2s::new`] or [`Blake2s::keyed`], fed with any number
/// of [`Blake2s::update`] calls, and consumed exactly once by
/// [`Blake2s::finish`]. The double-block buffer guarantees the final block
/// is always still in hand when finalization flips the last-block flag.
pub struct Blake2s {
    /// Chaining value, seeded from the IV XOR the parameter block.
    h: [u32; 8],

    /// 64-bit byte counter as two words, low word first.
    t: [u32; 2],

    /// Finalization flags; `f[0]` goes all-ones for the last block.
    f: [u32; 2],

    /// Double-block input buffer.
    buf: [u8; 2 * BLOCKBYTES],

    /// Number of valid bytes in `buf`.
    buflen: usize,
}

impl Blake2s {
    /// Seeds a context for the given key length.
    ///
    /// The parameter block fixes digest length 32, fanout 1 and depth 1;
    /// every other parameter octet is zero in sequential mode, so only the
    /// first word differs from the IV.
    fn with_key_length(key_length: usize) -> Self {
        let mut parameters = [0u8; 32];
        parameters[0] = OUTBYTES as u8;
        parameters[1] = key_length as u8;
        parameters[2] = 1; // fanout
        parameters[3] = 1; // depth

        let mut h = IV;
        for (word, chunk) in h.iter_mut().zip(parameters.chunks_exact(4)) {
            *word ^= u32::from_le_bytes(chunk.try_into().unwrap());
        }

        Blake2s {
            h,
            t: [0; 2],
            f: [0; 2],
            buf: [0; 2 * BLOCKBYTES],
            buflen: 0,
        }
    }

    /// Creates an unkeyed hashing context.
    pub fn new() -> Self {
        Self::with_key_length(0)
    }

    /// Creates a keyed hashing context.
    ///
    /// Keys longer than [`KEYBYTES`] are truncated, matching the
    /// parameter-block semantics. The key is absorbed as a zero-padded
    /// first input block and counts toward the byte counter like ordinary
    /// data.
    pub fn keyed(key: &[u8]) -> Self {
        let key_length = key.len().min(KEYBYTES);
        let mut ctx = Self::with_key_length(key_length);

        let mut block = [0u8; BLOCKBYTES];
        block[..key_length].copy_from_slice(&key[..key_length]);
        ctx.update(&block);

        ctx
    }

    /// Advances the byte counter by `inc`, carrying into the high word.
    fn increment_counter(&mut self, inc: u32) {
        self.t[0] = self.t[0].wrapping_add(inc);
        self.t[1] = self.t[1].wrapping_add(u32::from(self.t[0] < inc));
    }

    /// Runs the compression function over one 64-byte block.
    ///
    /// The working vector takes the chaining value in its first half and
    /// the IV in its second, with the counter and finalization flags XORed
    /// into the last four words. Ten rounds of column and diagonal G mixes
    /// follow the sigma schedule, and both halves fold back into `h`.
    fn compress(&mut self, block: &[u8; BLOCKBYTES]) {
        let mut m = [0u32; 16];
        for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_le_bytes(chunk.try_into().unwrap());
        }

        let mut v = [0u32; 16];
        v[..8].copy_from_slice(&self.h);
        v[8..12].copy_from_slice(&IV[..4]);
        v[12] = self.t[0] ^ IV[4];
        v[13] = self.t[1] ^ IV[5];
        v[14] = self.f[0] ^ IV[6];
        v[15] = self.f[1] ^ IV[7];

        for schedule in &SIGMA {
            // Column step
            g(&mut v, 0, 4, 8, 12, m[schedule[0]], m[schedule[1]]);
            g(&mut v, 1, 5, 9, 13, m[schedule[2]], m[schedule[3]]);
            g(&mut v, 2, 6, 10, 14, m[schedule[4]], m[schedule[5]]);
            g(&mut v, 3, 7, 11, 15, m[schedule[6]], m[schedule[7]]);

            // Diagonal step
            g(&mut v, 0, 5, 10, 15, m[schedule[8]], m[schedule[9]]);
            g(&mut v, 1, 6, 11, 12, m[schedule[10]], m[schedule[11]]);
            g(&mut v, 2, 7, 8, 13, m[schedule[12]], m[schedule[13]]);
            g(&mut v, 3, 4, 9, 14, m[schedule[14]], m[schedule[15]]);
        }

        for (index, h) in self.h.iter_mut().enumerate() {
            *h ^= v[index] ^ v[index + 8];
        }
    }

    /// Feeds input bytes into the hash.
    ///
    /// The buffer holds up to two blocks. A block is only compressed once
    /// the input runs past it, which keeps the final block buffered for
    /// `finish` no matter how the input was sliced across calls.
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = 0;

        while offset < data.len() {
            let left = self.buflen;
            let fill = 2 * BLOCKBYTES - left;
            let incoming = data.len() - offset;

            if incoming > fill {
                self.buf[left..].copy_from_slice(&data[offset..offset + fill]);
                self.buflen += fill;

                self.increment_counter(BLOCKBYTES as u32);
                let block: [u8; BLOCKBYTES] = self.buf[..BLOCKBYTES].try_into().unwrap();
                self.compress(&block);

                self.buf.copy_within(BLOCKBYTES.., 0);
                self.buflen -= BLOCKBYTES;
                offset += fill;
            } else {
                self.buf[left..left + incoming].copy_from_slice(&data[offset..]);
                self.buflen += incoming;
                offset += incoming;
            }
        }
    }

    /// Completes the hash and returns the 32-byte digest.
    ///
    /// Drains the buffer down to at most one block, counts the remaining
    /// bytes, raises the last-block flag, zero-pads and compresses once
    /// more, then serializes the chaining value little-endian.
    pub fn finish(mut self) -> [u8; OUTBYTES] {
        if self.buflen > BLOCKBYTES {
            self.increment_counter(BLOCKBYTES as u32);
            let block: [u8; BLOCKBYTES] = self.buf[..BLOCKBYTES].try_into().unwrap();
            self.compress(&block);

            self.buflen -= BLOCKBYTES;
            self.buf.copy_within(BLOCKBYTES..BLOCKBYTES + self.buflen, 0);
        }

        self.increment_counter(self.buflen as u32);
        self.f[0] = 0xffff_ffff;
        self.buf[self.buflen..].fill(0);

        let block: [u8; BLOCKBYTES] = self.buf[..BLOCKBYTES].try_into().unwrap();
        self.compress(&block);

        let mut digest = [0u8; OUTBYTES];
        for (chunk, word) in digest.chunks_exact_mut(4).zip(&self.h) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        digest
    }
}

impl Default for Blake2s {
    fn default() -> Self {
        Self::new()
    }
}

/// Hashes a complete message in one call.
pub fn blake2s(input: &[u8]) -> [u8; OUTBYTES] {
    let mut ctx = Blake2s::new();
    ctx.update(input);
    ctx.finish()
}

/// Hashes a complete message under a key in one call.
///
/// Keys longer than [`KEYBYTES`] are truncated.
pub fn blake2s_keyed(key: &[u8], input: &[u8]) -> [u8; OUTBYTES] {
    let mut ctx = Blake2s::keyed(key);
    ctx.update(input);
    ctx.finish()
}
