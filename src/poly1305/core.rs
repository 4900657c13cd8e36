use zeroize::Zeroize;

/// Load 4 bytes from a little-endian byte slice into a `u32`.
#[inline(always)]
fn load_4(input: &[u8]) -> u32 {
    u32::from_le_bytes([input[0], input[1], input[2], input[3]])
}

/// Incremental Poly1305 state.
///
/// Created by [`Poly1305::new`], fed with [`Poly1305::update`], and consumed
/// exactly once by [`Poly1305::finish`]. Because `finish` takes the context
/// by value, calling it twice or updating after finalization is a compile
/// error rather than a runtime contract to police.
///
/// # Security
///
/// - The key authenticates one message. Never reuse it.
/// - `r`, the accumulator and the pad are zeroed when the context is
///   dropped, including the drop at the end of `finish`.
/// - Block absorption and finalization run in constant time with respect
///   to the key and the accumulator.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Poly1305 {
    /// Clamped `r`, five 26-bit limbs from the first half of the key.
    r: [u32; 5],

    /// Accumulator, five 26-bit limbs.
    h: [u32; 5],

    /// Second half of the key, added to the packed accumulator mod 2^128.
    pad: [u32; 4],

    /// Bytes of a trailing partial block waiting for more input.
    buffer: [u8; 16],

    /// Number of valid bytes in `buffer`.
    leftover: usize,

    /// Set while absorbing the padded final block, which carries no high
    /// marker bit.
    fin: bool,
}

impl Poly1305 {
    /// Creates a Poly1305 context from a one-time 32-byte key.
    ///
    /// The first 16 key bytes become `r`, clamped as the algorithm
    /// mandates: the top four bits of bytes 3, 7, 11 and 15 and the bottom
    /// two bits of bytes 4, 8 and 12 are cleared, applied here directly in
    /// the 26-bit limb masks. The clamp keeps every product of the
    /// schoolbook multiply inside 64 bits. The last 16 bytes become the
    /// pad and are not involved until finalization.
    pub fn new(key: &[u8; 32]) -> Self {
        let r = [
            load_4(&key[0..]) & 0x3ffffff,
            (load_4(&key[3..]) >> 2) & 0x3ffff03,
            (load_4(&key[6..]) >> 4) & 0x3ffc0ff,
            (load_4(&key[9..]) >> 6) & 0x3f03fff,
            (load_4(&key[12..]) >> 8) & 0x00fffff,
        ];

        let pad = [
            load_4(&key[16..]),
            load_4(&key[20..]),
            load_4(&key[24..]),
            load_4(&key[28..]),
        ];

        Poly1305 {
            r,
            h: [0; 5],
            pad,
            buffer: [0; 16],
            leftover: 0,
            fin: false,
        }
    }

    /// Absorbs all complete 16-byte blocks in `data` into the accumulator.
    ///
    /// Each block is decoded as a 130-bit little-endian integer with an
    /// extra marker bit above its top byte (omitted for the padded final
    /// block), added to `h`, and the sum is multiplied by `r` modulo
    /// `2^130 − 5`. The wraparound terms use `5·r` limbs since
    /// `2^130 ≡ 5`. Arithmetic stays in `u64` until the limbs are stored
    /// back, so no intermediate can overflow.
    fn blocks(&mut self, data: &[u8]) {
        let hibit: u32 = if self.fin { 0 } else { 1 << 24 };

        let [r0, r1, r2, r3, r4] = self.r.map(u64::from);

        let s1 = r1 * 5;
        let s2 = r2 * 5;
        let s3 = r3 * 5;
        let s4 = r4 * 5;

        let [mut h0, mut h1, mut h2, mut h3, mut h4] = self.h.map(u64::from);

        for block in data.chunks_exact(16) {
            h0 += u64::from(load_4(&block[0..]) & 0x3ffffff);
            h1 += u64::from((load_4(&block[3..]) >> 2) & 0x3ffffff);
            h2 += u64::from((load_4(&block[6..]) >> 4) & 0x3ffffff);
            h3 += u64::from((load_4(&block[9..]) >> 6) & 0x3ffffff);
            h4 += u64::from((load_4(&block[12..]) >> 8) | hibit);

            let d0 = h0 * r0 + h1 * s4 + h2 * s3 + h3 * s2 + h4 * s1;
            let mut d1 = h0 * r1 + h1 * r0 + h2 * s4 + h3 * s3 + h4 * s2;
            let mut d2 = h0 * r2 + h1 * r1 + h2 * r0 + h3 * s4 + h4 * s3;
            let mut d3 = h0 * r3 + h1 * r2 + h2 * r1 + h3 * r0 + h4 * s4;
            let mut d4 = h0 * r4 + h1 * r3 + h2 * r2 + h3 * r1 + h4 * r0;

            let mut c = d0 >> 26;
            h0 = d0 & 0x3ffffff;
            d1 += c;

            c = d1 >> 26;
            h1 = d1 & 0x3ffffff;
            d2 += c;

            c = d2 >> 26;
            h2 = d2 & 0x3ffffff;
            d3 += c;

            c = d3 >> 26;
            h3 = d3 & 0x3ffffff;
            d4 += c;

            c = d4 >> 26;
            h4 = d4 & 0x3ffffff;

            h0 += c * 5;
            c = h0 >> 26;
            h0 &= 0x3ffffff;
            h1 += c;
        }

        self.h = [h0 as u32, h1 as u32, h2 as u32, h3 as u32, h4 as u32];
    }

    /// Feeds message bytes into the authenticator.
    ///
    /// Any buffered partial block is completed and absorbed first, then all
    /// complete 16-byte blocks are processed straight from `data`, and a
    /// trailing remainder is buffered for the next call or for `finish`.
    pub fn update(&mut self, mut data: &[u8]) {
        if self.leftover > 0 {
            let want = (16 - self.leftover).min(data.len());
            self.buffer[self.leftover..self.leftover + want].copy_from_slice(&data[..want]);
            self.leftover += want;
            data = &data[want..];

            if self.leftover < 16 {
                return;
            }

            let block = self.buffer;
            self.blocks(&block);
            self.leftover = 0;
        }

        let full = data.len() & !15;
        if full > 0 {
            let (head, tail) = data.split_at(full);
            self.blocks(head);
            data = tail;
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.leftover = data.len();
        }
    }

    /// Completes the computation and returns the 16-byte tag.
    ///
    /// A leftover partial block is terminated with a single 0x01 byte, zero
    /// padded to 16 bytes and absorbed without the marker bit. The
    /// accumulator is then fully reduced: after the carry sweep, `g = h + 5`
    /// is computed with a borrow of `2^26` out of the top limb, and `g`
    /// replaces `h` exactly when `h ≥ 2^130 − 5`. The selection mask is
    /// derived from the sign bit of the borrowed top limb in the 32-bit
    /// limb width actually in use, so it is all-ones or all-zero with no
    /// branch. Finally the 130-bit value is packed into four words, the pad
    /// is added with 32-bit carries and the result is serialized
    /// little-endian.
    ///
    /// Consuming `self` drops the context on return, which zeroes `r`, `h`
    /// and the pad.
    pub fn finish(mut self) -> [u8; 16] {
        if self.leftover > 0 {
            self.buffer[self.leftover] = 1;
            self.buffer[self.leftover + 1..].fill(0);
            self.fin = true;

            let block = self.buffer;
            self.blocks(&block);
        }

        let [mut h0, mut h1, mut h2, mut h3, mut h4] = self.h;

        let mut c = h1 >> 26;
        h1 &= 0x3ffffff;
        h2 += c;

        c = h2 >> 26;
        h2 &= 0x3ffffff;
        h3 += c;

        c = h3 >> 26;
        h3 &= 0x3ffffff;
        h4 += c;

        c = h4 >> 26;
        h4 &= 0x3ffffff;
        h0 += c * 5;

        c = h0 >> 26;
        h0 &= 0x3ffffff;
        h1 += c;

        // Compare against the modulus by adding 5 and borrowing 2^26 out of
        // the top limb: the subtraction wraps negative unless h + 5 crossed
        // 2^130, and the sign bit of the wrapped limb drives the mask.
        let mut g0 = h0 + 5;
        c = g0 >> 26;
        g0 &= 0x3ffffff;

        let mut g1 = h1 + c;
        c = g1 >> 26;
        g1 &= 0x3ffffff;

        let mut g2 = h2 + c;
        c = g2 >> 26;
        g2 &= 0x3ffffff;

        let mut g3 = h3 + c;
        c = g3 >> 26;
        g3 &= 0x3ffffff;

        let g4 = (h4 + c).wrapping_sub(1 << 26);

        let mask = (g4 >> 31).wrapping_sub(1);
        h0 = (h0 & !mask) | (g0 & mask);
        h1 = (h1 & !mask) | (g1 & mask);
        h2 = (h2 & !mask) | (g2 & mask);
        h3 = (h3 & !mask) | (g3 & mask);
        h4 = (h4 & !mask) | (g4 & mask);

        // Pack the five 26-bit limbs into four 32-bit words mod 2^128.
        h0 |= h1 << 26;
        h1 = (h1 >> 6) | (h2 << 20);
        h2 = (h2 >> 12) | (h3 << 14);
        h3 = (h3 >> 18) | (h4 << 8);

        let mut f = u64::from(h0) + u64::from(self.pad[0]);
        let t0 = f as u32;
        f = u64::from(h1) + u64::from(self.pad[1]) + (f >> 32);
        let t1 = f as u32;
        f = u64::from(h2) + u64::from(self.pad[2]) + (f >> 32);
        let t2 = f as u32;
        f = u64::from(h3) + u64::from(self.pad[3]) + (f >> 32);
        let t3 = f as u32;

        let mut tag = [0u8; 16];
        tag[0..4].copy_from_slice(&t0.to_le_bytes());
        tag[4..8].copy_from_slice(&t1.to_le_bytes());
        tag[8..12].copy_from_slice(&t2.to_le_bytes());
        tag[12..16].copy_from_slice(&t3.to_le_bytes());

        tag
    }
}
