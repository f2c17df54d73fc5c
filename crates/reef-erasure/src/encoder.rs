//! Encoding: message blocks in, `n` shares out.

use reef_gf::addmul;
use tracing::debug;

use crate::code::Code;
use crate::error::CodeError;

impl Code {
    /// Encode a message into `n` shares, emitting `(index, payload)`
    /// pairs in ascending index order.
    ///
    /// `data` is block-major: bytes `[i*B, (i+1)*B)` form block `i`,
    /// with `B = data.len() / required()`. The payload buffer may be
    /// reused between calls, so the callback must copy anything it
    /// retains. Empty input is a valid no-op and emits `n` empty
    /// shares.
    ///
    /// # Errors
    ///
    /// [`CodeError::InvalidInput`] when `data.len()` is not a multiple
    /// of `required()`. Nothing is emitted on error.
    pub fn encode(
        &self,
        data: &[u8],
        mut emit: impl FnMut(u8, &[u8]),
    ) -> Result<(), CodeError> {
        if data.len() % self.k != 0 {
            return Err(CodeError::InvalidInput {
                len: data.len(),
                k: self.k,
            });
        }
        if data.is_empty() {
            for s in 0..self.n {
                emit(s as u8, &[]);
            }
            return Ok(());
        }
        let block = data.len() / self.k;

        // Systematic rows pass the message blocks straight through.
        for i in 0..self.k {
            emit(i as u8, &data[i * block..(i + 1) * block]);
        }

        // Parity rows accumulate into one reused scratch block.
        let mut scratch = vec![0u8; block];
        for s in self.k..self.n {
            scratch.fill(0);
            for i in 0..self.k {
                let c = self.encoding.get(s, i);
                if !c.is_zero() {
                    addmul(&mut scratch, &data[i * block..(i + 1) * block], c.0);
                }
            }
            emit(s as u8, &scratch);
        }

        debug!(k = self.k, n = self.n, block, "encoded message into shares");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_shares(code: &Code, data: &[u8]) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        code.encode(data, |_, bytes| out.push(bytes.to_vec()))
            .unwrap();
        out
    }

    #[test]
    fn test_systematic_passthrough() {
        let code = Code::new(2, 4).unwrap();
        let shares = collect_shares(&code, &[0x01, 0x02]);
        assert_eq!(shares.len(), 4);
        assert_eq!(shares[0], vec![0x01]);
        assert_eq!(shares[1], vec![0x02]);
        for s in &shares {
            assert_eq!(s.len(), 1, "all shares carry one block length");
        }
    }

    #[test]
    fn test_blocks_are_block_major() {
        let code = Code::new(2, 3).unwrap();
        let shares = collect_shares(&code, &[1, 2, 3, 4]);
        assert_eq!(shares[0], vec![1, 2]);
        assert_eq!(shares[1], vec![3, 4]);
    }

    #[test]
    fn test_parity_is_deterministic() {
        let code = Code::new(3, 5).unwrap();
        let data = [0x00, 0x01, 0x02];
        let first = collect_shares(&code, &data);
        let second = collect_shares(&code, &data);
        assert_eq!(first[..3], [vec![0x00], vec![0x01], vec![0x02]]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_emit_order_is_ascending() {
        let code = Code::new(3, 7).unwrap();
        let mut indices = Vec::new();
        code.encode(&[9, 8, 7], |idx, _| indices.push(idx)).unwrap();
        assert_eq!(indices, (0..7).collect::<Vec<u8>>());
    }

    #[test]
    fn test_invalid_length_rejected_before_output() {
        let code = Code::new(3, 5).unwrap();
        let mut emitted = 0;
        let err = code.encode(&[1, 2, 3, 4], |_, _| emitted += 1).unwrap_err();
        assert!(matches!(err, CodeError::InvalidInput { len: 4, k: 3 }));
        assert_eq!(emitted, 0, "no output before validation passes");
    }

    #[test]
    fn test_empty_message_emits_empty_shares() {
        let code = Code::new(4, 6).unwrap();
        let shares = collect_shares(&code, &[]);
        assert_eq!(shares.len(), 6);
        assert!(shares.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_full_replication_when_k_is_one() {
        let code = Code::new(1, 4).unwrap();
        let data = [0xAA, 0xBB, 0xCC];
        let shares = collect_shares(&code, &data);
        for (i, s) in shares.iter().enumerate() {
            assert_eq!(s, &data.to_vec(), "share {i} must mirror the message");
        }
    }

    #[test]
    fn test_no_parity_when_k_equals_n() {
        let code = Code::new(3, 3).unwrap();
        let shares = collect_shares(&code, &[5, 6, 7]);
        assert_eq!(shares, vec![vec![5], vec![6], vec![7]]);
    }
}
