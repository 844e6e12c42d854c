//! PCM payload extraction and hashing.

/// Returns the payload of the `data` chunk, walking chunks from the top of
/// the RIFF structure. `None` if the buffer is not a well-formed WAV file.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let start = pos + 8;
            let end = start.checked_add(chunk_size)?;
            if end <= wav_data.len() {
                return Some(&wav_data[start..end]);
            }
            return None;
        }

        pos += 8 + chunk_size;
        // Chunks are word-aligned.
        if chunk_size % 2 == 1 {
            pos += 1;
        }
    }

    None
}

/// Decodes little-endian 16-bit PCM back into i16 samples.
pub fn pcm16_to_samples(pcm_data: &[u8]) -> Vec<i16> {
    pcm_data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// BLAKE3 hash of a WAV file's PCM payload, as lowercase hex.
///
/// Hashing the payload rather than the whole file keeps the hash stable
/// across any future header-only change.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::wav::{samples_to_pcm16, write_wav_to_vec, WavFormat};

    #[test]
    fn extracts_the_payload_it_wrote() {
        let samples = [0.5, -0.5, 0.0, 1.0];
        let pcm = samples_to_pcm16(&samples);
        let wav = write_wav_to_vec(&WavFormat::mono(44100), &pcm);

        assert_eq!(extract_pcm_data(&wav), Some(pcm.as_slice()));
    }

    #[test]
    fn pcm_round_trips_through_bytes() {
        let samples = [0.0, 0.25, -0.25, 1.0, -1.0];
        let pcm = samples_to_pcm16(&samples);
        let decoded = pcm16_to_samples(&pcm);

        let expected: Vec<i16> = samples
            .iter()
            .map(|&s| (s * 32767.0).round() as i16)
            .collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn rejects_non_wav_data() {
        assert_eq!(extract_pcm_data(b"not a wav file"), None);
        assert_eq!(extract_pcm_data(&[0u8; 100]), None);
    }

    #[test]
    fn rejects_truncated_data_chunk() {
        let pcm = samples_to_pcm16(&[0.0; 16]);
        let mut wav = write_wav_to_vec(&WavFormat::mono(44100), &pcm);
        wav.truncate(wav.len() - 4);
        assert_eq!(extract_pcm_data(&wav), None);
    }

    #[test]
    fn hash_depends_only_on_the_payload() {
        let pcm = samples_to_pcm16(&[0.5; 64]);
        let low_rate = write_wav_to_vec(&WavFormat::mono(22050), &pcm);
        let high_rate = write_wav_to_vec(&WavFormat::mono(44100), &pcm);

        assert_eq!(compute_pcm_hash(&low_rate), compute_pcm_hash(&high_rate));
        let hash = compute_pcm_hash(&low_rate).unwrap();
        assert_eq!(hash.len(), 64);
    }
}
