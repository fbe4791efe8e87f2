//! PCM WAV encoder
//!
//! Serializes a recorded float buffer into an uncompressed 16-bit PCM WAV
//! file: a 44-byte RIFF header followed by interleaved little-endian samples.
//! The backend only accepts this container, so captured audio is always
//! encoded before upload.

/// Size of the RIFF/WAVE header in bytes.
pub const WAV_HEADER_LEN: usize = 44;

/// Encode interleaved float samples into a complete WAV file.
///
/// `samples` holds one sub-block per channel per frame, channels interleaved,
/// with amplitudes in [-1.0, 1.0]. Values outside that range are clamped,
/// never wrapped. The output is exactly `44 + samples.len() * 2` bytes.
pub fn encode_wav(samples: &[f32], channels: u16, sample_rate: u32) -> Vec<u8> {
    let data_len = samples.len() * 2;
    let byte_rate = sample_rate * channels as u32 * 2;
    let block_align = channels * 2;

    let mut buf = Vec::with_capacity(WAV_HEADER_LEN + data_len);

    // RIFF chunk
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&((WAV_HEADER_LEN + data_len) as u32 - 8).to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt subchunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // subchunk1 size
    buf.extend_from_slice(&1u16.to_le_bytes()); // format code: linear PCM
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    // data subchunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&(data_len as u32).to_le_bytes());

    for &sample in samples {
        buf.extend_from_slice(&sample_to_i16(sample).to_le_bytes());
    }

    buf
}

/// Quantize a float sample to signed 16-bit.
///
/// Negative values scale by 32768 and non-negative by 32767 so that the full
/// [-1.0, 1.0] range maps onto [-32768, 32767] without overflow.
fn sample_to_i16(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    if clamped < 0.0 {
        (clamped * 32768.0).round() as i16
    } else {
        (clamped * 32767.0).round() as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_wav(bytes: &[u8]) -> (hound::WavSpec, Vec<i16>) {
        let reader = hound::WavReader::new(std::io::Cursor::new(bytes.to_vec()))
            .expect("encoder output should parse as WAV");
        let spec = reader.spec();
        let samples = reader
            .into_samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .expect("samples should decode");
        (spec, samples)
    }

    #[test]
    fn output_length_is_header_plus_data() {
        let samples = vec![0.0f32; 480 * 2]; // 480 frames, stereo
        let bytes = encode_wav(&samples, 2, 16000);
        assert_eq!(bytes.len(), 44 + 480 * 2 * 2);
    }

    #[test]
    fn empty_recording_yields_valid_header() {
        let bytes = encode_wav(&[], 1, 16000);
        assert_eq!(bytes.len(), 44);

        let (spec, samples) = read_wav(&bytes);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 16000);
        assert!(samples.is_empty());
    }

    #[test]
    fn header_fields_match_input_parameters() {
        let bytes = encode_wav(&[0.5, -0.5], 1, 16000);

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        // format code 1 = linear PCM
        assert_eq!(u16::from_le_bytes([bytes[20], bytes[21]]), 1);
        // channels, sample rate
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 1);
        assert_eq!(
            u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
            16000
        );
        // byte rate = rate * channels * 2
        assert_eq!(
            u32::from_le_bytes([bytes[28], bytes[29], bytes[30], bytes[31]]),
            32000
        );
        // block align, bits per sample
        assert_eq!(u16::from_le_bytes([bytes[32], bytes[33]]), 2);
        assert_eq!(u16::from_le_bytes([bytes[34], bytes[35]]), 16);
        // data size
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(
            u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]),
            4
        );
    }

    #[test]
    fn full_scale_samples_hit_i16_bounds() {
        assert_eq!(sample_to_i16(-1.0), -32768);
        assert_eq!(sample_to_i16(1.0), 32767);
        assert_eq!(sample_to_i16(0.0), 0);
    }

    #[test]
    fn out_of_range_samples_clamp_without_wrapping() {
        assert_eq!(sample_to_i16(-2.5), -32768);
        assert_eq!(sample_to_i16(1.5), 32767);
        assert_eq!(sample_to_i16(f32::INFINITY), 32767);
        assert_eq!(sample_to_i16(f32::NEG_INFINITY), -32768);
    }

    #[test]
    fn round_trip_preserves_shape_and_values() {
        let source: Vec<f32> = (0..1000)
            .map(|i| ((i as f32) / 1000.0 * std::f32::consts::TAU).sin() * 0.8)
            .collect();
        let bytes = encode_wav(&source, 1, 16000);

        let (spec, decoded) = read_wav(&bytes);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 16000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(decoded.len(), source.len());

        // Each decoded value should be within one quantization step.
        for (&raw, &quantized) in source.iter().zip(&decoded) {
            let restored = if quantized < 0 {
                quantized as f32 / 32768.0
            } else {
                quantized as f32 / 32767.0
            };
            assert!(
                (raw - restored).abs() <= 1.0 / 32767.0,
                "sample {} decoded as {}",
                raw,
                restored
            );
        }
    }

    #[test]
    fn stereo_samples_stay_interleaved() {
        // Left channel ramps positive, right channel stays at -1.0.
        let samples = vec![0.25, -1.0, 0.5, -1.0, 0.75, -1.0];
        let bytes = encode_wav(&samples, 2, 44100);

        let (spec, decoded) = read_wav(&bytes);
        assert_eq!(spec.channels, 2);
        assert_eq!(decoded.len(), 6);
        assert_eq!(decoded[1], -32768);
        assert_eq!(decoded[3], -32768);
        assert_eq!(decoded[5], -32768);
        assert!(decoded[0] < decoded[2] && decoded[2] < decoded[4]);
    }
}
