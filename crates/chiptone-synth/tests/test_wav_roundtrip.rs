//! WAV round-trip tests against an independent reader (`hound`).

use chiptone_spec::{builtin, Channel, Melody, Note, Voice};
use chiptone_synth::wav::{extract_pcm_data, pcm16_to_samples, samples_to_pcm16};
use chiptone_synth::{render_to_file, DEFAULT_SAMPLE_RATE};

#[test]
fn written_file_reads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.wav");

    let melody = Melody::builder("roundtrip")
        .seed(42)
        .voice(Voice::new(vec![
            Note::new(440.0, 200.0, Channel::Square { duty: 0.5 }),
            Note::rest(100.0),
            Note::new(880.0, 150.0, Channel::Triangle),
            Note::new(1.0, 80.0, Channel::Noise { density: 4 }),
        ]))
        .build();

    let result = render_to_file(&melody, DEFAULT_SAMPLE_RATE, &path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, DEFAULT_SAMPLE_RATE);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let read_samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    let written_samples = pcm16_to_samples(extract_pcm_data(&result.wav_data).unwrap());

    assert_eq!(read_samples, written_samples);
    assert_eq!(read_samples.len(), result.num_samples());
}

#[test]
fn quantized_samples_survive_the_container() {
    // Conversion to i16 is the only lossy step; the container itself must be
    // exact. Quantize first, then compare bit-for-bit.
    let samples: Vec<f64> = (0..1000)
        .map(|i| ((i as f64) * 0.031).sin())
        .collect();
    let pcm = samples_to_pcm16(&samples);
    let quantized = pcm16_to_samples(&pcm);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quantized.wav");
    {
        let format = chiptone_synth::wav::WavFormat::mono(22050);
        let wav = chiptone_synth::wav::write_wav_to_vec(&format, &pcm);
        std::fs::write(&path, wav).unwrap();
    }

    let mut reader = hound::WavReader::open(&path).unwrap();
    let read_back: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(read_back, quantized);
}

#[test]
fn themes_write_playable_files() {
    let dir = tempfile::tempdir().unwrap();

    for melody in [builtin("fanfare").unwrap(), builtin("circus").unwrap()] {
        let path = dir.path().join(format!("{}.wav", melody.name));
        let result = render_to_file(&melody, 22050, &path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len() as usize, result.num_samples());
        assert_eq!(reader.spec().sample_rate, 22050);
    }
}
